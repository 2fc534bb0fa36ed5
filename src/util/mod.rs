//! Utility modules

pub mod text;

pub use text::{byte_index, char_len, char_slice, normalize_breaks, split_keep_separator};
