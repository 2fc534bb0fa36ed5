//! Command-line front end
//!
//! Supports:
//! - `info`: line count, widest line and line-ending breakdown of a file
//! - `normalize`: load a file and write it back with normalized endings

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::EditorConfig;
use crate::model::{dominant_ending, ending_counts, Document, LineEnding};

/// A line-oriented text buffer tool
#[derive(Parser, Debug)]
#[command(name = "linepad", version, about = "A line-oriented text buffer tool")]
pub struct CliArgs {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print line statistics for a file
    Info {
        path: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a file with CR LF endings normalized to LF
    Normalize {
        path: PathBuf,
        /// Write to this file instead of overwriting the input
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },
}

/// Summary of a document's shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentInfo {
    pub name: String,
    pub lines: usize,
    pub max_line_width: usize,
    pub dominant_ending: Option<LineEnding>,
    pub unix_lines: usize,
    pub dos_lines: usize,
    pub mac_lines: usize,
    pub final_newline: bool,
}

impl DocumentInfo {
    pub fn from_document(doc: &Document) -> Self {
        let lines: Vec<_> = doc.lines().cloned().collect();
        let [_, unix, dos, mac] = ending_counts(&lines);
        let last = doc.line_count() - 1;
        Self {
            name: doc.display_name(),
            lines: doc.line_count(),
            max_line_width: doc.max_line_width(),
            dominant_ending: dominant_ending(&lines),
            unix_lines: unix,
            dos_lines: dos,
            mac_lines: mac,
            final_newline: last > 0 && doc.line_len(last) == 0,
        }
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.name)?;
        writeln!(out, "  lines:          {}", self.lines)?;
        writeln!(out, "  widest line:    {}", self.max_line_width)?;
        writeln!(
            out,
            "  endings:        {} LF, {} CRLF, {} CR",
            self.unix_lines, self.dos_lines, self.mac_lines
        )?;
        if let Some(ending) = self.dominant_ending {
            writeln!(out, "  dominant:       {}", ending.label())?;
        }
        writeln!(out, "  final newline:  {}", self.final_newline)
    }
}

impl CliArgs {
    pub fn editor_config(&self) -> EditorConfig {
        match &self.config {
            Some(path) => EditorConfig::load_from(path),
            None => EditorConfig::load(),
        }
    }
}

/// Run a parsed command, writing human-readable output to `out`
pub fn run(args: &CliArgs, out: &mut impl Write) -> Result<()> {
    let config = args.editor_config();
    match &args.command {
        Command::Info { path, json } => {
            let doc = open(path, &config)?;
            let info = DocumentInfo::from_document(&doc);
            if *json {
                serde_json::to_writer_pretty(&mut *out, &info)?;
                writeln!(out)?;
            } else {
                info.write_text(out)?;
            }
        }
        Command::Normalize { path, output } => {
            let mut doc = open(path, &config)?;
            let target = output.clone().unwrap_or_else(|| path.clone());
            doc.save_as(&target)
                .with_context(|| format!("writing {}", target.display()))?;
            writeln!(out, "wrote {} ({} lines)", target.display(), doc.line_count())?;
        }
    }
    Ok(())
}

fn open(path: &Path, config: &EditorConfig) -> Result<Document> {
    Document::from_file(path, config.line_ending)
        .with_context(|| format!("opening {}", path.display()))
}
