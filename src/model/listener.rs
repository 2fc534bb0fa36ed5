//! Change notifications from a document to its observers
//!
//! The document holds only weak references to listeners. A listener that
//! has been dropped is skipped and removed on the next notification, so
//! forgetting to unsubscribe never keeps a view alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::position::Position;

/// Receives line-range change notifications from a [`Document`](super::Document)
pub trait LineChangeListener {
    /// Called synchronously after each successful mutation.
    ///
    /// `position` is where the edit started; `spans_multiple_lines` is set
    /// when lines were split or merged and everything from `position.row`
    /// down may have moved.
    fn on_line_range_changed(&mut self, position: Position, spans_multiple_lines: bool);
}

impl<F> LineChangeListener for F
where
    F: FnMut(Position, bool),
{
    fn on_line_range_changed(&mut self, position: Position, spans_multiple_lines: bool) {
        self(position, spans_multiple_lines)
    }
}

/// Opaque handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered registry of weakly-held listeners
#[derive(Default)]
pub struct ListenerRegistry {
    entries: Vec<(ListenerId, Weak<RefCell<dyn LineChangeListener>>)>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<L>(&mut self, listener: &Rc<RefCell<L>>) -> ListenerId
    where
        L: LineChangeListener + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let rc: Rc<RefCell<dyn LineChangeListener>> = listener.clone();
        self.entries.push((id, Rc::downgrade(&rc)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Notify live listeners in subscription order, pruning dead ones
    pub fn notify(&mut self, position: Position, spans_multiple_lines: bool) {
        self.entries.retain(|(_, weak)| weak.strong_count() > 0);
        for (_, weak) in &self.entries {
            if let Some(listener) = weak.upgrade() {
                listener
                    .borrow_mut()
                    .on_line_range_changed(position, spans_multiple_lines);
            }
        }
    }

    /// Number of registered listeners that are still alive
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.entries.len())
            .finish()
    }
}
