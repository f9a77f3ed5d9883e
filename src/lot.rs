use crate::state::{lock, State};
use crate::style::Style;
use std::fmt::{self, Display};
use std::io::{Stdout, Write};
use std::sync::{Arc, Mutex};

const CLOSED_MESSAGE: &str = "done";

/// A named status row on a [crate::Canvas], rendered as `alias: text`.
///
/// Handles are cheap to clone and all handles for one alias drive the same row. The
/// row outlives every handle: once created it stays on screen until the process ends.
pub struct Lot<W: Write = Stdout> {
    id: usize,
    state: Arc<Mutex<State<W>>>,
}

impl<W: Write> Lot<W> {
    pub(crate) fn new(id: usize, state: Arc<Mutex<State<W>>>) -> Self {
        Self { id, state }
    }

    /// Position among the canvas' lots, in creation order.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn alias(&self) -> String {
        lock(&self.state).lot(self.id).alias.clone()
    }

    /// The text currently shown after the alias.
    pub fn text(&self) -> String {
        lock(&self.state).lot(self.id).data.clone()
    }

    pub fn is_closed(&self) -> bool {
        lock(&self.state).lot(self.id).style == Style::Closed
    }

    /// Replaces the row's text.
    pub fn print(&self, text: impl Display) {
        let text = text.to_string();
        lock(&self.state).render(|state| state.print_lot(self.id, text));
    }

    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        self.print(args);
    }

    /// Empties the row's text. The row itself stays.
    pub fn wipe(&self) {
        self.print("");
    }

    /// Dims the row and shows "done".
    pub fn close(&self) {
        self.close_with(CLOSED_MESSAGE);
    }

    /// Dims the row and shows `message`. The lot can still be printed to afterwards, it
    /// just keeps the dimmed style.
    pub fn close_with(&self, message: impl Display) {
        let message = message.to_string();
        lock(&self.state).render(|state| state.close_lot(self.id, message));
    }
}

impl<W: Write> Clone for Lot<W> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: Arc::clone(&self.state),
        }
    }
}

impl<W: Write> fmt::Debug for Lot<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lot").field("id", &self.id).finish()
    }
}
