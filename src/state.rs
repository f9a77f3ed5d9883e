use crate::cursor::CursorControl;
use crate::error::PromptError;
use crate::input::Input;
use crate::style::{Palette, Style};
use crossterm::queue;
use crossterm::style::PrintStyledContent;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// How many rows of the active region [State::shift] repaints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Span {
    /// The last `n` rows, clamped to the region.
    #[cfg_attr(not(test), allow(dead_code))]
    Count(usize),
    /// Every lot.
    Lots,
    /// Every lot and every anchor.
    All,
}

#[derive(Debug)]
pub(crate) struct LotRecord {
    pub(crate) alias: String,
    pub(crate) data: String,
    pub(crate) style: Style,
}

/// Everything behind the canvas lock: the rows, the styling and both ends of the
/// terminal.
///
/// The redraw math relies on the rendered region being at the bottom of the output with
/// the cursor at column 0 of the row right below it whenever the lock is free. Nothing
/// else may write to the same terminal, and the region must fit on screen.
pub(crate) struct State<W: Write> {
    output: W,
    input: Input,
    lots: Vec<LotRecord>,
    anchors: Vec<String>,
    aliases: HashMap<String, usize>,
    palette: Palette,
    plain: bool,
    cursor: CursorControl,
}

pub(crate) fn lock<W: Write>(state: &Mutex<State<W>>) -> MutexGuard<'_, State<W>> {
    // A panicking writer already had the cursor restored by `Restore`.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<W: Write> State<W> {
    pub(crate) fn new(output: W, input: Input, palette: Palette) -> Self {
        Self {
            output,
            input,
            lots: Vec::new(),
            anchors: Vec::new(),
            aliases: HashMap::new(),
            palette,
            plain: false,
            cursor: CursorControl::default(),
        }
    }

    pub(crate) fn enable_plain_mode(&mut self) {
        if !self.plain {
            debug!("canvas switched to plain mode");
        }
        self.palette = Palette::plain();
        self.plain = true;
    }

    pub(crate) fn is_plain(&self) -> bool {
        self.plain
    }

    pub(crate) fn rows(&self) -> usize {
        self.lots.len() + self.anchors.len()
    }

    pub(crate) fn lot(&self, id: usize) -> &LotRecord {
        &self.lots[id]
    }

    pub(crate) fn lot_count(&self) -> usize {
        self.lots.len()
    }

    pub(crate) fn anchors(&self) -> &[String] {
        &self.anchors
    }

    /// Runs one terminal interaction. Output errors are logged and swallowed, and the
    /// cursor is returned to the bottom of the region however `op` ends.
    pub(crate) fn render<T>(&mut self, op: impl FnOnce(&mut Self) -> io::Result<T>) -> Option<T> {
        let mut state = Restore(self);
        match op(&mut *state) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("failed to render canvas: {err}");
                None
            }
        }
    }

    /// Looks up `alias`, creating the lot and making room for its row if it is new.
    pub(crate) fn find_or_create_lot(&mut self, alias: &str) -> usize {
        if let Some(&id) = self.aliases.get(alias) {
            return id;
        }

        let id = self.lots.len();
        self.lots.push(LotRecord {
            alias: alias.to_owned(),
            data: String::new(),
            style: Style::Header,
        });
        self.aliases.insert(alias.to_owned(), id);
        debug!("created lot {id} ({alias})");

        if !self.plain {
            self.render(|state| state.output.write_all(b"\n"));
        }
        id
    }

    /// Prints a line that is either kept as an anchor or left to scroll away.
    pub(crate) fn print_line(&mut self, anchor: bool, text: String) -> io::Result<()> {
        let style = if anchor {
            self.anchors.push(text.clone());
            Style::Anchor
        } else {
            Style::Plain
        };

        if self.plain {
            return writeln!(self.output, "{text}");
        }

        self.shift(if anchor { Span::Lots } else { Span::All })?;
        let style = self.palette.resolve(style);
        queue!(self.output, PrintStyledContent(style.apply(text)))
    }

    pub(crate) fn print_lot(&mut self, id: usize, text: String) -> io::Result<()> {
        self.lots[id].data = text;

        if self.plain {
            let lot = &self.lots[id];
            return writeln!(self.output, "{}: {}", lot.alias, lot.data);
        }

        self.repaint_lots()
    }

    pub(crate) fn close_lot(&mut self, id: usize, message: String) -> io::Result<()> {
        self.lots[id].style = Style::Closed;
        self.print_lot(id, message)
    }

    /// Repaints the last rows of the region one row lower, leaving the cursor on the
    /// freed row right above them.
    pub(crate) fn shift(&mut self, span: Span) -> io::Result<()> {
        let rows = match span {
            Span::Count(0) => return Ok(()),
            Span::Count(rows) => rows.min(self.rows()),
            Span::Lots => self.lots.len(),
            Span::All => self.rows(),
        };
        trace!("shifting {rows} rows");

        self.output.write_all(b"\n")?;
        self.rise()?;

        // Newest lot lowest, then the anchors above them, newest lowest.
        for i in 0..rows {
            if i < self.lots.len() {
                self.write_lot(self.lots.len() - 1 - i)?;
            } else {
                self.write_anchor(self.anchors.len() - 1 - (i - self.lots.len()))?;
            }
            self.rise()?;
        }
        Ok(())
    }

    /// Every lot shares one block, so a change to any lot rewrites all of them.
    fn repaint_lots(&mut self) -> io::Result<()> {
        self.cursor.up_and_clear(&mut self.output, self.lots.len())?;
        self.cursor.start_of_line(&mut self.output)?;
        for id in 0..self.lots.len() {
            self.write_lot(id)?;
            self.cursor.down_and_clear(&mut self.output)?;
        }
        Ok(())
    }

    fn rise(&mut self) -> io::Result<()> {
        self.cursor.up_and_clear(&mut self.output, 1)?;
        self.cursor.start_of_line(&mut self.output)
    }

    fn write_lot(&mut self, id: usize) -> io::Result<()> {
        let lot = &self.lots[id];
        let style = self.palette.resolve(lot.style);
        let row = format!("{}: {}", lot.alias, lot.data);
        queue!(self.output, PrintStyledContent(style.apply(row)))
    }

    fn write_anchor(&mut self, index: usize) -> io::Result<()> {
        let style = self.palette.resolve(Style::Anchor);
        queue!(
            self.output,
            PrintStyledContent(style.apply(self.anchors[index].as_str()))
        )
    }

    /// Shows `label` on a fresh row and blocks until a line of input arrives.
    pub(crate) fn prompt(&mut self, label: &str) -> Result<String, PromptError> {
        let mut state = Restore(self);

        let shown = state.show_prompt(label);
        if let Err(err) = &shown {
            warn!("failed to render prompt: {err}");
        }

        let value = state.read_line()?;

        if !state.plain {
            // Submitting with Enter moved the cursor below the prompt. That row is only a
            // leftover blank when nothing is rendered beneath the prompt.
            let state = &mut *state;
            let clear_echo_row = state.rows() == 0;
            if let Err(err) = state.cursor.undo_echo(&mut state.output, clear_echo_row) {
                warn!("failed to restore cursor after prompt: {err}");
            }
        }
        Ok(value)
    }

    fn show_prompt(&mut self, label: &str) -> io::Result<()> {
        if !self.plain {
            self.shift(Span::All)?;
        }
        write!(self.output, "{label} ")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        if !line.ends_with('\n') {
            return Err(PromptError::Truncated {
                partial: line.trim().to_owned(),
            });
        }
        Ok(line.trim().to_owned())
    }
}

/// Sends the cursor back to the bottom of the region and flushes when dropped, so no
/// exit path leaves the cursor in the middle of the canvas.
struct Restore<'a, W: Write>(&'a mut State<W>);

impl<W: Write> Deref for Restore<'_, W> {
    type Target = State<W>;

    fn deref(&self) -> &State<W> {
        &*self.0
    }
}

impl<W: Write> DerefMut for Restore<'_, W> {
    fn deref_mut(&mut self) -> &mut State<W> {
        &mut *self.0
    }
}

impl<W: Write> Drop for Restore<'_, W> {
    fn drop(&mut self) {
        let state = &mut *self.0;
        let restored = if state.plain {
            Ok(())
        } else {
            state.cursor.to_bottom(&mut state.output)
        };
        if let Err(err) = restored.and_then(|()| state.output.flush()) {
            warn!("failed to restore cursor: {err}");
        }
    }
}
