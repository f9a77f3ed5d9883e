use crossterm::cursor::{MoveDown, MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// The four cursor primitives the canvas redraws with.
///
/// Every call queues its escape sequences on the given writer straight away. The only
/// thing remembered is how many rows the cursor currently sits above the bottom of the
/// rendered region, so that [CursorControl::to_bottom] knows how far to travel back.
#[derive(Debug, Default)]
pub(crate) struct CursorControl {
    raised: usize,
}

impl CursorControl {
    /// Moves up `rows` rows, clearing every row on the way, and lands on the topmost.
    pub(crate) fn up_and_clear<W: Write>(&mut self, out: &mut W, rows: usize) -> io::Result<()> {
        for _ in 0..rows {
            queue!(out, MoveUp(1), Clear(ClearType::CurrentLine))?;
            self.raised += 1;
        }
        Ok(())
    }

    pub(crate) fn down_and_clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        queue!(out, MoveDown(1), Clear(ClearType::CurrentLine), MoveToColumn(0))?;
        self.raised = self.raised.saturating_sub(1);
        Ok(())
    }

    pub(crate) fn start_of_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, MoveToColumn(0))
    }

    /// Returns to column 0 of the bottom row of the rendered region.
    pub(crate) fn to_bottom<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.raised > 0 {
            let rows = u16::try_from(self.raised).unwrap_or(u16::MAX);
            queue!(out, MoveDown(rows))?;
        }
        self.raised = 0;
        queue!(out, MoveToColumn(0))
    }

    /// Steps back over the line feed a terminal echoes when the user submits a line,
    /// optionally clearing the row the echo landed on first. The echo moved the cursor
    /// down without us, so the net position relative to the bottom is unchanged.
    pub(crate) fn undo_echo<W: Write>(&self, out: &mut W, clear_echo_row: bool) -> io::Result<()> {
        if clear_echo_row {
            queue!(out, Clear(ClearType::CurrentLine))?;
        }
        queue!(out, MoveUp(1), MoveToColumn(0))
    }

    #[cfg(test)]
    pub(crate) fn raised(&self) -> usize {
        self.raised
    }
}

#[cfg(test)]
mod test {
    use crate::cursor::CursorControl;
    use crate::vte_actions::VteAction::{CursorColumn, CursorDown, CursorUp, EraseLine};
    use crate::vte_actions::VteActionParser;

    #[test]
    fn up_and_clear_clears_every_row() {
        let mut output: Vec<u8> = Vec::new();
        let mut cursor = CursorControl::default();
        cursor.up_and_clear(&mut output, 3).unwrap();
        assert_eq!(cursor.raised(), 3);
        assert_eq!(
            VteActionParser::new().parse_bytes(&output),
            vec![
                CursorUp(1),
                EraseLine(2),
                CursorUp(1),
                EraseLine(2),
                CursorUp(1),
                EraseLine(2),
            ]
        );
    }

    #[test]
    fn zero_rows_emits_nothing() {
        let mut output: Vec<u8> = Vec::new();
        let mut cursor = CursorControl::default();
        cursor.up_and_clear(&mut output, 0).unwrap();
        assert!(output.is_empty());
        assert_eq!(cursor.raised(), 0);
    }

    #[test]
    fn to_bottom_travels_back_the_raised_rows() {
        let mut output: Vec<u8> = Vec::new();
        let mut cursor = CursorControl::default();
        cursor.up_and_clear(&mut output, 2).unwrap();
        cursor.down_and_clear(&mut output).unwrap();
        output.clear();

        cursor.to_bottom(&mut output).unwrap();
        assert_eq!(cursor.raised(), 0);
        assert_eq!(
            VteActionParser::new().parse_bytes(&output),
            vec![CursorDown(1), CursorColumn(1)]
        );
    }

    #[test]
    fn to_bottom_at_bottom_only_resets_column() {
        let mut output: Vec<u8> = Vec::new();
        CursorControl::default().to_bottom(&mut output).unwrap();
        assert_eq!(
            VteActionParser::new().parse_bytes(&output),
            vec![CursorColumn(1)]
        );
    }

    #[test]
    fn undo_echo_keeps_the_raised_count() {
        let mut output: Vec<u8> = Vec::new();
        let mut cursor = CursorControl::default();
        cursor.up_and_clear(&mut output, 1).unwrap();
        output.clear();

        cursor.undo_echo(&mut output, true).unwrap();
        assert_eq!(cursor.raised(), 1);
        assert_eq!(
            VteActionParser::new().parse_bytes(&output),
            vec![EraseLine(2), CursorUp(1), CursorColumn(1)]
        );
    }
}
