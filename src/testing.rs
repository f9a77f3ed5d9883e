use crate::options::CanvasOptions;
use crate::Canvas;
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

const SCREEN_ROWS: u16 = 40;
const SCREEN_COLS: u16 = 100;

/// An output sink tests can keep a handle to while a canvas owns the other.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn bytes(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes()).unwrap()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A styled canvas over an in-memory buffer, answering prompts from `input`.
pub fn canvas(input: &str) -> (Canvas<SharedBuffer>, SharedBuffer) {
    let output = SharedBuffer::default();
    let canvas = Canvas::with_io(
        output.clone(),
        Cursor::new(input.as_bytes().to_vec()),
        CanvasOptions::default(),
    );
    (canvas, output)
}

/// Replays `bytes` on an emulated terminal and returns the visible rows, trailing
/// whitespace and trailing blank rows removed.
pub fn screen_rows(bytes: &[u8]) -> Vec<String> {
    let mut parser = vt100::Parser::new(SCREEN_ROWS, SCREEN_COLS, 0);
    parser.process(bytes);
    let mut rows: Vec<String> = parser
        .screen()
        .rows(0, SCREEN_COLS)
        .map(|row| row.trim_end().to_owned())
        .collect();
    while rows.last().is_some_and(String::is_empty) {
        rows.pop();
    }
    rows
}
