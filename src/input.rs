use std::io::{self, BufRead};
use std::sync::{Arc, Mutex, PoisonError};

/// Where prompt answers come from.
pub(crate) enum Input {
    /// The process' stdin, read through its own global buffer on every call so that no
    /// canvas hoards lines meant for another.
    Stdin,
    /// A reader owned by one canvas.
    Owned(Box<dyn BufRead + Send>),
    /// A reader several canvases take turns on.
    Shared(Arc<Mutex<dyn BufRead + Send>>),
}

impl Input {
    pub(crate) fn read_line(&mut self, line: &mut String) -> io::Result<usize> {
        match self {
            Input::Stdin => io::stdin().read_line(line),
            Input::Owned(reader) => reader.read_line(line),
            Input::Shared(reader) => reader
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .read_line(line),
        }
    }
}
