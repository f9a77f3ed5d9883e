use crate::error::PromptError;
use crate::input::Input;
use crate::lot::Lot;
use crate::options::CanvasOptions;
use crate::state::{lock, State};
use crate::style::{Color, Palette};
use std::fmt::{self, Display};
use std::io::{self, BufRead, Stdout, Write};
use std::sync::{Arc, Mutex};

/// A shared terminal surface for live progress.
///
/// The bottom of the output holds one row per [Lot], status lines that are rewritten in
/// place, and above them the anchors, permanent messages that are never rewritten but
/// are pushed up as rows are added. Ordinary lines printed with [Canvas::print] appear
/// above both and scroll away like regular output.
///
/// Cloning is cheap and every clone talks to the same terminal. Each call takes a single
/// lock for the whole move-clear-print sequence, so concurrent workers never interleave
/// their escape sequences.
///
/// The canvas assumes it is the only thing writing to its output, and that all lots and
/// anchors fit on screen. It keeps no model of the terminal: if either assumption breaks,
/// rows land in the wrong place.
pub struct Canvas<W: Write = Stdout> {
    state: Arc<Mutex<State<W>>>,
}

impl Canvas {
    /// A styled canvas on stdout and stdin.
    pub fn new(anchor_color: Color) -> Self {
        Self::with_options(CanvasOptions::default().with_anchor_color(anchor_color))
    }

    /// A canvas on stdout. Prompts read through the process-wide stdin buffer, so any
    /// number of canvases can take turns asking questions without losing input.
    pub fn with_options(options: CanvasOptions) -> Self {
        Self::from_input(io::stdout(), Input::Stdin, options)
    }
}

impl<W: Write> Canvas<W> {
    /// A canvas writing to `output` and reading prompt answers from `input`, which it
    /// keeps to itself.
    pub fn with_io<R>(output: W, input: R, options: CanvasOptions) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self::from_input(output, Input::Owned(Box::new(input)), options)
    }

    /// Like [Canvas::with_io], for an input that other canvases read from as well. Each
    /// prompt takes exactly one line from it.
    pub fn with_shared_input<R>(output: W, input: Arc<Mutex<R>>, options: CanvasOptions) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self::from_input(output, Input::Shared(input), options)
    }

    fn from_input(output: W, input: Input, options: CanvasOptions) -> Self {
        let mut state = State::new(output, input, Palette::styled(options.anchor_color));
        if options.plain {
            state.enable_plain_mode();
        }
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Drops all styling and cursor movement: from now on every call writes exactly one
    /// line. Meant for output that isn't a terminal, and for switching once before any
    /// real use.
    pub fn enable_plain_mode(&self) {
        lock(&self.state).enable_plain_mode();
    }

    pub fn is_plain(&self) -> bool {
        lock(&self.state).is_plain()
    }

    /// Returns the lot called `alias`, creating it with an empty row if it doesn't exist
    /// yet. Asking again for the same alias yields a handle to the same row.
    pub fn lot(&self, alias: &str) -> Lot<W> {
        let id = lock(&self.state).find_or_create_lot(alias);
        Lot::new(id, Arc::clone(&self.state))
    }

    /// Prints a line above the anchors. It is not kept and scrolls away with later output.
    pub fn print(&self, text: impl Display) {
        self.print_line(false, text.to_string());
    }

    /// Prints a permanent line, placed right above the lots.
    pub fn anchor_print(&self, text: impl Display) {
        self.print_line(true, text.to_string());
    }

    /// Like [Canvas::print], for callers holding preformatted arguments.
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        self.print(args);
    }

    /// Like [Canvas::anchor_print], for callers holding preformatted arguments.
    pub fn anchor_print_fmt(&self, args: fmt::Arguments<'_>) {
        self.anchor_print(args);
    }

    /// Shows `label` and blocks until the user enters a line, returning it trimmed.
    ///
    /// All other output on this canvas waits until the answer arrives. An empty line is an
    /// empty string; a closed input is an error.
    pub fn prompt(&self, label: impl Display) -> Result<String, PromptError> {
        let label = label.to_string();
        lock(&self.state).prompt(&label)
    }

    /// Every anchor printed so far, oldest first.
    pub fn anchors(&self) -> Vec<String> {
        lock(&self.state).anchors().to_vec()
    }

    pub fn lot_count(&self) -> usize {
        lock(&self.state).lot_count()
    }

    fn print_line(&self, anchor: bool, text: String) {
        lock(&self.state).render(|state| state.print_line(anchor, text));
    }
}

impl<W: Write> Clone for Canvas<W> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<W: Write> fmt::Debug for Canvas<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("Canvas")
            .field("lots", &state.lot_count())
            .field("anchors", &state.anchors().len())
            .field("plain", &state.is_plain())
            .finish()
    }
}
