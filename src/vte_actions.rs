use crate::vte_actions::VteAction::{
    CarriageReturn, CursorColumn, CursorDown, CursorUp, EraseLine, LineFeed, Sgr, Text,
};
use vte::{Params, Parser, Perform};

/// The semantic actions a canvas can emit. Anything else the parser recognises is
/// dropped, so an unexpected sequence shows up as a missing action in assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VteAction {
    Text(char),
    LineFeed,
    CarriageReturn,
    CursorUp(u16),
    CursorDown(u16),
    /// 1-based, as written on the wire.
    CursorColumn(u16),
    EraseLine(u16),
    Sgr(Vec<u16>),
}

impl VteAction {
    pub fn is_control(&self) -> bool {
        !matches!(self, Text(_) | LineFeed)
    }
}

/// A wrapper over [Parser] and [Perform] which takes the canvas' output bytes and
/// exposes the list of semantic actions.
pub struct VteActionParser {
    parser: Parser,
}

impl VteActionParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Vec<VteAction> {
        let mut performer = Performer::new();
        for byte in bytes {
            self.parser.advance(&mut performer, *byte)
        }
        performer.actions
    }
}

/// Collapses runs of [VteAction::Text] into strings and drops styling, leaving only
/// the text and cursor movement. Makes sequences readable in assertions.
pub fn simplify(actions: &[VteAction]) -> Vec<String> {
    let mut out = Vec::new();
    let mut text = String::new();
    for action in actions {
        match action {
            Text(c) => text.push(*c),
            Sgr(_) => {}
            other => {
                if !text.is_empty() {
                    out.push(std::mem::take(&mut text));
                }
                out.push(format!("{other:?}"));
            }
        }
    }
    if !text.is_empty() {
        out.push(text);
    }
    out
}

struct Performer {
    actions: Vec<VteAction>,
}

impl Performer {
    fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

impl Perform for Performer {
    fn print(&mut self, c: char) {
        self.actions.push(Text(c))
    }

    fn execute(&mut self, byte: u8) {
        let action = match byte {
            10 => LineFeed,
            13 => CarriageReturn,
            _ => return,
        };
        self.actions.push(action);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, c: char) {
        if intermediates.is_empty() {
            let action = match c {
                'A' => CursorUp(params.canonicalize_1(1)),
                'B' => CursorDown(params.canonicalize_1(1)),
                'G' => CursorColumn(params.canonicalize_1(1)),
                'K' => EraseLine(params.first_or(0)),
                'm' => Sgr(params.iter().flatten().copied().collect()),
                _ => return,
            };
            self.actions.push(action);
        }
    }
}

trait ParamsCanonicalize {
    fn canonicalize_1(&self, default: u16) -> u16;
    fn first_or(&self, default: u16) -> u16;
}

impl ParamsCanonicalize for Params {
    fn canonicalize_1(&self, default: u16) -> u16 {
        self.iter()
            .next()
            .and_then(|x| x.first().copied())
            .filter(|x| *x != 0)
            .unwrap_or(default)
    }

    fn first_or(&self, default: u16) -> u16 {
        self.iter()
            .next()
            .and_then(|x| x.first().copied())
            .unwrap_or(default)
    }
}
