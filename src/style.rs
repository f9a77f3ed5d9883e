use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

/// Foreground colors an anchor line can be printed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// The terminal's own foreground color.
    #[default]
    Normal,
}

impl Color {
    fn foreground(self) -> Option<TermColor> {
        // The "dark" crossterm variants are the eight standard ANSI colors.
        match self {
            Color::Black => Some(TermColor::Black),
            Color::Red => Some(TermColor::DarkRed),
            Color::Green => Some(TermColor::DarkGreen),
            Color::Yellow => Some(TermColor::DarkYellow),
            Color::Blue => Some(TermColor::DarkBlue),
            Color::Magenta => Some(TermColor::DarkMagenta),
            Color::Cyan => Some(TermColor::DarkCyan),
            Color::White => Some(TermColor::Grey),
            Color::Normal => None,
        }
    }
}

/// The role a rendered row plays. Resolved to concrete attributes by a [Palette]
/// only when the row is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    Header,
    Closed,
    Anchor,
    Plain,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    header: ContentStyle,
    closed: ContentStyle,
    anchor: ContentStyle,
}

impl Palette {
    pub(crate) fn styled(anchor_color: Color) -> Self {
        let mut header = ContentStyle::new();
        header.attributes.set(Attribute::Bold);

        let mut closed = ContentStyle::new();
        closed.foreground_color = Color::White.foreground();

        let mut anchor = ContentStyle::new();
        anchor.foreground_color = anchor_color.foreground();

        Self {
            header,
            closed,
            anchor,
        }
    }

    pub(crate) fn plain() -> Self {
        Self {
            header: ContentStyle::new(),
            closed: ContentStyle::new(),
            anchor: ContentStyle::new(),
        }
    }

    pub(crate) fn resolve(&self, style: Style) -> ContentStyle {
        match style {
            Style::Header => self.header,
            Style::Closed => self.closed,
            Style::Anchor => self.anchor,
            Style::Plain => ContentStyle::new(),
        }
    }
}
