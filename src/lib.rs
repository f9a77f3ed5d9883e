/*
Live progress for many workers on one terminal, without taking over the screen.

Bottom of the output, top to bottom:
    ordinary lines      scroll away, never redrawn
    anchors             permanent, oldest first
    lots                one row per alias, rewritten in place, oldest first
    cursor              column 0, row below the last lot

Every update:
    take the canvas lock
    move up over the rows that have to move, clearing them
    rewrite them (one row lower when something is inserted)
    return to the bottom, even when the update fails halfway
    release the lock

Prompts hold the lock across the blocking read, so nothing moves under the user.
Plain mode throws all of this away and appends lines, for logs and pipes.
*/
mod canvas;
mod cursor;
mod error;
mod input;
mod lot;
mod options;
mod state;
mod style;
#[cfg(test)]
mod testing;
#[cfg(test)]
mod vte_actions;

pub use canvas::Canvas;
pub use error::PromptError;
pub use lot::Lot;
pub use options::CanvasOptions;
pub use style::Color;
