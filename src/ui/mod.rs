pub mod colors;
mod layout;
mod terminal;

pub use colors::{classify, ColorCategory, Palette};
pub use layout::{render, Grid};
pub use terminal::{resolve_width, terminal_width};
