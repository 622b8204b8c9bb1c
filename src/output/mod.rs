//! Frame output (terminal, SVG).

mod svg;
mod terminal;

pub use svg::{frame_to_svg, SvgElement, SvgEncoder, TextAnchor};
pub use terminal::{TerminalMode, TerminalRenderer};
