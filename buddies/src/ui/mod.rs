//! UI module for the Math Buddies TUI

pub mod glyphs;
pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
