//! To maintain a theme of colors, the CLI colors live here as constants
//! so the output stays consistent everywhere.
//!
//! - DESKBOARD_BLUE: Main Color

use colored::Color;

pub(crate) const DESKBOARD_BLUE: Color = Color::TrueColor {
    r: 100,
    g: 149,
    b: 237,
};
