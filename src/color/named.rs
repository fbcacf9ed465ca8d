use core::fmt;

use super::Color;

pub const BLACK: Color = Color::new(0, 0, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const DARK_GREEN: Color = Color::new(0, 63, 0);

/// Formats a palette as `[0xrrggbb, 0xrrggbb]`
#[derive(Clone, Copy)]
pub struct PaletteDisplay<'a>(pub &'a [Color]);

impl fmt::Display for PaletteDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        f.write_str("]")
    }
}
