use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IP_ADDR: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const PORT: Color = Color::Yellow;
pub const SCRIPT: Color = Color::TrueColor { r: 170, g: 170, b: 170 };
