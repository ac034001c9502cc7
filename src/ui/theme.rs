//! Terminal palette.

use ratatui::style::Color;

pub const BRAND: Color = Color::Rgb(0xd9, 0x2d, 0x3a);
pub const FRAME: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const MUTED: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const LINK: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const OK: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const PENDING: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const SELECTION: Color = Color::Rgb(0x27, 0x27, 0x2a);
