use ratatui::style::Color;

use crate::deck::Emphasis;

pub const EMERALD: Color = Color::Rgb(0x34, 0xd3, 0x99);
pub const CYAN: Color = Color::Rgb(0x67, 0xe8, 0xf9);
pub const RED: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const SLATE_TEXT: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const SLATE_MUTED: Color = Color::Rgb(0x64, 0x74, 0x8b);
pub const SLATE_TRACK: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);

pub fn emphasis_color(emphasis: Emphasis) -> Color {
    match emphasis {
        Emphasis::Positive => EMERALD,
        Emphasis::Negative => RED,
        Emphasis::Info => CYAN,
    }
}
