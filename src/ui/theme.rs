use ratatui::style::Color;

pub const REACT_CYAN: Color = Color::Rgb(0x61, 0xda, 0xfb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BODY_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_BORDER: Color = Color::Rgb(0x64, 0x6c, 0xff);
pub const BUTTON_BG: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
