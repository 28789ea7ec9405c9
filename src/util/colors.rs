use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x0000ffff);
pub const NEUTRAL: Color = Color::from_u32(0x009ca3af);
pub const MUTED: Color = Color::from_u32(0x00374151);
pub const BACKGROUND: Color = Color::from_u32(0x00111827);
pub const NAVBAR: Color = Color::from_u32(0x00e5e7eb);
