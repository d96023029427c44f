use poise::serenity_prelude::Colour;

pub const GREEN: Colour = Colour::new(0x57F287);
pub const YELLOW: Colour = Colour::new(0xFEE75C);
pub const RED: Colour = Colour::new(0xED4245);
pub const BLURPLE: Colour = Colour::new(0x5865F2);
