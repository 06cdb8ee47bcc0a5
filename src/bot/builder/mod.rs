//! Discord message builders shared by the interaction and event handlers.

pub mod component;
pub mod embed;

/// Accent colour of every embed the bot sends.
pub const EMBED_COLOR: u32 = 0x77d0d7;
pub const BRAND_NAME: &str = "HOV Assistant";
pub const ID_CARD_TITLE: &str = "HOV IDENTITY CARD";
