//! Discord bot integration.
//!
//! The bot answers slash commands, component presses and modal submissions, welcomes
//! new members, tracks AFK statuses from guild messages and rotates its presence.
//! Business logic lives in `service/`; this module translates between Discord
//! interactions and those services.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data for the cache
//! - `GUILD_MESSAGES` - Messages in guilds, used for AFK handling
//! - `GUILD_MEMBERS` - Member joins for the welcome message (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod builder;
pub mod custom_id;
pub mod handler;
pub mod interaction;
pub mod start;
