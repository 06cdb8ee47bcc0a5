//! Cron jobs run alongside the bot.

pub mod presence;
