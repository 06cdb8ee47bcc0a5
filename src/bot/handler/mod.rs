use std::{
    sync::{atomic::AtomicBool, Arc},
    time::Instant,
};

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Member, Message, Ready};
use serenity::async_trait;

use crate::{
    bot::interaction,
    config::Config,
    service::{menfess::MenfessCooldown, self_role::SelfRoleService, sorting::SortingLock},
};

pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
///
/// Holds the state shared by every event: the database, configuration and the
/// in-memory services that must outlive a single interaction.
pub struct Handler {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub sorting_lock: SortingLock,
    pub menfess_cooldown: MenfessCooldown,
    pub self_roles: SelfRoleService,
    pub started_at: Instant,
    presence_started: AtomicBool,
}

impl Handler {
    pub fn new(db: DatabaseConnection, config: Arc<Config>, self_roles: SelfRoleService) -> Self {
        let menfess_cooldown = MenfessCooldown::new(config.menfess_cooldown_sec);

        Self {
            db,
            config,
            sorting_lock: SortingLock::new(),
            menfess_cooldown,
            self_roles,
            started_at: Instant::now(),
            presence_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.presence_started, ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.config, ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, ctx, message).await;
    }

    /// Called for slash commands, component presses and modal submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
