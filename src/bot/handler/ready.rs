//! Ready event handler for bot initialization.
//!
//! The ready event fires on every (re)connection to the gateway. The presence
//! rotation is started on the first one only; reconnects just log.

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Context, Ready};

use crate::scheduler::presence;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `presence_started` - Set once the presence scheduler has been started
/// - `ctx` - Discord context, kept by the scheduler to update the presence
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(presence_started: &AtomicBool, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if presence_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Presence rotation already running");
        return;
    }

    if let Err(e) = presence::start_presence_rotation(ctx).await {
        tracing::error!("Failed to start presence rotation: {}", e);
        presence_started.store(false, Ordering::SeqCst);
    }
}
