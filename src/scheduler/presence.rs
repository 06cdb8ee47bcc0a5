use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use serenity::all::{ActivityData, Context, OnlineStatus};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;

/// Presence statuses, shown in order and repeated.
pub const STATUSES: [&str; 4] = [
    "🌙 menjaga gerbang realm",
    "🔮 merapalkan pesan welcome",
    "🕯️ menemani kalian ngobrol",
    "✨ ketik /halo untuk menyapa",
];

pub fn status_at(tick: usize) -> &'static str {
    STATUSES[tick % STATUSES.len()]
}

fn set_status(ctx: &Context, status: &str) {
    ctx.set_presence(Some(ActivityData::playing(status)), OnlineStatus::Online);
}

/// Starts the presence rotation scheduler
///
/// Sets the first status immediately, then moves to the next one every 30 seconds.
///
/// # Arguments
/// - `ctx`: Discord context of the connected shard
pub async fn start_presence_rotation(ctx: Context) -> Result<(), AppError> {
    set_status(&ctx, status_at(0));

    let scheduler = JobScheduler::new().await?;
    let tick = Arc::new(AtomicUsize::new(1));

    let job = Job::new_async("*/30 * * * * *", move |_uuid, _lock| {
        let ctx = ctx.clone();
        let tick = tick.clone();

        Box::pin(async move {
            let status = status_at(tick.fetch_add(1, Ordering::Relaxed));
            set_status(&ctx, status);
            tracing::debug!("Presence set to {}", status);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence rotation scheduler started");

    Ok(())
}
