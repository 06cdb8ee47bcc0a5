use sea_orm::DatabaseConnection;
use serenity::all::{Context, CreateAllowedMentions, CreateMessage, Message};

use crate::{bot::builder::embed::discord_time, model::afk::AfkStatus, service::afk::AfkService};

/// Formats the notice listing mentioned members who are AFK.
pub fn afk_notice(statuses: &[AfkStatus]) -> String {
    let lines: Vec<String> = statuses
        .iter()
        .map(|status| {
            format!(
                "• <@{}> sedang **AFK** — {}\n  sejak {}",
                status.user_id,
                status.reason,
                discord_time(status.since, 'R')
            )
        })
        .collect();

    format!("🕯️ **AFK Notice**\n{}", lines.join("\n"))
}

/// Replies to `message` without pinging anyone.
async fn reply_quietly(ctx: &Context, message: &Message, content: String) {
    let reply = CreateMessage::new()
        .content(content)
        .reference_message(message)
        .allowed_mentions(CreateAllowedMentions::new().replied_user(false));

    if let Err(e) = message.channel_id.send_message(&ctx.http, reply).await {
        tracing::error!("Failed to reply in channel {}: {}", message.channel_id, e);
    }
}

/// Handles a guild message: clears the author's AFK status and answers mentions of
/// members who are AFK.
pub async fn handle_message(db: &DatabaseConnection, ctx: Context, message: Message) {
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    let afk = AfkService::new(db);
    let author_id = message.author.id.get();

    match afk.clear(author_id).await {
        Ok(true) => {
            tracing::debug!("Cleared AFK status of {}", author_id);
            reply_quietly(
                &ctx,
                &message,
                format!("✅ welcome back <@{}>! status AFK kamu sudah dihapus.", author_id),
            )
            .await;
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Failed to clear AFK status of {}: {}", author_id, e);
            return;
        }
    }

    let mentioned: Vec<u64> = message
        .mentions
        .iter()
        .filter(|user| !user.bot && user.id != message.author.id)
        .map(|user| user.id.get())
        .collect();
    if mentioned.is_empty() {
        return;
    }

    let statuses = match afk.notices(&mentioned).await {
        Ok(statuses) => statuses,
        Err(e) => {
            tracing::error!("Failed to load AFK statuses: {}", e);
            return;
        }
    };
    if statuses.is_empty() {
        return;
    }

    reply_quietly(&ctx, &message, afk_notice(&statuses)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// Expected: one bullet per status with a relative timestamp
    #[test]
    fn formats_afk_notice() {
        let since = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let statuses = vec![
            AfkStatus {
                user_id: 1,
                reason: "tidur".to_string(),
                since,
            },
            AfkStatus {
                user_id: 2,
                reason: "AFK".to_string(),
                since,
            },
        ];

        let notice = afk_notice(&statuses);

        assert!(notice.starts_with("🕯️ **AFK Notice**\n"));
        assert!(notice.contains("• <@1> sedang **AFK** — tidur\n  sejak <t:1767225600:R>"));
        assert!(notice.contains("• <@2> sedang **AFK** — AFK"));
    }
}
