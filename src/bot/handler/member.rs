use rand::{seq::IndexedRandom, Rng};
use serenity::all::{ChannelId, Context, CreateAllowedMentions, CreateMessage, Member};

use crate::config::Config;

const WELCOME_TEMPLATES: [&str; 4] = [
    "✨ Selamat datang di **House of Valerie**, {member}! Buat ID card dulu pakai **/idcard** ya.",
    "🌙 Gerbang realm terbuka untuk {member}. Semoga betah di sini!",
    "🕯️ {member} baru saja tiba di House of Valerie. Ayo sapa dengan **/halo**!",
    "🔮 Arcana merasakan kehadiran baru: {member}. Selamat bergabung!",
];

/// Picks a welcome line for a new member.
pub fn welcome_line<R: Rng + ?Sized>(user_id: u64, rng: &mut R) -> String {
    let template = WELCOME_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(WELCOME_TEMPLATES[0]);

    template.replace("{member}", &format!("<@{}>", user_id))
}

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(config: &Config, ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let Some(channel_id) = config.general_channel_id else {
        tracing::debug!("GENERAL_CHANNEL_ID not set, skipping welcome");
        return;
    };

    let user_id = new_member.user.id;
    let line = welcome_line(user_id.get(), &mut rand::rng());

    let message = CreateMessage::new()
        .content(line)
        .allowed_mentions(CreateAllowedMentions::new().users(vec![user_id]));

    if let Err(e) = ChannelId::new(channel_id)
        .send_message(&ctx.http, message)
        .await
    {
        tracing::error!("Failed to send welcome message for {}: {}", user_id, e);
    } else {
        tracing::info!("Welcomed {} to guild {}", new_member.user.name, new_member.guild_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Expected: every line mentions the member and no placeholder is left
    #[test]
    fn welcome_line_mentions_member() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let line = welcome_line(1452229004663849052, &mut rng);
            assert!(line.contains("<@1452229004663849052>"));
            assert!(!line.contains("{member}"));
        }
    }
}
