//! Slash command handlers.
//!
//! Commands are registered with Discord out of band; this module only answers them.

use std::time::{Duration, Instant};

use serenity::all::{
    ChannelId, CommandInteraction, Context, CreateAllowedMentions, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse, GuildId, ResolvedValue, User,
};

use crate::{
    bot::{
        builder::{component, embed, BRAND_NAME, EMBED_COLOR},
        handler::Handler,
        interaction::{ephemeral, present_members},
    },
    error::AppError,
    service::{
        afk::AfkService, id_card::IdCardService, registry::RegistryService,
        sorting::SortingService,
    },
};

/// Select menus per self-role panel message, Discord's action row limit.
const MENUS_PER_MESSAGE: usize = 5;

pub async fn handle_command(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    tracing::debug!("/{} from {}", cmd.data.name, cmd.user.id);

    match cmd.data.name.as_str() {
        "ping" => ping(ctx, cmd).await,
        "halo" => halo(ctx, cmd).await,
        "about" => about(handler, ctx, cmd).await,
        "userinfo" => userinfo(ctx, cmd).await,
        "avatar" => avatar(ctx, cmd).await,
        "serverinfo" => serverinfo(ctx, cmd).await,
        "afk" => afk(handler, ctx, cmd).await,
        "registry" => registry(handler, ctx, cmd).await,
        "idcard" => idcard(ctx, cmd).await,
        "myhouse" => myhouse(handler, ctx, cmd).await,
        "menfesspanel" => menfess_panel(handler, ctx, cmd).await,
        "sortingpanel" => sorting_panel(handler, ctx, cmd).await,
        "selfrolespanel" => self_roles_panel(handler, ctx, cmd).await,
        other => {
            tracing::debug!("Ignoring unknown command /{}", other);
            Ok(())
        }
    }
}

fn user_option<'a>(cmd: &'a CommandInteraction, name: &str) -> Option<&'a User> {
    cmd.data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::User(user, _) if option.name == name => Some(user),
            _ => None,
        })
}

fn string_option<'a>(cmd: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    cmd.data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
}

/// The `user` option, defaulting to the invoking user.
fn target_user(cmd: &CommandInteraction) -> &User {
    user_option(cmd, "user").unwrap_or(&cmd.user)
}

fn require_guild(cmd: &CommandInteraction) -> Result<GuildId, AppError> {
    cmd.guild_id
        .ok_or_else(|| AppError::BadRequest("command ini cuma bisa dipakai di server.".to_string()))
}

fn require_admin(cmd: &CommandInteraction) -> Result<(), AppError> {
    let is_admin = cmd
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());

    if is_admin {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "command ini cuma buat admin ya 👀".to_string(),
        ))
    }
}

async fn respond_embed(
    ctx: &Context,
    cmd: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed)),
    )
    .await?;

    Ok(())
}

/// Formats an uptime as `1d 2h 3m 4s`, leaving out leading zero units.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (days, hours, minutes, seconds) = (
        secs / 86_400,
        secs % 86_400 / 3_600,
        secs % 3_600 / 60,
        secs % 60,
    );

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if days > 0 || hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}

/// Replies and reports the HTTP round trip of that reply.
async fn ping(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let started = Instant::now();

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content("🏓 Pong!"),
        ),
    )
    .await?;

    let latency = started.elapsed().as_millis();
    cmd.edit_response(
        &ctx.http,
        EditInteractionResponse::new().content(format!("🏓 Pong! `{}ms`", latency)),
    )
    .await?;

    Ok(())
}

async fn halo(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(format!(
                    "👋 Halo <@{}>! Selamat datang di **House of Valerie** ✨",
                    cmd.user.id
                ))
                .allowed_mentions(CreateAllowedMentions::new()),
        ),
    )
    .await?;

    Ok(())
}

async fn about(handler: &Handler, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let embed = CreateEmbed::new()
        .title(format!("🔮 {}", BRAND_NAME))
        .colour(EMBED_COLOR)
        .description("Penjaga gerbang House of Valerie: sorting arcana, ID card, menfess, dan AFK.")
        .field("Versi", env!("CARGO_PKG_VERSION"), true)
        .field("Uptime", format_uptime(handler.started_at.elapsed()), true);

    respond_embed(ctx, cmd, embed).await
}

async fn userinfo(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let user = target_user(cmd);

    let joined_at = match cmd.guild_id {
        Some(guild_id) => guild_id
            .member(&ctx.http, user.id)
            .await
            .ok()
            .and_then(|member| member.joined_at),
        None => None,
    };

    let embed = CreateEmbed::new()
        .title("👤 User Info")
        .colour(EMBED_COLOR)
        .thumbnail(user.face())
        .field("User", format!("<@{}>", user.id), true)
        .field("Username", &user.name, true)
        .field("ID", format!("`{}`", user.id), false)
        .field(
            "Akun dibuat",
            format!("<t:{}:F>", user.created_at().unix_timestamp()),
            true,
        )
        .field(
            "Bergabung",
            joined_at
                .map(|at| format!("<t:{}:F>", at.unix_timestamp()))
                .unwrap_or_else(|| "—".to_string()),
            true,
        )
        .field("Bot", if user.bot { "Ya" } else { "Tidak" }, true);

    respond_embed(ctx, cmd, embed).await
}

async fn avatar(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let user = target_user(cmd);

    let embed = CreateEmbed::new()
        .title(format!("🖼️ Avatar {}", user.display_name()))
        .colour(EMBED_COLOR)
        .image(user.face());

    respond_embed(ctx, cmd, embed).await
}

async fn serverinfo(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;
    let guild = guild_id.to_partial_guild_with_counts(&ctx.http).await?;

    let count = |value: Option<u64>| value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string());

    let mut embed = CreateEmbed::new()
        .title(format!("🏰 {}", guild.name))
        .colour(EMBED_COLOR)
        .field("Owner", format!("<@{}>", guild.owner_id), true)
        .field("Member", count(guild.approximate_member_count), true)
        .field("Boost", count(guild.premium_subscription_count), true)
        .field("Role", guild.roles.len().to_string(), true)
        .field(
            "Dibuat",
            format!("<t:{}:F>", guild_id.created_at().unix_timestamp()),
            false,
        );

    if let Some(icon) = guild.icon_url() {
        embed = embed.thumbnail(icon);
    }

    respond_embed(ctx, cmd, embed).await
}

async fn afk(handler: &Handler, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    require_guild(cmd)?;

    let status = AfkService::new(&handler.db)
        .set(cmd.user.id.get(), string_option(cmd, "reason"))
        .await?;

    tracing::info!("{} is now AFK", cmd.user.id);

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(format!(
                    "🕯️ <@{}> sekarang **AFK** — {}",
                    status.user_id, status.reason
                ))
                .allowed_mentions(CreateAllowedMentions::new()),
        ),
    )
    .await?;

    Ok(())
}

async fn registry(handler: &Handler, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let page = RegistryService::new(&handler.db).page(0).await?;
    let present = present_members(ctx, cmd.guild_id, &page).await;

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(embed::registry(&page, |id| present.contains(&id)))
                .components(vec![component::registry_row(&page)]),
        ),
    )
    .await?;

    Ok(())
}

async fn idcard(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(embed::id_card_panel())
                .components(vec![component::id_card_row()]),
        ),
    )
    .await?;

    Ok(())
}

async fn myhouse(handler: &Handler, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let user = target_user(cmd);
    let user_id = user.id.get();

    let sorting = SortingService::new(
        &handler.db,
        &handler.sorting_lock,
        handler.config.sorting_bag_size,
    );
    let Some(sorted) = sorting.get(user_id).await? else {
        let message = if user.id == cmd.user.id {
            "🔮 Kamu belum menjalani ritual sorting.".to_string()
        } else {
            format!("🔮 <@{}> belum menjalani ritual sorting.", user_id)
        };
        return Err(AppError::NotFound(message));
    };

    let card = IdCardService::new(&handler.db).get(user_id).await?;

    respond_embed(
        ctx,
        cmd,
        embed::house_card("🏰 House Card", &sorted, card.as_ref(), &user.face()),
    )
    .await
}

/// Sends a panel to the configured channel, or the invoking channel when unset.
async fn send_panel(
    ctx: &Context,
    cmd: &CommandInteraction,
    configured: Option<u64>,
    message: CreateMessage,
) -> Result<ChannelId, AppError> {
    let channel_id = configured.map(ChannelId::new).unwrap_or(cmd.channel_id);
    channel_id.send_message(&ctx.http, message).await?;

    Ok(channel_id)
}

async fn menfess_panel(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    require_admin(cmd)?;

    let message = CreateMessage::new()
        .embed(embed::menfess_panel())
        .components(vec![component::menfess_panel_row()]);
    let channel_id = send_panel(ctx, cmd, handler.config.menfess_channel_id, message).await?;

    tracing::info!("Menfess panel posted to {}", channel_id);

    cmd.create_response(
        &ctx.http,
        ephemeral(format!("✅ panel menfess dikirim ke <#{}>.", channel_id)),
    )
    .await?;

    Ok(())
}

async fn sorting_panel(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    require_admin(cmd)?;

    let message = CreateMessage::new()
        .embed(embed::sorting_panel())
        .components(vec![component::sorting_panel_row()]);
    let channel_id = send_panel(ctx, cmd, handler.config.sorting_channel_id, message).await?;

    tracing::info!("Sorting panel posted to {}", channel_id);

    cmd.create_response(
        &ctx.http,
        ephemeral(format!("✅ panel sorting dikirim ke <#{}>.", channel_id)),
    )
    .await?;

    Ok(())
}

async fn self_roles_panel(
    handler: &Handler,
    ctx: &Context,
    cmd: &CommandInteraction,
) -> Result<(), AppError> {
    require_admin(cmd)?;

    let categories: Vec<(&String, &Vec<_>)> = handler
        .self_roles
        .catalog()
        .categories
        .iter()
        .filter(|(_, options)| !options.is_empty())
        .collect();
    if categories.is_empty() {
        return Err(AppError::BadRequest(
            "⚠️ katalog self role kosong, cek SELFROLES_PATH di .env".to_string(),
        ));
    }

    cmd.defer_ephemeral(&ctx.http).await?;

    for chunk in categories.chunks(MENUS_PER_MESSAGE) {
        let names: Vec<&str> = chunk.iter().map(|(name, _)| name.as_str()).collect();
        let menus = chunk
            .iter()
            .map(|(name, options)| component::self_role_menu(name, options))
            .collect();

        cmd.channel_id
            .send_message(
                &ctx.http,
                CreateMessage::new()
                    .embed(embed::self_role_panel(&names.join(", ")))
                    .components(menus),
            )
            .await?;
    }

    tracing::info!(
        "Self role panel with {} categories posted to {}",
        categories.len(),
        cmd.channel_id
    );

    cmd.edit_response(
        &ctx.http,
        EditInteractionResponse::new().content(format!(
            "✅ panel self role dikirim ({} kategori).",
            categories.len()
        )),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(5)), "5s");
        assert_eq!(format_uptime(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3_600)), "1h 0m 0s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m 1s");
    }
}
