use std::time::Duration;

use serenity::all::{
    ChannelId, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateAllowedMentions, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, EditInteractionResponse, GuildId, RoleId, UserId,
};

use crate::{
    bot::{
        builder::{component, embed, ID_CARD_TITLE},
        custom_id::CustomId,
        handler::Handler,
        interaction::present_members,
    },
    error::AppError,
    model::{house::House, self_role::RoleDiff, sorting::RollOutcome},
    service::{
        id_card::IdCardService, menfess::cooldown_message, registry::RegistryService,
        sorting::SortingService,
    },
};

/// Messages shown while the sorting ritual plays out.
const RITUAL_STAGES: [&str; 3] = [
    "🕯️ Lingkaran ritual menyala...",
    "🔮 Arcana membaca gema jiwamu...",
    "✨ Segel takdir mulai terbuka...",
];
const STAGE_DELAY: Duration = Duration::from_millis(1200);

pub async fn handle_component(
    handler: &Handler,
    ctx: &Context,
    comp: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(id) = CustomId::parse(&comp.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", comp.data.custom_id);
        return Ok(());
    };

    match id {
        CustomId::SortingRoll => sorting_roll(handler, ctx, comp).await,
        CustomId::IdCardOpen => {
            comp.create_response(
                &ctx.http,
                CreateInteractionResponse::Modal(component::id_card_modal()),
            )
            .await?;
            Ok(())
        }
        CustomId::MenfessNew => menfess_new(handler, ctx, comp).await,
        CustomId::MenfessReply(id) => {
            comp.create_response(
                &ctx.http,
                CreateInteractionResponse::Modal(component::menfess_reply_modal(id)),
            )
            .await?;
            Ok(())
        }
        CustomId::RegistryPrev(index) => {
            registry_page(handler, ctx, comp, index.saturating_sub(1)).await
        }
        CustomId::RegistryNext(index) => {
            registry_page(handler, ctx, comp, index.saturating_add(1)).await
        }
        CustomId::SelfRoles(category) => self_roles(handler, ctx, comp, &category).await,
        CustomId::IdCardSubmit | CustomId::MenfessSubmit | CustomId::MenfessReplySubmit(_) => {
            Ok(())
        }
    }
}

fn require_guild(comp: &ComponentInteraction) -> Result<GuildId, AppError> {
    comp.guild_id
        .ok_or_else(|| AppError::BadRequest("tombol ini cuma bisa dipakai di server.".to_string()))
}

async fn edit_content(
    ctx: &Context,
    comp: &ComponentInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    comp.edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

async fn registry_page(
    handler: &Handler,
    ctx: &Context,
    comp: &ComponentInteraction,
    index: usize,
) -> Result<(), AppError> {
    let page = RegistryService::new(&handler.db).page(index).await?;
    let present = present_members(ctx, comp.guild_id, &page).await;

    comp.create_response(
        &ctx.http,
        CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new()
                .embed(embed::registry(&page, |id| present.contains(&id)))
                .components(vec![component::registry_row(&page)]),
        ),
    )
    .await?;

    Ok(())
}

/// Runs the sorting ritual for the member who pressed the panel button.
async fn sorting_roll(
    handler: &Handler,
    ctx: &Context,
    comp: &ComponentInteraction,
) -> Result<(), AppError> {
    let (Some(light_role), Some(dark_role)) =
        (handler.config.light_role_id, handler.config.dark_role_id)
    else {
        return Err(AppError::BadRequest(
            "⚠️ LIGHT_ROLE_ID / DARK_ROLE_ID belum diisi di .env".to_string(),
        ));
    };
    let guild_id = require_guild(comp)?;
    let user_id = comp.user.id;

    comp.defer_ephemeral(&ctx.http).await?;

    let outcome = SortingService::new(
        &handler.db,
        &handler.sorting_lock,
        handler.config.sorting_bag_size,
    )
    .roll(user_id.get())
    .await?;

    let sorted = match outcome {
        RollOutcome::AlreadySorted(sorted) => {
            return edit_content(
                ctx,
                comp,
                format!(
                    "🔒 Kamu sudah tersortir ke **{}**.\nSejak: {}\n\nTidak bisa sorting ulang.",
                    sorted.house.display_name(),
                    embed::discord_time(sorted.sorted_at, 'F')
                ),
            )
            .await;
        }
        RollOutcome::MissingIdCard => {
            let hint = match handler.config.idcard_channel_id {
                Some(channel_id) => format!("Buat dulu di <#{}>", channel_id),
                None => "Buat dulu pakai **/idcard**".to_string(),
            };
            return edit_content(
                ctx,
                comp,
                format!(
                    "📜 Kamu belum punya **{}**.\n{} lalu kembali ke lingkaran ini.",
                    ID_CARD_TITLE, hint
                ),
            )
            .await;
        }
        RollOutcome::Sorted(sorted) => sorted,
    };

    for stage in RITUAL_STAGES {
        edit_content(ctx, comp, stage).await?;
        tokio::time::sleep(STAGE_DELAY).await;
    }

    let role_id = match sorted.house {
        House::Light => light_role,
        House::Dark => dark_role,
    };
    let mut result = format!(
        "✨ Takdir telah berbicara.\nKamu tergabung dalam **{}**.",
        sorted.house.display_name()
    );

    if let Err(e) = ctx
        .http
        .add_member_role(guild_id, user_id, RoleId::new(role_id), Some("Arcane sorting"))
        .await
    {
        tracing::error!("Failed to give house role {} to {}: {}", role_id, user_id, e);
        result.push_str("\n\n⚠️ role gagal diberikan, hubungi admin ya.");
    }

    edit_content(ctx, comp, result).await?;

    let Some(channel_id) = handler.config.housecard_channel_id else {
        return Ok(());
    };

    let card = IdCardService::new(&handler.db).get(user_id.get()).await?;
    let message = CreateMessage::new()
        .content(format!("📜 Takdir telah ditetapkan untuk <@{}>.", user_id))
        .embed(embed::house_card(
            "🏰 Arcane House Card",
            &sorted,
            card.as_ref(),
            &comp.user.face(),
        ))
        .allowed_mentions(CreateAllowedMentions::new().users(vec![user_id]));

    if let Err(e) = ChannelId::new(channel_id)
        .send_message(&ctx.http, message)
        .await
    {
        tracing::error!("Failed to post house card for {}: {}", user_id, e);
    }

    Ok(())
}

/// Opens the menfess modal unless the member is still on cooldown.
async fn menfess_new(
    handler: &Handler,
    ctx: &Context,
    comp: &ComponentInteraction,
) -> Result<(), AppError> {
    if let Some(wait) = handler.menfess_cooldown.remaining(comp.user.id.get()).await {
        return Err(AppError::BadRequest(cooldown_message(wait)));
    }

    comp.create_response(
        &ctx.http,
        CreateInteractionResponse::Modal(component::menfess_modal()),
    )
    .await?;

    Ok(())
}

fn role_list(roles: &[u64]) -> String {
    roles
        .iter()
        .map(|id| format!("<@&{}>", id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary shown after a self-role selection.
pub fn role_diff_message(diff: &RoleDiff) -> String {
    if diff.is_empty() {
        return "Tidak ada perubahan role.".to_string();
    }

    let mut lines = vec!["✅ Role diperbarui.".to_string()];
    if !diff.add.is_empty() {
        lines.push(format!("➕ {}", role_list(&diff.add)));
    }
    if !diff.remove.is_empty() {
        lines.push(format!("➖ {}", role_list(&diff.remove)));
    }

    lines.join("\n")
}

async fn self_roles(
    handler: &Handler,
    ctx: &Context,
    comp: &ComponentInteraction,
    category: &str,
) -> Result<(), AppError> {
    let ComponentInteractionDataKind::StringSelect { values } = &comp.data.kind else {
        return Ok(());
    };
    let guild_id = require_guild(comp)?;
    let Some(member) = comp.member.as_ref() else {
        return Err(AppError::BadRequest(
            "data member tidak ditemukan, coba lagi ya.".to_string(),
        ));
    };

    let current: Vec<u64> = member.roles.iter().map(|role| role.get()).collect();
    let selected: Vec<u64> = values.iter().filter_map(|v| v.parse().ok()).collect();

    let diff = handler
        .self_roles
        .diff(category, &current, &selected)
        .ok_or_else(|| AppError::NotFound("Kategori role tidak dikenal.".to_string()))?;

    comp.defer_ephemeral(&ctx.http).await?;

    let user_id: UserId = member.user.id;
    for role_id in &diff.add {
        ctx.http
            .add_member_role(guild_id, user_id, RoleId::new(*role_id), Some("Self role"))
            .await?;
    }
    for role_id in &diff.remove {
        ctx.http
            .remove_member_role(guild_id, user_id, RoleId::new(*role_id), Some("Self role"))
            .await?;
    }

    tracing::info!(
        "Self roles for {} in {}: +{} -{}",
        user_id,
        category,
        diff.add.len(),
        diff.remove.len()
    );

    edit_content(ctx, comp, role_diff_message(&diff)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: added and removed roles listed as role mentions
    #[test]
    fn summarizes_role_diff() {
        let diff = RoleDiff {
            add: vec![11, 12],
            remove: vec![13],
        };

        assert_eq!(
            role_diff_message(&diff),
            "✅ Role diperbarui.\n➕ <@&11>, <@&12>\n➖ <@&13>"
        );
    }

    /// Expected: a no-op selection says nothing changed
    #[test]
    fn summarizes_empty_diff() {
        assert_eq!(role_diff_message(&RoleDiff::default()), "Tidak ada perubahan role.");
    }
}
