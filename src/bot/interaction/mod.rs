//! Interaction dispatch for slash commands, component presses and modal submissions.
//!
//! Each handler returns `Result<(), AppError>`. Failures are reported back to the
//! invoking user as an ephemeral message built from [`AppError::user_message`]; when
//! the interaction was already acknowledged the report is sent as a followup instead.

pub mod command;
pub mod component;
pub mod modal;

use std::collections::HashSet;

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, GuildId, Interaction, UserId,
};

use crate::{bot::handler::Handler, model::registry::RegistryPage};

/// Replies to any interaction type with an ephemeral error message.
macro_rules! report_error {
    ($ctx:expr, $interaction:expr, $err:expr) => {{
        let message = $err.user_message();

        if $interaction
            .create_response(&$ctx.http, ephemeral(&message))
            .await
            .is_err()
        {
            let followup = CreateInteractionResponseFollowup::new()
                .content(&message)
                .ephemeral(true);

            if let Err(e) = $interaction.create_followup(&$ctx.http, followup).await {
                tracing::error!("Failed to report interaction error: {}", e);
            }
        }
    }};
}

pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(cmd) => {
            if let Err(e) = command::handle_command(handler, &ctx, &cmd).await {
                report_error!(ctx, cmd, e);
            }
        }
        Interaction::Component(comp) => {
            if let Err(e) = component::handle_component(handler, &ctx, &comp).await {
                report_error!(ctx, comp, e);
            }
        }
        Interaction::Modal(modal) => {
            if let Err(e) = modal::handle_modal(handler, &ctx, &modal).await {
                report_error!(ctx, modal, e);
            }
        }
        _ => {}
    }
}

/// Ephemeral text response.
pub(crate) fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Users on a registry page that are still members of the guild.
///
/// Checks the cache first and falls back to fetching the member. Outside a guild
/// every listed user counts as present.
pub(crate) async fn present_members(
    ctx: &Context,
    guild_id: Option<GuildId>,
    page: &RegistryPage,
) -> HashSet<u64> {
    let Some(guild_id) = guild_id else {
        return page.entries.iter().map(|entry| entry.user_id).collect();
    };

    let mut present = HashSet::new();

    for entry in page.entries.iter().filter(|entry| entry.user_id != 0) {
        let user_id = UserId::new(entry.user_id);
        let cached = ctx
            .cache
            .guild(guild_id)
            .is_some_and(|guild| guild.members.contains_key(&user_id));

        if cached || guild_id.member(&ctx.http, user_id).await.is_ok() {
            present.insert(entry.user_id);
        }
    }

    present
}
