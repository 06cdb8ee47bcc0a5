use serenity::all::{
    ActionRowComponent, ChannelId, Context, CreateAllowedMentions, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse, MessageId,
    ModalInteraction,
};

use crate::{
    bot::{
        builder::{component, component::input, embed},
        custom_id::CustomId,
        handler::Handler,
    },
    error::AppError,
    model::id_card::IdCardSubmission,
    service::{
        id_card::IdCardService,
        menfess::{cooldown_message, validate_submission, MenfessService},
        sorting::SortingService,
    },
};

pub async fn handle_modal(
    handler: &Handler,
    ctx: &Context,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    let Some(id) = CustomId::parse(&modal.data.custom_id) else {
        tracing::debug!("Ignoring unknown modal {}", modal.data.custom_id);
        return Ok(());
    };

    match id {
        CustomId::MenfessSubmit => menfess_submit(handler, ctx, modal).await,
        CustomId::MenfessReplySubmit(id) => menfess_reply(handler, ctx, modal, id).await,
        CustomId::IdCardSubmit => id_card_submit(handler, ctx, modal).await,
        _ => Ok(()),
    }
}

/// Value of a text input, empty when missing.
fn modal_value(modal: &ModalInteraction, custom_id: &str) -> String {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(text) if text.custom_id == custom_id => {
                Some(text.value.clone().unwrap_or_default())
            }
            _ => None,
        })
        .unwrap_or_default()
}

async fn menfess_submit(
    handler: &Handler,
    ctx: &Context,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    let Some(channel_id) = handler.config.menfess_channel_id else {
        return Err(AppError::BadRequest(
            "⚠️ MENFESS_CHANNEL_ID belum diisi di .env".to_string(),
        ));
    };
    let user_id = modal.user.id.get();

    let draft = validate_submission(
        &modal_value(modal, input::MENFESS_TO),
        &modal_value(modal, input::MENFESS_ALIAS),
        &modal_value(modal, input::MENFESS_MESSAGE),
    )?;

    if let Err(wait) = handler.menfess_cooldown.try_acquire(user_id).await {
        return Err(AppError::BadRequest(cooldown_message(wait)));
    }

    modal.defer_ephemeral(&ctx.http).await?;

    let service = MenfessService::new(&handler.db);
    let (post, submission) = service.prepare_post(user_id, channel_id, draft).await?;

    let message = ChannelId::new(channel_id)
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(embed::menfess_post(post.id, &submission))
                .components(vec![component::menfess_post_row(post.id)])
                .allowed_mentions(CreateAllowedMentions::new()),
        )
        .await?;
    service.mark_sent(post.id, message.id.get()).await?;

    tracing::info!("Posted menfess #{} to {}", post.id, channel_id);

    modal
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(format!(
                "✅ menfess #{} terkirim ke <#{}>.",
                post.id, channel_id
            )),
        )
        .await?;

    Ok(())
}

/// Posts an anonymous reply as a reference to the original menfess message.
async fn menfess_reply(
    handler: &Handler,
    ctx: &Context,
    modal: &ModalInteraction,
    id: i32,
) -> Result<(), AppError> {
    let reply = modal_value(modal, input::MENFESS_REPLY);
    let service = MenfessService::new(&handler.db);

    let (post, message_id) = service.reply_target(id, &reply).await?;

    modal.defer_ephemeral(&ctx.http).await?;

    let anon = service.anon_label(modal.user.id.get()).await?;
    let channel_id = ChannelId::new(post.channel_id);

    channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(embed::menfess_reply(id, &reply, &anon))
                .reference_message((channel_id, MessageId::new(message_id)))
                .allowed_mentions(CreateAllowedMentions::new().replied_user(false)),
        )
        .await?;

    tracing::info!("Posted anonymous reply to menfess #{}", id);

    modal
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content("✅ balasan anonim terkirim."),
        )
        .await?;

    Ok(())
}

async fn id_card_submit(
    handler: &Handler,
    ctx: &Context,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    let submission = IdCardSubmission {
        name: modal_value(modal, input::ID_NAME),
        gender: modal_value(modal, input::ID_GENDER),
        domicile: modal_value(modal, input::ID_DOMICILE),
        hobby: modal_value(modal, input::ID_HOBBY),
        status_theme: modal_value(modal, input::ID_STATUS),
    };
    let user_id = modal.user.id.get();
    let fallback_name = modal
        .member
        .as_ref()
        .and_then(|member| member.nick.clone())
        .unwrap_or_else(|| modal.user.display_name().to_string());

    let card = IdCardService::new(&handler.db)
        .submit(user_id, &fallback_name, &submission)
        .await?;
    let sorted = SortingService::new(
        &handler.db,
        &handler.sorting_lock,
        handler.config.sorting_bag_size,
    )
    .get(user_id)
    .await?;

    modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed::id_card(
                        &card,
                        sorted.map(|s| s.house),
                        &modal.user.face(),
                    ))
                    .components(vec![component::id_card_row()]),
            ),
        )
        .await?;

    Ok(())
}
