//! Buttons, select menus and modals.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateInputText, CreateModal, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle, ReactionType,
};

use crate::{
    bot::{builder::ID_CARD_TITLE, custom_id::CustomId},
    model::{
        registry::RegistryPage,
        self_role::{SelfRoleOption, MAX_CATEGORY_OPTIONS},
    },
};

/// Modal input IDs.
pub mod input {
    pub const MENFESS_TO: &str = "to_initial";
    pub const MENFESS_ALIAS: &str = "alias";
    pub const MENFESS_MESSAGE: &str = "msg";
    pub const MENFESS_REPLY: &str = "reply_msg";
    pub const ID_NAME: &str = "name";
    pub const ID_GENDER: &str = "gender";
    pub const ID_DOMICILE: &str = "dom";
    pub const ID_HOBBY: &str = "hobi";
    pub const ID_STATUS: &str = "status";
}

fn emoji(value: &str) -> ReactionType {
    ReactionType::Unicode(value.to_string())
}

pub fn sorting_panel_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(CustomId::SortingRoll)
        .label("Mulai Ritual")
        .style(ButtonStyle::Primary)
        .emoji(emoji("🧙"))])
}

pub fn id_card_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(CustomId::IdCardOpen)
        .label("Buat / Update ID")
        .style(ButtonStyle::Primary)
        .emoji(emoji("🪪"))])
}

pub fn menfess_panel_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(CustomId::MenfessNew)
        .label("Kirim Menfess")
        .style(ButtonStyle::Success)
        .emoji(emoji("✉️"))])
}

pub fn menfess_post_row(id: i32) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(CustomId::MenfessNew)
            .label("Kirim Baru")
            .style(ButtonStyle::Success)
            .emoji(emoji("✉️")),
        CreateButton::new(CustomId::MenfessReply(id))
            .label("Balas Anonim")
            .style(ButtonStyle::Primary)
            .emoji(emoji("🫣")),
    ])
}

pub fn registry_row(page: &RegistryPage) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(CustomId::RegistryPrev(page.index))
            .label("Prev")
            .style(ButtonStyle::Secondary)
            .disabled(!page.has_prev()),
        CreateButton::new(CustomId::RegistryNext(page.index))
            .label("Next")
            .style(ButtonStyle::Secondary)
            .disabled(!page.has_next()),
    ])
}

/// Multi-select menu for one self-role category.
///
/// Allows an empty selection so members can drop every role of the category.
/// Shows the same options `SelfRoleService::diff` considers.
pub fn self_role_menu(category: &str, options: &[SelfRoleOption]) -> CreateActionRow {
    let options: Vec<CreateSelectMenuOption> = options
        .iter()
        .take(MAX_CATEGORY_OPTIONS)
        .map(|option| CreateSelectMenuOption::new(&option.label, &option.value))
        .collect();
    let max_values = options.len().max(1) as u8;

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            CustomId::SelfRoles(category.to_string()),
            CreateSelectMenuKind::String { options },
        )
        .placeholder(format!("Pilih role {}", category))
        .min_values(0)
        .max_values(max_values),
    )
}

fn text_input(
    style: InputTextStyle,
    label: &str,
    custom_id: &str,
    max_length: u16,
    required: bool,
) -> CreateActionRow {
    CreateActionRow::InputText(
        CreateInputText::new(style, label, custom_id)
            .max_length(max_length)
            .required(required),
    )
}

pub fn menfess_modal() -> CreateModal {
    CreateModal::new(CustomId::MenfessSubmit, "✉️ Menfess Anon").components(vec![
        text_input(
            InputTextStyle::Short,
            "Untuk (inisial / kata singkat)",
            input::MENFESS_TO,
            12,
            true,
        ),
        text_input(
            InputTextStyle::Short,
            "Nama (opsional)",
            input::MENFESS_ALIAS,
            24,
            false,
        ),
        text_input(
            InputTextStyle::Paragraph,
            "Isi menfess",
            input::MENFESS_MESSAGE,
            1500,
            true,
        ),
    ])
}

pub fn menfess_reply_modal(id: i32) -> CreateModal {
    CreateModal::new(
        CustomId::MenfessReplySubmit(id),
        format!("🫣 Balas Anonim #{}", id),
    )
    .components(vec![text_input(
        InputTextStyle::Paragraph,
        "Isi balasan",
        input::MENFESS_REPLY,
        1200,
        true,
    )])
}

pub fn id_card_modal() -> CreateModal {
    CreateModal::new(CustomId::IdCardSubmit, format!("🪪 {}", ID_CARD_TITLE)).components(vec![
        text_input(InputTextStyle::Short, "Nama", input::ID_NAME, 24, true),
        text_input(
            InputTextStyle::Short,
            "Gender (L / P / W / dll)",
            input::ID_GENDER,
            8,
            true,
        ),
        text_input(InputTextStyle::Short, "Domisili", input::ID_DOMICILE, 24, true),
        text_input(InputTextStyle::Short, "Hobi", input::ID_HOBBY, 30, true),
        text_input(
            InputTextStyle::Short,
            "Status + Theme (contoh: single | dark/light)",
            input::ID_STATUS,
            32,
            true,
        ),
    ])
}
