//! Embed builders.
//!
//! Identity and house cards are presented as embed fields with the member's avatar as
//! thumbnail.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    bot::builder::{BRAND_NAME, EMBED_COLOR, ID_CARD_TITLE},
    model::{
        house::House,
        id_card::IdCard,
        menfess::MenfessSubmission,
        registry::RegistryPage,
        sorting::SortedUser,
    },
    util::text::safe_text,
};

/// Discord timestamp markup, e.g. `<t:1767225600:F>`.
pub fn discord_time(at: DateTime<Utc>, style: char) -> String {
    format!("<t:{}:{}>", at.timestamp(), style)
}

pub fn sorting_panel() -> CreateEmbed {
    let description = [
        "**When the veil thins, destiny answers.**",
        "",
        "Dengan menyentuh segel di bawah, kau akan memasuki **Ritual Pemilahan Arcana**.",
        "",
        "✧ Arcana akan membaca gema jiwamu dan menetapkan satu jalan:",
        "✨ **Light Arcana**: cahaya, tatanan, dan penjaga keseimbangan kerajaan",
        "🌙 **Dark Arcana**: bayangan, kehendak bebas, dan kekuatan tersembunyi",
        "",
        "📜 **Prasyarat Ritual**",
        "Hanya mereka yang telah memiliki **Valerie ID Card** (dengan mantra **/idcard**)",
        "yang diizinkan memasuki lingkaran ini.",
        "",
        "🔒 **Segel Takdir**",
        "Ritual ini hanya dapat dijalankan **satu kali**. Setelah arcana memilih,",
        "hasilnya akan terkunci selamanya. Peran lain yang kau miliki tetap utuh.",
    ]
    .join("\n");

    CreateEmbed::new()
        .title("🧙 Arcane Sorting: House of Valerie")
        .colour(EMBED_COLOR)
        .description(description)
}

/// House card for a sorted member.
///
/// # Arguments
/// - `title` - Embed title, differs between the public result post and `/myhouse`
/// - `sorted` - The member's sorting result
/// - `card` - The member's ID card, for name and card number
/// - `avatar_url` - Member avatar shown as thumbnail
pub fn house_card(
    title: &str,
    sorted: &SortedUser,
    card: Option<&IdCard>,
    avatar_url: &str,
) -> CreateEmbed {
    let dash = "—".to_string();

    CreateEmbed::new()
        .title(title)
        .colour(EMBED_COLOR)
        .description(format!(
            "**Member:** <@{}>\n**Arcana:** {}",
            sorted.user_id,
            sorted.house.display_name()
        ))
        .field("Nama", card.map(|c| c.name.clone()).unwrap_or(dash.clone()), true)
        .field("Gender", card.map(|c| c.gender.clone()).unwrap_or(dash.clone()), true)
        .field("HOV ID", card.map(|c| c.number.clone()).unwrap_or(dash), false)
        .field("Sejak", discord_time(sorted.sorted_at, 'F'), false)
        .thumbnail(avatar_url)
        .footer(CreateEmbedFooter::new("House of Valerie • Arcane Registry"))
        .timestamp(Timestamp::now())
}

pub fn id_card_panel() -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🪪 {}", ID_CARD_TITLE))
        .colour(EMBED_COLOR)
        .description(format!(
            "Klik tombol untuk membuat / update **{}** kamu.",
            ID_CARD_TITLE
        ))
        .footer(CreateEmbedFooter::new(
            "Theme: isi Status pakai `| dark` atau `| light` (contoh: single | dark)",
        ))
}

/// A member's identity card.
pub fn id_card(card: &IdCard, house: Option<House>, avatar_url: &str) -> CreateEmbed {
    let arcana = house
        .map(|h| h.display_name().to_string())
        .unwrap_or_else(|| "Belum disortir".to_string());

    CreateEmbed::new()
        .title(format!("🪪 {}", ID_CARD_TITLE))
        .colour(card.theme.color())
        .description(format!(
            "<@{}>, berikut **{}** kamu:",
            card.user_id, ID_CARD_TITLE
        ))
        .field("No.", format!("`{}`", card.number), false)
        .field("Nama", &card.name, true)
        .field("Gender", &card.gender, true)
        .field("Domisili", &card.domicile, true)
        .field("Hobi", &card.hobby, true)
        .field("Status", &card.status, true)
        .field("Arcana", arcana, true)
        .field("Terdaftar", discord_time(card.created_at, 'D'), false)
        .thumbnail(avatar_url)
        .timestamp(Timestamp::now())
}

/// Registry listing page.
///
/// # Arguments
/// - `page` - The page to show
/// - `in_guild` - Whether a user is still a member; others are marked as left
pub fn registry(page: &RegistryPage, in_guild: impl Fn(u64) -> bool) -> CreateEmbed {
    let description = if page.entries.is_empty() {
        "Belum ada warga yang terdaftar ID Card.".to_string()
    } else {
        page.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let left = if in_guild(entry.user_id) { "" } else { " *(left)*" };
                format!(
                    "**{}.** <@{}> • **{}** • {}{}",
                    page.first_position() + i,
                    entry.user_id,
                    safe_text(&entry.name, 24),
                    discord_time(entry.created_at, 'D'),
                    left
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title("🗂️ HOV Registry: Warga Terdaftar")
        .colour(EMBED_COLOR)
        .description(description)
        .footer(CreateEmbedFooter::new(format!(
            "Page {} / {} • Total: {}",
            page.index + 1,
            page.total_pages,
            page.total_entries
        )))
        .timestamp(Timestamp::now())
}

pub fn menfess_panel() -> CreateEmbed {
    CreateEmbed::new()
        .title("🕯️ MENFESS")
        .colour(EMBED_COLOR)
        .description("Klik tombol untuk kirim menfess **anonim**.\nBalasan juga bisa anonim.")
        .footer(CreateEmbedFooter::new(
            "No doxxing / hate / threat. Keep it safe.",
        ))
}

pub fn menfess_post(id: i32, submission: &MenfessSubmission) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🕯️ MENFESS #{}", id))
        .colour(EMBED_COLOR)
        .description(format!(
            "**untuk:** {}\n\n{}\n\n— **{}**",
            submission.to, submission.content, submission.sender_label
        ))
        .footer(CreateEmbedFooter::new(format!("Posted by {}", BRAND_NAME)))
        .timestamp(Timestamp::now())
}

pub fn menfess_reply(id: i32, reply: &str, anon_label: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("🫣 Balasan Anonim")
        .colour(EMBED_COLOR)
        .description(format!("{}\n\n— **{}**", reply.trim(), anon_label))
        .footer(CreateEmbedFooter::new(format!("Reply to menfess #{}", id)))
        .timestamp(Timestamp::now())
}

pub fn self_role_panel(category: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🎭 Self Roles: {}", category))
        .colour(EMBED_COLOR)
        .description("Pilih role di menu bawah. Kosongkan pilihan untuk melepas semua role kategori ini.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_discord_time() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(discord_time(at, 'F'), "<t:1767225600:F>");
    }
}
