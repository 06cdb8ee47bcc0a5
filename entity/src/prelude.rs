pub use super::afk_user::Entity as AfkUser;
pub use super::id_card::Entity as IdCard;
pub use super::kv_entry::Entity as KvEntry;
pub use super::menfess_anon::Entity as MenfessAnon;
pub use super::menfess_post::Entity as MenfessPost;
pub use super::sorting_user::Entity as SortingUser;
