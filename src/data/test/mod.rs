mod afk;
mod id_card;
mod kv;
mod menfess;
mod sorting_user;
