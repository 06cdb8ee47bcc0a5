//! Domain models shared by the service, data and bot layers.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary so
//! services and bot handlers never depend on table layouts.

pub mod afk;
pub mod house;
pub mod id_card;
pub mod menfess;
pub mod registry;
pub mod self_role;
pub mod sorting;
