//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Repositories that take part in a sorting roll
//! are generic over the connection so they can run inside a `DatabaseTransaction`.

pub mod afk;
pub mod id_card;
pub mod kv;
pub mod menfess;
pub mod sorting_user;

#[cfg(test)]
mod test;
