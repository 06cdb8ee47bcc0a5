//! Error types and user-facing error handling.
//!
//! `AppError` is the top-level error type wrapping domain-specific errors. Bot event handlers
//! never propagate errors back into serenity; instead they log the error and, for
//! interactions, reply with the message returned by [`AppError::user_message`].

pub mod config;
pub mod sorting;

use thiserror::Error;

use crate::error::{config::ConfigError, sorting::SortingError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Fair sorting allocator error.
    #[error(transparent)]
    SortingErr(#[from] SortingError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error, message is shown to the user.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, message is shown to the user.
    #[error("{0}")]
    BadRequest(String),
}

/// Boxes the error to keep `AppError` small, as serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message safe to show to the Discord user who triggered the failing interaction.
    ///
    /// `NotFound` and `BadRequest` carry user-facing text. Every other variant is logged
    /// at error level and replaced with a generic message to avoid leaking internals.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                "⚠️ ada error di bot, coba lagi ya.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_passes_through_bad_request() {
        let err = AppError::BadRequest("Form kosong".to_string());
        assert_eq!(err.user_message(), "Form kosong");
    }

    #[test]
    fn user_message_hides_internal_details() {
        let err: AppError = sea_orm::DbErr::Custom("secret detail".to_string()).into();
        assert!(!err.user_message().contains("secret"));

        let err: AppError = SortingError::InvalidConfiguration(0).into();
        assert!(!err.user_message().contains("bag size"));
    }
}
