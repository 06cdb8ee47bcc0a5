use std::num::NonZeroU64;

use crate::{
    error::{config::ConfigError, AppError},
    service::sorting::allocator::DEFAULT_BAG_SIZE,
};

const DEFAULT_MENFESS_COOLDOWN_SEC: u64 = 60;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Channel receiving welcome messages for new members.
    pub general_channel_id: Option<u64>,
    /// Channel receiving menfess posts and the menfess panel.
    pub menfess_channel_id: Option<u64>,
    /// Channel receiving the sorting panel; falls back to the invoking channel.
    pub sorting_channel_id: Option<u64>,
    /// Channel receiving house cards after a successful sorting roll.
    pub housecard_channel_id: Option<u64>,
    /// Channel members are pointed to when they lack an ID card.
    pub idcard_channel_id: Option<u64>,

    pub light_role_id: Option<u64>,
    pub dark_role_id: Option<u64>,

    pub menfess_cooldown_sec: u64,
    pub sorting_bag_size: usize,
    pub selfroles_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset, matching how `.env` files are usually
    /// filled in with placeholders.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            general_channel_id: parse_id(get("GENERAL_CHANNEL_ID"), "GENERAL_CHANNEL_ID")?,
            menfess_channel_id: parse_id(get("MENFESS_CHANNEL_ID"), "MENFESS_CHANNEL_ID")?,
            sorting_channel_id: parse_id(get("SORTING_CHANNEL_ID"), "SORTING_CHANNEL_ID")?,
            housecard_channel_id: parse_id(get("HOUSECARD_CHANNEL_ID"), "HOUSECARD_CHANNEL_ID")?,
            idcard_channel_id: parse_id(get("IDCARD_CHANNEL_ID"), "IDCARD_CHANNEL_ID")?,
            light_role_id: parse_id(get("LIGHT_ROLE_ID"), "LIGHT_ROLE_ID")?,
            dark_role_id: parse_id(get("DARK_ROLE_ID"), "DARK_ROLE_ID")?,
            menfess_cooldown_sec: parse_optional(
                get("MENFESS_COOLDOWN_SEC"),
                "MENFESS_COOLDOWN_SEC",
            )?
            .unwrap_or(DEFAULT_MENFESS_COOLDOWN_SEC),
            sorting_bag_size: parse_optional(get("SORTING_BAG_SIZE"), "SORTING_BAG_SIZE")?
                .unwrap_or(DEFAULT_BAG_SIZE),
            selfroles_path: get("SELFROLES_PATH"),
        })
    }
}

/// Discord IDs are snowflakes and never zero.
fn parse_id(value: Option<String>, name: &str) -> Result<Option<u64>, ConfigError> {
    Ok(parse_optional::<NonZeroU64>(value, name)?.map(NonZeroU64::get))
}

fn parse_optional<T: std::str::FromStr>(
    value: Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: v,
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    /// Expected: Ok with defaults for every optional setting
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://hov.db?mode=rwc"),
            ("DISCORD_BOT_TOKEN", "token"),
        ]))
        .unwrap();

        assert_eq!(config.menfess_cooldown_sec, 60);
        assert_eq!(config.sorting_bag_size, 20);
        assert!(config.light_role_id.is_none());
        assert!(config.selfroles_path.is_none());
    }

    /// Expected: Err(MissingEnvVar) naming the absent variable
    #[test]
    fn reports_missing_required_variable() {
        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")]));

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "DISCORD_BOT_TOKEN")
            }
            _ => panic!("expected missing DISCORD_BOT_TOKEN"),
        }
    }

    /// Expected: blank optional values count as unset
    #[test]
    fn treats_blank_values_as_unset() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DISCORD_BOT_TOKEN", "token"),
            ("LIGHT_ROLE_ID", "  "),
            ("DARK_ROLE_ID", "1452229004663849052"),
        ]))
        .unwrap();

        assert!(config.light_role_id.is_none());
        assert_eq!(config.dark_role_id, Some(1452229004663849052));
    }

    /// Expected: Err(InvalidEnvVar) for a zero channel ID
    #[test]
    fn rejects_zero_ids() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DISCORD_BOT_TOKEN", "token"),
            ("MENFESS_CHANNEL_ID", "0"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    /// Expected: Err(InvalidEnvVar) for a negative bag size
    #[test]
    fn rejects_unparsable_numbers() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DISCORD_BOT_TOKEN", "token"),
            ("SORTING_BAG_SIZE", "-4"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
