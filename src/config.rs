use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_MESSAGE_CACHE_SIZE: usize = 500;

/// Process-wide configuration, read once at startup and passed by reference.
pub struct Config {
    pub bot_token: String,

    /// Channel that receives every audit record.
    ///
    /// `None` when `LOG_CHANNEL_ID` is unset or not a valid snowflake; each
    /// event then surfaces as an unresolved destination instead of failing
    /// startup.
    pub log_channel_id: Option<ChannelId>,

    /// Capacity of the relay's message tracker, shared across all channels.
    /// Edits and deletions of messages older than the last `message_cache_size`
    /// tracked ones are logged without their original content.
    pub message_cache_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_vars(|key| std::env::var(key).ok())?)
    }

    fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = var("BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?;

        let log_channel_id = var("LOG_CHANNEL_ID").and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(id) if id != 0 => Some(ChannelId::new(id)),
                _ => {
                    tracing::warn!(
                        "LOG_CHANNEL_ID '{}' is not a valid channel id, audit records will not be delivered",
                        raw
                    );
                    None
                }
            }
        });

        let message_cache_size = match var("MESSAGE_CACHE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "MESSAGE_CACHE_SIZE".to_string(),
                    value: raw.clone(),
                })?,
            None => DEFAULT_MESSAGE_CACHE_SIZE,
        };

        Ok(Self {
            bot_token,
            log_channel_id,
            message_cache_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let result = Config::from_vars(vars(&[("LOG_CHANNEL_ID", "123")]));

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))
        );
    }

    #[test]
    fn test_blank_token_is_treated_as_missing() {
        let result = Config::from_vars(vars(&[("BOT_TOKEN", "   ")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_reads_token_and_channel() {
        let config = Config::from_vars(vars(&[
            ("BOT_TOKEN", "secret"),
            ("LOG_CHANNEL_ID", "987654321"),
        ]))
        .unwrap();

        assert_eq!(config.bot_token, "secret");
        assert_eq!(config.log_channel_id, Some(ChannelId::new(987654321)));
        assert_eq!(config.message_cache_size, DEFAULT_MESSAGE_CACHE_SIZE);
    }

    #[test]
    fn test_missing_channel_is_not_fatal() {
        let config = Config::from_vars(vars(&[("BOT_TOKEN", "secret")])).unwrap();

        assert_eq!(config.log_channel_id, None);
    }

    #[test]
    fn test_unparsable_channel_becomes_unresolved() {
        let config = Config::from_vars(vars(&[
            ("BOT_TOKEN", "secret"),
            ("LOG_CHANNEL_ID", "not-a-snowflake"),
        ]))
        .unwrap();

        assert_eq!(config.log_channel_id, None);
    }

    #[test]
    fn test_zero_channel_becomes_unresolved() {
        let config = Config::from_vars(vars(&[
            ("BOT_TOKEN", "secret"),
            ("LOG_CHANNEL_ID", "0"),
        ]))
        .unwrap();

        assert_eq!(config.log_channel_id, None);
    }

    #[test]
    fn test_message_cache_size_override() {
        let config = Config::from_vars(vars(&[
            ("BOT_TOKEN", "secret"),
            ("MESSAGE_CACHE_SIZE", "50"),
        ]))
        .unwrap();

        assert_eq!(config.message_cache_size, 50);
    }

    #[test]
    fn test_invalid_message_cache_size() {
        let result = Config::from_vars(vars(&[
            ("BOT_TOKEN", "secret"),
            ("MESSAGE_CACHE_SIZE", "lots"),
        ]));

        assert_eq!(
            result.err(),
            Some(ConfigError::InvalidEnvVar {
                name: "MESSAGE_CACHE_SIZE".to_string(),
                value: "lots".to_string(),
            })
        );
    }
}
