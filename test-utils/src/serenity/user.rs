//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// Creates a User object by deserializing JSON, the same way Serenity builds
/// one from a gateway payload.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `discriminator` - Legacy discriminator, `None` for accounts on the new username system
/// - `bot` - Whether the account is a bot
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "alice", Some(1), false);
/// assert_eq!(user.tag(), "alice#0001");
///
/// let user = create_test_user(987654321, "bob", None, false);
/// assert_eq!(user.tag(), "bob");
/// ```
pub fn create_test_user(user_id: u64, name: &str, discriminator: Option<u16>, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": format!("{:04}", discriminator.unwrap_or(0)),
        "global_name": null,
        "avatar": null,
        "bot": bot,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
