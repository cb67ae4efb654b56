//! Request to update the caller's profile.

use serde::{Deserialize, Serialize};

use crate::request::{
    ports::validator::{ProfilePolicy, Validatable, ValidationConfig},
    validation::rules::{Format, RuleSet, TextConstraint},
};

/// Updates profile fields.
///
/// Under [`ProfilePolicy::PartialUpdate`] an absent or blank field means
/// "leave unchanged"; under [`ProfilePolicy::RequireUsername`] the username
/// must always be supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInfoRequest {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Link to the avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Free-text biography.
    #[serde(
        default,
        rename = "boi",
        alias = "bio",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<String>,
}

impl UpdateUserInfoRequest {
    /// Request kind name.
    pub const KIND: &'static str = "updateUserInfo";
    /// Wire name of the username field.
    pub const USERNAME: &'static str = "username";
    /// Wire name of the avatar URL field.
    pub const AVATAR_URL: &'static str = "avatarUrl";
    /// Wire name of the biography field.
    pub const BIO: &'static str = "boi";

    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the biography.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }
}

impl Validatable for UpdateUserInfoRequest {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn rules(&self, config: &ValidationConfig) -> RuleSet<'_> {
        let username_length =
            TextConstraint::length(config.min_username_length, config.max_username_length);
        let username = match config.profile_policy {
            ProfilePolicy::PartialUpdate => vec![username_length],
            ProfilePolicy::RequireUsername => vec![TextConstraint::Required, username_length],
        };

        RuleSet::new()
            .text(Self::USERNAME, self.username.as_deref(), username)
            .text(
                Self::AVATAR_URL,
                self.avatar_url.as_deref(),
                [
                    TextConstraint::max_length(config.max_avatar_url_length),
                    TextConstraint::Format(Format::HttpUrl),
                ],
            )
            .text(
                Self::BIO,
                self.bio.as_deref(),
                [TextConstraint::max_length(config.max_bio_length)],
            )
    }
}
