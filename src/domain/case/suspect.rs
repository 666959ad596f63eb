//! Suspect entity - an interrogable character within a case.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SuspectId;

/// A keyword-triggered canned answer used by the offline resolver.
///
/// Entries are matched in list order against the player's normalized
/// query; the first entry with any matching keyword wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineResponse {
    keywords: Vec<String>,
    response: String,
}

impl OfflineResponse {
    /// Creates an offline response entry.
    pub fn new<I, S>(keywords: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }

    /// Returns the trigger keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the canned answer.
    pub fn response(&self) -> &str {
        &self.response
    }
}

/// An interrogable character with a public description and a private secret.
///
/// Suspects are part of the case value and share its lifetime. The
/// `secret` guides the language model's role-play and is never shown
/// to the player directly.
///
/// `image_url` and `offline_responses` are optional: generated cases
/// usually omit them, authored offline cases carry them. Consumers
/// must degrade gracefully when they are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suspect {
    id: SuspectId,
    name: String,
    role: String,
    description: String,
    avatar_style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    secret: String,
    personality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    offline_responses: Option<Vec<OfflineResponse>>,
}

impl Suspect {
    /// Creates a suspect with the required fields.
    pub fn new(
        id: SuspectId,
        name: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
        avatar_style: impl Into<String>,
        secret: impl Into<String>,
        personality: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            description: description.into(),
            avatar_style: avatar_style.into(),
            image_url: None,
            secret: secret.into(),
            personality: personality.into(),
            offline_responses: None,
        }
    }

    /// Sets the portrait URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Sets the keyword-triggered offline answers.
    pub fn with_offline_responses(mut self, responses: Vec<OfflineResponse>) -> Self {
        self.offline_responses = Some(responses);
        self
    }

    pub fn id(&self) -> &SuspectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn avatar_style(&self) -> &str {
        &self.avatar_style
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn personality(&self) -> &str {
        &self.personality
    }

    pub fn offline_responses(&self) -> Option<&[OfflineResponse]> {
        self.offline_responses.as_deref()
    }
}
