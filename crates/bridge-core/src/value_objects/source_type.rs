//! Source type - identifies which upstream system sent a webhook
//!
//! The set is closed: adding a source means adding a variant here and a
//! mapping for it, not runtime registration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Upstream systems the bridge accepts webhooks from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// GlitchTip / Sentry-compatible error tracker alerts
    Glitchtip,
    /// Botkube Kubernetes event notifications
    Botkube,
    /// DevGuard vulnerability scanner findings
    Devguard,
    /// GitHub repository webhooks
    Github,
    /// GitLab project hooks
    Gitlab,
    /// Internal documentation assignment events
    DocumentationAssignment,
}

impl SourceType {
    /// All known source types, in registration order
    pub const ALL: [SourceType; 6] = [
        Self::Glitchtip,
        Self::Botkube,
        Self::Devguard,
        Self::Github,
        Self::Gitlab,
        Self::DocumentationAssignment,
    ];

    /// The string identifier used in webhook paths
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Glitchtip => "glitchtip",
            Self::Botkube => "botkube",
            Self::Devguard => "devguard",
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::DocumentationAssignment => "documentationassignment",
        }
    }

    /// Parse from the path identifier (exact match, lowercase)
    pub fn parse(s: &str) -> Result<Self, SourceTypeParseError> {
        match s {
            "glitchtip" => Ok(Self::Glitchtip),
            "botkube" => Ok(Self::Botkube),
            "devguard" => Ok(Self::Devguard),
            "github" => Ok(Self::Github),
            "gitlab" => Ok(Self::Gitlab),
            "documentationassignment" => Ok(Self::DocumentationAssignment),
            other => Err(SourceTypeParseError(other.to_string())),
        }
    }
}

/// Error when parsing a SourceType from its string identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source type: {0}")]
pub struct SourceTypeParseError(pub String);

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = SourceTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceType::parse(s)
    }
}

// Serialize as the path identifier for JSON and log output
impl Serialize for SourceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SourceType::parse(&s).map_err(serde::de::Error::custom)
    }
}
