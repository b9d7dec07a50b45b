//! Advisory messages and outcome classification
//!
//! Every calculator turns its numbers into a short list of advisories
//! (a titled message with a tone) and a single summary classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Something is wrong and needs action
    Danger,
    /// Attainable but worth attention
    Warning,
    /// Good news
    Success,
    /// Neutral information
    Info,
}

impl Tone {
    /// Single-character marker used in plain-text output
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Danger => "x",
            Self::Warning => "!",
            Self::Success => "+",
            Self::Info => "i",
        }
    }

    /// Lowercase name, as used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    /// Inverse of [`as_str`](Self::as_str)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "danger" => Some(Self::Danger),
            "warning" => Some(Self::Warning),
            "success" => Some(Self::Success),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled recommendation shown alongside calculator results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub tone: Tone,
    pub title: String,
    pub text: String,
}

impl Advisory {
    pub fn new(tone: Tone, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn danger(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Danger, title, text)
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, title, text)
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Success, title, text)
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Info, title, text)
    }
}

/// Summary outcome of a calculation
///
/// Exactly one applies to any successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Deficit,
    Tight,
    Healthy,
    Excellent,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deficit => "deficit",
            Self::Tight => "tight",
            Self::Healthy => "healthy",
            Self::Excellent => "excellent",
        }
    }

    /// Tone matching this outcome
    pub fn tone(&self) -> Tone {
        match self {
            Self::Deficit => Tone::Danger,
            Self::Tight => Tone::Warning,
            Self::Healthy | Self::Excellent => Tone::Success,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advisory_constructors() {
        let a = Advisory::warning("High fixed expenses", "60.0% of income");
        assert_eq!(a.tone, Tone::Warning);
        assert_eq!(a.title, "High fixed expenses");
    }

    #[test]
    fn test_tone_parse() {
        for tone in [Tone::Danger, Tone::Warning, Tone::Success, Tone::Info] {
            assert_eq!(Tone::parse(tone.as_str()), Some(tone));
        }
        assert_eq!(Tone::parse("loud"), None);
    }

    #[test]
    fn test_tone_serializes_lowercase() {
        let json = serde_json::to_string(&Tone::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
        assert_eq!(Tone::Info.to_string(), "info");
    }

    #[test]
    fn test_classification_tone() {
        assert_eq!(Classification::Deficit.tone(), Tone::Danger);
        assert_eq!(Classification::Excellent.to_string(), "excellent");
    }
}
