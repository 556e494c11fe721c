//! Recommendation request.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::same_occasion;
use crate::error::StylistError;

/// Preference text echoed back when the user gave none.
pub const DEFAULT_PREFERENCES: &str = "elegant and traditional";

/// A single recommendation query.
///
/// # Examples
///
/// ```
/// use stylist_core::Request;
///
/// let req = Request::new("wedding", 8000)
///     .unwrap()
///     .with_preferences("Embroidered, gold & burgundy");
/// assert_eq!(req.keywords(), vec!["embroidered", "gold", "burgundy"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Occasion label, e.g. `"wedding"`. Surrounding whitespace is
    /// stripped on construction and deserialization.
    #[serde(deserialize_with = "trimmed")]
    pub occasion: String,

    /// Free-text style preferences.
    #[serde(default)]
    pub preferences: Option<String>,

    /// Ceiling on `outfit.price + jewelry.price`.
    pub budget: u64,
}

impl Request {
    /// Creates a validated request without preferences.
    pub fn new(occasion: impl Into<String>, budget: u64) -> Result<Self, StylistError> {
        let occasion: String = occasion.into();
        let req = Self {
            occasion: occasion.trim().to_string(),
            preferences: None,
            budget,
        };
        req.validate()?;
        Ok(req)
    }

    /// Sets the preference text.
    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = Some(preferences.into());
        self
    }

    /// Checks the request preconditions.
    ///
    /// Requests built through deserialization bypass [`Request::new`],
    /// so the orchestrator calls this again before computing.
    pub fn validate(&self) -> Result<(), StylistError> {
        if self.occasion.trim().is_empty() {
            return Err(StylistError::InvalidRequest("occasion must not be empty".into()));
        }
        if self.budget == 0 {
            return Err(StylistError::InvalidRequest("budget must be positive".into()));
        }
        Ok(())
    }

    /// Lowercase preference keywords longer than two characters.
    ///
    /// Tokens are split on anything that is not alphanumeric and
    /// de-duplicated, keeping first-seen order.
    pub fn keywords(&self) -> Vec<String> {
        let Some(text) = self.preferences.as_deref() else {
            return Vec::new();
        };
        let mut out: Vec<String> = Vec::new();
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .map(str::to_lowercase)
            .filter(|t| t.chars().count() > 2)
        {
            if !out.contains(&token) {
                out.push(token);
            }
        }
        out
    }

    /// The preference text, or [`DEFAULT_PREFERENCES`] when blank.
    pub fn preferences_or_default(&self) -> &str {
        match self.preferences.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PREFERENCES,
        }
    }

    /// Returns `true` if the occasion equals `label`, ignoring ASCII case.
    pub fn is_occasion(&self, label: &str) -> bool {
        same_occasion(&self.occasion, label)
    }
}

fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}
