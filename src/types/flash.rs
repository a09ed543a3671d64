use serde::Serialize;
use std::fmt;

/// Styling class of a flash notification, rendered as the alert class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashCategory::Success => write!(f, "success"),
            FlashCategory::Danger => write!(f, "danger")
        }
    }
}

impl FlashCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashCategory::Success),
            "danger" => Some(FlashCategory::Danger),
            _ => None,
        }
    }
}

/// One-shot message shown on the page rendered after a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash { category: FlashCategory::Success, message: message.into() }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Flash { category: FlashCategory::Danger, message: message.into() }
    }
}
