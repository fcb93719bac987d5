use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency prices are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayCurrency {
    /// Indian rupee. Foreign quotes are converted into it.
    #[default]
    Inr,
    /// US dollar. Quotes are shown as received.
    Usd,
}

impl DisplayCurrency {
    /// Parse from an ISO code or symbol.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "INR" | "₹" | "RUPEE" => Some(Self::Inr),
            "USD" | "$" | "DOLLAR" => Some(Self::Usd),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
        }
    }
}

impl fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
