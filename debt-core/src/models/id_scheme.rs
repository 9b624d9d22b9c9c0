use std::fmt;

use serde::{Deserialize, Serialize};

/// Which identity document an identifier is read as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// Personal document number (DPI).
    #[default]
    Primary,
    /// Tax identification number (NIT).
    Secondary,
}

impl IdScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Document label printed next to the identifier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Primary => "DPI",
            Self::Secondary => "NIT",
        }
    }

    /// Accepts the scheme names and the document labels, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "dpi" => Some(Self::Primary),
            "secondary" | "nit" => Some(Self::Secondary),
            _ => None,
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
