use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stylistic hint forwarded to the generation service. Never interpreted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    #[serde(rename = "")]
    None,
    Professional,
    Casual,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::None,
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
    ];

    pub fn as_wire(self) -> &'static str {
        match self {
            Tone::None => "",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::None => "None",
            Tone::Professional => "Professional 💼",
            Tone::Casual => "Casual 😎",
            Tone::Friendly => "Friendly 😊",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::None => f.write_str("none"),
            other => f.write_str(other.as_wire()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tone '{0}' (expected none, professional, casual or friendly)")]
pub struct ToneParseError(pub String);

impl FromStr for Tone {
    type Err = ToneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Tone::None),
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "friendly" => Ok(Tone::Friendly),
            _ => Err(ToneParseError(s.to_string())),
        }
    }
}
