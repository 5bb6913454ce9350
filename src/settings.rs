//! Presentation settings
//!
//! Colors and font only; the rules of the game are fixed. On the web the
//! settings come from the canvas element's `data-settings` attribute.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fill behind everything
    pub background: String,
    /// Scores and the game-over message
    pub text_color: String,
    /// CSS font for text
    pub font: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: "BLACK".to_string(),
            text_color: "WHITE".to_string(),
            font: "45px Arial".to_string(),
        }
    }
}

impl Settings {
    /// Attribute on the canvas element holding settings JSON
    pub const ATTRIBUTE: &'static str = "data-settings";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings if present, falling back to defaults on bad input
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ATTRIBUTE);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
