use serde::{Deserialize, Serialize};

pub const BASE_DELAY_MS: u64 = 1000;

/// Playback tunables. The two policy flags cover behaviors the product
/// left open: whether manual stepping pauses auto-play, and whether the
/// winning line is revealed before the final position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackOptions {
    pub base_delay_ms: u64,
    pub step_pauses_playback: bool,
    pub line_only_at_end: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            base_delay_ms: BASE_DELAY_MS,
            step_pauses_playback: true,
            line_only_at_end: true,
        }
    }
}

impl PlaybackOptions {
    pub fn validate(&self) -> Result<(), String> {
        if self.base_delay_ms == 0 {
            return Err("base_delay_ms must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let options: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to parse playback options: {}", e))?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize playback options: {}", e))
    }
}
