//! User configuration — scroller tuning and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/milestone-scroller/config.toml`
//! (default `~/.config/milestone-scroller/config.toml`).

use std::path::PathBuf;

use crate::core::geometry::DEFAULT_ROW_HEIGHT;

/// Accepted range for the idle quiet period, in milliseconds.
const IDLE_DELAY_RANGE_MS: (u64, u64) = (50, 5000);

// ───────────────────────────────────────── config ────────────

/// Persisted scroller settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollerConfig {
    /// Row field the milestone label is read from.
    pub text_property: String,
    /// Quiet period before the overlay hides.
    pub idle_delay_ms: u64,
    /// Row height assumed when no row can be measured.
    pub default_row_height: f64,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            text_property: "name".to_string(),
            idle_delay_ms: 400,
            default_row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl ScrollerConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => return Self::parse(&contents),
                Err(err) => {
                    tracing::debug!("config unreadable at {}: {err}", path.display());
                }
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Set the quiet period, kept within 50..=5000ms for predictable UX.
    pub fn set_idle_delay_ms(&mut self, ms: u64) {
        let (min, max) = IDLE_DELAY_RANGE_MS;
        self.idle_delay_ms = ms.clamp(min, max);
    }

    /// Parse the `key = value` format.  Unknown keys and malformed values
    /// are skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();

            match key.trim() {
                "text_property" => {
                    let field = value.trim_matches('"');
                    if !field.is_empty() {
                        config.text_property = field.to_string();
                    }
                }
                "idle_delay_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.set_idle_delay_ms(v);
                    }
                }
                "default_row_height" => {
                    if let Ok(v) = value.parse::<f64>() {
                        if v.is_finite() {
                            config.default_row_height = v.clamp(1.0, 500.0);
                        }
                    }
                }
                _ => {}
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let lines = [
            "# milestone-scroller configuration".to_string(),
            String::new(),
            format!("text_property = \"{}\"", self.text_property),
            format!("idle_delay_ms = {}", self.idle_delay_ms),
            format!("default_row_height = {}", self.default_row_height),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/milestone-scroller/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("milestone-scroller").join("config.toml")
}
