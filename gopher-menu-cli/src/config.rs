use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

/// Optional defaults read from `~/.gopher-menu.toml`. Command-line flags
/// take precedence over anything set here.
#[derive(Debug, Deserialize, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub selector: Option<String>,
}

impl CliConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(content) = std::fs::read_to_string(&path) {
                match toml::from_str::<CliConfig>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Failed to parse config");
                    }
                }
            }
        }
        Self::default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let home = match std::env::var("HOME") {
            Ok(h) => PathBuf::from(h),
            Err(_) => return Vec::new(),
        };

        vec![home.join(".gopher-menu.toml")]
    }
}
