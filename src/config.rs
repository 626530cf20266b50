use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Settings read from `config.toml`. Command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Backend base URL, e.g. `https://ci.example.com`
    #[serde(default)]
    pub(crate) server: Option<String>,
    /// Deployment path prefix used when neither flag nor environment sets one
    #[serde(default)]
    pub(crate) path_prefix: Option<String>,
    /// Theme used until one is saved with `runboard theme`
    #[serde(default)]
    pub(crate) theme: Option<String>,
    /// Line printed beneath every table
    #[serde(default)]
    pub(crate) footer_text: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

impl Config {
    pub(crate) fn load(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            match Self::parse(&content) {
                Ok(config) => {
                    if !quiet {
                        eprintln!("Loaded config from {}", path.display());
                    }
                    return config;
                }
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // ~/.config/runboard/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("runboard").join("config.toml"));
        }

        // Platform config dir (differs from the above on macOS and Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("runboard").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // ~/.runboard.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".runboard.toml"));
        }

        paths
    }
}
