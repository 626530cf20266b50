/// Backend address used when neither `--server` nor the config file sets one
pub(crate) const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Environment variable carrying the runtime path prefix
pub(crate) const PATH_PREFIX_ENV: &str = "RUNBOARD_PATH_PREFIX";
