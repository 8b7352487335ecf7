use std::path::PathBuf;

pub const SERVER_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "client/dist";

/// Dataset filename inside the site root; the client fetches it under the
/// same name.
pub const DATA_FILE: &str = "data.csv";

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(SERVER_PORT)
}

pub fn site_root() -> PathBuf {
    std::env::var("SITE_ROOT")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT))
}
