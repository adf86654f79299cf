pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const BINARY_NAME: &str = env!("CARGO_BIN_NAME");
pub use places_core::config::{API_KEY_ENV, BASE_URL_ENV};
