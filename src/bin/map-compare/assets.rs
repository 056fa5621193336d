//! Asset embedding and configuration loading.

use map_compare::CityConfig;
use rust_embed::RustEmbed;
use thiserror::Error;

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
/// In release mode, assets are compressed and embedded in the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Errors that can occur when loading the city configuration.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("cities.ron not found in embedded assets")]
    CitiesNotFound,
    #[error("invalid UTF-8 in cities.ron: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse cities.ron: {0}")]
    ParseError(#[from] ron::de::SpannedError),
}

/// Loads the panel configuration from embedded assets.
pub fn load_cities() -> Result<CityConfig, ConfigLoadError> {
    let file = Assets::get("cities.ron").ok_or(ConfigLoadError::CitiesNotFound)?;
    let ron_string = std::str::from_utf8(&file.data)?;
    Ok(ron::from_str(ron_string)?)
}
