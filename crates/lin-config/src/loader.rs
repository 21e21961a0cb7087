use std::fs;
use std::path::Path;

use lin_core::{InputProfile, Settings};

use crate::error::{LoadError, Result};

/// On-disk profile encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))
}

pub fn parse_profile_str(content: &str, format: Format) -> Result<InputProfile> {
    Ok(match format {
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    })
}

/// Load a profile from a `.toml` or `.json` file.
pub fn load_profile(path: &Path) -> Result<InputProfile> {
    let format = Format::from_path(path)?;
    let content = read(path)?;
    let profile = parse_profile_str(&content, format)?;
    tracing::debug!(
        "loaded profile from {} ({:?}, {} hobbies)",
        path.display(),
        format,
        profile.hobbies.len()
    );
    Ok(profile)
}

pub fn parse_settings_str(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Load engine settings from TOML. No path means defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let settings = parse_settings_str(&read(path)?)?;
    tracing::debug!("loaded settings from {}: {settings:?}", path.display());
    Ok(settings)
}
