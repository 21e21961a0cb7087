use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LoadError {
    Io(PathBuf, std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    UnsupportedFormat(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(path, e) => write!(f, "failed to read {}: {e}", path.display()),
            LoadError::Toml(e) => write!(f, "invalid TOML: {e}"),
            LoadError::Json(e) => write!(f, "invalid JSON: {e}"),
            LoadError::UnsupportedFormat(ext) => {
                write!(f, "unsupported profile format '{ext}' (expected .toml or .json)")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(_, e) => Some(e),
            LoadError::Toml(e) => Some(e),
            LoadError::Json(e) => Some(e),
            LoadError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        LoadError::Toml(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
