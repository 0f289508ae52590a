use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the lesson surfaces (parsing, config, jobs).
///
/// The visitor mechanism itself never fails at runtime.
#[derive(Error, Debug)]
pub enum SolidError {
    #[error("unknown animal '{0}' (expected one of: cat, dog)")]
    UnknownAnimal(String),

    #[error("failed to read tour config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid tour config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("nothing to staple: the job has no sheets")]
    NothingToStaple,
}

impl SolidError {
    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SolidError::UnknownAnimal("fox".to_string());
        assert_eq!(
            err.to_string(),
            "unknown animal 'fox' (expected one of: cat, dog)"
        );

        let err = SolidError::config_read(
            "missing.toml",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.toml"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_toml_error_converts() {
        let parse: Result<toml::Value, _> = toml::from_str("animals = [");
        let err: SolidError = parse.unwrap_err().into();
        assert!(matches!(err, SolidError::ConfigParse(_)));
    }
}
