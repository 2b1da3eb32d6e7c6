use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems found before any encoding starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("clips directory not found: {}", .0.display())]
    ClipsDirNotFound(PathBuf),

    #[error("mandatory clip not found: {0}")]
    MandatoryClipMissing(String),

    #[error("not enough clips to form combinations with {name}: found {found}, need 2")]
    NotEnoughClipsForMandatory { name: String, found: usize },

    #[error("not enough clips to form combinations: found {found}, need 3")]
    NotEnoughClips { found: usize },
}

impl ConfigError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::ClipsDirNotFound(_) => 2,
            ConfigError::MandatoryClipMissing(_) => 3,
            ConfigError::NotEnoughClipsForMandatory { .. } => 4,
            ConfigError::NotEnoughClips { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;
    use std::collections::HashSet;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            ConfigError::ClipsDirNotFound(PathBuf::from("clips")),
            ConfigError::MandatoryClipMissing("M.mov".to_string()),
            ConfigError::NotEnoughClipsForMandatory {
                name: "M.mov".to_string(),
                found: 1,
            },
            ConfigError::NotEnoughClips { found: 2 },
        ];
        let codes = errors.iter().map(|e| e.exit_code()).collect::<HashSet<_>>();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
        assert!(!codes.contains(&1));
    }

    #[test]
    fn test_message() {
        let e = ConfigError::NotEnoughClips { found: 2 };
        assert_eq!(
            e.to_string(),
            "not enough clips to form combinations: found 2, need 3"
        );
    }
}
