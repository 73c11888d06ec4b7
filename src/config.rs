use crate::error::QuizError;
use crate::level::Level;
use crate::operation::Operation;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Optional defaults for a game. Anything left unset is asked interactively.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub operation: Option<Operation>,
    pub level: Option<Level>,
    pub num_questions: Option<u32>,
    pub seed: Option<u64>,
    pub skip_confirm: bool,
}

impl Config {
    /// Values from `other` win where set.
    pub fn merged_with(self, other: Config) -> Config {
        Config {
            operation: other.operation.or(self.operation),
            level: other.level.or(self.level),
            num_questions: other.num_questions.or(self.num_questions),
            seed: other.seed.or(self.seed),
            skip_confirm: self.skip_confirm || other.skip_confirm,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Result<Config, QuizError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "playmind") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("playmind_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    fn load(&self) -> Result<Config, QuizError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|e| QuizError::Config {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}
