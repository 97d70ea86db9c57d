use std::collections::HashMap;
use std::path::Path;

use crate::core::projects::ConfigSource;

/// Reads configuration from the process environment, falling back to values
/// from a `.env` file. Process variables win, the same precedence
/// `dotenv::dotenv()` gives when it loads a file into the environment.
pub struct EnvConfigSource {
    file_values: HashMap<String, String>,
}

impl EnvConfigSource {
    /// Load `filename`, looked up in the current directory and then each
    /// parent in turn, as `dotenv::dotenv()` does. A missing file is not an
    /// error; unparsable lines are logged and skipped.
    pub fn load(filename: impl AsRef<Path>) -> Self {
        let path = filename.as_ref();
        let mut file_values = HashMap::new();

        match dotenv::from_filename_iter(path) {
            Ok(iter) => {
                for item in iter {
                    match item {
                        Ok((key, value)) => {
                            file_values.insert(key, value);
                        }
                        Err(e) => {
                            tracing::warn!("Skipping bad line in {}: {}", path.display(), e)
                        }
                    }
                }
                tracing::debug!("Loaded {} values from {}", file_values.len(), path.display());
            }
            Err(e) if e.not_found() => {
                tracing::debug!("No env file at {}", path.display());
            }
            Err(e) => tracing::warn!("Failed to read {}: {}", path.display(), e),
        }

        Self { file_values }
    }
}

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.file_values.get(key).cloned())
    }
}
