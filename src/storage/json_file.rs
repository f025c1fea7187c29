//! JSON file session store
//!
//! Players are stored as a JSON array of `{"identifier", "score"}` records.
//! Saves go to a sibling `.tmp` file which is then renamed over the target.

use crate::error::Result;
use crate::storage::SessionStore;
use crate::types::Player;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Session store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Vec<Player> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "Failed to read session file {}: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Player>>(&contents) {
            Ok(players) => {
                debug!(
                    "Loaded {} players from {}",
                    players.len(),
                    self.path.display()
                );
                players
            }
            Err(e) => {
                warn!(
                    "Session file {} could not be decoded, starting empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, players: &[Player]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let encoded = serde_json::to_string_pretty(players)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, encoded)?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        debug!("Saved {} players to {}", players.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
