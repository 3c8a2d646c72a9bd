//! Player profile file
//!
//! Small JSON document holding the chosen player name, so it survives
//! between runs the way the round's high scores do.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mm_core::PlayerIdentity;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Profile {
    name: Option<String>,
}

pub struct FilePlayerIdentity {
    path: PathBuf,
    profile: Profile,
}

impl FilePlayerIdentity {
    /// Load the profile at `path`; a missing or unreadable file starts a
    /// fresh profile.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let profile = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("reading profile {}", path.display()))?;
            serde_json::from_str(&data).unwrap_or_default()
        } else {
            Profile::default()
        };
        Ok(Self { path, profile })
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(&self.profile)?;
        fs::write(&self.path, data)
            .with_context(|| format!("writing profile {}", self.path.display()))?;
        Ok(())
    }
}

impl PlayerIdentity for FilePlayerIdentity {
    fn name(&self) -> Option<String> {
        self.profile.name.clone()
    }

    fn set_name(&mut self, name: String) {
        self.profile.name = Some(name);
    }
}
