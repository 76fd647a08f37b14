use std::{
    collections::BTreeMap,
    fmt::Debug,
    fs, io,
    path::{Path, PathBuf},
};

use serde_derive::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::Error;

/// Default location of the registry document, relative to the working
/// directory.
pub const REGISTRY_FILE: &str = "dll_switcher.json";

/// Persisted mapping from variant name to DLL path, plus the game root it
/// was last validated against. An empty path means the name is registered
/// but its file has not been located yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub root: PathBuf,
    pub dll_names: BTreeMap<String, PathBuf>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            root: crate::install::default_root(),
            dll_names: BTreeMap::new(),
        }
    }
}

impl Registry {
    /// Loads the registry document. The store is advisory, so any failure
    /// (missing file, broken JSON, missing top-level field) falls back to a
    /// fresh registry instead of erroring.
    #[instrument]
    pub fn load(path: impl AsRef<Path> + Debug) -> Self {
        match Self::try_load(path.as_ref()) {
            Ok(registry) => {
                debug!(entries = registry.dll_names.len(), "Registry loaded");
                registry
            }
            Err(err) => {
                warn!(%err, "Registry unreadable, starting fresh");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> io::Result<Self> {
        let filebuf = fs::read(path)?;
        serde_json::from_slice(&filebuf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Serializes the whole registry back to `path`, replacing whatever is
    /// there.
    #[instrument(skip(self))]
    pub fn save(&self, path: impl AsRef<Path> + Debug) -> crate::Result<()> {
        let filebuf = serde_json::to_vec(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path.as_ref(), filebuf)?;
        Ok(())
    }

    /// Registers `name` with no file attached. Existing entries are left
    /// alone, empty names are ignored.
    pub fn add_name(&mut self, name: &str) {
        if name.is_empty() || self.dll_names.contains_key(name) {
            return;
        }
        self.dll_names.insert(name.to_owned(), PathBuf::new());
    }

    /// Returns the registered path for `name`, or `None` when the name is
    /// unknown or its file has not been located yet.
    pub fn get_path(&self, name: &str) -> Option<&Path> {
        self.dll_names
            .get(name)
            .map(PathBuf::as_path)
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Attaches a file to `name`. The live assembly itself can never be
    /// registered as a variant source.
    #[instrument(skip(self))]
    pub fn set_path(
        &mut self,
        name: &str,
        path: PathBuf,
        live_target: &Path,
    ) -> crate::Result<()> {
        if path == live_target {
            return Err(Error::InvalidPath);
        }
        self.dll_names.insert(name.to_owned(), path);
        Ok(())
    }
}
