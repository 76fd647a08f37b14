use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::Error;

/// Path of the managed assembly the game loads, relative to the install
/// root.
pub const LIVE_DLL_SUBPATH: &str = "oriDE_Data/Managed/Assembly-CSharp.dll";

/// Where a Steam install of the game usually lives.
pub fn default_root() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(r"C:\Program Files (x86)\Steam\steamapps\common\Ori DE")
    }
    #[cfg(not(windows))]
    {
        dirs::data_dir()
            .map(|data| data.join("Steam/steamapps/common/Ori DE"))
            .or_else(|| {
                dirs::home_dir().map(|home| home.join(".steam/steam/steamapps/common/Ori DE"))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// A validated install root together with the file the game actually loads.
/// The live target itself may not exist yet; its directory must.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstallation {
    pub root: PathBuf,
    pub live_target: PathBuf,
}

/// Joins `root` with the live assembly subpath. `None` signals an invalid
/// root: the managed directory is not there.
#[instrument]
pub fn resolve_live_target(root: impl AsRef<Path> + Debug) -> Option<PathBuf> {
    let path = root.as_ref().join(LIVE_DLL_SUBPATH);
    match path.parent() {
        Some(parent) if parent.is_dir() => Some(path),
        _ => None,
    }
}

/// Validates `initial` and keeps asking `prompt` for a replacement until a
/// root resolves. `None` from the prompt means the user gave up, which is
/// the one fatal outcome in the crate.
pub fn validate_root(
    initial: impl Into<PathBuf>,
    mut prompt: impl FnMut() -> Option<PathBuf>,
) -> crate::Result<ResolvedInstallation> {
    let mut root = initial.into();
    loop {
        if let Some(live_target) = resolve_live_target(&root) {
            return Ok(ResolvedInstallation { root, live_target });
        }
        debug!(?root, "Root rejected, prompting for another");
        root = prompt().ok_or(Error::NoInstallationFound)?;
    }
}
