use std::{env, fmt::Debug, fs, path::Path, path::PathBuf};

use tracing::{info, instrument};

/// File name of the launcher emitted for a variant, e.g. `SwitchToMymod.bat`.
pub fn launcher_file_name(name: &str) -> String {
    let mut capitalized = String::with_capacity(name.len());
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        capitalized.extend(first.to_uppercase());
        capitalized.push_str(chars.as_str());
    }
    let ext = if cfg!(windows) { "bat" } else { "sh" };
    format!("SwitchTo{capitalized}.{ext}")
}

/// Writes a double-clickable script into `dir` that re-invokes this
/// executable with `name`, so a variant can be applied without opening the
/// tool.
#[instrument]
pub fn create_launcher(dir: impl AsRef<Path> + Debug, name: &str) -> crate::Result<PathBuf> {
    let exe = env::current_exe()?;
    let path = dir.as_ref().join(launcher_file_name(name));

    let contents = if cfg!(windows) {
        format!("@echo off\r\n\"{}\" \"{}\"\r\n", exe.display(), name)
    } else {
        format!("#!/bin/sh\nexec \"{}\" \"{}\"\n", exe.display(), name)
    };
    fs::write(&path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }

    info!(?path, "Launcher created");
    Ok(path)
}
