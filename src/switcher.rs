use std::{fs, io, path::Path};

use tracing::{info, instrument};

use crate::{install::ResolvedInstallation, registry::Registry, Error};

/// The one filesystem side effect of a switch, kept behind a seam so tests
/// can count invocations without touching the disk.
pub trait FileCopier {
    fn copy(&mut self, src: &Path, dst: &Path) -> io::Result<u64>;
}

/// Copies through `std::fs`, overwriting the destination.
#[derive(Debug, Default)]
pub struct HostFs;

impl FileCopier for HostFs {
    fn copy(&mut self, src: &Path, dst: &Path) -> io::Result<u64> {
        fs::copy(src, dst)
    }
}

/// Copies the variant registered under `name` over the live assembly.
/// Returns the number of bytes written. The copy is not transactional: an
/// interrupted write leaves the live target partial, and no rollback is
/// attempted.
#[instrument(skip(registry, fs))]
pub fn switch_with(
    registry: &Registry,
    resolved: &ResolvedInstallation,
    name: &str,
    fs: &mut impl FileCopier,
) -> crate::Result<u64> {
    let path = registry
        .get_path(name)
        .ok_or_else(|| Error::DllNotFound(name.to_owned()))?;
    let written = fs.copy(path, &resolved.live_target)?;
    info!(?path, written, "Switched live assembly");
    Ok(written)
}

/// `switch_with` against the host filesystem.
pub fn switch(
    registry: &Registry,
    resolved: &ResolvedInstallation,
    name: &str,
) -> crate::Result<u64> {
    switch_with(registry, resolved, name, &mut HostFs)
}
