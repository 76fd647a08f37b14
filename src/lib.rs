use std::{io, result};

pub mod install;
pub mod registry;
pub mod shortcut;
pub mod switcher;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("this file is the live game assembly and cannot be chosen")]
    InvalidPath,
    #[error("no DLL registered for \"{0}\"")]
    DllNotFound(String),
    #[error("game installation not found")]
    NoInstallationFound,
}

pub type Result<T> = result::Result<T, Error>;
