use std::io;

use thiserror::Error;

use crate::data::LoadError;

/// Error type for running the site.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to load fixtures: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
