//! Provisioning error types.

use std::fmt;
use std::path::PathBuf;

use crate::layout::{EnumProvisionPathRole, N_PARENTS_ABOVE_TOOL};

/// "Setup stage failed" errors (path resolution / validation).
///
/// Copy-stage failures are deliberately not wrapped here: an I/O error while
/// copying surfaces as the underlying [`std::io::Error`].
#[derive(Debug)]
pub enum ProvisionError {
    /// A required path is missing or is not a directory.
    NotADirectory {
        /// Which of the five layout paths failed validation.
        role: EnumProvisionPathRole,
        /// The resolved path that was checked.
        path: PathBuf,
    },
    /// The tool's own install location could not be resolved far enough up.
    ToolLocationUnavailable {
        /// Tool directory the ascent started from.
        path: PathBuf,
    },
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADirectory { role, path } => {
                write!(
                    f,
                    "Expected an existing directory for the {role}: {}",
                    path.display()
                )
            }
            Self::ToolLocationUnavailable { path } => {
                write!(
                    f,
                    "Tool directory {} has no ancestor {N_PARENTS_ABOVE_TOOL} levels up",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ProvisionError {}
