//! Path-set resolution for the provisioning layout.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::spec::ProvisionError;

////////////////////////////////////////////////////////////////////////////////
// #region LayoutConstants

/// Parent levels between the tool's install directory and the source root.
///
/// The tool ships inside `docs/tutorials/huffman/` of the source tree, so
/// the ascent count is part of its contract with the repository layout. The
/// CLI accepts an explicit source root to bypass the ascent entirely.
pub const N_PARENTS_ABOVE_TOOL: usize = 3;

/// Copy source, relative to the source root.
pub const PARTS_BSP_LIBSRC: [&str; 4] = ["embedded", "libsrc", "xilfpga_v5_1", "src"];

/// Generated project wrapper, relative to the work directory.
pub const PART_PROJECT_WRAPPER: &str = "design_1_wrapper";

/// Application BSP sources, relative to the project wrapper.
pub const PARTS_APP_BSP: [&str; 7] = [
    "psu_cortexa53_0",
    "standalone_domain",
    "bsp",
    "psu_cortexa53_0",
    "libsrc",
    "xilfpga_v5_1",
    "src",
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathSet

/// Which of the five layout paths a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumProvisionPathRole {
    /// User-supplied project workspace root.
    WorkDir,
    /// Root of the source tree the tool ships inside.
    SourceRoot,
    /// BSP sources under the source root (copy source).
    CopySource,
    /// Generated wrapper project under the work directory.
    ProjectRoot,
    /// Application BSP sources under the wrapper project (copy destination).
    CopyDestination,
}

impl fmt::Display for EnumProvisionPathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c_role = match self {
            Self::WorkDir => "work directory",
            Self::SourceRoot => "source root",
            Self::CopySource => "copy source",
            Self::ProjectRoot => "project root",
            Self::CopyDestination => "copy destination",
        };
        write!(f, "{c_role}")
    }
}

/// The five resolved layout paths, validated once and never mutated.
#[derive(Debug, Clone)]
pub struct SpecProvisionLayout {
    /// User-supplied project workspace root, absolute.
    pub path_dir_work: PathBuf,
    /// Source-tree root, absolute.
    pub path_dir_source_root: PathBuf,
    /// BSP sources to copy from.
    pub path_dir_copy_src: PathBuf,
    /// Generated `design_1_wrapper` project.
    pub path_dir_project: PathBuf,
    /// Application BSP directory to copy into.
    pub path_dir_copy_dst: PathBuf,
}

impl SpecProvisionLayout {
    /// Resolve and validate the five layout paths.
    ///
    /// Checks run in a fixed order, each a hard stop: work directory, source
    /// root, copy source, project root, copy destination. The returned error
    /// names the first role that failed, so a broken tool install is
    /// distinguishable from a bad work directory.
    ///
    /// No directory is created here; validation is read-only.
    pub fn resolve<P, Q>(dir_source_root: P, dir_work: Q) -> Result<Self, ProvisionError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let path_dir_work = _require_dir(
            _absolutize_path(dir_work.as_ref()),
            EnumProvisionPathRole::WorkDir,
        )?;
        let path_dir_source_root = _require_dir(
            _absolutize_path(dir_source_root.as_ref()),
            EnumProvisionPathRole::SourceRoot,
        )?;
        let path_dir_copy_src = _require_dir(
            _join_parts(&path_dir_source_root, &PARTS_BSP_LIBSRC),
            EnumProvisionPathRole::CopySource,
        )?;
        let path_dir_project = _require_dir(
            path_dir_work.join(PART_PROJECT_WRAPPER),
            EnumProvisionPathRole::ProjectRoot,
        )?;
        let path_dir_copy_dst = _require_dir(
            _join_parts(&path_dir_project, &PARTS_APP_BSP),
            EnumProvisionPathRole::CopyDestination,
        )?;

        Ok(Self {
            path_dir_work,
            path_dir_source_root,
            path_dir_copy_src,
            path_dir_project,
            path_dir_copy_dst,
        })
    }
}

/// Derive the source root from the tool's install directory by ascending
/// [`N_PARENTS_ABOVE_TOOL`] levels.
pub fn source_root_from_tool(path_dir_tool: &Path) -> Result<PathBuf, ProvisionError> {
    path_dir_tool
        .ancestors()
        .nth(N_PARENTS_ABOVE_TOOL)
        .map(Path::to_path_buf)
        .ok_or_else(|| ProvisionError::ToolLocationUnavailable {
            path: path_dir_tool.to_path_buf(),
        })
}

fn _absolutize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

fn _join_parts(base: &Path, parts: &[&str]) -> PathBuf {
    let mut path_joined = base.to_path_buf();
    for part in parts {
        path_joined.push(part);
    }
    path_joined
}

fn _require_dir(
    path: PathBuf,
    role: EnumProvisionPathRole,
) -> Result<PathBuf, ProvisionError> {
    if path.is_dir() {
        return Ok(path);
    }
    Err(ProvisionError::NotADirectory { role, path })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
