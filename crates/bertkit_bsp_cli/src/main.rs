use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bertkit_bsp::{SpecProvisionLayout, copy_bsp_entries, source_root_from_tool};
use clap::Parser;

/// Copy the xilfpga BSP sources into a generated Vitis wrapper project.
#[derive(Debug, Parser)]
#[command(name = "copy-bsp-files")]
struct Cli {
    /// Directory which the tutorial refers to as WORK. Assumes
    /// design_1_wrapper is a subdirectory of this.
    work_dir: PathBuf,
    /// Source-tree root to copy BSP files from. Defaults to three levels
    /// above this executable.
    #[arg(long)]
    source_root: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_module("bertkit_bsp", log::LevelFilter::Info)
        .filter_module("bertkit_bsp_cli", log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let path_dir_source_root = match cli.source_root {
        Some(path) => path,
        None => default_source_root()?,
    };

    let layout = SpecProvisionLayout::resolve(&path_dir_source_root, &cli.work_dir)?;
    let report = copy_bsp_entries(&layout.path_dir_copy_src, &layout.path_dir_copy_dst)
        .context("copying BSP sources failed")?;
    log::info!("{report}");

    Ok(())
}

fn default_source_root() -> Result<PathBuf> {
    let path_file_exe =
        std::env::current_exe().context("failed to locate the running executable")?;
    let path_dir_tool = path_file_exe
        .parent()
        .map(Path::to_path_buf)
        .context("executable path has no parent directory")?;
    Ok(source_root_from_tool(&path_dir_tool)?)
}
