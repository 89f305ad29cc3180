//! `bertkit_bsp` v1:
//! BSP source provisioning engine for generated Vitis projects.
//!
//! Architecture mirrors the provisioning flow:
//! - `layout` : path-set resolution and validation
//! - `copy`   : source-entry enumeration and copy orchestration
//! - `report` : run-time report model
//! - `spec`   : error types
//! - `util`   : shared helper functions

pub mod copy;
pub mod layout;
pub mod report;
pub mod spec;
mod util;

pub use copy::copy_bsp_entries;
pub use layout::{
    EnumProvisionPathRole, N_PARENTS_ABOVE_TOOL, SpecProvisionLayout, source_root_from_tool,
};
pub use report::ReportProvision;
pub use spec::ProvisionError;
