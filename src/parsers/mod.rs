//! Source text scanning
//!
//! `exports` finds default exports in module source, `specifier` turns module
//! paths into the relative specifiers and names used by the barrel.

pub mod exports;
pub mod specifier;

pub use exports::{find_default_export, DefaultExport, ExportDetector};
pub use specifier::{identifier_from_module_base, is_index_file, module_base, resolve_specifier};
