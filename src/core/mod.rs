//! Core functionality for directory walking and barrel generation

pub mod barrel_writer;
pub mod generator;
pub mod walker;

pub use barrel_writer::{BarrelPlan, BarrelWriter};
pub use generator::BarrelGenerator;
pub use walker::DirectoryWalker;
