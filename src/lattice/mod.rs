//! The tetrahedral lattice and its cells.

pub use self::cell::Cell;
pub use self::config::{AttachmentPolicy, ConfigError, LatticeConfig};
pub use self::lattice::Lattice;

mod cell;
mod config;
mod lattice;
