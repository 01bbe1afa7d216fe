//! Metapackage re-exporting the workspace crates

pub use account;
pub use common;
