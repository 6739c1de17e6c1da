//! dirsum: order-independent directory checksums
//!
//! Walks a directory tree, hashes every non-hidden file together with its
//! path relative to the root, and XORs the digests into one checksum that
//! does not depend on traversal order. Used to check that a test-data
//! directory has not been altered.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod tree;
pub mod types;
