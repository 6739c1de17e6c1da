//! Directory tree checksum
//!
//! Walks a directory, hashes every non-hidden file together with its relative
//! path, and folds the digests into a single order-independent checksum.

pub mod checksum;
pub mod directory;
pub mod hasher;
pub mod path;
pub mod walker;

pub use checksum::Checksum;
pub use directory::DirectoryChecksum;
pub use walker::{FileEntry, Walker, WalkerConfig};
