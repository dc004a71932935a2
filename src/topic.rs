//! Topic tree module
//!
//! This module provides the tree engine for MQTT-style topic matching:
//! path splitting, the refcounted trie itself, and its error surface.

// Submodules
pub mod error;
pub mod topic_path;
pub mod topic_tree;


// Re-export commonly used types for convenience
pub use error::{TopicTreeError, TreeResult};
// Re-export constants and validation utilities
pub use error::{limits, validation};
pub use topic_path::TopicPath;
pub use topic_tree::{NodeDump, TopicTree};
