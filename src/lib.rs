//! # MQTT Topic Tree
//!
//! An in-memory topic-matching index for publish/subscribe brokers,
//! mapping published topic strings to the registered subscription
//! patterns that match them under MQTT topic semantics.
//!
//! ## Features
//!
//! - **MQTT wildcard matching**: `+` matches one topic level, `#` matches
//!   the current level and everything below it
//! - **Reference-counted patterns**: inserting the same pattern twice
//!   registers two subscribers; removal only forgets the pattern once the
//!   last subscriber is gone
//! - **Eager compaction**: branches left without subscribers are pruned
//!   bottom-up as part of removal
//! - **Thread-safe handle**: [`SharedTopicTree`] guards one tree with a
//!   reader-writer lock, so matches run in parallel while mutations are
//!   serialized
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_tree::SharedTopicTree;
//!
//! let tree = SharedTopicTree::new();
//! tree.insert("sport/tennis/+")?;
//! tree.insert("sport/#")?;
//!
//! // Both patterns match this concrete topic.
//! let matched = tree.matches("sport/tennis/player1");
//! assert_eq!(matched.len(), 2);
//!
//! // But `sport/tennis/+` does not reach one level deeper.
//! let matched = tree.matches("sport/tennis/player1/ranking");
//! assert_eq!(matched.len(), 1);
//!
//! tree.remove("sport/#");
//! assert_eq!(tree.refcount("sport/#"), 0);
//! # Ok::<(), mqtt_topic_tree::TopicTreeError>(())
//! ```
//!
//! ## Pattern storage
//!
//! Wildcards are ordinary segments at storage time: `sport/+` lives in
//! the tree under the literal segments `sport` and `+`, and only acquires
//! wildcard meaning when a concrete topic is matched against the tree.
//! Published topics are expected to be concrete (wildcard-free); removal
//! likewise operates on literal paths only.
//!
//! Splitting topics on `/`, rejecting malformed input, and everything
//! else at the protocol boundary is the embedding broker's concern; this
//! crate consumes paths and returns owned strings and counts.

#![warn(missing_docs)]

// Core modules
mod shared_tree;
pub mod topic;

// === Core Public API ===
pub use shared_tree::SharedTopicTree;
pub use topic::{NodeDump, TopicPath, TopicTree, TopicTreeError, TreeResult};

/// Result type alias for operations that may fail with [`TopicTreeError`]
pub type Result<T> = std::result::Result<T, TopicTreeError>;
