//! Error types and shared limits for the topic tree.
//!
//! The tree itself only ever produces [`TopicTreeError::ResourceExhausted`];
//! input validation is the caller's concern and lives in the [`validation`]
//! submodule for callers that want it at the boundary.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur during topic tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicTreeError {
	/// Allocation failed while growing the tree during an insert.
	///
	/// Nodes created earlier in the same insert are kept; see
	/// [`TopicTree::insert`](super::topic_tree::TopicTree::insert) for the
	/// partial-mutation contract.
	#[error("tree allocation failed: {source}")]
	ResourceExhausted {
		/// Underlying reservation failure from the child map.
		#[from]
		source: TryReserveError,
	},

	/// Topic rejected by boundary validation
	#[error("invalid topic '{topic}': {reason}")]
	InvalidTopic {
		/// The offending topic string
		topic: String,
		/// Which limit or constraint it broke
		reason: String,
	},
}

impl TopicTreeError {
	/// Creates a new InvalidTopic error
	pub fn invalid_topic(
		topic: impl Into<String>,
		reason: impl Into<String>,
	) -> Self {
		Self::InvalidTopic {
			topic: topic.into(),
			reason: reason.into(),
		}
	}
}

/// Convenient Result type for tree operations
pub type TreeResult<T> = Result<T, TopicTreeError>;

/// Topic processing limits and constants
pub mod limits {
	/// Maximum topic nesting depth allowed
	pub const MAX_TOPIC_DEPTH: usize = 32;

	/// Maximum length of a single topic segment
	pub const MAX_SEGMENT_LENGTH: usize = 256;

	/// Maximum total topic path length
	pub const MAX_TOPIC_LENGTH: usize = 1024;
}

/// Validation utilities for topic operations
pub mod validation {
	use super::TopicTreeError;
	use super::limits::*;

	/// Validates a topic path against the shared [`limits`](super::limits).
	///
	/// The empty path passes: it is a defined no-op for every tree
	/// operation, not an error.
	pub fn validate_topic_path(path: &str) -> Result<(), TopicTreeError> {
		if path.len() > MAX_TOPIC_LENGTH {
			return Err(TopicTreeError::invalid_topic(
				path,
				format!("path length {} > {}", path.len(), MAX_TOPIC_LENGTH),
			));
		}

		let mut depth = 0;
		for (index, segment) in path.split('/').enumerate() {
			depth += 1;
			if segment.len() > MAX_SEGMENT_LENGTH {
				return Err(TopicTreeError::invalid_topic(
					path,
					format!(
						"segment {index} length {} > {}",
						segment.len(),
						MAX_SEGMENT_LENGTH
					),
				));
			}
			if segment.contains('\0') {
				return Err(TopicTreeError::invalid_topic(
					path,
					format!("null byte in segment {index}"),
				));
			}
		}

		if depth > MAX_TOPIC_DEPTH {
			return Err(TopicTreeError::invalid_topic(
				path,
				format!("depth {depth} > {MAX_TOPIC_DEPTH}"),
			));
		}

		Ok(())
	}

}
