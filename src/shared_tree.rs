//! Lock-guarded topic tree handle shared between threads.

use std::sync::Arc;

use arcstr::ArcStr;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::topic::error::{TreeResult, validation};
use crate::topic::topic_path::TopicPath;
use crate::topic::topic_tree::{NodeDump, TopicTree};

/// A [`TopicTree`] behind a reader-writer lock, cloneable across threads.
///
/// Each public operation acquires the lock exactly once for its whole
/// duration: `insert`, `remove` and `clear` take it exclusively, the
/// read-only traversals take it shared. Readers never observe a tree
/// mid-mutation, and every result is an owned copy, so nothing borrowed
/// from the tree outlives the lock guard.
///
/// Contention is global to the tree instance; callers wanting bounded
/// wait times or cancellation must layer that on top.
#[derive(Debug, Clone, Default)]
pub struct SharedTopicTree {
	inner: Arc<RwLock<TopicTree>>,
}

impl SharedTopicTree {
	/// Creates an empty shared tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a subscription path; see [`TopicTree::insert`] for the
	/// refcount and partial-failure semantics.
	pub fn insert(&self, path: impl Into<ArcStr>) -> TreeResult<()> {
		let path = TopicPath::new(path);
		trace!(topic = %path, "insert");
		self.inner.write().insert(&path)
	}

	/// Like [`insert`](Self::insert), but rejects paths breaking the
	/// shared [`limits`](crate::topic::limits) before touching the tree.
	pub fn insert_checked(&self, path: impl Into<ArcStr>) -> TreeResult<()> {
		let path = TopicPath::new(path);
		validation::validate_topic_path(&path.path)?;
		trace!(topic = %path, "insert");
		self.inner.write().insert(&path)
	}

	/// Removes one insert of the exact path; see [`TopicTree::remove`].
	pub fn remove(&self, path: impl Into<ArcStr>) {
		let path = TopicPath::new(path);
		trace!(topic = %path, "remove");
		self.inner.write().remove(&path);
	}

	/// Returns the stored patterns matching a concrete published topic,
	/// as a multiset; see [`TopicTree::matches`].
	pub fn matches(&self, topic: impl Into<ArcStr>) -> Vec<ArcStr> {
		let topic = TopicPath::new(topic);
		self.inner.read().matches(&topic)
	}

	/// Refcount of the exact path, 0 when absent.
	pub fn refcount(&self, path: impl Into<ArcStr>) -> u32 {
		let path = TopicPath::new(path);
		self.inner.read().refcount(&path)
	}

	/// Drops every stored path in one exclusive section.
	pub fn clear(&self) {
		debug!("clear");
		self.inner.write().clear();
	}

	/// Number of distinct stored paths.
	pub fn size(&self) -> usize {
		self.inner.read().size()
	}

	/// True when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.inner.read().is_empty()
	}

	/// All `(path, refcount)` pairs, in unspecified order.
	pub fn to_list(&self) -> Vec<(ArcStr, u32)> {
		self.inner.read().to_list()
	}

	/// Diagnostic structural snapshot; see [`TopicTree::dump`].
	pub fn dump(&self) -> Vec<NodeDump> {
		self.inner.read().dump()
	}
}
