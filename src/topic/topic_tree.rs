//! The topic tree engine: a segment-keyed trie of subscription paths.
//!
//! Wildcard segments `+` and `#` are stored literally like any other
//! segment; they only acquire wildcard meaning during [`TopicTree::matches`].
//! Every stored path carries a refcount so several subscribers can share
//! one pattern, and delete compacts the tree eagerly once a branch holds
//! neither values nor children.

use std::collections::HashMap;
use std::fmt;

use arcstr::{ArcStr, Substr};

use super::error::TreeResult;
use super::topic_path::TopicPath;

/// Single-level wildcard segment, matches exactly one segment.
const SINGLE_LEVEL_WILDCARD: &str = "+";

/// Multi-level wildcard segment, matches the current level and below.
const MULTI_LEVEL_WILDCARD: &str = "#";

/// One node of the tree, keyed in its parent by the segment it represents.
#[derive(Debug, Default)]
struct TreeNode {
	/// Full original path of the subscription terminating here.
	/// Present exactly while `refcount > 0`.
	value: Option<ArcStr>,

	/// Number of active inserts of that exact path.
	refcount: u32,

	/// Children keyed by their segment, unique among siblings.
	children: HashMap<Substr, TreeNode>,
}

impl TreeNode {
	/// Removes one insert of `segments` below this node.
	///
	/// Returns true when this node is left with no refcount and no
	/// children, which tells the parent to unlink it. Unknown paths fall
	/// through without touching anything.
	fn remove(&mut self, segments: &[Substr]) -> bool {
		match segments {
			| [] => {
				if self.refcount > 0 {
					self.refcount -= 1;
					if self.refcount == 0 {
						self.value = None;
					}
				}
			}
			| [segment, rest @ ..] => {
				if let Some(child) = self.children.get_mut(segment.as_str()) {
					if child.remove(rest) {
						self.children.remove(segment.as_str());
					}
				}
			}
		}
		self.refcount == 0 && self.children.is_empty()
	}

	/// Recursively collects the values of all stored patterns matching the
	/// given concrete topic segments.
	fn collect_matches(&self, segments: &[Substr], acc: &mut Vec<ArcStr>) {
		match segments {
			| [] => {
				// Topic fully consumed: this node's own pattern matches,
				// and so does a `#` child covering zero remaining levels.
				if let Some(value) = &self.value {
					acc.push(value.clone());
				}
				if let Some(hash) = self.children.get(MULTI_LEVEL_WILDCARD) {
					if let Some(value) = &hash.value {
						acc.push(value.clone());
					}
				}
			}
			| [segment, rest @ ..] => {
				// Exact segment branch
				if let Some(child) = self.children.get(segment.as_str()) {
					child.collect_matches(rest, acc);
				}
				// `+` branch consumes exactly this one segment
				if let Some(plus) = self.children.get(SINGLE_LEVEL_WILDCARD) {
					plus.collect_matches(rest, acc);
				}
				// `#` swallows the whole remainder, no recursion needed
				if let Some(hash) = self.children.get(MULTI_LEVEL_WILDCARD) {
					if let Some(value) = &hash.value {
						acc.push(value.clone());
					}
				}
			}
		}
	}

	/// Literal walk to the refcount of the exact path, 0 when absent.
	fn refcount_at(&self, segments: &[Substr]) -> u32 {
		match segments {
			| [] => self.refcount,
			| [segment, rest @ ..] => self
				.children
				.get(segment.as_str())
				.map_or(0, |child| child.refcount_at(rest)),
		}
	}

	/// Counts descendants with at least one active insert.
	fn count_stored(&self, size: &mut usize) {
		for child in self.children.values() {
			if child.refcount > 0 {
				*size += 1;
			}
			child.count_stored(size);
		}
	}

	/// Collects `(value, refcount)` for every descendant holding a value.
	fn collect_entries(&self, acc: &mut Vec<(ArcStr, u32)>) {
		for child in self.children.values() {
			if let Some(value) = &child.value {
				acc.push((value.clone(), child.refcount));
			}
			child.collect_entries(acc);
		}
	}

	fn dump_children(&self) -> Vec<NodeDump> {
		self.children
			.iter()
			.map(|(segment, child)| NodeDump {
				segment: segment.clone(),
				value: child.value.clone(),
				refcount: child.refcount,
				children: child.dump_children(),
			})
			.collect()
	}
}

/// Diagnostic snapshot of one tree node.
///
/// Produced by [`TopicTree::dump`]; not used by matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDump {
	/// Segment this node is keyed by in its parent.
	pub segment: Substr,
	/// Stored subscription path, if any inserts terminate here.
	pub value: Option<ArcStr>,
	/// Active insert count for the stored path.
	pub refcount: u32,
	/// Dumps of the node's children, in unspecified order.
	pub children: Vec<NodeDump>,
}

impl fmt::Display for NodeDump {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}, ", self.segment)?;
		match &self.value {
			| Some(value) => write!(f, "{value}, ")?,
			| None => write!(f, "none, ")?,
		}
		write!(f, "{}, [", self.refcount)?;
		for (i, child) in self.children.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{child}")?;
		}
		write!(f, "]}}")
	}
}

/// Reference-counted topic tree mapping published topics to the
/// subscription patterns that match them.
///
/// This is the single-threaded engine; see
/// [`SharedTopicTree`](crate::SharedTopicTree) for the lock-guarded
/// handle shared between threads.
#[derive(Debug, Default)]
pub struct TopicTree {
	root: TreeNode,
}

impl TopicTree {
	/// Creates an empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `path`, creating missing nodes along the way and bumping
	/// the terminal node's refcount. Inserting the same path again is the
	/// normal way to register a second subscriber. The empty path is a
	/// no-op returning `Ok`.
	///
	/// Insert is not transactional: child-map growth is reserved with
	/// [`HashMap::try_reserve`], and if a reservation fails partway down
	/// the walk, nodes created earlier in the same call remain in the
	/// tree. They are value-less interior nodes, invisible to matching,
	/// and get compacted by whichever remove next crosses them.
	pub fn insert(&mut self, path: &TopicPath) -> TreeResult<()> {
		if path.is_empty() {
			return Ok(());
		}

		let mut node = &mut self.root;
		for segment in &path.segments {
			node.children.try_reserve(1)?;
			node = node.children.entry(segment.clone()).or_default();
		}
		if node.value.is_none() {
			node.value = Some(path.path());
		}
		node.refcount += 1;
		Ok(())
	}

	/// Removes one insert of the exact path (wildcards are not resolved;
	/// `+` and `#` only match their literal selves here). Once the
	/// terminal refcount reaches zero its value is dropped, and any
	/// now-empty ancestor chain is unlinked bottom-up. Removing a path
	/// never inserted, or the empty path, is a no-op.
	pub fn remove(&mut self, path: &TopicPath) {
		if path.is_empty() {
			return;
		}
		// Root stays put even when the return value says "empty".
		self.root.remove(&path.segments);
	}

	/// Returns the stored patterns matching the concrete `topic`,
	/// including `+` and `#` variants. Order is unspecified and duplicates
	/// are possible when distinct branches store the same literal path;
	/// treat the result as a multiset. The empty topic matches nothing.
	pub fn matches(&self, topic: &TopicPath) -> Vec<ArcStr> {
		let mut matched = Vec::new();
		if !topic.is_empty() {
			self.root.collect_matches(&topic.segments, &mut matched);
		}
		matched
	}

	/// Refcount of the exact path, 0 when absent (including interior
	/// nodes, which store no value).
	pub fn refcount(&self, path: &TopicPath) -> u32 {
		if path.is_empty() {
			return 0;
		}
		self.root.refcount_at(&path.segments)
	}

	/// Drops every stored path, leaving an empty tree.
	pub fn clear(&mut self) {
		self.root.children.clear();
	}

	/// Number of distinct stored paths, irrespective of their refcounts.
	pub fn size(&self) -> usize {
		let mut size = 0;
		self.root.count_stored(&mut size);
		size
	}

	/// True when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.root.children.is_empty()
	}

	/// All `(path, refcount)` pairs, in unspecified order.
	pub fn to_list(&self) -> Vec<(ArcStr, u32)> {
		let mut entries = Vec::new();
		self.root.collect_entries(&mut entries);
		entries
	}

	/// Structural snapshot of the whole tree, one [`NodeDump`] per child
	/// of the (segment-less) root.
	pub fn dump(&self) -> Vec<NodeDump> {
		self.root.dump_children()
	}
}
