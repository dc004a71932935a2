//! Topic paths split into segments.

use std::fmt;

use arcstr::{ArcStr, Substr};

/// A `/`-split topic path.
///
/// Owns the full topic string together with its segment list. Segments are
/// zero-copy substrings of the owned path, so cloning a path or handing a
/// segment to the tree never copies the text.
#[derive(Debug, Clone)]
pub struct TopicPath {
	/// Full topic string with `/` separators.
	pub path: ArcStr,
	/// Path segments in order.
	pub segments: Vec<Substr>,
}

impl TopicPath {
	/// Splits `path` on `/` into segments.
	pub fn new(path: impl Into<ArcStr>) -> Self {
		let path = path.into();
		let segments: Vec<Substr> =
			path.split('/').map(|s| path.substr_from(s)).collect();
		Self { path, segments }
	}

	/// True for the empty topic string.
	///
	/// Splitting `""` still yields one empty segment, so emptiness is
	/// decided by the original string, not the segment count. An empty
	/// path is a no-op input for every tree operation.
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Full topic string.
	pub fn path(&self) -> ArcStr {
		self.path.clone()
	}
}

impl fmt::Display for TopicPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path)
	}
}

#[cfg(test)]
mod tests {
	use super::TopicPath;

	#[test]
	fn splits_on_separator() {
		let path = TopicPath::new("sport/tennis/player1");
		let segments: Vec<&str> =
			path.segments.iter().map(|s| s.as_str()).collect();
		assert_eq!(segments, ["sport", "tennis", "player1"]);
	}

	#[test]
	fn keeps_empty_segments() {
		// "a//b" has an empty middle segment; the tree stores it literally.
		let path = TopicPath::new("a//b");
		let segments: Vec<&str> =
			path.segments.iter().map(|s| s.as_str()).collect();
		assert_eq!(segments, ["a", "", "b"]);
	}

	#[test]
	fn empty_path_is_empty() {
		let path = TopicPath::new("");
		assert!(path.is_empty());
		// Still one (empty) segment after the split.
		assert_eq!(path.segments.len(), 1);

		assert!(!TopicPath::new("a").is_empty());
	}

	#[test]
	fn display_restores_original() {
		let path = TopicPath::new("devices/+/status");
		assert_eq!(path.to_string(), "devices/+/status");
	}
}
