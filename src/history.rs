//! In-memory navigation history.
//!
//! The history is a plain value owned by the router: a list of visited paths
//! and a cursor. It never reads or writes any host-document location, so
//! navigation stays fully contained within the application process.

/// An in-process navigation history stack.
///
/// Starts at the root path. `push` discards any forward entries before
/// appending, matching how a forward branch disappears once the user
/// navigates somewhere new from the middle of the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
	entries: Vec<String>,
	cursor: usize,
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryHistory {
	/// Creates a history positioned at the root path.
	pub fn new() -> Self {
		Self {
			entries: vec!["/".to_string()],
			cursor: 0,
		}
	}

	/// Returns the path of the current entry.
	pub fn current(&self) -> &str {
		&self.entries[self.cursor]
	}

	/// Appends a new entry after the current one and moves to it.
	///
	/// Any entries ahead of the cursor are discarded.
	pub fn push(&mut self, path: impl Into<String>) {
		self.entries.truncate(self.cursor + 1);
		self.entries.push(path.into());
		self.cursor = self.entries.len() - 1;
	}

	/// Replaces the current entry in place.
	pub fn replace(&mut self, path: impl Into<String>) {
		self.entries[self.cursor] = path.into();
	}

	/// Moves one entry back. Returns whether the cursor moved.
	pub fn back(&mut self) -> bool {
		self.go(-1)
	}

	/// Moves one entry forward. Returns whether the cursor moved.
	pub fn forward(&mut self) -> bool {
		self.go(1)
	}

	/// Moves the cursor by `delta` entries. Returns whether the cursor moved.
	///
	/// A move that would leave the stack is a no-op.
	pub fn go(&mut self, delta: isize) -> bool {
		let target = self.cursor as isize + delta;
		if target < 0 || target as usize >= self.entries.len() {
			return false;
		}
		self.cursor = target as usize;
		true
	}

	/// Returns the number of entries in the stack.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the stack has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns whether a `back` would move.
	pub fn can_go_back(&self) -> bool {
		self.cursor > 0
	}

	/// Returns whether a `forward` would move.
	pub fn can_go_forward(&self) -> bool {
		self.cursor + 1 < self.entries.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_starts_at_root() {
		let history = MemoryHistory::new();
		assert_eq!(history.current(), "/");
		assert_eq!(history.len(), 1);
		assert!(!history.can_go_back());
		assert!(!history.can_go_forward());
	}

	#[test]
	fn test_push_appends_and_moves() {
		let mut history = MemoryHistory::new();
		history.push("/agency/Acme");
		assert_eq!(history.current(), "/agency/Acme");
		assert_eq!(history.len(), 2);
		assert!(history.can_go_back());
	}

	#[test]
	fn test_back_and_forward() {
		let mut history = MemoryHistory::new();
		history.push("/agency/Acme");
		history.push("/agency/Other");

		assert!(history.back());
		assert_eq!(history.current(), "/agency/Acme");
		assert!(history.back());
		assert_eq!(history.current(), "/");
		assert!(!history.back());

		assert!(history.forward());
		assert_eq!(history.current(), "/agency/Acme");
		assert!(history.forward());
		assert_eq!(history.current(), "/agency/Other");
		assert!(!history.forward());
	}

	#[test]
	fn test_push_truncates_forward_branch() {
		let mut history = MemoryHistory::new();
		history.push("/agency/Acme");
		history.push("/agency/Other");
		history.back();
		history.back();

		history.push("/agency/Third");
		assert_eq!(history.len(), 2);
		assert_eq!(history.current(), "/agency/Third");
		assert!(!history.can_go_forward());
	}

	#[test]
	fn test_replace_keeps_length() {
		let mut history = MemoryHistory::new();
		history.push("/agency/Acme");
		history.replace("/agency/Renamed");
		assert_eq!(history.current(), "/agency/Renamed");
		assert_eq!(history.len(), 2);

		history.back();
		assert_eq!(history.current(), "/");
	}

	#[test]
	fn test_never_empties() {
		let mut history = MemoryHistory::new();
		assert!(!history.is_empty());

		history.push("/agency/Acme");
		history.back();
		history.push("/agency/Other");
		history.replace("/agency/Renamed");
		assert!(!history.is_empty());
	}

	#[test]
	fn test_go_out_of_range_is_noop() {
		let mut history = MemoryHistory::new();
		history.push("/agency/Acme");
		assert!(!history.go(-5));
		assert!(!history.go(5));
		assert_eq!(history.current(), "/agency/Acme");
	}
}
