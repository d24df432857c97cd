//! Free-text tag list with an input buffer.

/// Keys the tag input reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TagKey {
    Enter,
    Comma,
    Other,
}

/// What a key press did to the list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TagOutcome {
    /// A new tag was appended.
    Added(String),
    /// The buffer matched an existing tag exactly; nothing added.
    Duplicate,
    /// The trimmed buffer was empty; nothing added.
    Empty,
    /// Not a commit key.
    Ignored,
}

/// Ordered, duplicate-free tags (case-sensitive exact match) plus the
/// single-line buffer being typed.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TagList {
    tags: Vec<String>,
    buffer: String,
}

impl TagList {
    /// Start from existing tags, dropping duplicates and blanks.
    pub fn new(initial: impl IntoIterator<Item = String>) -> Self {
        let mut list = Self::default();
        for tag in initial {
            let tag = tag.trim();
            if !tag.is_empty() && !list.contains(tag) {
                list.tags.push(tag.to_string());
            }
        }
        list
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Replace the buffer with what the field now holds.
    ///
    /// Every comma in `text` is a commit point: the segments before the last
    /// comma are committed in order and only the tail stays in the buffer,
    /// so a comma typed mid-text or pasted never ends up inside a tag.
    /// Returns the tags that were added.
    pub fn set_buffer(&mut self, text: impl Into<String>) -> Vec<String> {
        let text = text.into();
        let Some((committed, tail)) = text.rsplit_once(',') else {
            self.buffer = text;
            return Vec::new();
        };

        let mut added = Vec::new();
        for segment in committed.split(',') {
            self.buffer = segment.to_string();
            if let TagOutcome::Added(tag) = self.handle_key(TagKey::Comma) {
                added.push(tag);
            }
        }
        self.buffer = tail.to_string();
        added
    }

    /// Enter or comma commits the trimmed buffer. The buffer is cleared on
    /// every commit key, even when nothing was added.
    pub fn handle_key(&mut self, key: TagKey) -> TagOutcome {
        if key == TagKey::Other {
            return TagOutcome::Ignored;
        }

        let candidate = self.buffer.trim().to_string();
        self.buffer.clear();

        if candidate.is_empty() {
            TagOutcome::Empty
        } else if self.contains(&candidate) {
            TagOutcome::Duplicate
        } else {
            self.tags.push(candidate.clone());
            TagOutcome::Added(candidate)
        }
    }

    /// Remove one tag by exact value. Returns whether it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_adds_then_duplicate_is_ignored() {
        let mut list = TagList::default();
        list.set_buffer("react");
        assert_eq!(list.handle_key(TagKey::Enter), TagOutcome::Added("react".into()));
        assert_eq!(list.tags(), ["react"]);
        assert_eq!(list.buffer(), "");

        list.set_buffer("react");
        assert_eq!(list.handle_key(TagKey::Enter), TagOutcome::Duplicate);
        assert_eq!(list.tags(), ["react"]);
        assert_eq!(list.buffer(), "");

        assert!(list.remove("react"));
        assert!(list.tags().is_empty());
    }

    #[test]
    fn comma_commits_trimmed() {
        let mut list = TagList::default();
        list.set_buffer("  rust ");
        assert_eq!(list.handle_key(TagKey::Comma), TagOutcome::Added("rust".into()));
    }

    #[test]
    fn comma_inside_text_splits_instead_of_sticking() {
        let mut list = TagList::default();
        assert_eq!(list.set_buffer("re,act"), ["re"]);
        assert_eq!(list.buffer(), "act");
        assert_eq!(list.handle_key(TagKey::Enter), TagOutcome::Added("act".into()));
        assert_eq!(list.tags(), ["re", "act"]);
    }

    #[test]
    fn pasted_list_commits_each_segment() {
        let mut list = TagList::new(vec!["b".to_string()]);
        assert_eq!(list.set_buffer(" a, b,,c ,"), ["a", "c"]);
        assert_eq!(list.tags(), ["b", "a", "c"]);
        assert_eq!(list.buffer(), "");
        assert!(list.tags().iter().all(|t| !t.contains(',')));
    }

    #[test]
    fn empty_buffer_is_noop_but_cleared() {
        let mut list = TagList::default();
        list.set_buffer("   ");
        assert_eq!(list.handle_key(TagKey::Enter), TagOutcome::Empty);
        assert_eq!(list.buffer(), "");
        assert!(list.tags().is_empty());
    }

    #[test]
    fn case_sensitive() {
        let mut list = TagList::default();
        list.set_buffer("Rust");
        list.handle_key(TagKey::Enter);
        list.set_buffer("rust");
        assert_eq!(list.handle_key(TagKey::Enter), TagOutcome::Added("rust".into()));
        assert_eq!(list.tags().len(), 2);
    }

    #[test]
    fn other_keys_leave_buffer() {
        let mut list = TagList::default();
        list.set_buffer("go");
        assert_eq!(list.handle_key(TagKey::Other), TagOutcome::Ignored);
        assert_eq!(list.buffer(), "go");
    }

    #[test]
    fn remove_missing_is_false() {
        let mut list = TagList::new(vec!["a".to_string()]);
        assert!(!list.remove("b"));
        assert_eq!(list.tags(), ["a"]);
    }

    #[test]
    fn new_dedupes() {
        let list = TagList::new(vec!["a".into(), "a".into(), " ".into(), "b".into()]);
        assert_eq!(list.tags(), ["a", "b"]);
    }
}
