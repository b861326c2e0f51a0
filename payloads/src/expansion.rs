/// Tracks which single item in a list is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<K> {
    expanded: Option<K>,
}

impl<K> Default for Expansion<K> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<K: PartialEq + Clone> Expansion<K> {
    /// Expand `key`, or collapse it when it is the one already expanded.
    pub fn toggle(&mut self, key: &K) {
        if self.expanded.as_ref() == Some(key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key.clone());
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    pub fn expand_first(&mut self, keys: &[K]) {
        if let Some(first) = keys.first() {
            self.expanded = Some(first.clone());
        }
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_collapses() {
        let mut expansion = Expansion::default();
        expansion.toggle(&1);
        assert!(expansion.is_expanded(&1));
        expansion.toggle(&1);
        assert_eq!(expansion.expanded(), None);
    }

    #[test]
    fn toggling_another_switches() {
        let mut expansion = Expansion::default();
        expansion.toggle(&"a");
        expansion.toggle(&"b");
        assert!(!expansion.is_expanded(&"a"));
        assert!(expansion.is_expanded(&"b"));
    }

    #[test]
    fn expand_first_and_collapse_all() {
        let mut expansion = Expansion::default();
        expansion.expand_first(&[]);
        assert_eq!(expansion.expanded(), None);

        expansion.expand_first(&[4, 5]);
        assert_eq!(expansion.expanded(), Some(&4));

        expansion.collapse_all();
        assert_eq!(expansion.expanded(), None);
    }
}
