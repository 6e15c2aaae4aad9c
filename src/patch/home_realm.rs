//! Home realm identifier list.
//!
//! The backend stores home realm identifiers as one comma-joined string. This
//! type is the list view of that string.

use std::fmt;

/// Separator between identifiers in the stored string.
pub const HOME_REALM_SEPARATOR: char = ',';

/// Ordered list of home realm identifiers.
///
/// Splitting drops empty tokens, so `"a,,b"` and `",a,b,"` both yield
/// `["a", "b"]` and an empty string yields an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeRealmIdentifiers(Vec<String>);

impl HomeRealmIdentifiers {
    /// Split a stored home realm string. `None` yields an empty list.
    pub fn parse(joined: Option<&str>) -> Self {
        let ids = joined
            .map(|s| {
                s.split(HOME_REALM_SEPARATOR)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self(ids)
    }

    /// Join into the stored form. An empty list has no stored form.
    pub fn to_joined(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(&HOME_REALM_SEPARATOR.to_string()))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Replace the element at `index`. Returns `false` when out of range.
    pub fn replace(&mut self, index: usize, value: String) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Insert at `index`, where `index == len` appends. Returns `false` when
    /// out of range.
    pub fn insert(&mut self, index: usize, value: String) -> bool {
        if index > self.0.len() {
            return false;
        }
        self.0.insert(index, value);
        true
    }

    /// Remove the element at `index`. Returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }
}

impl From<Vec<String>> for HomeRealmIdentifiers {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl fmt::Display for HomeRealmIdentifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> HomeRealmIdentifiers {
        HomeRealmIdentifiers::from(values.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        assert_eq!(HomeRealmIdentifiers::parse(Some("a,,b")), ids(&["a", "b"]));
        assert_eq!(HomeRealmIdentifiers::parse(Some(",a,b,")), ids(&["a", "b"]));
        assert!(HomeRealmIdentifiers::parse(Some("")).is_empty());
        assert!(HomeRealmIdentifiers::parse(Some(",")).is_empty());
        assert!(HomeRealmIdentifiers::parse(None).is_empty());
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        assert_eq!(
            HomeRealmIdentifiers::parse(Some(" a , b")),
            ids(&[" a ", " b"])
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(ids(&["a", "b"]).to_joined().as_deref(), Some("a,b"));
        assert_eq!(ids(&[]).to_joined(), None);
    }

    #[test]
    fn test_insert_bounds() {
        let mut list = ids(&["a"]);
        assert!(list.insert(1, "b".to_string()));
        assert!(!list.insert(3, "c".to_string()));
        assert_eq!(list, ids(&["a", "b"]));
    }

    #[test]
    fn test_replace_and_remove_bounds() {
        let mut list = ids(&["a", "b"]);
        assert!(!list.replace(2, "c".to_string()));
        assert_eq!(list.remove(2), None);
        assert_eq!(list.remove(0).as_deref(), Some("a"));
        assert_eq!(list, ids(&["b"]));
    }
}
