use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of argument keys to raw string values
///
/// Keeps the order in which keys first appeared in the command. Inserting an
/// existing key replaces its value without moving it. Values are never
/// coerced; typing them is left to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments {
    entries: IndexMap<String, String>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key ignoring ASCII case
    pub fn get_ignore_ascii_case(&self, key: &str) -> Option<&str> {
        // keys are normally lower-cased already
        self.get(&key.to_ascii_lowercase()).or_else(|| {
            self.entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str())
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_first_position() {
        let mut args = Arguments::new();
        args.insert("recipients", "list");
        args.insert("campaignid", "123");
        let previous = args.insert("recipients", "vip");

        assert_eq!(previous.as_deref(), Some("list"));
        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["recipients", "campaignid"]);
        assert_eq!(args.get("recipients"), Some("vip"));
    }

    #[test]
    fn test_get_ignore_ascii_case() {
        let args: Arguments = [("layoutprompt", "minimal")].into_iter().collect();
        assert_eq!(args.get("layoutPrompt"), None);
        assert_eq!(args.get_ignore_ascii_case("layoutPrompt"), Some("minimal"));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let args: Arguments = [("zeta", "1"), ("alpha", "2")].into_iter().collect();
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2"}"#);
    }

    #[test]
    fn test_duplicate_key_in_iterator_keeps_first_position() {
        let args: Arguments = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(args.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let args: Arguments = serde_json::from_str(r#"{"b":"x","a":"y"}"#).unwrap();
        assert_eq!(args.iter().collect::<Vec<_>>(), vec![("b", "x"), ("a", "y")]);
    }
}
