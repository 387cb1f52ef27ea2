use std::collections::HashMap;

/// Admin-configured default strings, keyed by setting name.
///
/// The store is filled by whoever loads the plugin settings and is only read
/// by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings(pub HashMap<String, String>);

impl Settings {
    pub fn new() -> Self {
        Settings(HashMap::new())
    }
    pub fn with_setting(&mut self, key: &str, value: &str) -> &mut Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }
    pub fn get_setting(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    pub fn get_settings(&self) -> &HashMap<String, String> {
        &self.0
    }
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored value with slashes stripped, or an empty string when the key is unknown.
    pub fn get_unslashed(&self, key: &str) -> String {
        self.0
            .get(key)
            .map(|value| strip_slashes(value))
            .unwrap_or_default()
    }
}

impl From<HashMap<String, String>> for Settings {
    fn from(map: HashMap<String, String>) -> Self {
        Settings(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Settings(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Remove backslash escaping from a stored value
///
/// Settings saved through the admin screen carry escaped quotes and
/// backslashes. A backslash followed by any character yields that character,
/// except `\0` which yields NUL. A trailing lone backslash is dropped.
///
/// # Example
///
/// ```ignore
/// assert_eq!(strip_slashes(r"Joe\'s"), "Joe's");
/// assert_eq!(strip_slashes(r"C:\\path"), r"C:\path");
/// ```
pub fn strip_slashes(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => result.push('\0'),
            Some(escaped) => result.push(escaped),
            None => {}
        }
    }
    result
}
