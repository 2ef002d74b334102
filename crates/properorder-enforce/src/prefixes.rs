/// Name prefixes that mark a free function as a constructor.
///
/// Injected into the validator as an immutable value; the default set is
/// `New`, `Parse`, `new`, `parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorPrefixes {
    prefixes: Vec<String>,
}

pub const DEFAULT_CONSTRUCTOR_PREFIXES: [&str; 4] = ["New", "Parse", "new", "parse"];

impl Default for ConstructorPrefixes {
    fn default() -> Self {
        Self::new(DEFAULT_CONSTRUCTOR_PREFIXES)
    }
}

impl ConstructorPrefixes {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// True if `name` starts with any configured prefix.
    pub fn matches(&self, name: &str) -> bool {
        self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}
