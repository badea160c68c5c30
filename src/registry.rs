use indexmap::IndexMap;

/// Struct base name → chained-struct subtype enumerant, for one run.
///
/// Filled by the same forward scan that reads struct bodies, so an enumerant
/// only tags structs declared after it.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    tags: IndexMap<String, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name → token`. The first registration of a name wins; returns
    /// whether this call inserted.
    pub fn register(&mut self, name: &str, token: &str) -> bool {
        if self.tags.contains_key(name) {
            return false;
        }
        self.tags.insert(name.to_string(), token.to_string());
        true
    }

    pub fn tag_of(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    pub fn is_tagged(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
