//! Binding entity: one alias mapped to one target URL.

/// A persisted alias→target binding.
///
/// `id` is assigned by the store, strictly increasing and never reused.
/// `alias` is unique among live bindings and case-sensitive. `target` is opaque
/// to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub id: i64,
    pub alias: String,
    pub target: String,
}

impl Binding {
    /// Creates a new Binding instance.
    pub fn new(id: i64, alias: String, target: String) -> Self {
        Self { id, alias, target }
    }
}

/// Input data for inserting a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBinding {
    pub alias: String,
    pub target: String,
}

impl NewBinding {
    pub fn new(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
        }
    }

    /// Attaches the id assigned by storage.
    pub fn into_binding(self, id: i64) -> Binding {
        Binding::new(id, self.alias, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_creation() {
        let binding = Binding::new(1, "google".to_string(), "https://google.com".to_string());

        assert_eq!(binding.id, 1);
        assert_eq!(binding.alias, "google");
        assert_eq!(binding.target, "https://google.com");
    }

    #[test]
    fn test_new_binding_into_binding() {
        let binding = NewBinding::new("x", "https://x.com").into_binding(42);

        assert_eq!(binding, Binding::new(42, "x".into(), "https://x.com".into()));
    }
}
