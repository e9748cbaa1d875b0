//! Script class assets.

use crate::property::{ObjectProperties, PropertyValue};

/// A loaded script class: optional raw source text plus the default-property
/// object that seeds every instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassAsset {
    /// Class name.
    pub name: String,
    /// Raw script source, if the package still carries it. Absent text means
    /// the class has nothing to export.
    pub script_text: Option<String>,
    /// The class's default-property object.
    pub defaults: ObjectProperties,
    /// Defaults of the base structure, consulted when the class is the root
    /// metaclass and so is its own class.
    pub parent_defaults: Option<ObjectProperties>,
}

impl ClassAsset {
    /// A class with the given name and no script text.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            defaults: ObjectProperties::new(name.clone()),
            name,
            script_text: None,
            parent_defaults: None,
        }
    }

    /// Resolves the default value of `name[index]`, falling back to the
    /// parent defaults for elements the class itself does not carry.
    pub fn default_value(&self, name: &str, index: usize) -> Option<&PropertyValue> {
        if let Some(value) = self.defaults.entry(name).and_then(|e| e.value(index)) {
            return Some(value);
        }
        self.parent_defaults
            .as_ref()
            .and_then(|p| p.entry(name))
            .and_then(|e| e.value(index))
    }
}
