//! Rendering surface that receives named style variables.

use std::collections::BTreeMap;

/// Anything that can hold `--name: value` style variables.
pub trait StyleSurface {
    fn set_property(&mut self, name: &str, value: &str);

    /// Current value of a style variable, if set.
    fn property(&self, name: &str) -> Option<&str>;
}

/// Records style variables in a sorted map.
///
/// The terminal front end reads colors back out of it; tests inspect it.
#[derive(Debug, Default, Clone)]
pub struct MemoryStyleSurface {
    properties: BTreeMap<String, String>,
}

impl MemoryStyleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All variables, sorted by name.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleSurface for MemoryStyleSurface {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}
