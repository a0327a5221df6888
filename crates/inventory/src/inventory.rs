//! Ordered collection of labelled components.

use crate::device::{Component, Device};

/// A component together with the label it is reported under.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    label: String,
    component: Component,
}

impl Entry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Heading line followed by the component's status lines.
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![format!("{} status:", self.label)];
        lines.extend(self.component.status());
        lines
    }
}

/// Components in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    entries: Vec<Entry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component under `label`.
    pub fn push(&mut self, label: impl Into<String>, component: impl Into<Component>) {
        self.entries.push(Entry {
            label: label.into(),
            component: component.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Every entry's report, with an empty line between entries.
    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(entry.report());
        }
        lines
    }
}
