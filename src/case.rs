//! Case data model shared by the parser, the writer and the harness.
//!
//! A [`Case`] is a comment plus a flat mapping of named string fields. A
//! [`CaseList`] keeps cases in file order. Field order inside a case carries no
//! meaning; output order is always chosen by the caller at write time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to value. Values are plain strings and may span several lines.
pub type Fields = BTreeMap<String, String>;

// =============================================================================
// CASE
// =============================================================================

/// One test scenario read from a case file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Contiguous `#` lines joined with `\n`, including their `#` prefixes.
    /// Empty when the case has no comment block.
    pub comment: String,
    pub fields: Fields,
}

impl Case {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            fields: Fields::new(),
        }
    }

    /// Builder-style helper, mostly for tests.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// True when the case has neither a comment nor any fields.
    pub fn is_empty(&self) -> bool {
        self.comment.is_empty() && self.fields.is_empty()
    }

    /// Removes every field named in `names`, returning the ones that were present.
    pub fn take_fields(&mut self, names: &[&str]) -> Fields {
        let mut taken = Fields::new();
        for name in names {
            if let Some(value) = self.fields.remove(*name) {
                taken.insert((*name).to_string(), value);
            }
        }
        taken
    }

    /// Inserts every entry of `fields`, overwriting existing values.
    pub fn merge_fields(&mut self, fields: &Fields) {
        for (name, value) in fields {
            self.fields.insert(name.clone(), value.clone());
        }
    }
}

// =============================================================================
// CASE LIST
// =============================================================================

/// All cases of one file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseList {
    pub cases: Vec<Case>,
}

impl CaseList {
    pub fn new(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Case> {
        self.cases.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Case> {
        self.cases.iter_mut()
    }
}

impl From<Vec<Case>> for CaseList {
    fn from(cases: Vec<Case>) -> Self {
        Self { cases }
    }
}

impl<'a> IntoIterator for &'a CaseList {
    type Item = &'a Case;
    type IntoIter = std::slice::Iter<'a, Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

impl<'a> IntoIterator for &'a mut CaseList {
    type Item = &'a mut Case;
    type IntoIter = std::slice::IterMut<'a, Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter_mut()
    }
}

impl IntoIterator for CaseList {
    type Item = Case;
    type IntoIter = std::vec::IntoIter<Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}
