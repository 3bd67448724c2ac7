//! Title markers that flag long-form "deep dive" games.
//!
//! Matching is a case-sensitive substring test. It is a heuristic standing in
//! for catalog genre metadata, so the list is configuration and can be
//! extended per title or replaced wholesale.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeepDiveMarkers(Vec<String>);

impl DeepDiveMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        )
    }

    /// Add one more marker. Empty markers would match every title and are ignored.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if !marker.is_empty() && !self.0.contains(&marker) {
            self.0.push(marker);
        }
        self
    }

    /// The first marker contained in `title`, if any.
    pub fn matching(&self, title: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|m| title.contains(m.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, title: &str) -> bool {
        self.matching(title).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
