//! Cheat sheet domain model.
//!
//! A [`Catalog`] is one loaded sheet: a title, a description and an ordered list of
//! [`Entry`] values (the YAML calls them `commands`). Catalogs are immutable once
//! loaded and are shared behind an `Arc` between the state machine and the renderer.
//!
//! The [`TagMenu`] is derived from a catalog exactly once per load.

use serde::{Deserialize, Serialize};

/// Label of the sentinel tag that disables tag filtering.
pub const ALL_TAG: &str = "all";

/// A command-line option documented by an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub description: String,
}

/// A worked usage example of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

/// One reference item of a sheet.
///
/// Only `name` is required in the YAML document; every other field defaults to
/// empty so that sparse sheets still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default, rename = "shortDesc")]
    pub short_desc: String,
    #[serde(default)]
    pub syntax: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub related: Vec<String>,
}

impl Entry {
    /// Creates an entry with only a name and short description set.
    #[must_use]
    pub fn new(name: impl Into<String>, short_desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_desc: short_desc.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the entry carries `tag` (case-sensitive, exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Complexity label, treating a blank string the same as an absent one.
    #[must_use]
    pub fn complexity_label(&self) -> Option<&str> {
        self.complexity
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// One loaded cheat sheet.
///
/// # Examples
///
/// ```
/// use cheatsheet_viewer::domain::Catalog;
///
/// let yaml = "title: Git\ndescription: Everyday git\ncommands:\n  - name: git status\n";
/// let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(catalog.entries.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "commands")]
    pub entries: Vec<Entry>,
}

impl Catalog {
    /// Builds the tag menu for this catalog.
    #[must_use]
    pub fn tag_menu(&self) -> TagMenu {
        TagMenu::from_entries(&self.entries)
    }
}

/// Ordered tag labels offered by the horizontal tag strip.
///
/// Always starts with [`ALL_TAG`], followed by every distinct tag found across the
/// entries in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMenu {
    labels: Vec<String>,
}

impl TagMenu {
    /// Collects the distinct tags of `entries` behind the `"all"` sentinel.
    #[must_use]
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut tags: Vec<String> = entries
            .iter()
            .flat_map(|entry| entry.tags.iter().cloned())
            .collect();
        tags.sort_unstable();
        tags.dedup();

        let mut labels = Vec::with_capacity(tags.len() + 1);
        labels.push(ALL_TAG.to_string());
        // A sheet may tag entries "all" itself; the sentinel already covers it.
        labels.extend(tags.into_iter().filter(|tag| tag != ALL_TAG));
        Self { labels }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels, including the sentinel. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `index`, falling back to the sentinel when out of range.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map_or(ALL_TAG, String::as_str)
    }
}

impl Default for TagMenu {
    fn default() -> Self {
        Self {
            labels: vec![ALL_TAG.to_string()],
        }
    }
}
