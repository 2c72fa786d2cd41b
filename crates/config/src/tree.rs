//! The action tree: groups and leaf actions keyed by single characters.

use serde::{Deserialize, Serialize};

/// What a leaf action does when triggered.
///
/// Kinds the executor does not recognize deserialize to `Unknown` instead of
/// failing the whole config; executors must report them without crashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Launch an application bundle by file path.
    Application,
    /// Open a URI string.
    Url,
    /// Run a shell command string.
    Command,
    /// Reveal a path in the file browser.
    Folder,
    /// Any kind this build does not know about.
    Unknown,
}

impl<'de> Deserialize<'de> for ActionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "application" => Self::Application,
            "url" => Self::Url,
            "command" => Self::Command,
            "folder" => Self::Folder,
            _ => Self::Unknown,
        })
    }
}

/// A leaf: pressing `key` at this level triggers the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Logical character that triggers this action (case-sensitive).
    pub key: char,
    /// What kind of side effect to perform.
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Kind-specific payload: path, URI, or command text.
    pub value: String,
    /// Optional human-readable label for cheatsheet display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A group: pressing `key` descends into `actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Logical character that enters this group (case-sensitive).
    pub key: char,
    /// Display label shown while the group is active.
    #[serde(default)]
    pub label: String,
    /// Ordered children. Sibling keys are unique by convention; on violation
    /// the first match in order wins (see `validate`).
    ///
    /// Required on disk: the presence of `actions` is what distinguishes a
    /// group from a leaf under the untagged [`Entry`] representation.
    pub actions: Vec<Entry>,
}

/// One entry in a sibling list: either a nested group or a leaf action.
///
/// On disk a group carries an `actions` array and a leaf carries a `value`
/// string, which is enough to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A nested group.
    Group(Group),
    /// A leaf action.
    Act(Action),
}

impl Entry {
    /// The logical character bound to this entry.
    pub fn key(&self) -> char {
        match self {
            Self::Group(g) => g.key,
            Self::Act(a) => a.key,
        }
    }
}

/// Immutable root of the configured hierarchy.
///
/// Owned by the configuration subsystem and shared read-only with the
/// dispatch core for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionTree {
    /// Top-level entries, active when no group has been entered.
    root: Vec<Entry>,
}

/// On-disk shape of the root object: a group whose `key` is irrelevant.
#[derive(Deserialize)]
struct RawRoot {
    /// Top-level entries.
    #[serde(default)]
    actions: Vec<Entry>,
}

impl<'de> Deserialize<'de> for ActionTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawRoot::deserialize(deserializer)?;
        Ok(Self { root: raw.actions })
    }
}

impl ActionTree {
    /// Construct a tree from top-level entries.
    pub fn new(root: Vec<Entry>) -> Self {
        Self { root }
    }

    /// Top-level sibling list.
    pub fn root(&self) -> &[Entry] {
        &self.root
    }

    /// Resolve the sibling list at an index path. Returns the root list for
    /// an empty path and `None` when the path points through a non-group.
    pub fn entries_at(&self, path: &[u32]) -> Option<&[Entry]> {
        let mut cur = self.root.as_slice();
        for idx in path {
            match cur.get(*idx as usize) {
                Some(Entry::Group(g)) => cur = &g.actions,
                _ => return None,
            }
        }
        Some(cur)
    }

    /// Resolve the group at an index path. `None` for the empty path (the
    /// root is not itself a keyed group) or an invalid path.
    pub fn group_at(&self, path: &[u32]) -> Option<&Group> {
        let (last, parents) = path.split_last()?;
        let siblings = self.entries_at(parents)?;
        match siblings.get(*last as usize) {
            Some(Entry::Group(g)) => Some(g),
            _ => None,
        }
    }

    /// First entry bound to `key` within the sibling list at `path`.
    pub fn lookup(&self, path: &[u32], key: char) -> Option<(usize, &Entry)> {
        first_match(self.entries_at(path)?, key)
    }
}

/// Find the first sibling bound to `key`, with its index.
///
/// Linear scan in declaration order; sibling lists are small and human
/// curated. When siblings collide on a key the first one wins.
fn first_match(entries: &[Entry], key: char) -> Option<(usize, &Entry)> {
    entries.iter().enumerate().find(|(_, e)| e.key() == key)
}
