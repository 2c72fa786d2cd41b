//! Structural checks run once at load time.
//!
//! Dispatch never validates: colliding sibling keys stay first-match-wins and
//! a `?` binding is simply unreachable. These checks exist so the user hears
//! about both while the config loads instead of at the keyboard.

use std::{collections::HashSet, fmt};

use crate::{ActionTree, Entry};

/// The character reserved for the help/cheatsheet trigger. It is checked
/// before any tree lookup, so entries bound to it can never match.
pub const HELP_KEY: char = '?';

/// A non-fatal finding about the configured tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two entries in one sibling list share a key; the first wins.
    DuplicateSiblingKey {
        /// Key path of the containing group ("root" for the top level).
        group: String,
        /// The colliding key.
        key: char,
    },
    /// An entry is bound to the reserved help key and is unreachable.
    ShadowedHelpKey {
        /// Key path of the containing group.
        group: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSiblingKey { group, key } => write!(
                f,
                "duplicate key '{}' under {}; the first entry wins",
                key, group
            ),
            Self::ShadowedHelpKey { group } => write!(
                f,
                "entry under {} is bound to '{}', which always shows help and never matches",
                group, HELP_KEY
            ),
        }
    }
}

/// Walk the tree and collect findings. Never mutates or rejects anything.
pub fn validate(tree: &ActionTree) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_siblings(tree.root(), "root", &mut issues);
    issues
}

/// Check one sibling list, then recurse into child groups.
fn check_siblings(entries: &[Entry], group: &str, issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashSet<char> = HashSet::new();
    for entry in entries {
        let key = entry.key();
        if key == HELP_KEY {
            issues.push(ValidationIssue::ShadowedHelpKey {
                group: group.to_string(),
            });
        }
        if !seen.insert(key) {
            issues.push(ValidationIssue::DuplicateSiblingKey {
                group: group.to_string(),
                key,
            });
        }
        if let Entry::Group(g) = entry {
            let label = format!("{} > {}", group, g.key);
            check_siblings(&g.actions, &label, issues);
        }
    }
}
