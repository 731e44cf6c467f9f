//! Previous/next navigation for the detail view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which view produced a [`NavigationContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    List,
    Gallery,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::List => "list",
            Provenance::Gallery => "gallery",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Provenance::List),
            "gallery" => Ok(Provenance::Gallery),
            other => Err(format!("unknown view {other:?}")),
        }
    }
}

/// The id order a view showed when an entry was selected.
///
/// Built once at selection time and handed to the detail view as is;
/// later filter changes in the source view do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    ids: Vec<u32>,
    source: Provenance,
}

impl NavigationContext {
    pub fn new(ids: Vec<u32>, source: Provenance) -> Self {
        Self { ids, source }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn source(&self) -> Provenance {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Neighbors of `current` within this sequence.
    ///
    /// An id missing from the sequence has no neighbors. An empty
    /// sequence also yields none; use [`neighbors`] for the fallback.
    pub fn neighbors(&self, current: u32) -> Neighbors {
        let Some(pos) = self.ids.iter().position(|&id| id == current) else {
            return Neighbors::default();
        };
        Neighbors {
            previous: pos.checked_sub(1).map(|p| self.ids[p]),
            next: self.ids.get(pos + 1).copied(),
        }
    }
}

/// Where previous/next lead; `None` means the button is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

impl Neighbors {
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Neighbors for the detail view of `current`.
///
/// With a non-empty context the context decides. Without one (the
/// detail view was opened directly) navigation falls back to adjacent
/// ids in `1..=fallback_max`.
pub fn neighbors(context: Option<&NavigationContext>, current: u32, fallback_max: u32) -> Neighbors {
    match context {
        Some(ctx) if !ctx.is_empty() => ctx.neighbors(current),
        _ => Neighbors {
            previous: current.checked_sub(1).filter(|&id| id >= 1),
            next: (current < fallback_max).then(|| current + 1),
        },
    }
}
