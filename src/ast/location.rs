//! Shared node header: `loc`/`range` (spec.md §3.2, §6.4).
//!
//! Every node variant embeds one [`NodeMeta`] via `#[serde(flatten)]` rather than each variant
//! re-deriving its own location handling — this is the "single common header" design called out
//! in spec.md §9 ("Position assignment").

use serde::{Deserialize, Serialize};

/// 1-indexed line, 0-indexed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NodeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[usize; 2]>,
}

impl NodeMeta {
    /// Populate `loc`/`range` from the first and last token spanned by a node, honoring
    /// whichever of the two options the caller requested (spec.md §6.4).
    pub fn from_tokens(
        want_loc: bool,
        want_range: bool,
        first: &crate::scanner::Token,
        last: &crate::scanner::Token,
    ) -> Self {
        let loc = want_loc.then(|| SourceLocation {
            start: Position {
                line: first.line,
                column: first.column,
            },
            end: Position {
                line: last.line,
                column: last.column + (last.end - last.start),
            },
        });
        let range = want_range.then(|| [first.start, last.end]);
        Self { loc, range }
    }
}
