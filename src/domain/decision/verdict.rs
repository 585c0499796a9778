//! Verdict enum - the only answer the decision engine produces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary answer to a question.
///
/// There is no third state: failures surface at the transport layer,
/// never as a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    /// Maps `true` to `Yes` and `false` to `No`.
    pub fn from_bool(yes: bool) -> Self {
        if yes {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }

    /// Wire literal for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "YES",
            Verdict::No => "NO",
        }
    }

    /// Glyph shown next to the verdict.
    pub fn emoji(&self) -> &'static str {
        match self {
            Verdict::Yes => "✅",
            Verdict::No => "❌",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
