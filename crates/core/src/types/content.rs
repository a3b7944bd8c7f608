//! Admin-manageable content kinds.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the three content kinds managed from the admin panel.
///
/// The kind selects which REST collection a CRUD operation targets and
/// which form variant the content controller edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[default]
    Missions,
    Quizzes,
    Tips,
}

impl ContentKind {
    /// All kinds, in the order the admin panel presents them.
    pub const ALL: [Self; 3] = [Self::Missions, Self::Quizzes, Self::Tips];

    /// Returns the collection name as used in REST paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missions => "missions",
            Self::Quizzes => "quizzes",
            Self::Tips => "tips",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "missions" | "mission" => Ok(Self::Missions),
            "quizzes" | "quiz" => Ok(Self::Quizzes),
            "tips" | "tip" => Ok(Self::Tips),
            other => Err(UnknownContentKind(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unrecognised content kind.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown content kind: {0}")]
pub struct UnknownContentKind(pub String);
