use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two lists a task belongs to. Also the app-wide active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    /// Parse a category from user input like "work" or "Travel"
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "work" => Some(Self::Work),
            "travel" => Some(Self::Travel),
            _ => None,
        }
    }

    /// Lowercase tag used on the wire and in the CLI
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Travel => "travel",
        }
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Travel => "Travel",
        }
    }

    /// Prompt shown in the empty input box
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Work => "What do you have to do?",
            Self::Travel => "Where do you want to go?",
        }
    }

    /// The other category
    pub fn other(&self) -> Self {
        match self {
            Self::Work => Self::Travel,
            Self::Travel => Self::Work,
        }
    }

    /// Get all categories in tab order
    pub fn all() -> &'static [Category] {
        &[Category::Work, Category::Travel]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_tag())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unknown category `{}` (expected work or travel)", s))
    }
}

/// UI mode for the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Editing,
    ConfirmDelete,
    ConfirmClear,
}
