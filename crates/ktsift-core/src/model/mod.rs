use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three classifications a scanned file can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "DATA_CLASSES")]
    DataClasses,
    #[serde(rename = "VIEWMODELS")]
    Viewmodels,
    #[serde(rename = "SCREENS")]
    Screens,
}

impl Category {
    /// Report order. Output always renders categories in this sequence.
    pub const ALL: [Category; 3] = [Category::DataClasses, Category::Viewmodels, Category::Screens];

    pub fn label(&self) -> &'static str {
        match self {
            Category::DataClasses => "DATA_CLASSES",
            Category::Viewmodels => "VIEWMODELS",
            Category::Screens => "SCREENS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a rule decides membership: literal containment or a regex search.
/// Both are pure functions of the file's full decoded text.
#[derive(Debug, Clone)]
pub enum Matcher {
    Substring(String),
    Pattern(regex::Regex),
}

impl Matcher {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Substring(needle) => text.contains(needle.as_str()),
            Matcher::Pattern(re) => re.is_match(text),
        }
    }

    /// The literal or pattern source, for display in `rules` output.
    pub fn source(&self) -> &str {
        match self {
            Matcher::Substring(needle) => needle,
            Matcher::Pattern(re) => re.as_str(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Matcher::Substring(_) => "substring",
            Matcher::Pattern(_) => "regex",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub category: Category,
    pub matcher: Matcher,
    pub description: String,
}

impl Rule {
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}
