//! Repository entity and project-card classification
//!
//! A `RepositorySummary` is what the hosting provider's listing API returns for
//! one public repository. `ProjectCard` is its display projection.

use serde::{Deserialize, Deserializer, Serialize};

/// Names containing this marker are GitHub Pages sites, not projects
pub const PAGES_SITE_MARKER: &str = ".github.io";

/// Maximum number of topics shown as tags on a card
pub const MAX_TOPIC_TAGS: usize = 3;

const NO_DESCRIPTION: &str = "No description available.";

/// Keyword rules checked in order; the first rule with a hit decides the category
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Web, &["web", "react", "vue", "angular"]),
    (
        Category::Mobile,
        &["mobile", "android", "ios", "react-native"],
    ),
    (
        Category::Gamedev,
        &["game", "game dev", "game development", "unity", "godot"],
    ),
];

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// GitHub serves `homepage` as null or "" when unset
fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Metadata for one hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub topics: Vec<String>,
    pub html_url: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub fork: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub archived: bool,
}

impl RepositorySummary {
    /// Whether this repository belongs on the portfolio at all
    pub fn is_showcase(&self) -> bool {
        !self.fork && !self.archived && !self.name.contains(PAGES_SITE_MARKER)
    }
}

/// Display bucket for a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Gamedev,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Gamedev => "gamedev",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" => Ok(Category::Web),
            "mobile" => Ok(Category::Mobile),
            "gamedev" => Ok(Category::Gamedev),
            "other" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// Which cards to show: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Result of classifying one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub tags: Vec<String>,
}

/// Assign a display category and tags to a repository.
///
/// Each rule matches case-insensitively against the name and the description
/// (absent description reads as empty). Tags are the language, if any, then at
/// most the first three topics.
pub fn classify(repo: &RepositorySummary) -> Classification {
    let haystack = format!(
        "{}\n{}",
        repo.name,
        repo.description.as_deref().unwrap_or("")
    )
    .to_lowercase();

    let category = CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other);

    let tags = repo
        .language
        .iter()
        .chain(repo.topics.iter().take(MAX_TOPIC_TAGS))
        .cloned()
        .collect();

    Classification { category, tags }
}

/// Display projection of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub name: String,
    /// Name with `-` and `_` turned into spaces
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub html_url: String,
    pub homepage: Option<String>,
}

impl From<&RepositorySummary> for ProjectCard {
    fn from(repo: &RepositorySummary) -> Self {
        let Classification { category, tags } = classify(repo);

        ProjectCard {
            name: repo.name.clone(),
            title: repo.name.replace(['-', '_'], " "),
            description: repo
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            category,
            tags,
            html_url: repo.html_url.clone(),
            homepage: repo.homepage.clone(),
        }
    }
}
