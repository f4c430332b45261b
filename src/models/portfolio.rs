use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// The whole portfolio, parsed from `portfolio-data.json`.
///
/// Every part is optional at the boundary. A key that is missing, `null`, or
/// of the wrong shape becomes its default value so only the affected section
/// falls back to its empty state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioDocument {
    pub personal: Personal,
    pub about: About,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub contact: ContactInfo,
    pub footer: Option<Footer>,
    pub navigation: Option<Vec<NavItem>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub bio: String,
    #[serde(deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(deserialize_with = "lenient::text")]
    pub resume: String,
    #[serde(deserialize_with = "lenient::object")]
    pub social: Map<String, Value>,
}

impl Personal {
    /// URL for a social key, if present as a non-empty string.
    pub fn social_url(&self, key: &str) -> Option<&str> {
        self.social
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// First word of the name, or `None` when no name is set.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }

    /// Everything after the first word of the name.
    pub fn last_name(&self) -> String {
        self.name.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "lenient::items")]
    pub frontend: Vec<Skill>,
    #[serde(deserialize_with = "lenient::items")]
    pub backend: Vec<Skill>,
    #[serde(deserialize_with = "lenient::items")]
    pub tools: Vec<Skill>,
    #[serde(deserialize_with = "lenient::opt_items")]
    pub languages: Option<Vec<Skill>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Cosmetic only, never rendered.
    #[serde(deserialize_with = "lenient::opt_number")]
    pub level: Option<f64>,
}

/// Entry identifier. The data file uses numbers, but strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Num(i64),
    Text(String),
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryId::Num(n) => write!(f, "{}", n),
            EntryId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Stable render key: the entry id, or its list index when the id is missing.
pub fn entry_key(id: Option<&EntryId>, index: usize) -> String {
    match id {
        Some(EntryId::Text(s)) if s.trim().is_empty() => index.to_string(),
        Some(id) => id.to_string(),
        None => index.to_string(),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::opt")]
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub demo: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "lenient::opt")]
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "lenient::text")]
    pub company: String,
    #[serde(deserialize_with = "lenient::text")]
    pub position: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::opt")]
    pub id: Option<EntryId>,
    #[serde(deserialize_with = "lenient::text")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub gpa: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::texts")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub availability: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub copyright: Option<String>,
    #[serde(deserialize_with = "lenient::items")]
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: &str, label: &str) -> Self {
        NavItem {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// `navigation` is written either as `{"items": [...]}` or as a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum NavigationField {
    Wrapped { items: Vec<NavItem> },
    List(Vec<NavItem>),
}

impl PortfolioDocument {
    /// Parse the raw data file. Fails only when the body is not a JSON object;
    /// malformed parts inside the object are dropped with a warning.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        if !value.is_object() {
            return Err("expected a JSON object at the top level".to_string());
        }
        Ok(Self::from_value(&value))
    }

    pub fn from_value(root: &Value) -> Self {
        let navigation = match root.get("navigation") {
            None | Some(Value::Null) => None,
            Some(v) => match NavigationField::deserialize(v) {
                Ok(NavigationField::Wrapped { items }) | Ok(NavigationField::List(items)) => {
                    Some(items).filter(|items| !items.is_empty())
                }
                Err(e) => {
                    log::warn!("Ignoring malformed `navigation` in portfolio data: {}", e);
                    None
                }
            },
        };

        PortfolioDocument {
            personal: part(root, "personal"),
            about: part(root, "about"),
            skills: part(root, "skills"),
            projects: list(root, "projects"),
            experience: list(root, "experience"),
            education: list(root, "education"),
            contact: part(root, "contact"),
            footer: part(root, "footer"),
            navigation,
        }
    }

    /// Projects flagged for the primary view, in source order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

fn list<T: DeserializeOwned>(root: &Value, key: &str) -> Vec<T> {
    root.get(key)
        .map(|v| lenient::items_of(v, key))
        .unwrap_or_default()
}

fn part<T: DeserializeOwned + Default>(root: &Value, key: &str) -> T {
    match root.get(key) {
        None | Some(Value::Null) => T::default(),
        Some(v) => T::deserialize(v).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed `{}` in portfolio data: {}", key, e);
            T::default()
        }),
    }
}
