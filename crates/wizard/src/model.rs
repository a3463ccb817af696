use crate::interaction::Choice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An enumerated answer with a stored value and a display label
pub trait Choosable: Copy + Eq + Sized + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];
    const DEFAULT: Self;

    fn value(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == value)
    }

    fn choices() -> Vec<Choice> {
        Self::ALL
            .iter()
            .map(|c| Choice::new(c.label(), c.value()))
            .collect()
    }

    fn default_index() -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == Self::DEFAULT)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JavaVersion {
    #[serde(rename = "21")]
    V21,
    #[serde(rename = "17")]
    V17,
    #[serde(rename = "11")]
    V11,
    #[serde(rename = "8")]
    V8,
}

impl Choosable for JavaVersion {
    const ALL: &'static [Self] = &[Self::V21, Self::V17, Self::V11, Self::V8];
    const DEFAULT: Self = Self::V17;

    fn value(self) -> &'static str {
        match self {
            Self::V21 => "21",
            Self::V17 => "17",
            Self::V11 => "11",
            Self::V8 => "8",
        }
    }

    fn label(self) -> &'static str {
        self.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildTool {
    Maven,
    Gradle,
    GradleKotlin,
}

impl Choosable for BuildTool {
    const ALL: &'static [Self] = &[Self::Maven, Self::Gradle, Self::GradleKotlin];
    const DEFAULT: Self = Self::Maven;

    fn value(self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Gradle => "gradle",
            Self::GradleKotlin => "gradle-kotlin",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Maven => "Maven",
            Self::Gradle => "Gradle - Groovy",
            Self::GradleKotlin => "Gradle - Kotlin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    Jar,
    War,
}

impl Choosable for Packaging {
    const ALL: &'static [Self] = &[Self::Jar, Self::War];
    const DEFAULT: Self = Self::Jar;

    fn value(self) -> &'static str {
        match self {
            Self::Jar => "jar",
            Self::War => "war",
        }
    }

    fn label(self) -> &'static str {
        self.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigurationType {
    Properties,
    Yaml,
}

impl Choosable for ConfigurationType {
    const ALL: &'static [Self] = &[Self::Properties, Self::Yaml];
    const DEFAULT: Self = Self::Properties;

    fn value(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Yaml => "yaml",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::Yaml => "YAML",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    None,
    Postgresql,
    Mysql,
    H2,
    Mongodb,
    Oracle,
    Sqlserver,
    Mariadb,
}

impl Database {
    /// Catalog id of the driver pre-selected for this database
    pub fn driver_dependency(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Postgresql => Some("postgresql"),
            Self::Mysql => Some("mysql"),
            Self::H2 => Some("h2"),
            Self::Mongodb => Some("data-mongodb"),
            Self::Oracle => Some("oracle"),
            Self::Sqlserver => Some("sqlserver"),
            Self::Mariadb => Some("mariadb"),
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl Choosable for Database {
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Postgresql,
        Self::Mysql,
        Self::H2,
        Self::Mongodb,
        Self::Oracle,
        Self::Sqlserver,
        Self::Mariadb,
    ];
    const DEFAULT: Self = Self::None;

    fn value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::H2 => "h2",
            Self::Mongodb => "mongodb",
            Self::Oracle => "oracle",
            Self::Sqlserver => "sqlserver",
            Self::Mariadb => "mariadb",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Postgresql => "PostgreSQL",
            Self::Mysql => "MySQL",
            Self::H2 => "H2 (Embedded)",
            Self::Mongodb => "MongoDB",
            Self::Oracle => "Oracle",
            Self::Sqlserver => "SQL Server",
            Self::Mariadb => "MariaDB",
        }
    }
}

macro_rules! display_by_value {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        })+
    };
}

display_by_value!(JavaVersion, BuildTool, Packaging, ConfigurationType, Database);

/// Identity fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdentity {
    pub project_name: String,
    pub group: String,
    pub artifact: String,
    pub description: String,
    pub package_name: String,
}

/// Technical stack fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalStack {
    pub java_version: JavaVersion,
    pub spring_boot_version: String,
    pub build_tool: BuildTool,
    pub packaging: Packaging,
    pub configuration_type: ConfigurationType,
}

/// De-duplicated set of catalog ids. Keeps first-insertion order for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencySelection(Vec<String>);

impl DependencySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the id was already present
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    /// Set union keyed by id
    pub fn union(&self, other: &DependencySelection) -> DependencySelection {
        let mut merged = self.clone();
        merged.extend(other.iter().map(str::to_string));
        merged
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Extend<String> for DependencySelection {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl FromIterator<String> for DependencySelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut selection = Self::new();
        selection.extend(iter);
        selection
    }
}

impl<'a> FromIterator<&'a str> for DependencySelection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// The single artifact handed to the generator.
///
/// Built once from the four stage fragments and never mutated. The fragments
/// are separate types with distinct field names, so the flattened record
/// cannot have colliding keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    #[serde(flatten)]
    identity: ProjectIdentity,
    #[serde(flatten)]
    stack: TechnicalStack,
    database: Database,
    dependencies: DependencySelection,
}

impl ProjectConfiguration {
    pub fn assemble(
        identity: ProjectIdentity,
        stack: TechnicalStack,
        database: Database,
        dependencies: DependencySelection,
    ) -> Self {
        Self {
            identity,
            stack,
            database,
            dependencies,
        }
    }

    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    pub fn stack(&self) -> &TechnicalStack {
        &self.stack
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn dependencies(&self) -> &DependencySelection {
        &self.dependencies
    }
}
