use serde::{Deserialize, Serialize};

/// One selectable add-on module. `value` is the unique id used for
/// selection and de-duplication everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCatalogEntry {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
    /// Display category
    pub group: String,
}

impl DependencyCatalogEntry {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: description.into(),
            group: group.into(),
        }
    }
}

/// Static data served when the remote document is unavailable.
///
/// Versions are ordered newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackCatalog {
    /// Label identifying when the table was last refreshed
    pub revision: String,
    pub versions: Vec<String>,
    pub dependencies: Vec<DependencyCatalogEntry>,
}

impl FallbackCatalog {
    /// The table shipped with the tool
    pub fn builtin() -> Self {
        let versions = ["3.4.1", "3.3.6", "3.2.11", "3.1.18", "2.7.18"]
            .into_iter()
            .map(str::to_string)
            .collect();

        let dependencies = vec![
            DependencyCatalogEntry::new(
                "Spring Web",
                "web",
                "Build web applications with Spring MVC",
                "Web",
            ),
            DependencyCatalogEntry::new(
                "Spring Data JPA",
                "data-jpa",
                "Persist data in SQL stores with Java Persistence API",
                "SQL",
            ),
            DependencyCatalogEntry::new(
                "Spring Security",
                "security",
                "Secure your application",
                "Security",
            ),
            DependencyCatalogEntry::new(
                "Lombok",
                "lombok",
                "Java annotation library",
                "Developer Tools",
            ),
            DependencyCatalogEntry::new(
                "Validation",
                "validation",
                "Bean Validation with Hibernate validator",
                "I/O",
            ),
            DependencyCatalogEntry::new(
                "Spring Boot Actuator",
                "actuator",
                "Production ready features",
                "Ops",
            ),
            DependencyCatalogEntry::new(
                "Spring Boot DevTools",
                "devtools",
                "Fast application restarts",
                "Developer Tools",
            ),
            DependencyCatalogEntry::new(
                "PostgreSQL Driver",
                "postgresql",
                "PostgreSQL JDBC driver",
                "SQL",
            ),
            DependencyCatalogEntry::new("MySQL Driver", "mysql", "MySQL JDBC driver", "SQL"),
            DependencyCatalogEntry::new("H2 Database", "h2", "In-memory database", "SQL"),
            DependencyCatalogEntry::new(
                "MongoDB",
                "data-mongodb",
                "MongoDB NoSQL database",
                "NoSQL",
            ),
        ];

        Self {
            revision: "2024-12".to_string(),
            versions,
            dependencies,
        }
    }
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
