use crate::catalog::DependencyCatalogEntry;
use serde::Deserialize;

/// The subset of the Initializr client metadata the wizard reads
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataDocument {
    #[serde(rename = "bootVersion")]
    pub boot_version: BootVersions,
    pub dependencies: DependencyGroups,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootVersions {
    pub values: Vec<VersionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionEntry {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyGroups {
    pub values: Vec<DependencyGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyGroup {
    pub name: String,
    pub values: Vec<DependencyItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Snapshots and milestones are never offered.
pub fn is_release_version(version: &str) -> bool {
    !version.contains("SNAPSHOT") && !version.contains('M')
}

impl MetadataDocument {
    /// Release versions in document order
    pub fn release_versions(&self) -> Vec<String> {
        self.boot_version
            .values
            .iter()
            .map(|v| v.id.as_str())
            .filter(|id| is_release_version(id))
            .map(str::to_string)
            .collect()
    }

    /// Flatten the grouped dependencies, keeping document order
    pub fn catalog(&self) -> Vec<DependencyCatalogEntry> {
        self.dependencies
            .values
            .iter()
            .flat_map(|group| {
                group.values.iter().map(move |dep| DependencyCatalogEntry {
                    name: dep.name.clone(),
                    value: dep.id.clone(),
                    description: dep.description.clone().unwrap_or_default(),
                    group: group.name.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "bootVersion": {
            "type": "single-select",
            "default": "3.4.1",
            "values": [
                {"id": "3.5.0-SNAPSHOT", "name": "3.5.0 (SNAPSHOT)"},
                {"id": "3.5.0-M1", "name": "3.5.0 (M1)"},
                {"id": "3.4.2-SNAPSHOT", "name": "3.4.2 (SNAPSHOT)"},
                {"id": "3.4.1", "name": "3.4.1"},
                {"id": "3.3.7", "name": "3.3.7"}
            ]
        },
        "dependencies": {
            "type": "hierarchical-multi-select",
            "values": [
                {
                    "name": "Developer Tools",
                    "values": [
                        {"id": "devtools", "name": "Spring Boot DevTools", "description": "Fast restarts"},
                        {"id": "lombok", "name": "Lombok"}
                    ]
                },
                {
                    "name": "Web",
                    "values": [
                        {"id": "web", "name": "Spring Web", "description": "Spring MVC"}
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn release_versions_drop_snapshots_and_milestones() {
        let doc: MetadataDocument = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.release_versions(), vec!["3.4.1", "3.3.7"]);
    }

    #[test]
    fn catalog_flattens_groups_in_order() {
        let doc: MetadataDocument = serde_json::from_str(SAMPLE).unwrap();
        let catalog = doc.catalog();
        let ids: Vec<&str> = catalog.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(ids, vec!["devtools", "lombok", "web"]);
        assert_eq!(catalog[1].description, "");
        assert_eq!(catalog[1].group, "Developer Tools");
        assert_eq!(catalog[2].group, "Web");
    }

    #[test]
    fn missing_sections_are_rejected() {
        let err = serde_json::from_str::<MetadataDocument>(r#"{"bootVersion": {"values": []}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn release_filter() {
        assert!(is_release_version("3.4.1"));
        assert!(is_release_version("3.5.0-RC1"));
        assert!(!is_release_version("3.5.0-M2"));
        assert!(!is_release_version("3.4.2-SNAPSHOT"));
    }
}
