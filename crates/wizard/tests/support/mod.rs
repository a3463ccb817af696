#![allow(dead_code)]

use async_trait::async_trait;
use springboot_metadata::{
    DependencyCatalogEntry, FallbackCatalog, MetadataDocument, MetadataProvider, MetadataSource,
    OfflineSource,
};

/// Serves a fixed document
pub struct StaticSource(pub MetadataDocument);

#[async_trait]
impl MetadataSource for StaticSource {
    async fn fetch_document(&self) -> springboot_metadata::Result<MetadataDocument> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

pub fn document(versions: &[&str], groups: &[(&str, &[(&str, &str)])]) -> MetadataDocument {
    let groups: Vec<serde_json::Value> = groups
        .iter()
        .map(|(name, deps)| {
            let values: Vec<serde_json::Value> = deps
                .iter()
                .map(|(id, dep_name)| {
                    serde_json::json!({"id": id, "name": dep_name, "description": ""})
                })
                .collect();
            serde_json::json!({"name": name, "values": values})
        })
        .collect();
    let versions: Vec<serde_json::Value> = versions
        .iter()
        .map(|v| serde_json::json!({"id": v}))
        .collect();
    serde_json::from_value(serde_json::json!({
        "bootVersion": {"values": versions},
        "dependencies": {"values": groups},
    }))
    .expect("valid document")
}

pub fn remote_provider(document: MetadataDocument) -> MetadataProvider {
    MetadataProvider::new(Box::new(StaticSource(document)), FallbackCatalog::builtin())
}

pub fn offline_provider() -> MetadataProvider {
    MetadataProvider::new(Box::new(OfflineSource), FallbackCatalog::builtin())
}

pub fn entry(value: &str, name: &str, description: &str, group: &str) -> DependencyCatalogEntry {
    DependencyCatalogEntry::new(name, value, description, group)
}

/// Small catalog spanning popular and non-popular ids
pub fn sample_catalog() -> Vec<DependencyCatalogEntry> {
    vec![
        entry("web", "Spring Web", "Build web apps with Spring MVC", "Web"),
        entry("webflux", "Spring Reactive Web", "Reactive web applications", "Web"),
        entry("security", "Spring Security", "Secure your application", "Security"),
        entry("data-jpa", "Spring Data JPA", "Persist data with JPA", "SQL"),
        entry("postgresql", "PostgreSQL Driver", "PostgreSQL JDBC driver", "SQL"),
        entry("mysql", "MySQL Driver", "MySQL JDBC driver", "SQL"),
        entry("flyway", "Flyway Migration", "Version control for your database", "SQL"),
        entry("kafka", "Spring for Apache Kafka", "Publish and subscribe", "Messaging"),
        entry("amqp", "Spring for RabbitMQ", "AMQP messaging", "Messaging"),
        entry("lombok", "Lombok", "Java annotation library", "Developer Tools"),
    ]
}
