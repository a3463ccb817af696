//! Dependency selection.
//!
//! ```text
//! AutoSelect ──> Popular ──> AskMore ──no──────────────────────────────┐
//!                               │yes                                   │
//!                               ▼                                      ▼
//!                          MethodChoice ──search──> Search ⟲ ──""──> Done
//!                               │  └────browse──> Browse ─────────────>│
//!                               └───────skip─────────────────────────>─┘
//! ```
//!
//! The running selection only grows; every merge is a set union keyed by
//! catalog id.

use crate::error::{Result, WizardError};
use crate::interaction::{
    ChoiceQuestion, ConfirmQuestion, Interaction, MultiChoiceEntry, MultiChoiceQuestion,
    NoticeLevel, TextQuestion,
};
use crate::model::{Choosable, Database, DependencySelection};
use springboot_metadata::{DependencyCatalogEntry, MetadataProvider};
use std::collections::BTreeMap;
use std::fmt;

/// Ids offered in the first multi-select, in catalog order
pub const POPULAR_DEPENDENCIES: [&str; 7] = [
    "web",
    "data-jpa",
    "security",
    "lombok",
    "validation",
    "actuator",
    "devtools",
];

/// Pre-selected alongside the driver whenever a database is chosen
pub const PERSISTENCE_DEPENDENCY: &str = "data-jpa";

const POPULAR_PAGE_SIZE: usize = 10;
const SEARCH_PAGE_SIZE: usize = 10;
const BROWSE_PAGE_SIZE: usize = 15;

/// Ids pre-selected for `database`, limited to those present in `catalog`
pub fn auto_selection(catalog: &[DependencyCatalogEntry], database: Database) -> DependencySelection {
    let Some(driver) = database.driver_dependency() else {
        return DependencySelection::new();
    };
    [PERSISTENCE_DEPENDENCY, driver]
        .into_iter()
        .filter(|id| catalog.iter().any(|entry| entry.value == *id))
        .collect()
}

pub fn popular_entries(catalog: &[DependencyCatalogEntry]) -> Vec<&DependencyCatalogEntry> {
    catalog
        .iter()
        .filter(|entry| POPULAR_DEPENDENCIES.contains(&entry.value.as_str()))
        .collect()
}

/// Case-insensitive substring match against name, id or description
pub fn matches_term(entry: &DependencyCatalogEntry, term: &str) -> bool {
    let term = term.to_lowercase();
    entry.name.to_lowercase().contains(&term)
        || entry.value.to_lowercase().contains(&term)
        || entry.description.to_lowercase().contains(&term)
}

/// Entries matching `term` that are not in `excluded`
pub fn search_candidates<'a>(
    catalog: &'a [DependencyCatalogEntry],
    excluded: &DependencySelection,
    term: &str,
) -> Vec<&'a DependencyCatalogEntry> {
    catalog
        .iter()
        .filter(|entry| !excluded.contains(&entry.value))
        .filter(|entry| matches_term(entry, term))
        .collect()
}

/// Non-popular, unselected entries grouped by category.
///
/// Categories sort alphabetically; entries keep catalog order.
pub fn browse_sections<'a>(
    catalog: &'a [DependencyCatalogEntry],
    excluded: &DependencySelection,
) -> Vec<(&'a str, Vec<&'a DependencyCatalogEntry>)> {
    let mut grouped: BTreeMap<&str, Vec<&DependencyCatalogEntry>> = BTreeMap::new();
    for entry in catalog {
        if POPULAR_DEPENDENCIES.contains(&entry.value.as_str()) || excluded.contains(&entry.value)
        {
            continue;
        }
        grouped.entry(entry.group.as_str()).or_default().push(entry);
    }
    grouped.into_iter().collect()
}

fn item(entry: &DependencyCatalogEntry, checked: bool) -> MultiChoiceEntry {
    MultiChoiceEntry::Item {
        label: entry.name.clone(),
        value: entry.value.clone(),
        checked,
    }
}

/// How to find dependencies beyond the popular list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMethod {
    Search,
    Browse,
    Skip,
}

impl Choosable for LookupMethod {
    const ALL: &'static [Self] = &[Self::Search, Self::Browse, Self::Skip];
    const DEFAULT: Self = Self::Search;

    fn value(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Browse => "browse",
            Self::Skip => "skip",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Search => "Search by name (type to filter)",
            Self::Browse => "Browse all by category",
            Self::Skip => "Skip",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyState {
    AutoSelect,
    Popular,
    AskMore,
    MethodChoice,
    Search,
    Browse,
    Done,
}

impl fmt::Display for DependencyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AutoSelect => "auto-select",
            Self::Popular => "popular",
            Self::AskMore => "ask-more",
            Self::MethodChoice => "method-choice",
            Self::Search => "search",
            Self::Browse => "browse",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Explicit state machine for the dependency stage.
///
/// Drive it with [`step`](Self::step) one state at a time, or with
/// [`run`](Self::run) to completion.
#[derive(Debug, Clone)]
pub struct DependencyStage {
    catalog: Vec<DependencyCatalogEntry>,
    database: Database,
    state: DependencyState,
    auto_selected: DependencySelection,
    /// Auto-selected plus popular-list picks
    selected: DependencySelection,
    /// Search or browse picks
    additional: DependencySelection,
}

impl DependencyStage {
    pub fn new(catalog: Vec<DependencyCatalogEntry>, database: Database) -> Self {
        Self {
            catalog,
            database,
            state: DependencyState::AutoSelect,
            auto_selected: DependencySelection::new(),
            selected: DependencySelection::new(),
            additional: DependencySelection::new(),
        }
    }

    pub fn state(&self) -> DependencyState {
        self.state
    }

    pub fn auto_selected(&self) -> &DependencySelection {
        &self.auto_selected
    }

    pub fn selected(&self) -> &DependencySelection {
        &self.selected
    }

    pub fn additional(&self) -> &DependencySelection {
        &self.additional
    }

    /// Union of every selection made so far
    pub fn current(&self) -> DependencySelection {
        self.selected.union(&self.additional)
    }

    fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.catalog
            .iter()
            .find(|entry| entry.value == id)
            .map_or(id, |entry| entry.name.as_str())
    }

    /// Handle the current state and move to the next one
    pub fn step(&mut self, ui: &mut dyn Interaction) -> Result<DependencyState> {
        let next = match self.state {
            DependencyState::AutoSelect => self.auto_select(ui),
            DependencyState::Popular => self.popular(ui)?,
            DependencyState::AskMore => self.ask_more(ui)?,
            DependencyState::MethodChoice => self.method_choice(ui)?,
            DependencyState::Search => self.search_round(ui)?,
            DependencyState::Browse => self.browse(ui)?,
            DependencyState::Done => DependencyState::Done,
        };
        if next != self.state {
            log::debug!("dependency stage: {} -> {next}", self.state);
        }
        self.state = next;
        Ok(next)
    }

    /// Step until done, report the count and return the final set
    pub fn run(mut self, ui: &mut dyn Interaction) -> Result<DependencySelection> {
        while self.state != DependencyState::Done {
            self.step(ui)?;
        }
        let selection = self.current();
        if selection.is_empty() {
            ui.notify(NoticeLevel::Info, "No dependencies selected");
        } else {
            ui.notify(
                NoticeLevel::Success,
                &format!("Selected {} total dependencies", selection.len()),
            );
        }
        Ok(selection)
    }

    fn auto_select(&mut self, ui: &mut dyn Interaction) -> DependencyState {
        self.auto_selected = auto_selection(&self.catalog, self.database);
        self.selected = self.auto_selected.clone();
        if !self.auto_selected.is_empty() {
            let names: Vec<&str> = self
                .auto_selected
                .iter()
                .map(|id| self.name_of(id))
                .collect();
            ui.notify(
                NoticeLevel::Success,
                &format!("Auto-selected based on database: {}", names.join(", ")),
            );
        }
        DependencyState::Popular
    }

    fn popular(&mut self, ui: &mut dyn Interaction) -> Result<DependencyState> {
        let entries: Vec<MultiChoiceEntry> = popular_entries(&self.catalog)
            .into_iter()
            .map(|entry| item(entry, self.auto_selected.contains(&entry.value)))
            .collect();
        if entries.is_empty() {
            return Ok(DependencyState::AskMore);
        }

        let picked: DependencySelection = ui
            .ask_multi_choice(&MultiChoiceQuestion {
                message: "Select common dependencies:".to_string(),
                entries,
                page_size: POPULAR_PAGE_SIZE,
            })?
            .into_iter()
            .collect();
        self.selected = self.auto_selected.union(&picked);
        Ok(DependencyState::AskMore)
    }

    fn ask_more(&mut self, ui: &mut dyn Interaction) -> Result<DependencyState> {
        let more = ui.ask_confirm(&ConfirmQuestion {
            message: "Need more dependencies?".to_string(),
            default: false,
        })?;
        Ok(if more {
            DependencyState::MethodChoice
        } else {
            DependencyState::Done
        })
    }

    fn method_choice(&mut self, ui: &mut dyn Interaction) -> Result<DependencyState> {
        let message = "How would you like to find dependencies?";
        let value = ui.ask_choice(&ChoiceQuestion {
            message: message.to_string(),
            choices: LookupMethod::choices(),
            default: LookupMethod::default_index(),
        })?;
        let method =
            LookupMethod::from_value(&value).ok_or_else(|| WizardError::UnknownChoice {
                question: message.to_string(),
                value,
            })?;
        Ok(match method {
            LookupMethod::Search => DependencyState::Search,
            LookupMethod::Browse => DependencyState::Browse,
            LookupMethod::Skip => DependencyState::Done,
        })
    }

    /// One search round: ask a term, offer the matches, keep the picks
    fn search_round(&mut self, ui: &mut dyn Interaction) -> Result<DependencyState> {
        let term = ui.ask_text(&TextQuestion::new(
            "Type to search dependencies (or press Enter to finish):",
        ))?;
        if term.trim().is_empty() {
            return Ok(DependencyState::Done);
        }

        let excluded = self.current();
        let results = search_candidates(&self.catalog, &excluded, &term);
        if results.is_empty() {
            ui.notify(
                NoticeLevel::Warning,
                "No dependencies found matching your search.",
            );
            return Ok(DependencyState::Search);
        }

        ui.notify(
            NoticeLevel::Info,
            &format!("Found {} matching dependencies:", results.len()),
        );
        let picked = ui.ask_multi_choice(&MultiChoiceQuestion {
            message: "Select dependencies:".to_string(),
            entries: results.into_iter().map(|entry| item(entry, false)).collect(),
            page_size: SEARCH_PAGE_SIZE,
        })?;
        if !picked.is_empty() {
            ui.notify(
                NoticeLevel::Success,
                &format!("Added {} dependencies", picked.len()),
            );
        }
        self.additional.extend(picked);
        Ok(DependencyState::Search)
    }

    fn browse(&mut self, ui: &mut dyn Interaction) -> Result<DependencyState> {
        let excluded = self.current();
        let sections = browse_sections(&self.catalog, &excluded);
        if sections.is_empty() {
            ui.notify(NoticeLevel::Info, "No additional dependencies available");
            return Ok(DependencyState::Done);
        }

        let mut entries = Vec::new();
        for (group, members) in sections {
            entries.push(MultiChoiceEntry::Section(format!("── {group} ──")));
            entries.extend(members.into_iter().map(|entry| item(entry, false)));
        }
        let picked = ui.ask_multi_choice(&MultiChoiceQuestion {
            message: "Select additional dependencies:".to_string(),
            entries,
            page_size: BROWSE_PAGE_SIZE,
        })?;
        self.additional.extend(picked);
        Ok(DependencyState::Done)
    }
}

/// Fetch the catalog and run the dependency stage for `database`
pub async fn collect_dependencies(
    ui: &mut dyn Interaction,
    provider: &MetadataProvider,
    database: Database,
) -> Result<DependencySelection> {
    ui.notify(NoticeLevel::Section, "Dependencies");

    ui.task_started("Fetching available dependencies...");
    let catalog = provider.fetch_dependency_catalog().await;
    ui.task_finished("Dependencies loaded");
    if let Some(warning) = provider.take_warning() {
        ui.notify(NoticeLevel::Warning, &warning);
    }

    DependencyStage::new(catalog, database).run(ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(value: &str, name: &str, description: &str, group: &str) -> DependencyCatalogEntry {
        DependencyCatalogEntry::new(name, value, description, group)
    }

    fn catalog() -> Vec<DependencyCatalogEntry> {
        vec![
            entry("web", "Spring Web", "Build web apps with Spring MVC", "Web"),
            entry("webflux", "Spring Reactive Web", "Reactive web apps", "Web"),
            entry("data-jpa", "Spring Data JPA", "Persist data with JPA", "SQL"),
            entry("postgresql", "PostgreSQL Driver", "JDBC driver", "SQL"),
            entry("flyway", "Flyway Migration", "Database migrations", "SQL"),
            entry("kafka", "Spring for Apache Kafka", "Publish events", "Messaging"),
            entry("actuator", "Spring Boot Actuator", "Health checks", "Ops"),
            entry("amqp", "Spring for RabbitMQ", "AMQP messaging", "Messaging"),
        ]
    }

    #[test]
    fn auto_selection_for_none_is_empty() {
        assert!(auto_selection(&catalog(), Database::None).is_empty());
    }

    #[test]
    fn auto_selection_skips_ids_missing_from_catalog() {
        let selection = auto_selection(&catalog(), Database::Postgresql);
        assert_eq!(selection.as_slice(), ["data-jpa", "postgresql"]);

        let selection = auto_selection(&catalog(), Database::Oracle);
        assert_eq!(selection.as_slice(), ["data-jpa"]);

        let no_jpa: Vec<_> = catalog()
            .into_iter()
            .filter(|e| e.value != "data-jpa")
            .collect();
        assert!(auto_selection(&no_jpa, Database::Mysql).is_empty());
    }

    #[test]
    fn popular_entries_keep_catalog_order() {
        let catalog = catalog();
        let ids: Vec<&str> = popular_entries(&catalog)
            .iter()
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(ids, vec!["web", "data-jpa", "actuator"]);
    }

    #[test]
    fn search_matches_name_id_or_description_case_insensitively() {
        let catalog = catalog();
        let none = DependencySelection::new();
        let ids = |term: &str| -> Vec<String> {
            search_candidates(&catalog, &none, term)
                .iter()
                .map(|e| e.value.clone())
                .collect()
        };
        assert_eq!(ids("KAFKA"), vec!["kafka"]);
        assert_eq!(ids("amqp"), vec!["amqp"]);
        assert_eq!(ids("migrations"), vec!["flyway"]);
        assert_eq!(ids("web"), vec!["web", "webflux"]);
        assert!(ids("graphql").is_empty());
    }

    #[test]
    fn search_excludes_selected_ids() {
        let catalog = catalog();
        let excluded: DependencySelection = ["web"].into_iter().collect();
        let ids: Vec<&str> = search_candidates(&catalog, &excluded, "web")
            .iter()
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(ids, vec!["webflux"]);
    }

    #[test]
    fn browse_groups_alphabetically_without_popular_or_selected() {
        let catalog = catalog();
        let excluded: DependencySelection = ["postgresql"].into_iter().collect();
        let sections = browse_sections(&catalog, &excluded);
        let shape: Vec<(&str, Vec<&str>)> = sections
            .iter()
            .map(|(group, entries)| (*group, entries.iter().map(|e| e.value.as_str()).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Messaging", vec!["kafka", "amqp"]),
                ("SQL", vec!["flyway"]),
                ("Web", vec!["webflux"]),
            ]
        );
    }

    #[test]
    fn lookup_method_defaults_to_search() {
        assert_eq!(
            LookupMethod::choices()[LookupMethod::default_index()].value,
            "search"
        );
    }
}
