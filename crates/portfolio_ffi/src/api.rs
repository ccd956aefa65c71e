//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the projects catalog as an opaque session plus plain snapshots.
//! - Keep string-typed boundary values out of the core view.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Each session owns its own view; there is no shared global catalog.

use log::warn;
use portfolio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    open_configured_skills, open_configured_view, ping as ping_inner, BuiltinCatalog,
    CatalogService, CatalogSnapshot, CatalogView, CategoryFilter, PortfolioConfig, ProjectCard,
    ProjectDetail, SkillCatalog, EMPTY_CATEGORY_MESSAGE,
};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// # FFI contract
/// - Same `level + log_dir` is idempotent.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One projects-page instance. Dropping it (or `catalog_close`) is teardown.
#[flutter_rust_bridge::frb(opaque)]
pub struct CatalogSession {
    view: Mutex<CatalogView>,
    load_message: String,
}

impl CatalogSession {
    fn new(view: CatalogView, load_message: String) -> Self {
        Self {
            view: Mutex::new(view),
            load_message,
        }
    }

    fn view(&self) -> MutexGuard<'_, CatalogView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiFilterOption {
    /// `all|web|iot|fullstack`.
    pub value: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiProjectCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: String,
    pub category: String,
    pub category_label: String,
    pub featured: bool,
    pub preview_tags: Vec<String>,
    /// Rendered as `+N` when non-zero.
    pub hidden_tag_count: u32,
    pub github: String,
    pub demo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiProjectDetail {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: String,
    pub category_label: String,
    pub tags: Vec<String>,
    pub github: String,
    pub demo: String,
}

/// Render state returned by every catalog call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiCatalogSnapshot {
    pub filter: String,
    pub filters: Vec<FfiFilterOption>,
    pub cards: Vec<FfiProjectCard>,
    pub selected: Option<FfiProjectDetail>,
    pub empty_state: bool,
    /// Set when `empty_state` is true.
    pub empty_message: Option<String>,
    /// Diagnostics for the call (load fallback, rejected input); empty on success.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiSkill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiSkillGroup {
    pub category: String,
    pub label: String,
    pub skills: Vec<FfiSkill>,
}

/// Opens a catalog session using environment configuration.
///
/// # FFI contract
/// - Never fails: when the configured source cannot be loaded the session
///   falls back to the built-in catalog and reports why in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_open() -> CatalogSession {
    let loaded = PortfolioConfig::from_env()
        .map_err(|err| err.to_string())
        .and_then(|config| open_configured_view(&config.catalog).map_err(|err| err.to_string()));

    match loaded {
        Ok(view) => CatalogSession::new(view, String::new()),
        Err(message) => {
            warn!("event=catalog_open module=ffi status=fallback error={message}");
            let view = CatalogService::new(BuiltinCatalog)
                .open_view()
                .unwrap_or_default();
            CatalogSession::new(view, format!("catalog_open fell back to builtin: {message}"))
        }
    }
}

/// Current render state.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_snapshot(session: &CatalogSession) -> FfiCatalogSnapshot {
    to_ffi_snapshot(session.view().snapshot(), session.load_message.clone())
}

/// Applies a filter button value (`all|web|iot|fullstack`).
///
/// Unknown values leave the filter unchanged and are reported in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_set_filter(session: &CatalogSession, filter: String) -> FfiCatalogSnapshot {
    let mut view = session.view();
    let message = match filter.parse::<CategoryFilter>() {
        Ok(parsed) => {
            view.set_filter(parsed);
            String::new()
        }
        Err(err) => format!("catalog_set_filter failed: {err}"),
    };
    to_ffi_snapshot(view.snapshot(), message)
}

/// Opens the detail overlay for `project_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_select(session: &CatalogSession, project_id: u32) -> FfiCatalogSnapshot {
    let mut view = session.view();
    let message = if view.select_by_id(project_id) {
        String::new()
    } else {
        format!("catalog_select failed: project {project_id} not found")
    };
    to_ffi_snapshot(view.snapshot(), message)
}

/// Closes the detail overlay.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_clear_selection(session: &CatalogSession) -> FfiCatalogSnapshot {
    let mut view = session.view();
    view.clear_selection();
    to_ffi_snapshot(view.snapshot(), String::new())
}

/// Page teardown: resets filter and selection.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_close(session: &CatalogSession) {
    session.view().reset();
}

/// Skills grouped by category in display order.
///
/// Reads the configured source; falls back to the built-in list on error.
#[flutter_rust_bridge::frb(sync)]
pub fn skills_grouped() -> Vec<FfiSkillGroup> {
    let loaded = PortfolioConfig::from_env()
        .map_err(|err| err.to_string())
        .and_then(|config| open_configured_skills(&config.catalog).map_err(|err| err.to_string()));

    let catalog = loaded.unwrap_or_else(|message| {
        warn!("event=skills_load module=ffi status=fallback error={message}");
        SkillCatalog::builtin()
    });
    to_ffi_skill_groups(&catalog)
}

fn to_ffi_skill_groups(catalog: &SkillCatalog) -> Vec<FfiSkillGroup> {
    catalog
        .groups()
        .into_iter()
        .map(|(category, skills)| FfiSkillGroup {
            category: category.as_str().to_string(),
            label: category.label().to_string(),
            skills: skills
                .into_iter()
                .map(|skill| FfiSkill {
                    name: skill.name.clone(),
                    level: skill.level,
                })
                .collect(),
        })
        .collect()
}

fn to_ffi_snapshot(snapshot: CatalogSnapshot, message: String) -> FfiCatalogSnapshot {
    FfiCatalogSnapshot {
        filter: snapshot.filter.as_str().to_string(),
        filters: snapshot
            .filters
            .iter()
            .map(|option| FfiFilterOption {
                value: option.filter.as_str().to_string(),
                label: option.label.to_string(),
                active: option.active,
            })
            .collect(),
        empty_message: snapshot
            .empty_state
            .then(|| EMPTY_CATEGORY_MESSAGE.to_string()),
        empty_state: snapshot.empty_state,
        cards: snapshot.cards.into_iter().map(to_ffi_card).collect(),
        selected: snapshot.selected.map(to_ffi_detail),
        message,
    }
}

fn to_ffi_card(card: ProjectCard) -> FfiProjectCard {
    FfiProjectCard {
        id: card.id,
        title: card.title,
        description: card.description,
        image: card.image,
        icon: card.icon.as_str().to_string(),
        category: card.category.as_str().to_string(),
        category_label: card.category_label.to_string(),
        featured: card.featured,
        preview_tags: card.preview_tags,
        hidden_tag_count: u32::try_from(card.hidden_tag_count).unwrap_or(u32::MAX),
        github: card.github,
        demo: card.demo,
    }
}

fn to_ffi_detail(detail: ProjectDetail) -> FfiProjectDetail {
    let project = detail.project;
    FfiProjectDetail {
        id: project.id,
        title: project.title,
        description: project.description,
        image: project.image,
        icon: project.icon.as_str().to_string(),
        category_label: detail.category_label.to_string(),
        tags: project.tags,
        github: project.github,
        demo: project.demo,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_clear_selection, catalog_close, catalog_select, catalog_set_filter,
        catalog_snapshot, core_version, init_logging, ping, skills_grouped, to_ffi_skill_groups,
        CatalogSession,
    };
    use portfolio_core::{builtin_projects, CatalogView, Skill, SkillCatalog, SkillCategory};

    fn builtin_session() -> CatalogSession {
        CatalogSession::new(CatalogView::new(builtin_projects()), String::new())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_dir() {
        let error = init_logging("info".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn set_filter_narrows_cards_and_flags_button() {
        let session = builtin_session();
        let snapshot = catalog_set_filter(&session, "IOT".to_string());

        assert!(snapshot.message.is_empty());
        assert_eq!(snapshot.filter, "iot");
        assert_eq!(
            snapshot.cards.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![2, 5]
        );
        let active: Vec<&str> = snapshot
            .filters
            .iter()
            .filter(|f| f.active)
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(active, vec!["iot"]);
        assert_eq!(snapshot.cards[0].hidden_tag_count, 2);
    }

    #[test]
    fn unknown_filter_keeps_previous_state() {
        let session = builtin_session();
        catalog_set_filter(&session, "web".to_string());
        let snapshot = catalog_set_filter(&session, "mobile".to_string());

        assert!(snapshot.message.contains("mobile"));
        assert_eq!(snapshot.filter, "web");
        assert_eq!(snapshot.cards.len(), 3);
    }

    #[test]
    fn select_and_clear_drive_detail_overlay() {
        let session = builtin_session();
        let selected = catalog_select(&session, 6);
        let detail = selected.selected.expect("detail expected");
        assert_eq!(detail.title, "Portfolio Cyberpunk");
        assert_eq!(detail.tags.len(), 5);

        let missing = catalog_select(&session, 404);
        assert!(missing.message.contains("404"));
        assert_eq!(missing.selected.map(|d| d.id), Some(6));

        let cleared = catalog_clear_selection(&session);
        assert!(cleared.selected.is_none());
    }

    #[test]
    fn close_resets_filter_and_selection() {
        let session = builtin_session();
        catalog_set_filter(&session, "fullstack".to_string());
        catalog_select(&session, 1);

        catalog_close(&session);
        let snapshot = catalog_snapshot(&session);
        assert_eq!(snapshot.filter, "all");
        assert!(snapshot.selected.is_none());
        assert_eq!(snapshot.cards.len(), 6);
    }

    #[test]
    fn empty_session_reports_empty_message() {
        let session = CatalogSession::new(CatalogView::new(Vec::new()), String::new());
        let snapshot = catalog_snapshot(&session);
        assert!(snapshot.empty_state);
        assert!(snapshot.empty_message.is_some());
    }

    #[test]
    fn skills_are_grouped_in_display_order() {
        let groups = skills_grouped();
        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["frontend", "backend", "database", "iot", "tools"]
        );
        assert_eq!(groups[0].skills[0].name, "Angular");
    }

    #[test]
    fn stored_skills_map_to_groups_with_empty_categories() {
        let catalog = SkillCatalog::new(vec![
            Skill::new("Rust", 60, SkillCategory::Backend).unwrap(),
            Skill::new("Zigbee", 40, SkillCategory::Iot).unwrap(),
        ]);
        let groups = to_ffi_skill_groups(&catalog);

        assert_eq!(groups.len(), 5);
        assert!(groups[0].skills.is_empty());
        assert_eq!(groups[1].label, "Backend");
        assert_eq!(groups[1].skills[0].name, "Rust");
        assert_eq!(groups[3].skills[0].level, 40);
    }
}
