use crate::error::{Result, StudioError};
use crate::milestone::Milestone;
use crate::paths;
use crate::roster::{self, LEAD_ROLE, ORCHESTRATOR_ROLE};
use crate::types::Role;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub const INITIAL_PHASE: &str = "Market Analysis";
pub const INITIAL_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Paused,
    Frozen,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Frozen => "frozen",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectDetails
// ---------------------------------------------------------------------------

/// The `project` section: what was declared at creation plus lifecycle
/// metadata stamped by later operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub name: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub competitors: String,
    #[serde(default)]
    pub unique_selling_point: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created: DateTime<Utc>,
    /// Free-form label; only ever compared as a string.
    #[serde(default = "default_phase")]
    pub phase: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp_opt"
    )]
    pub last_resumed: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp_opt"
    )]
    pub frozen_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeze_reason: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp_opt"
    )]
    pub reset_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_location: Option<String>,
    /// Keys we don't model (e.g. `monetization`) survive a load/save cycle.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_version() -> String {
    INITIAL_VERSION.to_string()
}

fn default_phase() -> String {
    INITIAL_PHASE.to_string()
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(deserialize_with = "deserialize_roles")]
    pub active_agents: Vec<Role>,
    pub lead_agent: Role,
    pub orchestrator: Role,
}

impl Team {
    pub fn for_mode(mode: &str) -> Self {
        Self {
            active_agents: roster::select_roster(mode),
            lead_agent: LEAD_ROLE,
            orchestrator: ORCHESTRATOR_ROLE,
        }
    }
}

// ---------------------------------------------------------------------------
// Metrics / Risk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub velocity_target: String,
    pub bug_threshold: String,
    pub performance_target: String,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            velocity_target: "10 tasks/week".to_string(),
            bug_threshold: "5 critical, 20 minor".to_string(),
            performance_target: "60 FPS, < 3s load".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub risk: String,
    pub probability: String,
    pub impact: String,
    pub mitigation: String,
}

fn default_risks() -> Vec<Risk> {
    vec![Risk {
        risk: "Scope creep".to_string(),
        probability: "Medium".to_string(),
        impact: "High".to_string(),
        mitigation: "Strict feature freeze after design phase".to_string(),
    }]
}

// ---------------------------------------------------------------------------
// Serde helpers for hand-edited and older configs
// ---------------------------------------------------------------------------

/// RFC 3339, or a bare `YYYY-MM-DDTHH:MM:SS[.f]` with no offset taken as UTC.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(d: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    parse_timestamp(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}")))
}

fn deserialize_timestamp_opt<'de, D>(d: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(d)? {
        None => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}"))),
    }
}

/// Role names we don't know are dropped with a warning instead of making
/// the whole config unreadable.
fn deserialize_roles<'de, D>(d: D) -> std::result::Result<Vec<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(d)?;
    Ok(names
        .iter()
        .filter_map(|name| match name.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unknown role in active_agents");
                None
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// ProjectConfig (top-level)
// ---------------------------------------------------------------------------

/// Everything a user declares when creating a project.
#[derive(Debug, Clone, Default)]
pub struct ProjectDeclaration {
    pub name: String,
    pub concept: String,
    pub genre: String,
    pub platform: String,
    pub audience: String,
    pub timeline: String,
    pub engine: String,
    pub mode: String,
    pub competitors: String,
    pub unique_selling_point: String,
}

/// The persisted `project-config.json`. Always read and written whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectDetails,
    pub team: Team,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ProjectConfig {
    pub fn new(decl: ProjectDeclaration, milestones: Vec<Milestone>, created: DateTime<Utc>) -> Self {
        let team = Team::for_mode(&decl.mode);
        Self {
            project: ProjectDetails {
                name: decl.name,
                concept: decl.concept,
                genre: decl.genre,
                platform: decl.platform,
                audience: decl.audience,
                timeline: decl.timeline,
                engine: decl.engine,
                mode: decl.mode,
                competitors: decl.competitors,
                unique_selling_point: decl.unique_selling_point,
                version: default_version(),
                created,
                phase: default_phase(),
                status: ProjectStatus::Active,
                last_resumed: None,
                frozen_date: None,
                freeze_reason: None,
                reset_date: None,
                backup_location: None,
                extra: BTreeMap::new(),
            },
            team,
            milestones,
            metrics: Metrics::default(),
            risks: default_risks(),
            extra: BTreeMap::new(),
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    /// Load `<project_dir>/project-config.json`. A missing file is
    /// `ProjectNotFound`; unparsable JSON is `MalformedConfig`.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = paths::project_config_path(project_dir);
        if !path.exists() {
            return Err(StudioError::ProjectNotFound(
                project_dir.display().to_string(),
            ));
        }
        let data = std::fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|source| StudioError::MalformedConfig { path, source })
    }

    pub fn save(&self, project_dir: &Path) -> Result<()> {
        let path = paths::project_config_path(project_dir);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // ---------------------------------------------------------------------------
    // Lifecycle mutations
    // ---------------------------------------------------------------------------

    pub fn mark_resumed(&mut self, now: DateTime<Utc>) {
        self.project.status = ProjectStatus::Active;
        self.project.last_resumed = Some(now);
    }

    /// Empty or whitespace-only reasons are not recorded.
    pub fn mark_frozen(&mut self, reason: Option<&str>, now: DateTime<Utc>) {
        self.project.status = ProjectStatus::Frozen;
        self.project.frozen_date = Some(now);
        if let Some(reason) = reason.map(str::trim).filter(|r| !r.is_empty()) {
            self.project.freeze_reason = Some(reason.to_string());
        }
    }

    pub fn mark_reset(&mut self, backup_location: &Path, now: DateTime<Utc>) {
        self.project.phase = default_phase();
        self.project.status = ProjectStatus::Active;
        self.project.version = default_version();
        self.project.reset_date = Some(now);
        self.project.backup_location = Some(backup_location.display().to_string());
        self.extra.remove("progress");
        self.extra.remove("completed_milestones");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn decl(mode: &str) -> ProjectDeclaration {
        ProjectDeclaration {
            name: "Star Forge".to_string(),
            concept: "Build ships, fly them".to_string(),
            genre: "Action".to_string(),
            platform: "PC".to_string(),
            audience: "Core".to_string(),
            timeline: "Short".to_string(),
            engine: "Godot".to_string(),
            mode: mode.to_string(),
            ..Default::default()
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn new_config_starts_active_with_initial_phase() {
        let cfg = ProjectConfig::new(decl("design"), Vec::new(), t0());
        assert_eq!(cfg.project.status, ProjectStatus::Active);
        assert_eq!(cfg.project.phase, "Market Analysis");
        assert_eq!(cfg.project.version, "1.0.0");
        assert_eq!(cfg.team.lead_agent, Role::ProducerAgent);
        assert_eq!(cfg.team.orchestrator, Role::MasterOrchestrator);
        assert_eq!(cfg.team.active_agents.len(), 7);
        assert_eq!(cfg.risks.len(), 1);
    }

    #[test]
    fn config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cfg = ProjectConfig::new(decl("development"), Vec::new(), t0());
        cfg.save(dir.path()).unwrap();
        let loaded = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn lifecycle_fields_not_serialized_until_set() {
        let cfg = ProjectConfig::new(decl("design"), Vec::new(), t0());
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(!json.contains("frozen_date"));
        assert!(!json.contains("last_resumed"));
        assert!(!json.contains("backup_location"));
    }

    #[test]
    fn persisted_shape_uses_snake_case_roles_and_status() {
        let cfg = ProjectConfig::new(decl("prototype"), Vec::new(), t0());
        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["project"]["status"], "active");
        assert_eq!(v["team"]["lead_agent"], "producer_agent");
        assert_eq!(v["team"]["active_agents"][0], "master_orchestrator");
        assert_eq!(v["metrics"]["performance_target"], "60 FPS, < 3s load");
    }

    #[test]
    fn missing_status_defaults_to_active() {
        let json = r#"{
            "project": {"name": "Old", "created": "2024-01-01T00:00:00Z"},
            "team": {"active_agents": [], "lead_agent": "producer_agent",
                     "orchestrator": "master_orchestrator"}
        }"#;
        let cfg: ProjectConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.project.status, ProjectStatus::Active);
        assert_eq!(cfg.project.phase, "Market Analysis");
        assert!(cfg.milestones.is_empty());
    }

    #[test]
    fn unknown_status_is_malformed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("project-config.json"),
            r#"{"project": {"name": "X", "created": "2024-01-01T00:00:00Z", "status": "archived"},
                "team": {"active_agents": [], "lead_agent": "producer_agent",
                         "orchestrator": "master_orchestrator"}}"#,
        )
        .unwrap();
        assert!(matches!(
            ProjectConfig::load(dir.path()),
            Err(StudioError::MalformedConfig { .. })
        ));
    }

    #[test]
    fn unknown_keys_survive_roundtrip() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("project-config.json"),
            r#"{"project": {"name": "X", "created": "2024-01-01T00:00:00Z",
                            "monetization": "Premium"},
                "team": {"active_agents": ["producer_agent"], "lead_agent": "producer_agent",
                         "orchestrator": "master_orchestrator"},
                "progress": {"done": 3}}"#,
        )
        .unwrap();
        let cfg = ProjectConfig::load(dir.path()).unwrap();
        cfg.save(dir.path()).unwrap();
        let reloaded = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(reloaded.project.extra["monetization"], "Premium");
        assert_eq!(reloaded.extra["progress"]["done"], 3);
    }

    #[test]
    fn loads_timestamps_without_offset() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("project-config.json"),
            r#"{"project": {"name": "Old", "created": "2024-01-01T09:30:12.345678",
                            "status": "frozen", "frozen_date": "2024-02-03T10:00:00",
                            "last_resumed": "2024-02-01 08:15:00"},
                "team": {"active_agents": ["producer_agent"], "lead_agent": "producer_agent",
                         "orchestrator": "master_orchestrator"}}"#,
        )
        .unwrap();
        let cfg = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(
            cfg.project.created,
            NaiveDateTime::parse_from_str("2024-01-01T09:30:12.345678", "%Y-%m-%dT%H:%M:%S%.f")
                .unwrap()
                .and_utc()
        );
        assert_eq!(
            cfg.project.frozen_date,
            Some(Utc.with_ymd_and_hms(2024, 2, 3, 10, 0, 0).unwrap())
        );
        assert_eq!(
            cfg.project.last_resumed,
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 8, 15, 0).unwrap())
        );
        assert!(cfg.project.reset_date.is_none());
    }

    #[test]
    fn rfc3339_offsets_are_normalized_to_utc() {
        let json = r#"{
            "project": {"name": "X", "created": "2024-01-01T11:00:00+02:00"},
            "team": {"active_agents": [], "lead_agent": "producer_agent",
                     "orchestrator": "master_orchestrator"}
        }"#;
        let cfg: ProjectConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.project.created, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn garbage_timestamp_is_malformed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("project-config.json"),
            r#"{"project": {"name": "X", "created": "last tuesday"},
                "team": {"active_agents": [], "lead_agent": "producer_agent",
                         "orchestrator": "master_orchestrator"}}"#,
        )
        .unwrap();
        assert!(matches!(
            ProjectConfig::load(dir.path()),
            Err(StudioError::MalformedConfig { .. })
        ));
    }

    #[test]
    fn unknown_active_agents_are_dropped() {
        let json = r#"{
            "project": {"name": "X", "created": "2024-01-01T00:00:00Z"},
            "team": {"active_agents": ["producer_agent", "sound_designer", "qa_agent"],
                     "lead_agent": "producer_agent", "orchestrator": "master_orchestrator"}
        }"#;
        let cfg: ProjectConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.team.active_agents, vec![Role::ProducerAgent, Role::QaAgent]);
    }

    #[test]
    fn missing_config_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            ProjectConfig::load(dir.path()),
            Err(StudioError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn freeze_records_trimmed_reason_only_when_present() {
        let mut cfg = ProjectConfig::new(decl("design"), Vec::new(), t0());
        cfg.mark_frozen(Some("   "), t0());
        assert_eq!(cfg.project.status, ProjectStatus::Frozen);
        assert!(cfg.project.freeze_reason.is_none());

        cfg.mark_frozen(Some(" waiting on funding "), t0());
        assert_eq!(cfg.project.freeze_reason.as_deref(), Some("waiting on funding"));
    }

    #[test]
    fn reset_clears_progress_keys() {
        let mut cfg = ProjectConfig::new(decl("design"), Vec::new(), t0());
        cfg.project.phase = "Development".to_string();
        cfg.project.version = "1.4.0".to_string();
        cfg.project.status = ProjectStatus::Paused;
        cfg.extra.insert("progress".to_string(), Value::from(5));
        cfg.extra.insert("completed_milestones".to_string(), Value::from(2));
        cfg.extra.insert("notes".to_string(), Value::from("keep me"));

        cfg.mark_reset(Path::new("/p/star-forge_backup_20240101_090000"), t0());

        assert_eq!(cfg.project.phase, "Market Analysis");
        assert_eq!(cfg.project.version, "1.0.0");
        assert_eq!(cfg.project.status, ProjectStatus::Active);
        assert_eq!(cfg.project.reset_date, Some(t0()));
        assert!(!cfg.extra.contains_key("progress"));
        assert!(!cfg.extra.contains_key("completed_milestones"));
        assert!(cfg.extra.contains_key("notes"));
    }
}
