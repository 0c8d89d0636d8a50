use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// An agent role. Purely a document identity: each role owns one base
/// template and one customized copy per project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    MasterOrchestrator,
    ProducerAgent,
    MarketAnalyst,
    DataScientist,
    SrGameDesigner,
    MidGameDesigner,
    MechanicsDeveloper,
    GameFeelDeveloper,
    QaAgent,
    SrGameArtist,
    TechnicalArtist,
    UiUxAgent,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::MasterOrchestrator,
            Role::ProducerAgent,
            Role::MarketAnalyst,
            Role::DataScientist,
            Role::SrGameDesigner,
            Role::MidGameDesigner,
            Role::MechanicsDeveloper,
            Role::GameFeelDeveloper,
            Role::QaAgent,
            Role::SrGameArtist,
            Role::TechnicalArtist,
            Role::UiUxAgent,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::MasterOrchestrator => "master_orchestrator",
            Role::ProducerAgent => "producer_agent",
            Role::MarketAnalyst => "market_analyst",
            Role::DataScientist => "data_scientist",
            Role::SrGameDesigner => "sr_game_designer",
            Role::MidGameDesigner => "mid_game_designer",
            Role::MechanicsDeveloper => "mechanics_developer",
            Role::GameFeelDeveloper => "game_feel_developer",
            Role::QaAgent => "qa_agent",
            Role::SrGameArtist => "sr_game_artist",
            Role::TechnicalArtist => "technical_artist",
            Role::UiUxAgent => "ui_ux_agent",
        }
    }

    /// Human title: underscores become spaces, each word capitalised
    /// ("ui_ux_agent" → "Ui Ux Agent").
    pub fn title(self) -> String {
        title_case(self.as_str())
    }

    /// File name of this role's template, base or customized.
    pub fn filename(self) -> String {
        format!("{}.md", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

/// Capitalise the first letter of every `_`/space separated word and join
/// the words with single spaces.
pub fn title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// DevelopmentMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevelopmentMode {
    Design,
    Prototype,
    Development,
}

impl DevelopmentMode {
    /// Case-insensitive. Unknown modes return `None`; callers degrade to
    /// their documented fallbacks rather than failing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "design" => Some(DevelopmentMode::Design),
            "prototype" => Some(DevelopmentMode::Prototype),
            "development" => Some(DevelopmentMode::Development),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DevelopmentMode::Design => "design",
            DevelopmentMode::Prototype => "prototype",
            DevelopmentMode::Development => "development",
        }
    }
}

// ---------------------------------------------------------------------------
// TimelineClass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineClass {
    Rapid,
    Short,
    Medium,
    Long,
}

impl TimelineClass {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rapid" => Some(TimelineClass::Rapid),
            "short" => Some(TimelineClass::Short),
            "medium" => Some(TimelineClass::Medium),
            "long" => Some(TimelineClass::Long),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimelineClass::Rapid => "Rapid",
            TimelineClass::Short => "Short",
            TimelineClass::Medium => "Medium",
            TimelineClass::Long => "Long",
        }
    }
}

// ---------------------------------------------------------------------------
// EngineKind
// ---------------------------------------------------------------------------

/// The engines with curated layouts, seed files and guidance blocks.
/// Any other engine string ("TBD", "Bevy", ...) is carried verbatim and
/// falls back to the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    Godot,
    Unity,
    Unreal,
}

impl EngineKind {
    pub fn all() -> &'static [EngineKind] {
        &[EngineKind::Godot, EngineKind::Unity, EngineKind::Unreal]
    }

    /// Accepts both the short project name ("Unreal") and the engine
    /// config display name ("Unreal Engine"), case-insensitively.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "godot" => Some(EngineKind::Godot),
            "unity" => Some(EngineKind::Unity),
            "unreal" | "unreal engine" => Some(EngineKind::Unreal),
            _ => None,
        }
    }

    /// Name stored in a project's config.
    pub fn project_name(self) -> &'static str {
        match self {
            EngineKind::Godot => "Godot",
            EngineKind::Unity => "Unity",
            EngineKind::Unreal => "Unreal",
        }
    }

    /// Name used by engine config files and in generated prose.
    pub fn display_name(self) -> &'static str {
        match self {
            EngineKind::Godot => "Godot",
            EngineKind::Unity => "Unity",
            EngineKind::Unreal => "Unreal Engine",
        }
    }
}

// ---------------------------------------------------------------------------
// PlatformKind
// ---------------------------------------------------------------------------

/// Platforms that carry their own art and testing guidance. "Web" and
/// "VR/AR" are valid project platforms but have no dedicated blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    Pc,
    Mobile,
    Console,
}

impl PlatformKind {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pc" => Some(PlatformKind::Pc),
            "mobile" => Some(PlatformKind::Mobile),
            "console" => Some(PlatformKind::Console),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
