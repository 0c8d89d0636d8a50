use crate::types::{DevelopmentMode, TimelineClass};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Milestone
// ---------------------------------------------------------------------------

/// A scheduled checkpoint. `target_date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub target_date: NaiveDate,
    pub deliverables: Vec<String>,
    pub success_criteria: Vec<String>,
}

// ---------------------------------------------------------------------------
// Schedule table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Offset {
    Days(i64),
    Weeks(i64),
}

impl Offset {
    fn duration(self) -> Duration {
        match self {
            Offset::Days(n) => Duration::days(n),
            Offset::Weeks(n) => Duration::weeks(n),
        }
    }
}

struct MilestoneTemplate {
    offset: Offset,
    name: &'static str,
    deliverables: &'static [&'static str],
    success_criteria: &'static [&'static str],
}

const DESIGN_RAPID: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        offset: Offset::Days(2),
        name: "Concept Complete",
        deliverables: &["Core concept", "Design pillars", "Target audience analysis"],
        success_criteria: &["Concept validated", "Scope defined"],
    },
    MilestoneTemplate {
        offset: Offset::Days(5),
        name: "Design Documentation",
        deliverables: &["Complete GDD", "Art style guide", "Technical assessment"],
        success_criteria: &["All systems documented", "Feasibility confirmed"],
    },
];

const DESIGN_SHORT: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        offset: Offset::Weeks(1),
        name: "Concept Phase",
        deliverables: &["Game concept", "Market research", "Competitive analysis"],
        success_criteria: &["Unique value proposition", "Target audience defined"],
    },
    MilestoneTemplate {
        offset: Offset::Weeks(2),
        name: "Systems Design",
        deliverables: &["Core systems", "Gameplay mechanics", "Progression design"],
        success_criteria: &["All systems mapped", "Dependencies identified"],
    },
    MilestoneTemplate {
        offset: Offset::Weeks(3),
        name: "Complete Documentation",
        deliverables: &["Full GDD", "Art bible", "Technical specifications"],
        success_criteria: &["Ready for development", "All questions answered"],
    },
];

const DEVELOPMENT_SHORT: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        offset: Offset::Weeks(1),
        name: "Prototype",
        deliverables: &["Core mechanic", "Basic controls", "Placeholder art"],
        success_criteria: &["Playable prototype", "Core loop validated"],
    },
    MilestoneTemplate {
        offset: Offset::Weeks(2),
        name: "Alpha",
        deliverables: &["All features", "Programmer art", "Basic UI"],
        success_criteria: &["Feature complete", "Internally playable"],
    },
    MilestoneTemplate {
        offset: Offset::Weeks(3),
        name: "Beta",
        deliverables: &["Polished gameplay", "Final art", "Sound integrated"],
        success_criteria: &["No critical bugs", "Performance targets met"],
    },
    MilestoneTemplate {
        offset: Offset::Weeks(4),
        name: "Release",
        deliverables: &["Final build", "Marketing materials", "Distribution ready"],
        success_criteria: &["Ship ready", "All platforms tested"],
    },
];

fn templates_for(mode: DevelopmentMode, timeline: TimelineClass) -> &'static [MilestoneTemplate] {
    match (mode, timeline) {
        (DevelopmentMode::Design, TimelineClass::Rapid) => DESIGN_RAPID,
        (DevelopmentMode::Design, TimelineClass::Short) => DESIGN_SHORT,
        (DevelopmentMode::Development, TimelineClass::Short) => DEVELOPMENT_SHORT,
        // No schedule is defined for the remaining pairs; callers get an
        // empty list and must cope with zero milestones.
        _ => &[],
    }
}

/// Build the milestone list for `(mode, timeline)` counted from `start`.
///
/// Only design×{Rapid, Short} and development×Short have schedules; every
/// other pair, including unrecognised mode or timeline strings, yields an
/// empty list. Milestones come back in table order, which is ascending by
/// offset.
pub fn schedule(mode: &str, timeline: &str, start: NaiveDate) -> Vec<Milestone> {
    let (Some(mode), Some(timeline)) = (DevelopmentMode::parse(mode), TimelineClass::parse(timeline))
    else {
        return Vec::new();
    };

    templates_for(mode, timeline)
        .iter()
        .map(|t| Milestone {
            name: t.name.to_string(),
            target_date: start + t.offset.duration(),
            deliverables: t.deliverables.iter().map(|s| s.to_string()).collect(),
            success_criteria: t.success_criteria.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
