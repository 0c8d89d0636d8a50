use crate::types::{DevelopmentMode, Role};

/// Roles every project gets, in order. Market analysis and data science are
/// part of the base team regardless of mode.
const BASE_ROLES: &[Role] = &[
    Role::MasterOrchestrator,
    Role::ProducerAgent,
    Role::MarketAnalyst,
    Role::DataScientist,
];

const DESIGN_ROLES: &[Role] = &[Role::SrGameDesigner, Role::MidGameDesigner, Role::SrGameArtist];

const PROTOTYPE_ROLES: &[Role] = &[Role::SrGameDesigner, Role::MechanicsDeveloper, Role::QaAgent];

const DEVELOPMENT_ROLES: &[Role] = &[
    Role::SrGameDesigner,
    Role::MidGameDesigner,
    Role::MechanicsDeveloper,
    Role::GameFeelDeveloper,
    Role::QaAgent,
    Role::SrGameArtist,
    Role::TechnicalArtist,
    Role::UiUxAgent,
];

pub const LEAD_ROLE: Role = Role::ProducerAgent;
pub const ORCHESTRATOR_ROLE: Role = Role::MasterOrchestrator;

/// Active roles for a development mode, in insertion order. Unknown modes
/// get only the base roles.
pub fn select_roster(mode: &str) -> Vec<Role> {
    let extra: &[Role] = match DevelopmentMode::parse(mode) {
        Some(DevelopmentMode::Design) => DESIGN_ROLES,
        Some(DevelopmentMode::Prototype) => PROTOTYPE_ROLES,
        Some(DevelopmentMode::Development) => DEVELOPMENT_ROLES,
        None => &[],
    };
    BASE_ROLES.iter().chain(extra).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_roster() {
        let roster = select_roster("development");
        assert_eq!(roster.len(), BASE_ROLES.len() + DEVELOPMENT_ROLES.len());
        assert_eq!(&roster[..4], BASE_ROLES);
        assert_eq!(&roster[4..], DEVELOPMENT_ROLES);
        assert_eq!(roster, select_roster("development"));
    }

    #[test]
    fn design_roster() {
        assert_eq!(
            select_roster("design"),
            vec![
                Role::MasterOrchestrator,
                Role::ProducerAgent,
                Role::MarketAnalyst,
                Role::DataScientist,
                Role::SrGameDesigner,
                Role::MidGameDesigner,
                Role::SrGameArtist,
            ]
        );
    }

    #[test]
    fn prototype_roster_includes_qa() {
        let roster = select_roster("prototype");
        assert_eq!(roster.len(), 7);
        assert!(roster.contains(&Role::MechanicsDeveloper));
        assert!(roster.contains(&Role::QaAgent));
    }

    #[test]
    fn unknown_mode_gets_base_roles_only() {
        assert_eq!(select_roster("live-ops"), BASE_ROLES.to_vec());
        assert_eq!(select_roster(""), BASE_ROLES.to_vec());
    }

    #[test]
    fn no_duplicates_in_any_roster() {
        for mode in ["design", "prototype", "development"] {
            let roster = select_roster(mode);
            let mut sorted = roster.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), roster.len(), "{mode} has duplicates");
        }
    }
}
