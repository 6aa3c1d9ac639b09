use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard pages that render their records through the table engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Workforce,
    Status,
    Recruitment,
    Leaves,
    Payroll,
    Policies,
}

impl ModuleKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Workforce,
            Self::Status,
            Self::Recruitment,
            Self::Leaves,
            Self::Payroll,
            Self::Policies,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Workforce => "workforce",
            Self::Status => "status",
            Self::Recruitment => "recruitment",
            Self::Leaves => "leaves",
            Self::Payroll => "payroll",
            Self::Policies => "policies",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Workforce => "Workforce",
            Self::Status => "Team Status",
            Self::Recruitment => "Recruitment",
            Self::Leaves => "Leave Requests",
            Self::Payroll => "Payroll",
            Self::Policies => "Policies",
        }
    }

    /// Only the people-centric pages narrow their rows to the selected team.
    pub const fn team_scoped(self) -> bool {
        matches!(self, Self::Workforce | Self::Status)
    }

    pub fn table_title(self) -> String {
        format!("{} List", self.label())
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ModuleKind {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|module| module.slug() == wanted)
            .ok_or_else(|| CatalogError::UnknownModule(value.to_string()))
    }
}

/// Team filter applied before rows reach the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamScope {
    #[default]
    All,
    Team(String),
}

impl TeamScope {
    pub fn from_param(team: Option<&str>) -> Self {
        match team.map(str::trim) {
            None | Some("") => Self::All,
            Some(team) if team.eq_ignore_ascii_case("all") => Self::All,
            Some(team) => Self::Team(team.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown module '{0}'")]
    UnknownModule(String),
}
