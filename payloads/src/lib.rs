//! Types and logic shared between the admin dashboard ui, the mock api, and
//! the integration tests.
//!
//! Everything that can be computed without a browser lives here so that it
//! can be unit tested natively: the wire types, the typed client, and the
//! data shaping the screens do over fetched collections.

pub mod api_client;
pub mod debounce;
pub mod expansion;
pub mod filters;
pub mod grouping;
pub mod pagination;
pub mod requests;
pub mod responses;
pub mod session;
pub mod stats;

pub use api_client::{APIClient, ClientError};
pub use responses::{Envelope, Page, Pagination};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id type wrappers help ensure we don't mix up ids for different entities.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CampaignId(pub i64);

/// Id of a single region assignment row (not of the region itself).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct AssignmentId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct RoleId(pub i64);

/// Regions are keyed by strings on the wire.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RegionId(pub String);

/// Employee roles selectable in the employee form, as the api labels them.
pub const EMPLOYEE_ROLES: [(RoleId, &str); 3] = [
    (RoleId(1), "Agent"),
    (RoleId(2), "Bussiness development manger"),
    (RoleId(3), "Zonal Head Parivartan"),
];

pub fn role_name(role_id: RoleId) -> Option<&'static str> {
    EMPLOYEE_ROLES
        .iter()
        .find(|(id, _)| *id == role_id)
        .map(|(_, name)| *name)
}

/// The fixed set of projects a region assignment can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum Project {
    #[display("Parivartan")]
    #[serde(rename = "Parivartan")]
    Parivartan,
    #[display("Gen Nxt")]
    #[serde(rename = "Gen Nxt")]
    GenNxt,
    #[display("Open Shed")]
    #[serde(rename = "Open Shed")]
    OpenShed,
}

impl Project {
    pub const ALL: [Project; 3] =
        [Project::Parivartan, Project::GenNxt, Project::OpenShed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Project::Parivartan => "Parivartan",
            Project::GenNxt => "Gen Nxt",
            Project::OpenShed => "Open Shed",
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::Parivartan
    }
}

impl std::str::FromStr for Project {
    type Err = UnknownProject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Project::ALL
            .into_iter()
            .find(|project| project.as_str() == s)
            .ok_or_else(|| UnknownProject(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown project: {0}")]
pub struct UnknownProject(pub String);

/// Role tag on a region assignment. Anything that isn't one of the two
/// known tags is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssignmentRole {
    Bdm,
    ZonalManager,
    Other(String),
}

impl AssignmentRole {
    /// The tags offered by the role filter.
    pub const FILTERABLE: [&'static str; 2] = ["BDM", "Zonal Manager"];

    pub fn as_str(&self) -> &str {
        match self {
            AssignmentRole::Bdm => "BDM",
            AssignmentRole::ZonalManager => "Zonal Manager",
            AssignmentRole::Other(other) => other,
        }
    }
}

impl From<String> for AssignmentRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BDM" => AssignmentRole::Bdm,
            "Zonal Manager" => AssignmentRole::ZonalManager,
            _ => AssignmentRole::Other(value),
        }
    }
}

impl From<AssignmentRole> for String {
    fn from(value: AssignmentRole) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for AssignmentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active status of a region assignment, carried as a string on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
)]
pub enum AssignmentStatus {
    #[default]
    Active,
    Inactive,
}

impl AssignmentStatus {
    pub const ALL: [AssignmentStatus; 2] =
        [AssignmentStatus::Active, AssignmentStatus::Inactive];

    pub fn is_active(&self) -> bool {
        matches!(self, AssignmentStatus::Active)
    }

    pub fn toggled(&self) -> Self {
        match self {
            AssignmentStatus::Active => AssignmentStatus::Inactive,
            AssignmentStatus::Inactive => AssignmentStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "Active",
            AssignmentStatus::Inactive => "Inactive",
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(AssignmentStatus::Active),
            "Inactive" => Ok(AssignmentStatus::Inactive),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_round_trips_through_its_label() {
        for project in Project::ALL {
            let parsed: Project = project.to_string().parse().unwrap();
            assert_eq!(parsed, project);
        }
        assert!("Closed Shed".parse::<Project>().is_err());
    }

    #[test]
    fn project_uses_api_labels_in_json() {
        let json = serde_json::to_string(&Project::GenNxt).unwrap();
        assert_eq!(json, r#""Gen Nxt""#);
    }

    #[test]
    fn unknown_assignment_roles_are_preserved() {
        let role: AssignmentRole =
            serde_json::from_str(r#""Regional Lead""#).unwrap();
        assert_eq!(role, AssignmentRole::Other("Regional Lead".into()));
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""Regional Lead""#);

        let bdm: AssignmentRole = serde_json::from_str(r#""BDM""#).unwrap();
        assert_eq!(bdm, AssignmentRole::Bdm);
    }

    #[test]
    fn status_toggles_between_the_two_values() {
        assert_eq!(AssignmentStatus::Active.toggled(), AssignmentStatus::Inactive);
        assert_eq!(AssignmentStatus::Inactive.toggled(), AssignmentStatus::Active);
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::Inactive).unwrap(),
            r#""Inactive""#
        );
    }

    #[test]
    fn role_names_are_looked_up_by_id() {
        assert_eq!(role_name(RoleId(1)), Some("Agent"));
        assert_eq!(role_name(RoleId(9)), None);
    }
}
