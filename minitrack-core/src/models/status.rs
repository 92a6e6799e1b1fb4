use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Painting-progress stage of a unit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Built,
    Work,
    Painted,
}

impl Status {
    /// Every status in progress order.
    pub const ALL: [Status; 3] = [Status::Built, Status::Work, Status::Painted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Built => "built",
            Status::Work => "work",
            Status::Painted => "painted",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "built" => Ok(Status::Built),
            "work" => Ok(Status::Work),
            "painted" => Ok(Status::Painted),
            _ => Err(format!(
                "Invalid status '{}'. Valid options: built, work, painted",
                s
            )),
        }
    }
}

/// Status as recorded on disk.
///
/// Anything outside the three known stages is carried through verbatim so a
/// load/save cycle never rewrites a hand-edited value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitStatus {
    Known(Status),
    Unrecognized(String),
}

impl UnitStatus {
    /// Returns the known stage, or `None` for an unrecognized value.
    pub fn known(&self) -> Option<Status> {
        match self {
            UnitStatus::Known(status) => Some(*status),
            UnitStatus::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, status: Status) -> bool {
        self.known() == Some(status)
    }
}

impl Default for UnitStatus {
    fn default() -> Self {
        UnitStatus::Known(Status::Built)
    }
}

impl From<Status> for UnitStatus {
    fn from(status: Status) -> Self {
        UnitStatus::Known(status)
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitStatus::Known(status) => write!(f, "{}", status),
            UnitStatus::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
