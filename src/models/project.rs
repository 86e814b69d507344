use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::null_as_default;

/// Lifecycle of a user's attempt at a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStatus {
    Finished,
    InProgress,
    WaitingForCorrection,
    #[strum(serialize = "searching_a_group")]
    SearchingAGroup,
    Parent,
    CreatingGroup,
    #[strum(default)]
    Other(String),
}

/// One entry of `projects_users` on a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub occurrence: i64,
    pub final_mark: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "validated?")]
    pub validated: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub cursus_ids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub project: ProjectRef,
    pub marked_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub marked: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProjectUser {
    pub fn status_kind(&self) -> ProjectStatus {
        self.status
            .parse()
            .unwrap_or_else(|_| ProjectStatus::Other(self.status.clone()))
    }

    /// Belongs to the given cursus.
    pub fn in_cursus(&self, cursus_id: i64) -> bool {
        self.cursus_ids.contains(&cursus_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub parent_id: Option<i64>,
}
