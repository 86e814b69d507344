use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::project::ProjectUser;

/// A profile returned by `GET /users/{login}` (and, partially, by search).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub usual_full_name: Option<String>,
    pub displayname: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub wallet: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub correction_point: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub image: UserImage,
    #[serde(deserialize_with = "null_as_default")]
    pub campus: Vec<Campus>,
    #[serde(deserialize_with = "null_as_default")]
    pub cursus_users: Vec<CursusUser>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects_users: Vec<ProjectUser>,
}

impl User {
    /// Best human-readable name, falling back to the login.
    pub fn display_name(&self) -> &str {
        [&self.usual_full_name, &self.displayname]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.trim().is_empty())
            .unwrap_or(self.login.as_str())
    }

    /// Whether the intranet reports the user as logged in at a campus seat.
    pub fn is_online(&self) -> bool {
        self.location
            .as_deref()
            .is_some_and(|loc| !loc.trim().is_empty())
    }

    /// Largest available avatar URL.
    pub fn avatar_url(&self) -> Option<&str> {
        self.image
            .versions
            .large
            .as_deref()
            .or(self.image.link.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserImage {
    pub link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub versions: ImageVersions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageVersions {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub small: Option<String>,
    pub micro: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campus {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub time_zone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub language: Option<CampusLanguage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusLanguage {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
}

/// A user's enrolment in one cursus, with the skills earned there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursusUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub begin_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub grade: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub level: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_as_default")]
    pub cursus_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cursus: Cursus,
}

impl CursusUser {
    /// No end date, or one still in the future.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.end_at.map_or(true, |end| end > now)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursus {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: f64,
}
