//! Display helpers for profile cards.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::{CursusUser, ProjectStatus, ProjectUser, Skill, User};

/// Text and hex colour for a project status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabel {
    pub text: String,
    pub color: &'static str,
}

impl StatusLabel {
    fn new(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub const COLOR_FAILED: &str = "#ef4444";
pub const COLOR_PASSED: &str = "#4CAF50";
pub const COLOR_FINISHED: &str = "#6b7280";
pub const COLOR_IN_PROGRESS: &str = "#f59e0b";
pub const COLOR_WAITING: &str = "#3b82f6";
pub const COLOR_SEARCHING: &str = "#8b5cf6";
pub const COLOR_UNKNOWN: &str = "#9ca3af";

/// Progress through the current level, e.g. `4.42` → `"42.0%"`.
pub fn format_level_percentage(level: f64) -> String {
    format!("{:.1}%", level.fract() * 100.0)
}

pub fn format_level(level: f64) -> String {
    format!("{level:.2}")
}

/// The cursus a profile should be summarised by.
///
/// Active cursus win over finished ones; among the candidates the most
/// recently started is chosen.
pub fn main_cursus(cursus_users: &[CursusUser], now: DateTime<Utc>) -> Option<&CursusUser> {
    let active: Vec<&CursusUser> = cursus_users
        .iter()
        .filter(|cu| cu.is_active_at(now))
        .collect();
    let candidates = if active.is_empty() {
        cursus_users.iter().collect()
    } else {
        active
    };
    candidates.into_iter().max_by_key(|cu| cu.begin_at)
}

pub fn main_campus(user: &User) -> &str {
    user.campus
        .first()
        .map(|c| c.name.as_str())
        .unwrap_or("Unknown Campus")
}

pub fn project_status_label(
    status: &ProjectStatus,
    validated: Option<bool>,
    final_mark: Option<i64>,
) -> StatusLabel {
    match status {
        ProjectStatus::Finished => match final_mark {
            Some(mark) if mark < 100 && validated != Some(true) => {
                StatusLabel::new("Failed", COLOR_FAILED)
            }
            Some(_) => StatusLabel::new("Passed", COLOR_PASSED),
            None => StatusLabel::new("Finished", COLOR_FINISHED),
        },
        ProjectStatus::InProgress => StatusLabel::new("In Progress", COLOR_IN_PROGRESS),
        ProjectStatus::WaitingForCorrection => {
            StatusLabel::new("Waiting for Correction", COLOR_WAITING)
        }
        ProjectStatus::SearchingAGroup => StatusLabel::new("Searching a Group", COLOR_SEARCHING),
        other => StatusLabel::new(raw_status(other), COLOR_UNKNOWN),
    }
}

fn raw_status(status: &ProjectStatus) -> String {
    match status {
        ProjectStatus::Other(raw) => raw.clone(),
        known => known.to_string(),
    }
}

/// Convenience wrapper over [`project_status_label`] for a profile entry.
pub fn project_label(project: &ProjectUser) -> StatusLabel {
    project_status_label(&project.status_kind(), project.validated, project.final_mark)
}

pub fn format_final_mark(final_mark: Option<i64>) -> String {
    match final_mark {
        None => "N/A".to_string(),
        Some(mark) if mark < 50 => format!("{mark} ✗"),
        Some(mark) => format!("{mark} ✓"),
    }
}

/// Newest first; entries without a creation date go last.
pub fn sort_projects_by_date(projects: &[ProjectUser]) -> Vec<ProjectUser> {
    let mut sorted = projects.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

/// Projects grouped under their cursus name, names in order, each group newest first.
///
/// A project listed in several cursus appears in each of them. Cursus ids with
/// no matching enrolment are labelled `Cursus <id>`.
pub fn group_projects_by_cursus(user: &User) -> BTreeMap<String, Vec<ProjectUser>> {
    let names: HashMap<i64, &str> = user
        .cursus_users
        .iter()
        .map(|cu| (cu.cursus_id, cu.cursus.name.as_str()))
        .collect();

    let mut grouped: BTreeMap<String, Vec<ProjectUser>> = BTreeMap::new();
    for project in &user.projects_users {
        for cursus_id in &project.cursus_ids {
            let name = names
                .get(cursus_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("Cursus {cursus_id}"));
            grouped.entry(name).or_default().push(project.clone());
        }
    }
    for projects in grouped.values_mut() {
        *projects = sort_projects_by_date(projects);
    }
    grouped
}

/// Highest level first.
pub fn sort_skills_by_level(skills: &[Skill]) -> Vec<Skill> {
    let mut sorted = skills.to_vec();
    sorted.sort_by(|a, b| b.level.total_cmp(&a.level));
    sorted
}

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
        .is_match(email)
}

/// `"Jan 5, 2024"`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Whole days between `date` and `now`, rounded up, regardless of direction.
pub fn days_since(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - date).num_milliseconds().abs();
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    (millis + DAY_MS - 1) / DAY_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Campus;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn level_formatting() {
        assert_eq!(format_level_percentage(4.42), "42.0%");
        assert_eq!(format_level_percentage(7.0), "0.0%");
        assert_eq!(format_level(9.4), "9.40");
    }

    #[test]
    fn main_cursus_prefers_active_then_latest() {
        let now = at(2024, 6, 1);
        let piscine = CursusUser {
            id: 1,
            begin_at: Some(at(2021, 7, 1)),
            end_at: Some(at(2021, 8, 1)),
            ..Default::default()
        };
        let common_core = CursusUser {
            id: 2,
            begin_at: Some(at(2021, 10, 4)),
            end_at: None,
            ..Default::default()
        };
        let cursus = vec![piscine.clone(), common_core];
        assert_eq!(main_cursus(&cursus, now).map(|c| c.id), Some(2));

        let older = CursusUser {
            id: 3,
            begin_at: Some(at(2020, 1, 1)),
            end_at: Some(at(2020, 2, 1)),
            ..Default::default()
        };
        let all_finished = vec![older, piscine];
        assert_eq!(main_cursus(&all_finished, now).map(|c| c.id), Some(1));
        assert!(main_cursus(&[], now).is_none());
    }

    #[test]
    fn main_campus_falls_back() {
        let mut user = User::default();
        assert_eq!(main_campus(&user), "Unknown Campus");
        user.campus.push(Campus {
            name: "Lyon".to_string(),
            ..Default::default()
        });
        assert_eq!(main_campus(&user), "Lyon");
    }

    #[test]
    fn finished_project_labels_depend_on_mark() {
        let finished = ProjectStatus::Finished;
        assert_eq!(
            project_status_label(&finished, Some(false), Some(80)),
            StatusLabel::new("Failed", COLOR_FAILED)
        );
        assert_eq!(
            project_status_label(&finished, Some(true), Some(80)).text,
            "Passed"
        );
        assert_eq!(
            project_status_label(&finished, None, Some(100)).text,
            "Passed"
        );
        assert_eq!(
            project_status_label(&finished, None, None),
            StatusLabel::new("Finished", COLOR_FINISHED)
        );
    }

    #[test]
    fn other_project_labels() {
        assert_eq!(
            project_status_label(&ProjectStatus::InProgress, None, None).text,
            "In Progress"
        );
        assert_eq!(
            project_status_label(&ProjectStatus::WaitingForCorrection, None, None).text,
            "Waiting for Correction"
        );
        assert_eq!(
            project_status_label(&ProjectStatus::SearchingAGroup, None, None).color,
            COLOR_SEARCHING
        );
        assert_eq!(
            project_status_label(&ProjectStatus::Other("teleporting".into()), None, None),
            StatusLabel::new("teleporting", COLOR_UNKNOWN)
        );
        assert_eq!(
            project_status_label(&ProjectStatus::CreatingGroup, None, None).text,
            "creating_group"
        );
    }

    #[test]
    fn final_mark_formatting() {
        assert_eq!(format_final_mark(None), "N/A");
        assert_eq!(format_final_mark(Some(0)), "0 ✗");
        assert_eq!(format_final_mark(Some(49)), "49 ✗");
        assert_eq!(format_final_mark(Some(50)), "50 ✓");
        assert_eq!(format_final_mark(Some(125)), "125 ✓");
    }

    #[test]
    fn projects_sort_newest_first() {
        let make = |id, created: Option<DateTime<Utc>>| ProjectUser {
            id,
            created_at: created,
            ..Default::default()
        };
        let projects = vec![
            make(1, Some(at(2022, 1, 1))),
            make(2, None),
            make(3, Some(at(2023, 1, 1))),
        ];
        let ids: Vec<i64> = sort_projects_by_date(&projects).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(projects[0].id, 1);
    }

    #[test]
    fn projects_group_by_cursus_name() {
        let user = User {
            cursus_users: vec![CursusUser {
                cursus_id: 21,
                cursus: crate::models::Cursus {
                    id: 21,
                    name: "42cursus".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            }],
            projects_users: vec![
                ProjectUser {
                    id: 1,
                    cursus_ids: vec![21],
                    created_at: Some(at(2022, 1, 1)),
                    ..Default::default()
                },
                ProjectUser {
                    id: 2,
                    cursus_ids: vec![21, 9],
                    created_at: Some(at(2023, 1, 1)),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let grouped = group_projects_by_cursus(&user);
        let names: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["42cursus", "Cursus 9"]);
        let ids: Vec<i64> = grouped["42cursus"].iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(grouped["Cursus 9"].len(), 1);
    }

    #[test]
    fn skills_sort_by_level_desc() {
        let skill = |name: &str, level| Skill {
            name: name.to_string(),
            level,
            ..Default::default()
        };
        let sorted = sort_skills_by_level(&[
            skill("Unix", 3.2),
            skill("Algo", 8.9),
            skill("Web", 5.0),
        ]);
        let names: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Algo", "Web", "Unix"]);
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("alice@student.42.fr"));
        assert!(!is_valid_email("alice@student"));
        assert!(!is_valid_email("alice student@42.fr"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn date_helpers() {
        assert_eq!(format_date(at(2024, 1, 5)), "Jan 5, 2024");
        let now = at(2024, 1, 10);
        assert_eq!(days_since(at(2024, 1, 5), now), 5);
        assert_eq!(days_since(now - Duration::hours(1), now), 1);
        assert_eq!(days_since(now + Duration::days(2), now), 2);
        assert_eq!(days_since(now, now), 0);
    }
}
