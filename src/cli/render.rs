//! Terminal cards for a profile: identity, skills, projects.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::format::{
    format_date, format_final_mark, format_level, format_level_percentage,
    group_projects_by_cursus, main_campus, main_cursus, project_label, sort_skills_by_level,
};
use crate::models::User;

/// Rendering switches.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    pub fn plain(now: DateTime<Utc>) -> Self {
        Self { color: false, now }
    }
}

/// Wrap `text` in a 24-bit ANSI foreground colour given as `#rrggbb`.
pub fn paint(text: &str, hex: &str, enabled: bool) -> String {
    match (enabled, parse_hex(hex)) {
        (true, Some((r, g, b))) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        _ => text.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

pub fn render_identity(user: &User, opts: RenderOptions) -> String {
    let mut out = String::new();
    let presence = if user.is_online() {
        paint("● online", "#22c55e", opts.color)
    } else {
        paint("○ offline", "#9ca3af", opts.color)
    };
    let _ = writeln!(out, "{} ({})  {presence}", user.display_name(), user.login);
    let _ = writeln!(out, "  Email:        {}", user.email.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "  Campus:       {}", main_campus(user));
    let _ = writeln!(
        out,
        "  Location:     {}",
        user.location
            .as_deref()
            .filter(|_| user.is_online())
            .unwrap_or("Unavailable")
    );
    let _ = writeln!(out, "  Wallet:       {} ₳", user.wallet);
    let _ = writeln!(out, "  Eval points:  {}", user.correction_point);
    if let Some(cursus) = main_cursus(&user.cursus_users, opts.now) {
        let _ = writeln!(
            out,
            "  Level:        {} - {}",
            format_level(cursus.level),
            cursus.cursus.name
        );
    }
    if let Some(avatar) = user.avatar_url() {
        let _ = writeln!(out, "  Avatar:       {avatar}");
    }
    out
}

pub fn render_skills(user: &User, opts: RenderOptions) -> String {
    let mut out = String::new();
    let Some(cursus) = main_cursus(&user.cursus_users, opts.now) else {
        let _ = writeln!(out, "Skills\n  No cursus.");
        return out;
    };
    let _ = writeln!(out, "Skills - {}", cursus.cursus.name);
    if cursus.skills.is_empty() {
        let _ = writeln!(out, "  No skills yet.");
        return out;
    }
    let width = cursus
        .skills
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    for skill in sort_skills_by_level(&cursus.skills) {
        let _ = writeln!(
            out,
            "  {:<width$}  Level {}  ({})",
            skill.name,
            format_level(skill.level),
            format_level_percentage(skill.level),
        );
    }
    out
}

pub fn render_projects(user: &User, opts: RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Projects");
    let grouped = group_projects_by_cursus(user);
    if grouped.is_empty() {
        let _ = writeln!(out, "  No projects yet.");
        return out;
    }
    for (cursus, projects) in grouped {
        let _ = writeln!(out, "  {cursus} ({})", projects.len());
        for project in projects {
            let label = project_label(&project);
            let _ = write!(
                out,
                "    {:<28} {} {}",
                project.project.name,
                paint(&format!("{:<24}", label.text), label.color, opts.color),
                format_final_mark(project.final_mark),
            );
            if let Some(created) = project.created_at {
                let _ = write!(out, "  created {}", format_date(created));
            }
            if let Some(marked) = project.marked_at {
                let _ = write!(out, "  marked {}", format_date(marked));
            }
            out.push('\n');
        }
    }
    out
}

/// Detail screen: all three cards, plus any other cursus the user is enrolled in.
pub fn render_profile(user: &User, opts: RenderOptions) -> String {
    let mut sections = vec![
        render_identity(user, opts),
        render_skills(user, opts),
        render_projects(user, opts),
    ];
    let main_id = main_cursus(&user.cursus_users, opts.now).map(|c| c.id);
    let others: Vec<String> = user
        .cursus_users
        .iter()
        .filter(|cu| Some(cu.id) != main_id)
        .map(|cu| format!("  {} - Level {}", cu.cursus.name, format_level(cu.level)))
        .collect();
    if !others.is_empty() {
        sections.push(format!("Other cursus\n{}\n", others.join("\n")));
    }
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Campus, Cursus, CursusUser, ProjectRef, ProjectUser, Skill};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn sample_user() -> User {
        User {
            login: "alice".to_string(),
            displayname: Some("Alice Liddell".to_string()),
            email: Some("alice@student.42.fr".to_string()),
            location: Some("e1r2p3".to_string()),
            wallet: 120,
            correction_point: 4,
            campus: vec![Campus {
                name: "Paris".to_string(),
                ..Default::default()
            }],
            cursus_users: vec![
                CursusUser {
                    id: 1,
                    cursus_id: 9,
                    level: 8.1,
                    begin_at: Some(Utc.with_ymd_and_hms(2021, 7, 1, 0, 0, 0).unwrap()),
                    end_at: Some(Utc.with_ymd_and_hms(2021, 8, 1, 0, 0, 0).unwrap()),
                    cursus: Cursus {
                        name: "C Piscine".to_string(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                CursusUser {
                    id: 2,
                    cursus_id: 21,
                    level: 9.42,
                    begin_at: Some(Utc.with_ymd_and_hms(2021, 10, 4, 0, 0, 0).unwrap()),
                    skills: vec![
                        Skill {
                            name: "Unix".to_string(),
                            level: 3.5,
                            ..Default::default()
                        },
                        Skill {
                            name: "Algorithms & AI".to_string(),
                            level: 7.25,
                            ..Default::default()
                        },
                    ],
                    cursus: Cursus {
                        name: "42cursus".to_string(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            ],
            projects_users: vec![ProjectUser {
                status: "finished".to_string(),
                final_mark: Some(125),
                validated: Some(true),
                cursus_ids: vec![21],
                project: ProjectRef {
                    name: "Libft".to_string(),
                    ..Default::default()
                },
                created_at: Some(Utc.with_ymd_and_hms(2021, 10, 5, 0, 0, 0).unwrap()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn identity_card_shows_core_fields() {
        let card = render_identity(&sample_user(), RenderOptions::plain(now()));
        assert!(card.starts_with("Alice Liddell (alice)  ● online"));
        assert!(card.contains("Campus:       Paris"));
        assert!(card.contains("Location:     e1r2p3"));
        assert!(card.contains("Wallet:       120 ₳"));
        assert!(card.contains("Level:        9.42 - 42cursus"));
    }

    #[test]
    fn offline_user_has_unavailable_location() {
        let mut user = sample_user();
        user.location = None;
        let card = render_identity(&user, RenderOptions::plain(now()));
        assert!(card.contains("○ offline"));
        assert!(card.contains("Location:     Unavailable"));
    }

    #[test]
    fn skills_card_sorted_by_level() {
        let card = render_skills(&sample_user(), RenderOptions::plain(now()));
        assert!(card.starts_with("Skills - 42cursus"));
        let algo = card.find("Algorithms & AI").unwrap();
        let unix = card.find("Unix").unwrap();
        assert!(algo < unix);
        assert!(card.contains("Level 7.25  (25.0%)"));
    }

    #[test]
    fn projects_card_groups_and_labels() {
        let card = render_projects(&sample_user(), RenderOptions::plain(now()));
        assert!(card.contains("42cursus (1)"));
        assert!(card.contains("Libft"));
        assert!(card.contains("Passed"));
        assert!(card.contains("125 ✓"));
        assert!(card.contains("created Oct 5, 2021"));
    }

    #[test]
    fn coloured_labels_keep_mark_column_aligned() {
        let mut user = sample_user();
        user.projects_users.push(ProjectUser {
            status: "in_progress".to_string(),
            cursus_ids: vec![21],
            project: ProjectRef {
                name: "minishell".to_string(),
                ..Default::default()
            },
            created_at: Some(Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap()),
            ..Default::default()
        });
        let opts = RenderOptions {
            color: true,
            now: now(),
        };

        let card = render_projects(&user, opts);
        let passed = format!("\x1b[38;2;76;175;80m{:<24}\x1b[0m 125 ✓", "Passed");
        assert!(card.contains(&passed));

        let mark_columns: Vec<usize> = card
            .lines()
            .filter(|line| line.contains("\x1b[0m"))
            .map(strip_ansi)
            .map(|line| line.find("N/A").or_else(|| line.find("125")).unwrap())
            .collect();
        assert_eq!(mark_columns.len(), 2);
        assert_eq!(mark_columns[0], mark_columns[1]);
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn profile_lists_secondary_cursus() {
        let profile = render_profile(&sample_user(), RenderOptions::plain(now()));
        assert!(profile.contains("Other cursus"));
        assert!(profile.contains("C Piscine - Level 8.10"));
    }

    #[test]
    fn empty_profile_renders_placeholders() {
        let user = User {
            login: "ghost".to_string(),
            ..Default::default()
        };
        let opts = RenderOptions::plain(now());
        assert!(render_skills(&user, opts).contains("No cursus."));
        assert!(render_projects(&user, opts).contains("No projects yet."));
        assert!(render_identity(&user, opts).starts_with("ghost (ghost)"));
    }

    #[test]
    fn paint_respects_switch_and_hex() {
        assert_eq!(paint("x", "#ff0000", false), "x");
        assert_eq!(paint("x", "#ff0000", true), "\x1b[38;2;255;0;0mx\x1b[0m");
        assert_eq!(paint("x", "not-a-colour", true), "x");
    }
}
