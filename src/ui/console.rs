//! Plain-text projection of the lookup state, used by headless mode.

use std::fmt::Write as _;

use crate::types::view::{ActiveTab, LoadedProfile, ViewSnapshot, ViewState};
use crate::ui::render::{format_date, format_number, tab_label};

pub fn render_text(snapshot: &ViewSnapshot, tab: ActiveTab) -> String {
    let mut out = String::new();

    if let Some(message) = snapshot.error_text() {
        let _ = writeln!(out, "Error: {}", message);
    }

    match &snapshot.state {
        ViewState::Idle => {}
        ViewState::Loading => out.push_str("Searching...\n"),
        ViewState::Loaded(loaded) => render_loaded(&mut out, loaded, tab),
        ViewState::Failed(_) => {}
    }

    out
}

fn render_loaded(out: &mut String, loaded: &LoadedProfile, tab: ActiveTab) {
    let profile = &loaded.profile;

    match &profile.name {
        Some(name) => {
            let _ = writeln!(out, "{} (@{})", name, profile.login);
        }
        None => {
            let _ = writeln!(out, "{}", profile.login);
        }
    }
    if let Some(bio) = &profile.bio {
        let _ = writeln!(out, "{}", bio);
    }
    if let Some(href) = profile.blog_href() {
        let _ = writeln!(out, "🔗 {}", href);
    }
    if let Some(location) = &profile.location {
        let _ = writeln!(out, "📍 {}", location);
    }
    let _ = writeln!(
        out,
        "Public Repos: {} | Followers: {} | Following: {}",
        format_number(profile.public_repos),
        format_number(profile.followers),
        format_number(profile.following)
    );
    out.push('\n');

    let labels: Vec<String> = ActiveTab::ALL
        .iter()
        .map(|t| {
            let count = match t {
                ActiveTab::Repositories => loaded.repositories.len(),
                ActiveTab::Followers => loaded.followers.len(),
            };
            let label = tab_label(*t, count);
            if *t == tab {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();
    let _ = writeln!(out, "{}", labels.join("  "));

    match tab {
        ActiveTab::Repositories if loaded.repositories.is_empty() => {
            out.push_str("No repositories found\n");
        }
        ActiveTab::Repositories => {
            for repo in &loaded.repositories {
                match &repo.description {
                    Some(description) => {
                        let _ = writeln!(out, "- {} — {}", repo.name, description);
                    }
                    None => {
                        let _ = writeln!(out, "- {}", repo.name);
                    }
                }
                let mut meta = Vec::new();
                if let Some(language) = &repo.language {
                    meta.push(language.clone());
                }
                if let Some(updated_at) = &repo.updated_at {
                    meta.push(format!("Updated {}", format_date(updated_at)));
                }
                if !meta.is_empty() {
                    let _ = writeln!(out, "  {}", meta.join(" · "));
                }
            }
        }
        ActiveTab::Followers if loaded.followers.is_empty() => {
            out.push_str("No followers found\n");
        }
        ActiveTab::Followers => {
            for follower in &loaded.followers {
                let _ = writeln!(out, "- {}", follower.login);
            }
        }
    }
}
