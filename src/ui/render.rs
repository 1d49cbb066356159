//! HTML projection of the lookup state.
//!
//! Every function here is pure: the same snapshot, tab and presentation
//! context always produce the same markup. The WebView replaces its content
//! region wholesale with the result; nothing is patched incrementally.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::github::{FollowerSummary, GitHubProfile, RepositorySummary};
use crate::types::theme::PresentationContext;
use crate::types::view::{ActiveTab, LoadedProfile, ViewSnapshot, ViewState};

/// Everything the page needs for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedFrame {
    pub body_class: &'static str,
    pub css_variables: Vec<(String, String)>,
    pub toggle_label: &'static str,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub content: String,
}

pub fn render_frame(
    snapshot: &ViewSnapshot,
    tab: ActiveTab,
    ctx: &PresentationContext,
) -> RenderedFrame {
    RenderedFrame {
        body_class: ctx.body_class,
        css_variables: ctx.css_variables.clone(),
        toggle_label: ctx.toggle_label,
        submit_label: if snapshot.in_flight { "Searching..." } else { "Search" },
        submit_disabled: snapshot.in_flight,
        content: render_content(snapshot, tab),
    }
}

/// Markup for the content region below the search form.
pub fn render_content(snapshot: &ViewSnapshot, tab: ActiveTab) -> String {
    let mut html = String::new();

    if let Some(message) = snapshot.error_text() {
        let _ = write!(
            html,
            r#"<div class="error-banner" role="alert">{}</div>"#,
            escape_html(message)
        );
    }

    match &snapshot.state {
        ViewState::Loading => html.push_str(&render_skeleton()),
        ViewState::Loaded(loaded) => html.push_str(&render_loaded(loaded, tab)),
        ViewState::Idle | ViewState::Failed(_) => {}
    }

    html
}

fn render_skeleton() -> String {
    let mut html = String::from(
        r#"<div class="skeleton-group"><div class="skeleton-header"><div class="skeleton skeleton-avatar"></div><div class="skeleton-lines"><div class="skeleton skeleton-line-wide"></div><div class="skeleton skeleton-line"></div></div></div><div class="stats-grid">"#,
    );
    for _ in 0..3 {
        html.push_str(r#"<div class="skeleton skeleton-card"></div>"#);
    }
    html.push_str(r#"</div><div class="skeleton-list">"#);
    for _ in 0..5 {
        html.push_str(r#"<div class="skeleton skeleton-card"></div>"#);
    }
    html.push_str("</div></div>");
    html
}

fn render_loaded(loaded: &LoadedProfile, tab: ActiveTab) -> String {
    let mut html = String::new();
    html.push_str(&render_profile_card(&loaded.profile));
    html.push_str(&render_stats(&loaded.profile));
    html.push_str(&render_tab_bar(
        tab,
        loaded.repositories.len(),
        loaded.followers.len(),
    ));
    match tab {
        ActiveTab::Repositories => html.push_str(&render_repositories(&loaded.repositories)),
        ActiveTab::Followers => html.push_str(&render_followers(&loaded.followers)),
    }
    html
}

fn render_profile_card(profile: &GitHubProfile) -> String {
    let mut html = String::from(r#"<section class="profile-card">"#);
    let _ = write!(
        html,
        r#"<img class="profile-avatar" src="{}" alt="Profile picture of {}">"#,
        escape_html(&profile.avatar_url),
        escape_html(profile.display_name())
    );
    html.push_str(r#"<div class="profile-details"><h2 class="profile-name">"#);
    html.push_str(&escape_html(profile.display_name()));
    if profile.name.is_some() {
        let _ = write!(
            html,
            r#"<span class="profile-login">@{}</span>"#,
            escape_html(&profile.login)
        );
    }
    html.push_str("</h2>");
    if let Some(bio) = &profile.bio {
        let _ = write!(html, r#"<p class="profile-bio">{}</p>"#, escape_html(bio));
    }
    if let (Some(blog), Some(href)) = (&profile.blog, profile.blog_href()) {
        let _ = write!(
            html,
            r#"<a class="profile-blog" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            escape_html(&href),
            escape_html(blog)
        );
    }
    if let Some(location) = &profile.location {
        let _ = write!(
            html,
            r#"<div class="profile-location">📍 {}</div>"#,
            escape_html(location)
        );
    }
    html.push_str("</div></section>");
    html
}

fn render_stats(profile: &GitHubProfile) -> String {
    let mut html = String::from(r#"<div class="stats-grid">"#);
    for (label, value) in [
        ("Public Repos", profile.public_repos),
        ("Followers", profile.followers),
        ("Following", profile.following),
    ] {
        let _ = write!(
            html,
            r#"<div class="stat-card"><div class="stat-label">{}</div><div class="stat-value">{}</div></div>"#,
            label,
            format_number(value)
        );
    }
    html.push_str("</div>");
    html
}

/// Tab label with the collection size, e.g. `Repositories (3)`.
pub fn tab_label(tab: ActiveTab, count: usize) -> String {
    format!("{} ({})", tab.title(), count)
}

fn render_tab_bar(active: ActiveTab, repositories: usize, followers: usize) -> String {
    let mut html = String::from(r#"<nav class="tab-bar">"#);
    for tab in ActiveTab::ALL {
        let count = match tab {
            ActiveTab::Repositories => repositories,
            ActiveTab::Followers => followers,
        };
        let class = if tab == active { "tab active" } else { "tab" };
        let _ = write!(
            html,
            r#"<button class="{}" data-tab="{}">{}</button>"#,
            class,
            tab.id(),
            tab_label(tab, count)
        );
    }
    html.push_str("</nav>");
    html
}

fn render_repositories(repositories: &[RepositorySummary]) -> String {
    if repositories.is_empty() {
        return r#"<div class="empty-list">No repositories found</div>"#.to_string();
    }
    let mut html = String::from(r#"<div class="repo-list">"#);
    for repo in repositories {
        let _ = write!(html, r#"<div class="repo-card" data-id="{}">"#, repo.id);
        html.push_str(&link_or_text("repo-name", &repo.html_url, &repo.name));
        if let Some(description) = &repo.description {
            let _ = write!(
                html,
                r#"<p class="repo-description">{}</p>"#,
                escape_html(description)
            );
        }
        html.push_str(r#"<div class="repo-meta">"#);
        if let Some(language) = &repo.language {
            let _ = write!(
                html,
                r#"<span class="repo-language"><span class="language-dot" style="background:{}"></span>{}</span>"#,
                language_color(language),
                escape_html(language)
            );
        }
        if let Some(updated_at) = &repo.updated_at {
            let _ = write!(
                html,
                r#"<span class="repo-updated">🔄 Updated {}</span>"#,
                format_date(updated_at)
            );
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div>");
    html
}

fn render_followers(followers: &[FollowerSummary]) -> String {
    if followers.is_empty() {
        return r#"<div class="empty-list">No followers found</div>"#.to_string();
    }
    let mut html = String::from(r#"<div class="follower-grid">"#);
    for follower in followers {
        let _ = write!(
            html,
            r#"<a class="follower-card" data-id="{}" href="{}" target="_blank" rel="noopener noreferrer"><img class="follower-avatar" src="{}" alt="Profile picture of {}"><span class="follower-login">{}</span></a>"#,
            follower.id,
            escape_html(&follower.html_url),
            escape_html(&follower.avatar_url),
            escape_html(&follower.login),
            escape_html(&follower.login)
        );
    }
    html.push_str("</div>");
    html
}

fn link_or_text(class: &str, href: &str, text: &str) -> String {
    if href.is_empty() {
        format!(r#"<span class="{}">{}</span>"#, class, escape_html(text))
    } else {
        format!(
            r#"<a class="{}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            class,
            escape_html(href),
            escape_html(text)
        )
    }
}

// ─── Formatting helpers ───

/// Groups digits in threes with commas: `1234567` → `1,234,567`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// en-US short date of the UTC calendar day: `Jan 5, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Dot color for a repository language.
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#facc15",
        "TypeScript" => "#2563eb",
        "HTML" => "#ef4444",
        "CSS" => "#a855f7",
        _ => "#6b7280",
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
