use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::template::Template;

/// One entry of the documentation sidebar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub slug: &'static str,
    pub title: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        slug: "overview",
        title: "Overview",
    },
    Section {
        slug: "installation",
        title: "Installation",
    },
    Section {
        slug: "pairing",
        title: "Pairing a Receiver",
    },
    Section {
        slug: "streaming",
        title: "Streaming Media",
    },
    Section {
        slug: "troubleshooting",
        title: "Troubleshooting",
    },
];

/// Picks the nav entry to highlight from the sections reported visible, in
/// report order. The last visible known section wins, so out-of-order
/// reports still converge on a single active entry.
pub fn active_section<'a>(sections: &'a [Section], visible: &[&str]) -> Option<&'a Section> {
    visible
        .iter()
        .rev()
        .find_map(|slug| sections.iter().find(|s| s.slug == *slug))
}

#[derive(Deserialize)]
pub struct DocsQuery {
    section: Option<String>,
}

pub struct NavLink {
    pub slug: &'static str,
    pub title: &'static str,
    pub active: bool,
}

#[derive(askama::Template)]
#[template(path = "docs.html")]
pub struct DocsTemplate {
    pub nav: Vec<NavLink>,
}

pub async fn page(template: Template, Query(query): Query<DocsQuery>) -> impl IntoResponse {
    let visible: Vec<&str> = query.section.as_deref().into_iter().collect();
    let active = active_section(SECTIONS, &visible).map(|s| s.slug);

    let nav = SECTIONS
        .iter()
        .map(|s| NavLink {
            slug: s.slug,
            title: s.title,
            active: Some(s.slug) == active,
        })
        .collect();

    template.render(DocsTemplate { nav })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_visible_sections_means_no_active_entry() {
        assert_eq!(active_section(SECTIONS, &[]), None);
    }

    #[test]
    fn single_visible_section_is_active() {
        let active = active_section(SECTIONS, &["pairing"]).unwrap();
        assert_eq!(active.slug, "pairing");
    }

    #[test]
    fn last_visible_section_wins() {
        let active = active_section(SECTIONS, &["overview", "installation", "streaming"]).unwrap();
        assert_eq!(active.slug, "streaming");
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let active = active_section(SECTIONS, &["installation", "no-such-section"]).unwrap();
        assert_eq!(active.slug, "installation");
    }

    #[test]
    fn at_most_one_entry_is_marked_active() {
        let active = active_section(SECTIONS, &["overview", "pairing", "troubleshooting"]);

        let marked = SECTIONS.iter().filter(|s| active == Some(*s)).count();
        assert_eq!(marked, 1);
    }
}
