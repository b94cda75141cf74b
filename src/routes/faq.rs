use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::template::Template;

/// Open/closed state of one accordion group.
///
/// At most one item is open, which the representation makes impossible to
/// violate: the state is the open item's slug, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Restores state from the request, dropping slugs that name no item.
    pub fn from_query(open: Option<String>, known: &[&str]) -> Self {
        Self {
            open: open.filter(|slug| known.contains(&slug.as_str())),
        }
    }

    pub fn is_open(&self, slug: &str) -> bool {
        self.open.as_deref() == Some(slug)
    }

    /// Clicking a question: an open item closes; a closed item opens and
    /// thereby closes whichever sibling was open.
    pub fn toggle(&self, slug: &str) -> Self {
        if self.is_open(slug) {
            Self::closed()
        } else {
            Self {
                open: Some(slug.to_owned()),
            }
        }
    }
}

pub struct FaqEntry {
    pub slug: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct FaqCategory {
    pub title: &'static str,
    pub entries: &'static [FaqEntry],
}

pub const CATALOG: &[FaqCategory] = &[
    FaqCategory {
        title: "Getting Started",
        entries: &[
            FaqEntry {
                slug: "what-is-beamcast",
                question: "What is Beamcast?",
                answer: "Beamcast streams video, music and photos from your phone or laptop \
                         straight to the Beamcast receiver on your TV. No cables, no account, \
                         no uploads - your media never leaves your home network.",
            },
            FaqEntry {
                slug: "what-do-i-need",
                question: "What do I need to use it?",
                answer: "Two things: the Beamcast sender app on your phone or laptop, and the \
                         Beamcast receiver installed on your TV. Both devices must be on the \
                         same Wi-Fi network.",
            },
            FaqEntry {
                slug: "is-it-free",
                question: "Is Beamcast free?",
                answer: "Yes. The sender app and the TV receiver are both free to install and \
                         use, with no ads and no subscription.",
            },
        ],
    },
    FaqCategory {
        title: "Playback",
        entries: &[
            FaqEntry {
                slug: "supported-formats",
                question: "Which media formats are supported?",
                answer: "MP4, MKV and WebM video, MP3, AAC and FLAC audio, and JPEG or PNG \
                         photos. Subtitles in SRT and WebVTT are picked up automatically when \
                         they sit next to the video file.",
            },
            FaqEntry {
                slug: "quality",
                question: "What playback quality can I expect?",
                answer: "Up to 1080p at 60 frames per second on a 5 GHz network. On crowded \
                         2.4 GHz networks the sender steps quality down rather than stutter.",
            },
        ],
    },
    FaqCategory {
        title: "Troubleshooting",
        entries: &[
            FaqEntry {
                slug: "receiver-not-found",
                question: "Why can't the app find my receiver?",
                answer: "Nearly always a network split: phones on guest Wi-Fi or a 5 GHz band \
                         isolated from the TV's band cannot see the receiver. Put both devices \
                         on the same network and rescan.",
            },
            FaqEntry {
                slug: "playback-stutters",
                question: "Playback stutters - what can I do?",
                answer: "Move the sender closer to the router, prefer 5 GHz, and close other \
                         streaming apps. If stutter persists, lower the quality cap in the \
                         sender's playback settings.",
            },
        ],
    },
];

fn known_slugs() -> Vec<&'static str> {
    CATALOG
        .iter()
        .flat_map(|c| c.entries.iter().map(|e| e.slug))
        .collect()
}

/// Case-insensitive containment over question and answer text. An empty
/// term matches everything.
fn matches_search(entry: &FaqEntry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    entry.question.to_lowercase().contains(&term) || entry.answer.to_lowercase().contains(&term)
}

#[derive(Deserialize)]
pub struct FaqQuery {
    open: Option<String>,
    q: Option<String>,
}

pub struct EntryView {
    pub slug: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    pub toggle_href: String,
}

pub struct CategoryView {
    pub title: &'static str,
    pub entries: Vec<EntryView>,
}

#[derive(askama::Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub categories: Vec<CategoryView>,
    pub search: String,
    pub no_match: bool,
}

fn toggle_href(accordion: &Accordion, slug: &str, search: &str) -> String {
    let query = match (accordion.toggle(slug).open.as_deref(), search.is_empty()) {
        (Some(open), true) => format!("?open={}", urlencoding::encode(open)),
        (Some(open), false) => format!(
            "?open={}&q={}",
            urlencoding::encode(open),
            urlencoding::encode(search)
        ),
        (None, true) => String::new(),
        (None, false) => format!("?q={}", urlencoding::encode(search)),
    };

    format!("/faq{query}#{slug}")
}

pub async fn page(template: Template, Query(query): Query<FaqQuery>) -> impl IntoResponse {
    let accordion = Accordion::from_query(query.open, &known_slugs());
    let search = query.q.unwrap_or_default();

    // Categories whose entries all miss the search term disappear entirely.
    let categories: Vec<CategoryView> = CATALOG
        .iter()
        .filter_map(|category| {
            let entries: Vec<EntryView> = category
                .entries
                .iter()
                .filter(|entry| matches_search(entry, &search))
                .map(|entry| EntryView {
                    slug: entry.slug,
                    question: entry.question,
                    answer: entry.answer,
                    open: accordion.is_open(entry.slug),
                    toggle_href: toggle_href(&accordion, entry.slug, &search),
                })
                .collect();

            (!entries.is_empty()).then_some(CategoryView {
                title: category.title,
                entries,
            })
        })
        .collect();

    let no_match = categories.is_empty();

    template.render(FaqTemplate {
        categories,
        search,
        no_match,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        let accordion = Accordion::closed().toggle("is-it-free");
        assert!(accordion.is_open("is-it-free"));

        let accordion = accordion.toggle("quality");
        assert!(accordion.is_open("quality"));
        assert!(!accordion.is_open("is-it-free"));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let accordion = Accordion::closed().toggle("quality").toggle("quality");
        assert_eq!(accordion, Accordion::closed());
    }

    #[test]
    fn at_most_one_item_is_open() {
        let slugs = known_slugs();
        let mut accordion = Accordion::closed();

        for slug in &slugs {
            accordion = accordion.toggle(slug);
            let open_count = slugs.iter().filter(|s| accordion.is_open(s)).count();
            assert_eq!(open_count, 1);
        }
    }

    #[test]
    fn unknown_slug_from_the_query_is_dropped() {
        let accordion = Accordion::from_query(Some("no-such-item".to_owned()), &known_slugs());
        assert_eq!(accordion, Accordion::closed());
    }

    #[test]
    fn search_matches_question_and_answer_text() {
        let entry = &CATALOG[0].entries[0];

        assert!(matches_search(entry, ""));
        assert!(matches_search(entry, "beamcast"));
        assert!(matches_search(entry, "BEAMCAST"));
        assert!(matches_search(entry, "never leaves your home network"));
        assert!(!matches_search(entry, "quantum"));
    }

    #[test]
    fn toggle_links_preserve_the_search_term() {
        let accordion = Accordion::closed();

        assert_eq!(
            toggle_href(&accordion, "quality", "frame rate"),
            "/faq?open=quality&q=frame%20rate#quality"
        );

        let open = accordion.toggle("quality");
        assert_eq!(
            toggle_href(&open, "quality", "frame rate"),
            "/faq?q=frame%20rate#quality"
        );
        assert_eq!(toggle_href(&open, "quality", ""), "/faq#quality");
    }

    #[test]
    fn catalog_slugs_are_unique() {
        let mut slugs = known_slugs();
        let before = slugs.len();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), before);
    }
}
