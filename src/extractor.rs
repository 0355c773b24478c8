use std::fmt;

use html5ever::driver::{parse_document, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

use crate::resolve::{is_mp3_reference, resolve};

lazy_static! {
    /// anchors carrying an href
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a[href]").expect("valid selector");

    /// embedded audio players
    static ref AUDIO_SELECTOR: Selector = Selector::parse("audio").expect("valid selector");

    /// source declarations, matched below an audio element
    static ref SOURCE_SELECTOR: Selector = Selector::parse("source").expect("valid selector");
}

/// Which scan produced a discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryKind {
    /// `<a href="...mp3">`
    Anchor,

    /// `<audio><source src="...mp3"></audio>`
    AudioSource,
}

impl DiscoveryKind {
    /// tag printed in front of the link
    pub fn tag(&self) -> &'static str {
        match self {
            DiscoveryKind::Anchor => "FOUND_MP3",
            DiscoveryKind::AudioSource => "FOUND_MP3_AUDIO",
        }
    }
}

/// An MP3 link found on a page, already resolved against the page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub kind: DiscoveryKind,
    pub url: String,
}

impl fmt::Display for Discovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.tag(), self.url)
    }
}

/// Parse `body` and run both scans; anchors come first, then audio sources
pub fn extract(body: &[u8], page_url: &str) -> Vec<Discovery> {
    let html = String::from_utf8_lossy(body);
    let document = parse_markup(&html);

    let mut discoveries = scan_anchors(&document, page_url);
    let anchors = discoveries.len();
    discoveries.extend(scan_audio_sources(&document, page_url));

    log::debug!(
        "{}: {} anchor link(s), {} audio source(s)",
        page_url,
        anchors,
        discoveries.len() - anchors
    );

    discoveries
}

/// build the tree with scripting off so `<noscript>` content is parsed as markup
fn parse_markup(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    parse_document(Html::new_document(), opts).one(html)
}

fn scan_anchors(document: &Html, page_url: &str) -> Vec<Discovery> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| is_mp3_reference(href))
        .map(|href| Discovery {
            kind: DiscoveryKind::Anchor,
            url: resolve(href, page_url),
        })
        .collect()
}

fn scan_audio_sources(document: &Html, page_url: &str) -> Vec<Discovery> {
    let mut found = Vec::new();

    for audio in document.select(&AUDIO_SELECTOR) {
        // descendants, not just direct children
        for source in audio.select(&SOURCE_SELECTOR) {
            if let Some(src) = source.value().attr("src") {
                if is_mp3_reference(src) {
                    found.push(Discovery {
                        kind: DiscoveryKind::AudioSource,
                        url: resolve(src, page_url),
                    });
                }
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/dir/page.html";

    fn urls(discoveries: &[Discovery]) -> Vec<&str> {
        discoveries.iter().map(|d| d.url.as_str()).collect()
    }

    #[test]
    fn anchor_scan_resolves_every_branch() {
        let html = r#"<html><body>
            <a href="track.mp3">one</a>
            <a href="/sounds/a.mp3">two</a>
            <a href="//cdn.example.com/a.mp3">three</a>
            <a href="https://other.com/a.mp3">four</a>
        </body></html>"#;

        let found = extract(html.as_bytes(), PAGE);

        assert!(found.iter().all(|d| d.kind == DiscoveryKind::Anchor));
        assert_eq!(
            urls(&found),
            vec![
                "https://example.com/dir/track.mp3",
                "https://example.com/sounds/a.mp3",
                "https://cdn.example.com/a.mp3",
                "https://other.com/a.mp3",
            ]
        );
    }

    #[test]
    fn anchor_scan_skips_non_mp3_and_missing_href() {
        let html = r#"<a href="/index.html">home</a><a name="top">anchor</a><a href="song.ogg">x</a>"#;
        assert!(extract(html.as_bytes(), PAGE).is_empty());
    }

    #[test]
    /// matching ignores case, the printed link keeps it
    fn upper_case_extension_is_found_verbatim() {
        let html = r#"<a href="Loud/NEIGH.MP3">neigh</a>"#;
        let found = extract(html.as_bytes(), PAGE);
        assert_eq!(urls(&found), vec!["https://example.com/dir/Loud/NEIGH.MP3"]);
    }

    #[test]
    fn audio_scan_reads_nested_sources() {
        let html = r#"<audio controls>
            <source src="/media/horse.ogg" type="audio/ogg">
            <source src="/media/horse.mp3" type="audio/mpeg">
        </audio>
        <audio><div><source src="deep.mp3"></div></audio>"#;

        let found = extract(html.as_bytes(), PAGE);

        assert!(found.iter().all(|d| d.kind == DiscoveryKind::AudioSource));
        assert_eq!(
            urls(&found),
            vec![
                "https://example.com/media/horse.mp3",
                "https://example.com/dir/deep.mp3",
            ]
        );
    }

    #[test]
    fn source_outside_audio_is_ignored() {
        let html = r#"<video><source src="clip.mp3"></video><source src="loose.mp3">"#;
        assert!(extract(html.as_bytes(), PAGE).is_empty());
    }

    #[test]
    fn audio_src_attribute_itself_is_not_scanned() {
        let html = r#"<audio src="direct.mp3"></audio>"#;
        assert!(extract(html.as_bytes(), PAGE).is_empty());
    }

    #[test]
    /// anchors are reported before audio sources wherever they sit
    fn anchors_come_before_audio_sources() {
        let html = r#"<audio><source src="first.mp3"></audio><a href="second.mp3">dl</a>"#;
        let found = extract(html.as_bytes(), PAGE);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, DiscoveryKind::Anchor);
        assert_eq!(found[0].url, "https://example.com/dir/second.mp3");
        assert_eq!(found[1].kind, DiscoveryKind::AudioSource);
        assert_eq!(found[1].url, "https://example.com/dir/first.mp3");
    }

    #[test]
    /// links inside noscript are markup, not text
    fn noscript_content_is_scanned() {
        let html = r#"<noscript><a href="ns.mp3">x</a><audio><source src="ns2.mp3"></audio></noscript>"#;
        let found = extract(html.as_bytes(), PAGE);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, DiscoveryKind::Anchor);
        assert_eq!(found[0].url, "https://example.com/dir/ns.mp3");
        assert_eq!(found[1].kind, DiscoveryKind::AudioSource);
        assert_eq!(found[1].url, "https://example.com/dir/ns2.mp3");
    }

    #[test]
    fn noscript_in_body_is_scanned() {
        let html = r#"<html><head></head><body><p>player</p>
            <noscript><a href="/fallback/neigh.mp3">listen</a></noscript>
        </body></html>"#;
        let found = extract(html.as_bytes(), PAGE);
        assert_eq!(urls(&found), vec!["https://example.com/fallback/neigh.mp3"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let html = r#"<a href="a.mp3">x</a><a href="a.mp3">y</a>"#;
        assert_eq!(extract(html.as_bytes(), PAGE).len(), 2);
    }

    #[test]
    fn invalid_utf8_does_not_prevent_extraction() {
        let mut body = b"<p>\xff\xfe</p>".to_vec();
        body.extend_from_slice(br#"<a href="ok.mp3">ok</a>"#);
        let found = extract(&body, PAGE);
        assert_eq!(urls(&found), vec!["https://example.com/dir/ok.mp3"]);
    }

    #[test]
    fn discovery_display_uses_strategy_tag() {
        let anchor = Discovery {
            kind: DiscoveryKind::Anchor,
            url: "https://a.com/x.mp3".to_string(),
        };
        let audio = Discovery {
            kind: DiscoveryKind::AudioSource,
            url: "https://a.com/y.mp3".to_string(),
        };
        assert_eq!(anchor.to_string(), "FOUND_MP3: https://a.com/x.mp3");
        assert_eq!(audio.to_string(), "FOUND_MP3_AUDIO: https://a.com/y.mp3");
    }
}
