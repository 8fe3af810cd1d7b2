//! Lesson body handling: sanitising authored HTML and plain-text rendering.

use std::collections::{HashMap, HashSet};

use learn_core::model::VideoRef;
use url::Url;

const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Strip everything from a lesson body except basic structural markup.
#[must_use]
pub fn sanitize_lesson_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h2", "h3", "h4", "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre",
        "blockquote", "ul", "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// Markdown rendering of a lesson body for text front-ends.
#[must_use]
pub fn lesson_html_to_markdown(html: &str) -> String {
    let markdown = html2md::parse_html(&sanitize_lesson_html(html));
    normalize_markdown(&markdown)
}

/// Player URL for an opaque video reference.
///
/// The reference is percent-encoded as a single path segment.
#[must_use]
pub fn video_embed_url(video: &VideoRef) -> Option<Url> {
    let mut url = Url::parse(VIDEO_EMBED_BASE).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(video.as_str());
    Some(url)
}

fn normalize_markdown(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut blank_streak = 0usize;

    for line in normalized.split('\n') {
        let trimmed = line.trim_end_matches([' ', '\t']).to_string();
        if trimmed.is_empty() {
            blank_streak += 1;
            if blank_streak > 1 {
                continue;
            }
        } else {
            blank_streak = 0;
        }
        lines.push(trimmed);
    }

    let mut output = lines.join("\n").trim_start_matches('\n').to_string();
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
