//! Per-person card fragment composer.
//!
//! # Responsibility
//! - Build one presentational fragment per person: name block, date line,
//!   bio, and the conditional image and video embeds.
//!
//! # Invariants
//! - Every value the composer interpolates is entity-escaped; only the
//!   markup-transformed bio is injected as-is (trusted by contract).
//! - Per-record anomalies degrade that record's own blocks and never abort
//!   the fragment or its neighbors.

use crate::markup;
use crate::model::Person;
use crate::view::escape_html;
use crate::view::video::extract_video_id;
use log::warn;

const BIO_PLACEHOLDER: &str = "Bio coming soon.";
const VIDEO_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Composes the card fragment for one person.
pub fn person_card(person: &Person) -> String {
    let mut card = format!(
        "<article class=\"person-card card\" data-person-id=\"{}\">",
        escape_html(&person.id)
    );

    card.push_str(&format!("<h3>{}</h3>", name_block(person)));

    if let Some(dates) = date_line(person) {
        card.push_str(&format!("<div class=\"meta-line\">{dates}</div>"));
    }

    let bio = match &person.bio_markdown {
        Some(source) => markup::transform(source),
        None => BIO_PLACEHOLDER.to_string(),
    };
    card.push_str(&format!("<div class=\"bio-content\">{bio}</div>"));

    if let Some(image_url) = &person.image_url {
        card.push_str(&format!(
            "<div class=\"card-image\"><img src=\"{}\" alt=\"Portrait of {}\"></div>",
            escape_html(image_url),
            escape_html(subject_name(person))
        ));
    }

    if let Some(video_url) = &person.youtube_url {
        match extract_video_id(video_url) {
            Some(video_id) => card.push_str(&video_block(person, &video_id)),
            None => warn!(
                "event=video_url_unparsable module=view person={} url={}",
                person.display_name(),
                video_url
            ),
        }
    }

    card.push_str("</article>");
    card
}

/// Escaped name, wrapped in an anchor when a wikipedia link exists.
fn name_block(person: &Person) -> String {
    let name = escape_html(person.display_name());
    match &person.wikipedia_url {
        Some(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{name}</a>",
            escape_html(url)
        ),
        None => name,
    }
}

/// `b. {dob}` / `d. {dod}` joined with a middle dot; `None` when neither
/// date is present.
fn date_line(person: &Person) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(dob) = &person.dob {
        parts.push(format!("b. {}", escape_html(dob)));
    }
    if let Some(dod) = &person.dod {
        parts.push(format!("d. {}", escape_html(dod)));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

fn video_block(person: &Person, video_id: &str) -> String {
    format!(
        "<div class=\"card-video\"><iframe src=\"https://www.youtube.com/embed/{}\" \
         title=\"YouTube video for {}\" allow=\"{VIDEO_ALLOW}\" allowfullscreen></iframe></div>",
        escape_html(video_id),
        escape_html(subject_name(person))
    )
}

/// Name as used inside alt/title phrases, with the softer fallback.
fn subject_name(person: &Person) -> &str {
    if person.name.is_empty() {
        "this person"
    } else {
        &person.name
    }
}

#[cfg(test)]
mod tests {
    use super::person_card;
    use crate::model::Person;
    use crate::store::Document;
    use serde_json::json;

    fn person(fields: serde_json::Value) -> Person {
        Person::from_document(&Document::new("p1", fields))
    }

    #[test]
    fn name_links_to_wikipedia_with_escaped_text() {
        let card = person_card(&person(json!({
            "name": "X & Y",
            "wikipediaURL": "https://en.wikipedia.org/wiki/X"
        })));
        assert!(card.contains(
            "<a href=\"https://en.wikipedia.org/wiki/X\" target=\"_blank\" \
             rel=\"noopener noreferrer\">X &amp; Y</a>"
        ));
    }

    #[test]
    fn name_without_wikipedia_renders_plain() {
        let card = person_card(&person(json!({"name": "Ada Lovelace"})));
        assert!(card.contains("<h3>Ada Lovelace</h3>"));
        assert!(!card.contains("<a href"));
    }

    #[test]
    fn date_line_joins_both_parts_with_a_middle_dot() {
        let card = person_card(&person(json!({"name": "A", "dob": "1815", "dod": "1852"})));
        assert!(card.contains("<div class=\"meta-line\">b. 1815 · d. 1852</div>"));

        let only_birth = person_card(&person(json!({"name": "A", "dob": "1815"})));
        assert!(only_birth.contains("<div class=\"meta-line\">b. 1815</div>"));

        let no_dates = person_card(&person(json!({"name": "A"})));
        assert!(!no_dates.contains("meta-line"));
    }

    #[test]
    fn bio_is_transformed_or_replaced_by_placeholder() {
        let with_bio = person_card(&person(json!({"name": "A", "bioMarkdown": "# Hi **there**"})));
        assert!(with_bio.contains("<div class=\"bio-content\"><h1>Hi <b>there</b></h1></div>"));

        let without = person_card(&person(json!({"name": "A"})));
        assert!(without.contains("<div class=\"bio-content\">Bio coming soon.</div>"));
    }

    #[test]
    fn image_block_is_conditional_and_alt_derives_from_name() {
        let with_image = person_card(&person(json!({
            "name": "Ada Lovelace",
            "imageURL": "https://img.example/ada.png"
        })));
        assert!(with_image.contains(
            "<div class=\"card-image\"><img src=\"https://img.example/ada.png\" \
             alt=\"Portrait of Ada Lovelace\"></div>"
        ));

        let without = person_card(&person(json!({"name": "Ada"})));
        assert!(!without.contains("card-image"));
    }

    #[test]
    fn video_block_embeds_extracted_id() {
        let card = person_card(&person(json!({
            "name": "Ada",
            "youtubeURL": "https://www.youtube.com/watch?v=abc123"
        })));
        assert!(card.contains("https://www.youtube.com/embed/abc123"));
        assert!(card.contains("title=\"YouTube video for Ada\""));
        assert!(card.contains("allowfullscreen"));
    }

    #[test]
    fn unparsable_video_url_omits_the_block_without_failing() {
        let card = person_card(&person(json!({
            "name": "Ada",
            "youtubeURL": "not a url"
        })));
        assert!(!card.contains("card-video"));
        assert!(card.contains("<h3>Ada</h3>"));
    }

    #[test]
    fn missing_name_uses_documented_placeholders() {
        let card = person_card(&person(json!({
            "imageURL": "https://img.example/x.png"
        })));
        assert!(card.contains("<h3>[No name]</h3>"));
        assert!(card.contains("alt=\"Portrait of this person\""));
    }
}
