//! HTML parsing for the booking widget page.
//!
//! The widget renders one flat `<div class="kt-course">` fragment per
//! course. Extraction scans those known blocks locally instead of
//! interpreting the whole document; a missing field degrades to an empty
//! string so one malformed fragment cannot take down the listing.

use std::sync::OnceLock;

use regex::Regex;

use crate::Course;

/// `name` is "Hold - Sted"; the location is the trailing segment.
const LOCATION_DELIMITER: &str = " - ";

fn block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?s)<div[^>]*class="[^"]*kt-course[^"]*"[^>]*data-course-id="([^"]*)"[^>]*>(.*?)</div>"#,
        )
        .expect("course block regex")
    })
}

fn span_re(class: &str) -> Regex {
    Regex::new(&format!(
        r#"(?s)<span[^>]*class="[^"]*{class}[^"]*"[^>]*>(.*?)</span>"#
    ))
    .expect("course field regex")
}

fn href_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<a[^>]*class="[^"]*kt-course-signup[^"]*"[^>]*href="([^"]*)""#)
            .expect("signup link regex")
    })
}

/// Parse the widget page into course records.
///
/// Tolerant by design: unmatched fields become empty strings, unparseable
/// seat counts become `None`, and a page with no recognizable fragments
/// yields an empty list (the caller logs that case).
pub fn parse_courses(html: &str) -> Vec<Course> {
    let name_re = span_re("kt-course-name");
    let date_re = span_re("kt-course-date");
    let seats_re = span_re("kt-course-seats");

    block_re()
        .captures_iter(html)
        .map(|block| {
            let id = clean_text(&block[1]);
            let fragment = &block[2];

            let name = first_group(&name_re, fragment);
            let start_date = first_group(&date_re, fragment);
            let seats_left = first_group(&seats_re, fragment).parse::<u32>().ok();
            let registration_url = first_group(href_re(), fragment);
            let location = derive_location(&name);

            Course {
                id,
                name,
                start_date,
                location,
                registration_url,
                seats_left,
            }
        })
        .collect()
}

/// First capture group of `re` in `fragment`, cleaned, or an empty string.
fn first_group(re: &Regex, fragment: &str) -> String {
    re.captures(fragment)
        .map(|c| clean_text(&c[1]))
        .unwrap_or_default()
}

/// Trailing ` - ` segment of the course name, or empty when the name
/// carries no location suffix.
fn derive_location(name: &str) -> String {
    match name.rsplit_once(LOCATION_DELIMITER) {
        Some((_, location)) => location.trim().to_string(),
        None => String::new(),
    }
}

/// Collapse whitespace and decode the handful of entities the widget
/// actually emits.
fn clean_text(raw: &str) -> String {
    let decoded = raw
        .replace("&amp;", "&")
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <div class="kt-widget">
          <div class="kt-course" data-course-id="431">
            <span class="kt-course-name">Lørdagshold - Roskilde</span>
            <span class="kt-course-date">2026-09-05</span>
            <span class="kt-course-seats">4</span>
            <a class="kt-course-signup" href="https://booking.example/431">Tilmeld</a>
          </div>
          <div class="kt-course" data-course-id="432">
            <span class="kt-course-name">Aftenhold &amp; teori - København</span>
            <span class="kt-course-date">2026-09-12</span>
            <span class="kt-course-seats">udsolgt</span>
            <a class="kt-course-signup" href="https://booking.example/432">Tilmeld</a>
          </div>
        </div>
    "#;

    #[test]
    fn parses_all_fragments() {
        let courses = parse_courses(FIXTURE);
        assert_eq!(courses.len(), 2);

        assert_eq!(courses[0].id, "431");
        assert_eq!(courses[0].name, "Lørdagshold - Roskilde");
        assert_eq!(courses[0].start_date, "2026-09-05");
        assert_eq!(courses[0].location, "Roskilde");
        assert_eq!(courses[0].registration_url, "https://booking.example/431");
        assert_eq!(courses[0].seats_left, Some(4));
    }

    #[test]
    fn entities_are_decoded_and_non_numeric_seats_become_none() {
        let courses = parse_courses(FIXTURE);
        assert_eq!(courses[1].name, "Aftenhold & teori - København");
        assert_eq!(courses[1].location, "København");
        assert_eq!(courses[1].seats_left, None);
    }

    #[test]
    fn missing_fields_degrade_to_empty_strings() {
        let html = r#"<div class="kt-course" data-course-id="9"></div>"#;
        let courses = parse_courses(html);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "9");
        assert_eq!(courses[0].name, "");
        assert_eq!(courses[0].start_date, "");
        assert_eq!(courses[0].location, "");
        assert_eq!(courses[0].registration_url, "");
        assert_eq!(courses[0].seats_left, None);
    }

    #[test]
    fn drifted_markup_yields_empty_list() {
        let html = r#"<section class="completely-new-widget">nothing here</section>"#;
        assert!(parse_courses(html).is_empty());
    }

    #[test]
    fn name_without_delimiter_has_no_location() {
        assert_eq!(derive_location("Intensivhold"), "");
        assert_eq!(derive_location("A - B - C"), "C");
    }
}
