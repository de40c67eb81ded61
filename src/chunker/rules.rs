use std::sync::LazyLock;

use regex::Regex;

/// Patterns driving the heading-delimited chunker.
///
/// `heading` finds section boundaries in flat text. `decompose` splits a
/// cleaned heading into identifier and label; headings it rejects are skipped.
/// `level`, when present, pulls a conformance level out of the body text and
/// every occurrence of it is stripped before cleaning.
pub struct HeadingRules {
    pub heading: Regex,
    pub decompose: Regex,
    pub level: Option<Regex>,
}

/// "Success Criterion 1.1.1 Non-text Content" headings as rendered in the
/// WCAG Recommendation HTML, with "(Level A)" markers in the body.
pub static WCAG_HTML: LazyLock<HeadingRules> = LazyLock::new(|| HeadingRules {
    heading: Regex::new(r"Success Criterion\s+\d\.\d\.\d+\s+[^\n]+").unwrap(),
    decompose: Regex::new(r"^Success Criterion\s+(\d\.\d\.\d+)\s+(.*)$").unwrap(),
    level: Some(Regex::new(r"\(Level\s+(A{1,3})\)").unwrap()),
});

/// Bare "1.1.1 Non-text Content" headings as they come out of PDF text
/// extraction. Level markers stay in the body here.
pub static WCAG_PDF: LazyLock<HeadingRules> = LazyLock::new(|| HeadingRules {
    heading: Regex::new(r"\d\.\d\.\d+\s+[^\n]+").unwrap(),
    decompose: Regex::new(r"^(\d\.\d\.\d+)\s+(.*)$").unwrap(),
    level: None,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_heading_matches_across_line_break() {
        // Flattened HTML puts each text node on its own line.
        let text = "Success Criterion\n1.1.1\nNon-text Content\nbody";
        assert!(WCAG_HTML.heading.is_match(text));
    }

    #[test]
    fn html_decompose_splits_id_and_title() {
        let caps = WCAG_HTML
            .decompose
            .captures("Success Criterion 1.4.11 Non-text Contrast")
            .unwrap();
        assert_eq!(&caps[1], "1.4.11");
        assert_eq!(&caps[2], "Non-text Contrast");
    }

    #[test]
    fn level_marker_captures_all_tiers() {
        let re = WCAG_HTML.level.as_ref().unwrap();
        for (marker, level) in [
            ("(Level A)", "A"),
            ("(Level AA)", "AA"),
            ("(Level AAA)", "AAA"),
        ] {
            let caps = re.captures(marker).unwrap();
            assert_eq!(&caps[1], level);
        }
    }

    #[test]
    fn pdf_decompose_rejects_prose_lines() {
        assert!(WCAG_PDF.decompose.captures("see section 1.2.3 below").is_none());
    }
}
