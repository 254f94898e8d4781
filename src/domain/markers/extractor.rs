//! Marker extraction
//!
//! A single linear regex sweep over document text. Pure: no caching, no
//! shared scan state.

use super::grammar::{marker_regex, sanitize_name};
use super::occurrence::{MarkerKind, Occurrence, Span};

/// Extract all marker occurrences from `text`, in source order.
///
/// Occurrence spans are disjoint by construction (names cannot contain
/// `]`, so matches never overlap) and sorted by start offset. Unterminated
/// markers produce nothing. A name consisting only of whitespace is still
/// extracted; its sanitized name is the empty string while the literal and
/// span record what the source actually contains.
pub fn extract(text: &str) -> Vec<Occurrence> {
    marker_regex()
        .captures_iter(text)
        .map(|cap| {
            let whole = cap.get(0).unwrap();
            let kind = if &cap[1] == "!" {
                MarkerKind::Opening
            } else {
                MarkerKind::Closing
            };
            Occurrence::new(
                sanitize_name(&cap[2]),
                kind,
                whole.as_str().to_string(),
                Span::new(whole.start(), whole.end()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_text_without_markers() {
        assert!(extract("plain text with [brackets] and [x y]").is_empty());
    }

    #[test]
    fn test_opening_and_closing_pair() {
        let occurrences = extract("[!greeting] hello [~greeting]");

        assert_eq!(occurrences.len(), 2);

        assert_eq!(occurrences[0].name, "greeting");
        assert_eq!(occurrences[0].kind, MarkerKind::Opening);
        assert_eq!(occurrences[0].literal, "[!greeting]");
        assert_eq!(occurrences[0].span, Span::new(0, 11));

        assert_eq!(occurrences[1].name, "greeting");
        assert_eq!(occurrences[1].kind, MarkerKind::Closing);
        assert_eq!(occurrences[1].literal, "[~greeting]");
        assert_eq!(occurrences[1].span, Span::new(18, 29));
    }

    #[test]
    fn test_adjacent_openings() {
        let occurrences = extract("[!foo][!foo]");

        assert_eq!(occurrences.len(), 2);
        assert!(occurrences
            .iter()
            .all(|o| o.name == "foo" && o.kind == MarkerKind::Opening));
        assert_eq!(occurrences[0].span, Span::new(0, 6));
        assert_eq!(occurrences[1].span, Span::new(6, 12));
    }

    #[test]
    fn test_unterminated_marker_not_extracted() {
        assert!(extract("[!dangling").is_empty());
        assert!(extract("[!split\nname]").is_empty());
        // The closing pair on the next line still extracts
        let occurrences = extract("[!open\n[~done]");
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].name, "done");
    }

    #[test]
    fn test_name_is_sanitized_literal_is_not() {
        let occurrences = extract("[! spaced <b> ]");
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].name, "spaced &lt;b&gt;");
        assert_eq!(occurrences[0].literal, "[! spaced <b> ]");
    }

    #[test]
    fn test_whitespace_only_name_kept_with_empty_name() {
        let occurrences = extract("[!   ]");
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].name, "");
        assert_eq!(occurrences[0].literal, "[!   ]");
        assert_eq!(occurrences[0].span, Span::new(0, 6));
    }

    #[test]
    fn test_determinism() {
        let text = "a [!x] b [~x] c [!y]\n[~y] [!x]";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_spans_disjoint_and_ordered() {
        let text = "[!a][~a] text [!b] more [~b][!c]";
        let occurrences = extract(text);
        assert_eq!(occurrences.len(), 5);
        for pair in occurrences.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn test_multibyte_text_offsets() {
        let text = "héllo [!tag] wörld";
        let occurrences = extract(text);
        assert_eq!(occurrences.len(), 1);
        let span = occurrences[0].span;
        assert_eq!(&text[span.start..span.end], "[!tag]");
    }

    #[test]
    fn test_crlf_documents() {
        let occurrences = extract("[!a]\r\n[~a]\r\n");
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].span, Span::new(0, 4));
        assert_eq!(occurrences[1].span, Span::new(6, 10));
    }
}
