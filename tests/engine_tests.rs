//! Library-level integration tests driving the tracking engine through
//! in-memory document buffers.

use std::time::{Duration, Instant};

use tagtrack::domain::markers::extract;
use tagtrack::domain::tracker::{
    Position, SessionOptions, SuggestionSwitch, TextDocument, TextEdit, TrackState, TrackerSession,
};
use tagtrack::domain::MarkerKind;
use tagtrack::infrastructure::DocumentBuffer;

fn html_doc(text: &str) -> DocumentBuffer {
    DocumentBuffer::new("page.html", "html", text)
}

#[test]
fn test_edit_stream_stays_equivalent_to_rescan() {
    let mut doc = html_doc("<p>[!intro]</p>\ncontent\n<p>[~intro]</p>\n");
    let mut session = TrackerSession::new(SessionOptions::default());
    assert_eq!(session.occurrences(&doc).len(), 2);

    let edits = [
        TextEdit::insertion(0, "<!-- head -->\n"),
        TextEdit::insertion(21, "duction"),
        TextEdit::deletion(3, 5),
        TextEdit::new(0, 0, "[!new] [~new]\n"),
        TextEdit::deletion(0, 14),
    ];

    for edit in edits {
        doc.apply(&edit);
        session.handle_edit(&doc, std::slice::from_ref(&edit), Instant::now());
        assert_eq!(
            session.occurrences(&doc).to_vec(),
            extract(doc.text()),
            "cache diverged from rescan after {:?}",
            edit
        );
    }
}

#[test]
fn test_multi_edit_event_falls_back_to_rescan() {
    let mut doc = html_doc("[!a] [~a]");
    let mut session = TrackerSession::new(SessionOptions::default());
    session.occurrences(&doc);

    // two edits in one event, applied back-to-front
    let second = TextEdit::insertion(5, "x");
    let first = TextEdit::insertion(0, "y");
    doc.apply(&second);
    doc.apply(&first);
    session.handle_edit(&doc, &[second, first], Instant::now());

    assert_eq!(session.occurrences(&doc).to_vec(), extract(doc.text()));
}

#[test]
fn test_auto_close_round_trip() {
    let mut doc = html_doc("[!bar]");
    let mut session = TrackerSession::new(SessionOptions::default());
    session.occurrences(&doc);

    // typing a space right after the opening marker
    let edit = doc.insert(6, " ");
    let directives = session.handle_edit(&doc, std::slice::from_ref(&edit), Instant::now());

    assert_eq!(directives.len(), 1);
    let directive = &directives[0];
    assert_eq!(directive.text, "[~bar]");

    // host applies the directive and reports it back as an edit
    let closing_edit = TextEdit::insertion(directive.insert_offset, directive.text.clone());
    doc.apply(&closing_edit);
    session.handle_edit(&doc, std::slice::from_ref(&closing_edit), Instant::now());

    assert_eq!(doc.text(), "[!bar] [~bar]");
    // cursor lands between the two markers
    assert_eq!(&doc.text()[..directive.cursor_offset], "[!bar] ");
    assert_eq!(&doc.text()[directive.cursor_offset..], "[~bar]");

    let occurrences = session.occurrences(&doc).to_vec();
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[1].kind, MarkerKind::Closing);

    // a second space must not fire again: the closer is on the line now
    let edit = doc.insert(7, " ");
    let directives = session.handle_edit(&doc, std::slice::from_ref(&edit), Instant::now());
    assert!(directives.is_empty());
}

#[test]
fn test_close_invalidates_cache() {
    let mut session = TrackerSession::new(SessionOptions::default());

    let doc = html_doc("[!old] [~old]");
    assert_eq!(session.occurrences(&doc).len(), 2);
    assert_eq!(session.state("page.html"), TrackState::TrackedValid);

    session.handle_close("page.html");
    assert_eq!(session.state("page.html"), TrackState::Untracked);

    // same identity, new content: the query must re-extract, not reuse
    let reopened = html_doc("[!fresh]");
    let occurrences = session.occurrences(&reopened).to_vec();
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].name, "fresh");
}

#[test]
fn test_suggestion_suppression_cycle() {
    let mut session = TrackerSession::new(SessionOptions::default());
    let doc = html_doc("[!x] body");
    let t0 = Instant::now();

    // cursor inside the marker
    session.handle_selection(t0);
    assert!(session
        .poll(
            Some((&doc as &dyn TextDocument, Position::new(0, 2))),
            t0 + Duration::from_millis(100)
        )
        .is_none());
    assert_eq!(
        session.poll(
            Some((&doc as &dyn TextDocument, Position::new(0, 2))),
            t0 + Duration::from_millis(150)
        ),
        Some(SuggestionSwitch::Suppress)
    );

    // cursor moves out
    let t1 = t0 + Duration::from_secs(1);
    session.handle_selection(t1);
    assert_eq!(
        session.poll(
            Some((&doc as &dyn TextDocument, Position::new(0, 7))),
            t1 + Duration::from_millis(150)
        ),
        Some(SuggestionSwitch::Restore)
    );
}

#[test]
fn test_ineligible_document_is_ignored() {
    let mut session = TrackerSession::new(SessionOptions::default());
    let mut doc = DocumentBuffer::new("notes.txt", "plaintext", "[!x]");

    assert!(session.occurrences(&doc).is_empty());
    let edit = doc.insert(4, " ");
    assert!(session
        .handle_edit(&doc, std::slice::from_ref(&edit), Instant::now())
        .is_empty());
    assert_eq!(session.tracked_documents(), 0);
}

#[test]
fn test_highlight_selection_counterparts() {
    let mut session = TrackerSession::new(SessionOptions::default());
    let doc = html_doc("[~x]\n[!x] mid [~x]");

    // cursor in the opening marker on line 1
    let selection = session.highlight_at(&doc, Position::new(1, 1)).unwrap();
    assert_eq!(selection.active.kind, MarkerKind::Opening);
    assert_eq!(selection.counterparts.len(), 2);
    assert!(selection
        .counterparts
        .iter()
        .all(|occ| occ.kind == MarkerKind::Closing && occ.name == "x"));
}
