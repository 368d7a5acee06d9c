use sqlsplit::Splitter;

use pretty_assertions::assert_eq;

// Re-joining the non-empty trimmed parts with the delimiter and re-splitting
// yields the same sequence.
#[test]
fn delimiter_split_is_idempotent_under_rejoin() {
    let texts = [
        "insert into t values(?); insert into t values(?)",
        "  a ;; b ; c  ",
        ";;;",
        "single statement",
        "",
    ];
    let splitter = Splitter::delimiter(";");

    for text in texts {
        let parts = splitter.split(text);
        let rejoined = parts.join(";");
        assert_eq!(splitter.split(&rejoined), parts, "text = {text:?}");
    }
}

#[test]
fn pattern_split_preserves_statement_bodies() {
    let splitter = Splitter::pattern(r"\s*;\s*").unwrap();
    assert_eq!(
        splitter.split("insert into t values(?) ; insert into t values(?)"),
        vec![
            "insert into t values(?)".to_string(),
            "insert into t values(?)".to_string(),
        ]
    );
}

#[test]
fn pattern_split_keeps_empty_segments_for_the_skip_policy() {
    let splitter = Splitter::pattern(";").unwrap();
    assert_eq!(
        splitter.split("a;;b;"),
        vec![
            "a".to_string(),
            "".to_string(),
            "b".to_string(),
            "".to_string(),
        ]
    );
}
