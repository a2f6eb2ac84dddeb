// crates/pastelink-core/tests/normalize_rules.rs

use pastelink_core::normalize::normalize;

#[test]
fn rewrites_the_known_escape_pairs() {
    assert_eq!(normalize("a\\nb"), "a\nb");
    assert_eq!(normalize("a\\tb"), "a\tb");
    assert_eq!(normalize("a\\rb"), "a\rb");
    assert_eq!(normalize("a\\\"b"), "a\"b");
    assert_eq!(normalize("a\\'b"), "a'b");
    assert_eq!(normalize("a\\`b"), "a`b");
    assert_eq!(normalize("a\\\\b"), "a\\b");
}

#[test]
fn leaves_unknown_pairs_untouched() {
    assert_eq!(normalize("a\\qb"), "a\\qb");
    assert_eq!(normalize("a\\0b"), "a\\0b");
    assert_eq!(normalize("a\\u0041b"), "a\\u0041b");
    assert_eq!(normalize("path\\like\\windows"), "path\\like\\windows");
}

#[test]
fn keeps_a_lone_trailing_backslash() {
    assert_eq!(normalize("abc\\"), "abc\\");
    assert_eq!(normalize("\\"), "\\");
}

#[test]
fn escaped_backslash_is_not_rescanned() {
    // backslash-backslash-n: the pair collapses first, the n is plain text
    assert_eq!(normalize("a\\\\nb"), "a\\nb");
    // four backslashes: two independent pairs
    assert_eq!(normalize("\\\\\\\\"), "\\\\");
}

#[test]
fn is_a_single_pass_and_not_idempotent() {
    let once = normalize("a\\\\nb");
    assert_eq!(once, "a\\nb");

    // a second pass keeps substituting, which is exactly why the session
    // applies normalize to the stored blob only
    let twice = normalize(&once);
    assert_eq!(twice, "a\nb");
    assert_ne!(once, twice);
}

#[test]
fn passes_plain_and_unicode_text_through() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("no escapes at all"), "no escapes at all");
    assert_eq!(normalize("日本語 🦀 déjà"), "日本語 🦀 déjà");
    assert_eq!(normalize("already\nreal\tcontrols"), "already\nreal\tcontrols");
}

#[test]
fn handles_runs_of_pairs_left_to_right() {
    assert_eq!(normalize("\\n\\t\\r"), "\n\t\r");
    assert_eq!(normalize("\\\\n\\n"), "\\n\n");
}
