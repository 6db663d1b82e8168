//! Parse tests.

use lighthouse_parser::phrase::ARTICLES;
use lighthouse_parser::{Command, InputTokenizer, ParsedInput, parse};
use proptest::prelude::*;

fn command(raw: &str) -> Command {
    match parse(raw) {
        ParsedInput::Command(cmd) => cmd,
        ParsedInput::Empty => panic!("expected a command for {raw:?}"),
    }
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn mixed_case_with_articles() {
    let cmd = command("  Take the Crystal Lens ");
    assert_eq!(cmd.raw, "Take the Crystal Lens");
    assert_eq!(cmd.verb, "take");
    assert_eq!(cmd.object.as_str(), "crystal lens");
    assert_eq!(cmd.object.key(), "crystal_lens");
}

#[test]
fn whitespace_only_is_empty() {
    assert_eq!(parse(""), ParsedInput::Empty);
    assert_eq!(parse(" \t  "), ParsedInput::Empty);
}

#[test]
fn verb_alone_has_no_object() {
    let cmd = command("INVENTORY");
    assert_eq!(cmd.verb, "inventory");
    assert!(!cmd.has_object());
}

#[test]
fn articles_are_whole_words_only() {
    let cmd = command("look at the anchor");
    assert_eq!(cmd.object.as_str(), "at anchor");
    assert_eq!(cmd.object.without_leading("at").as_str(), "anchor");
}

#[test]
fn unknown_verbs_still_parse() {
    let cmd = command("Frobnicate the sky");
    assert_eq!(cmd.verb, "frobnicate");
    assert_eq!(cmd.object.as_str(), "sky");
    assert_eq!(cmd.raw, "Frobnicate the sky");
}

#[test]
fn punctuation_is_kept() {
    assert_eq!(InputTokenizer::tokenize("?"), vec!["?".to_string()]);
    assert_eq!(command("?").verb, "?");
}

// =============================================================================
// Keyword Matching
// =============================================================================

#[test]
fn mentions_matches_words_not_substrings() {
    let object = command("use apple on crab").object;
    assert!(object.mentions(&["crab"]));
    assert!(object.mentions(&["apple"]));
    assert!(!object.mentions(&["app"]));
    assert!(!object.mentions(&["crabs"]));
}

#[test]
fn mentions_multi_word_keywords() {
    let object = command("install crystal lens in housing").object;
    assert!(object.mentions(&["crystal_lens"]));
    assert!(object.mentions(&["crystal lens"]));
    assert!(!object.mentions(&["lens crystal"]));
}

#[test]
fn is_any_compares_whole_phrase() {
    let object = command("take oil can").object;
    assert!(object.is_any(&["oil can", "oil"]));
    assert!(!object.is_any(&["oil"]));
}

// =============================================================================
// Properties
// =============================================================================

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        Just("the".to_string()),
        Just("a".to_string()),
        Just("an".to_string()),
    ]
}

proptest! {
    #[test]
    fn object_keeps_non_articles_in_order(verb in "[a-z]{1,8}", rest in prop::collection::vec(word(), 0..8)) {
        let line = std::iter::once(verb.clone()).chain(rest.iter().cloned()).collect::<Vec<_>>().join(" ");
        let cmd = command(&line);
        let expected: Vec<String> = rest
            .iter()
            .filter(|w| !ARTICLES.contains(&w.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(cmd.verb, verb);
        prop_assert_eq!(cmd.object.words(), expected.as_slice());
    }

    #[test]
    fn parse_ignores_case(line in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(parse(&line).command().map(|c| c.verb.clone()),
            parse(&line.to_lowercase()).command().map(|c| c.verb.clone()));
        prop_assert_eq!(parse(&line).command().map(|c| c.object.clone()),
            parse(&line.to_lowercase()).command().map(|c| c.object.clone()));
    }
}
