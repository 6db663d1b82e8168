//! Vocabulary tests.

use lighthouse_parser::vocabulary::{STANDARD_VERBS, Verb};
use lighthouse_parser::{VerbClass, Vocabulary};

#[test]
fn every_class_has_its_canonical_word() {
    let vocabulary = Vocabulary::standard();
    for class in VerbClass::ALL {
        assert_eq!(vocabulary.classify(class.canonical()), Some(class), "{class}");
    }
}

#[test]
fn synonyms_classify() {
    let vocabulary = Vocabulary::standard();
    let cases = [
        ("walk", VerbClass::Move),
        ("n", VerbClass::Move),
        ("x", VerbClass::Look),
        ("grab", VerbClass::Take),
        ("give", VerbClass::Use),
        ("strike", VerbClass::Use),
        ("hello", VerbClass::Talk),
        ("pull", VerbClass::Ring),
        ("search", VerbClass::Dig),
        ("i", VerbClass::Inventory),
        ("?", VerbClass::Help),
        ("exit", VerbClass::Quit),
    ];
    for (word, class) in cases {
        assert_eq!(vocabulary.classify(word), Some(class), "{word}");
    }
    assert_eq!(vocabulary.classify("frobnicate"), None);
}

#[test]
fn no_word_belongs_to_two_classes() {
    let mut seen = std::collections::HashMap::new();
    for verb in STANDARD_VERBS {
        for word in verb.synonyms {
            if let Some(previous) = seen.insert(*word, verb.class) {
                panic!("{word} is both {previous} and {}", verb.class);
            }
        }
    }
}

#[test]
fn custom_vocabulary_extends_the_standard_one() {
    let mut vocabulary = Vocabulary::standard().clone();
    vocabulary.register_verb(Verb {
        class: VerbClass::Dig,
        synonyms: &["shovel", "dig"],
    });
    assert_eq!(vocabulary.classify("shovel"), Some(VerbClass::Dig));
    assert!(vocabulary.words_for(VerbClass::Dig).contains(&"shovel"));
    assert_eq!(vocabulary.classify("take"), Some(VerbClass::Take));
}
