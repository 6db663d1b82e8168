//! Vocabulary registry.
//!
//! Maps verb words to the class of action they trigger. Each class has a
//! canonical word and a set of synonyms; a word belongs to at most one class.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// The kind of action a verb word asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerbClass {
    /// Walk through an exit
    Move,
    /// Describe the room or an object
    Look,
    /// Pick up an item
    Take,
    /// Use, combine or give items
    Use,
    /// Speak to whoever is present
    Talk,
    /// Ring the lighthouse bell
    Ring,
    /// Dig in the ground
    Dig,
    /// List carried items
    Inventory,
    /// Show the command summary
    Help,
    /// End the session
    Quit,
}

impl VerbClass {
    /// Every class, in dispatch order.
    pub const ALL: [VerbClass; 10] = [
        VerbClass::Move,
        VerbClass::Look,
        VerbClass::Take,
        VerbClass::Use,
        VerbClass::Talk,
        VerbClass::Ring,
        VerbClass::Dig,
        VerbClass::Inventory,
        VerbClass::Help,
        VerbClass::Quit,
    ];

    /// Returns the canonical verb for this class.
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        match self {
            VerbClass::Move => "go",
            VerbClass::Look => "look",
            VerbClass::Take => "take",
            VerbClass::Use => "use",
            VerbClass::Talk => "talk",
            VerbClass::Ring => "ring",
            VerbClass::Dig => "dig",
            VerbClass::Inventory => "inventory",
            VerbClass::Help => "help",
            VerbClass::Quit => "quit",
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// A registered verb class with its trigger words.
#[derive(Clone, Debug)]
pub struct Verb {
    /// The class these words trigger
    pub class: VerbClass,
    /// Synonym words, the canonical one included
    pub synonyms: &'static [&'static str],
}

/// The standard verb set.
pub const STANDARD_VERBS: [Verb; 10] = [
    Verb {
        class: VerbClass::Move,
        synonyms: &[
            "go", "walk", "move", "head", "n", "s", "e", "w", "u", "d", "north", "south", "east",
            "west", "up", "down", "enter",
        ],
    },
    Verb {
        class: VerbClass::Look,
        synonyms: &["look", "l", "examine", "x", "inspect", "read"],
    },
    Verb {
        class: VerbClass::Take,
        synonyms: &["get", "take", "grab", "pick", "pickup"],
    },
    Verb {
        class: VerbClass::Use,
        synonyms: &[
            "use", "put", "place", "insert", "install", "combine", "give", "throw", "feed",
            "light", "strike",
        ],
    },
    Verb {
        class: VerbClass::Talk,
        synonyms: &["talk", "speak", "ask", "greet", "hello", "hi"],
    },
    Verb {
        class: VerbClass::Ring,
        synonyms: &["ring", "pull"],
    },
    Verb {
        class: VerbClass::Dig,
        synonyms: &["dig", "search"],
    },
    Verb {
        class: VerbClass::Inventory,
        synonyms: &["inventory", "inv", "i"],
    },
    Verb {
        class: VerbClass::Help,
        synonyms: &["help", "h", "?"],
    },
    Verb {
        class: VerbClass::Quit,
        synonyms: &["quit", "exit", "q"],
    },
];

static STANDARD: LazyLock<Vocabulary> = LazyLock::new(|| {
    let mut vocabulary = Vocabulary::new();
    for verb in STANDARD_VERBS {
        vocabulary.register_verb(verb);
    }
    vocabulary
});

/// Runtime storage for verb definitions.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Verbs in registration order
    verbs: Vec<Verb>,
    /// Word -> class mapping
    verb_synonyms: HashMap<&'static str, VerbClass>,
}

impl Vocabulary {
    /// Creates a new empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the vocabulary of The Lighthouse of Forgotten Souls.
    #[must_use]
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// Registers a verb class with its synonyms.
    ///
    /// A word already registered keeps its first class.
    pub fn register_verb(&mut self, verb: Verb) {
        for syn in verb.synonyms {
            self.verb_synonyms.entry(*syn).or_insert(verb.class);
        }
        self.verbs.push(verb);
    }

    /// Looks up the class of a verb word.
    #[must_use]
    pub fn classify(&self, word: &str) -> Option<VerbClass> {
        self.verb_synonyms.get(word).copied()
    }

    /// Returns the words registered for `class`.
    #[must_use]
    pub fn words_for(&self, class: VerbClass) -> Vec<&'static str> {
        self.verbs
            .iter()
            .filter(|v| v.class == class)
            .flat_map(|v| v.synonyms.iter().copied())
            .collect()
    }

    /// Iterates over every registered verb word.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.verbs.iter().flat_map(|v| v.synonyms.iter().copied())
    }
}
