use crate::error::{PrimerError, Result};
use std::fmt;
use std::str::FromStr;

/// The construct a snippet demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Loops,
    Conditional,
    Switch,
    Arrays,
    Maps,
    Range,
    Functions,
    Variadic,
    Closures,
    Pointers,
    Structs,
    Embedding,
    Interfaces,
}

impl Topic {
    /// Every topic, in lesson order.
    pub const ALL: [Topic; 13] = [
        Topic::Loops,
        Topic::Conditional,
        Topic::Switch,
        Topic::Arrays,
        Topic::Maps,
        Topic::Range,
        Topic::Functions,
        Topic::Variadic,
        Topic::Closures,
        Topic::Pointers,
        Topic::Structs,
        Topic::Embedding,
        Topic::Interfaces,
    ];

    /// Lesson number. Lesson 9 was never written, so the sequence skips it.
    pub fn number(self) -> u8 {
        match self {
            Topic::Loops => 5,
            Topic::Conditional => 6,
            Topic::Switch => 7,
            Topic::Arrays => 8,
            Topic::Maps => 10,
            Topic::Range => 11,
            Topic::Functions => 12,
            Topic::Variadic => 13,
            Topic::Closures => 14,
            Topic::Pointers => 15,
            Topic::Structs => 16,
            Topic::Embedding => 17,
            Topic::Interfaces => 18,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Topic::Loops => "loops",
            Topic::Conditional => "conditional",
            Topic::Switch => "switch",
            Topic::Arrays => "arrays",
            Topic::Maps => "maps",
            Topic::Range => "range",
            Topic::Functions => "functions",
            Topic::Variadic => "variadic",
            Topic::Closures => "closures",
            Topic::Pointers => "pointers",
            Topic::Structs => "structs",
            Topic::Embedding => "embedding",
            Topic::Interfaces => "interfaces",
        }
    }

    /// One line describing the semantic point the snippet makes.
    pub fn summary(self) -> &'static str {
        match self {
            Topic::Loops => "condition, counting, unconditional and range loops; ranges exclude the upper bound",
            Topic::Conditional => "if/else chains, logical operators, scoped bindings, if as an expression",
            Topic::Switch => "value match, multi-pattern arms, dispatch on the runtime type",
            Topic::Arrays => "fixed-length sequences, zero defaults, 2D arrays, checked access",
            Topic::Maps => "insert, remove, clear, existence checks, default values, equality",
            Topic::Range => "iterating sequences, maps and text as index/value pairs",
            Topic::Functions => "multiple return values and callables as parameters",
            Topic::Variadic => "summing a variable-length argument list",
            Topic::Closures => "captured state that outlives the call that created it",
            Topic::Pointers => "mutating a copy versus mutating through a reference",
            Topic::Structs => "records, constructors, mutating and reading methods",
            Topic::Embedding => "an inner record's fields promoted onto the outer record",
            Topic::Interfaces => "one record delegating to another through a shared capability",
        }
    }

    /// Directory-style label, e.g. `05_loops`.
    pub fn label(self) -> String {
        format!("{:02}_{}", self.number(), self.slug())
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.number() == number)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }
}

impl FromStr for Topic {
    type Err = PrimerError;

    /// Accepts `loops`, `5`, `05` or `05_loops`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();

        let found = match name.split_once('_') {
            Some((number, slug)) => number
                .parse()
                .ok()
                .and_then(Topic::from_number)
                .filter(|t| t.slug() == slug),
            None => match name.parse::<u8>() {
                Ok(number) => Topic::from_number(number),
                Err(_) => Topic::from_slug(&name),
            },
        };

        found.ok_or_else(|| PrimerError::unknown_topic(s))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
