//! Mask tokens and mask templates

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Built-in character classes for placeholder slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// ASCII digit `0-9`
    Digit,
    /// Alphabetic character
    Letter,
    /// Letter or digit
    Alphanumeric,
    /// Any character
    Any,
}

impl CharClass {
    /// Whether `c` belongs to this class
    pub fn accepts(self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Letter => c.is_alphabetic(),
            CharClass::Alphanumeric => c.is_alphanumeric(),
            CharClass::Any => true,
        }
    }
}

/// Acceptance test for a single placeholder position
#[derive(Clone)]
pub enum Placeholder {
    Class(CharClass),
    Custom(Arc<dyn Fn(char) -> bool + Send + Sync>),
}

impl Placeholder {
    /// Placeholder backed by an arbitrary predicate
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Placeholder::Custom(Arc::new(predicate))
    }

    /// Whether `c` may fill this position
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Placeholder::Class(class) => class.accepts(c),
            Placeholder::Custom(predicate) => predicate(c),
        }
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Class(class) => write!(f, "Class({:?})", class),
            Placeholder::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl From<CharClass> for Placeholder {
    fn from(class: CharClass) -> Self {
        Placeholder::Class(class)
    }
}

/// One position of a mask
#[derive(Debug, Clone)]
pub enum MaskToken {
    /// Emitted verbatim in formatted output
    Literal(char),
    /// Filled from user input
    Slot(Placeholder),
}

impl MaskToken {
    /// Slot accepting ASCII digits
    pub fn digit() -> Self {
        MaskToken::Slot(Placeholder::Class(CharClass::Digit))
    }

    /// Slot accepting letters
    pub fn letter() -> Self {
        MaskToken::Slot(Placeholder::Class(CharClass::Letter))
    }

    /// Whether input goes here
    pub fn is_slot(&self) -> bool {
        matches!(self, MaskToken::Slot(_))
    }
}

/// Maps pattern characters to placeholder classes when parsing string masks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskSyntax {
    placeholders: BTreeMap<char, CharClass>,
}

impl Default for MaskSyntax {
    /// `9` is a digit slot; everything else is literal
    fn default() -> Self {
        Self {
            placeholders: BTreeMap::from([('9', CharClass::Digit)]),
        }
    }
}

impl MaskSyntax {
    /// Create a syntax from an explicit placeholder table
    pub fn new(placeholders: BTreeMap<char, CharClass>) -> Self {
        Self { placeholders }
    }

    /// Add or replace a placeholder character
    pub fn with(mut self, c: char, class: CharClass) -> Self {
        self.placeholders.insert(c, class);
        self
    }

    /// Class for a pattern character, if it is a placeholder
    pub fn class_for(&self, c: char) -> Option<CharClass> {
        self.placeholders.get(&c).copied()
    }
}

/// A parsed mask template
#[derive(Debug, Clone, Default)]
pub struct Mask {
    tokens: Vec<MaskToken>,
}

impl Mask {
    /// Create a mask from prepared tokens
    pub fn new(tokens: Vec<MaskToken>) -> Self {
        Self { tokens }
    }

    /// Parse a string mask where `9` marks a digit slot
    ///
    /// ```ignore
    /// let phone = Mask::parse("(999) 999-9999");
    /// ```
    pub fn parse(pattern: &str) -> Self {
        Self::parse_with(pattern, &MaskSyntax::default())
    }

    /// Parse a string mask with a custom placeholder table
    pub fn parse_with(pattern: &str, syntax: &MaskSyntax) -> Self {
        let tokens = pattern
            .chars()
            .map(|c| match syntax.class_for(c) {
                Some(class) => MaskToken::Slot(class.into()),
                None => MaskToken::Literal(c),
            })
            .collect();
        Self { tokens }
    }

    /// Get the tokens in pattern order
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Number of placeholder positions
    pub fn slot_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_slot()).count()
    }
}

impl From<Vec<MaskToken>> for Mask {
    fn from(tokens: Vec<MaskToken>) -> Self {
        Self::new(tokens)
    }
}
