//! Notation highlighting.
//!
//! Study notes are full of equations, function calls and symbols that read
//! better in bold even when the author never marked them. The highlighter
//! runs an ordered list of [`NotationRule`]s over a tagged span buffer:
//! explicit `**...**` markup is parsed first, then each rule only searches
//! regions that are still plain. A region emphasized by markup or by an
//! earlier rule is never re-wrapped by a later one.

mod rules;

pub use rules::{NotationRule, STANDARD_PATTERNS};

use crate::model::Span;
use crate::parser::parse_spans;

/// Ordered notation rule set.
#[derive(Debug, Clone)]
pub struct Highlighter {
    rules: Vec<NotationRule>,
}

impl Highlighter {
    /// Create a highlighter from compiled rules, applied in order.
    pub fn new(rules: Vec<NotationRule>) -> Self {
        Self { rules }
    }

    /// Highlighter with the built-in rule set.
    pub fn standard() -> Self {
        Self::from_patterns(STANDARD_PATTERNS)
    }

    /// Highlighter with no rules; only explicit markup is honored.
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compile `(name, pattern)` pairs. Patterns that fail to compile are
    /// skipped with a warning.
    pub fn from_patterns(patterns: &[(&str, &str)]) -> Self {
        let rules = patterns
            .iter()
            .filter_map(|(name, pattern)| match NotationRule::new(*name, pattern) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    log::warn!("Skipping notation rule {}: {}", name, e);
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Append a rule with the lowest priority.
    pub fn with_rule(mut self, rule: NotationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in application order.
    pub fn rules(&self) -> &[NotationRule] {
        &self.rules
    }

    /// Check if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse explicit emphasis in `text`, then apply every rule.
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        self.apply(parse_spans(text))
    }

    /// Apply every rule, in order, to an existing span buffer.
    pub fn apply(&self, spans: Vec<Span>) -> Vec<Span> {
        self.rules.iter().fold(spans, |buffer, rule| rule.apply(buffer))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::standard()
    }
}
