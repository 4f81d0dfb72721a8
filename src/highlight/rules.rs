//! Notation rules.

use regex::Regex;

use crate::model::{push_merged, Span};

/// Built-in notation patterns in application order.
///
/// Earlier rules win: once a region is emphasized, later rules never look
/// inside it. Chemical equations come before single-letter equations so
/// `NaCl = salt` is taken whole, and named functions come before the generic
/// call form.
pub const STANDARD_PATTERNS: &[(&str, &str)] = &[
    ("chemical_equation", r"\b[A-Z][A-Za-z0-9]*\s*=\s*[^,\s]+"),
    ("equation", r"[a-zA-Z]\s*=\s*[^,\s]+"),
    (
        "named_function",
        r"\b(?:sinh|cosh|tanh|asin|acos|atan|sin|cos|tan|cot|sec|csc|log|ln|lg|exp|sqrt|cbrt|abs|floor|ceil|round|min|max|det|trace|rank|dim|lim|sup|inf)\s*\([^)]+\)",
    ),
    ("function_notation", r"\bf\([^)]+\)"),
    ("integral", r"∫[^d]*d[a-zA-Z]"),
    ("summation", r"∑[^=]*="),
    ("limit", r"lim[^→]*→"),
    ("square_root", r"√[^,\s]+"),
    ("exponent", r"[a-zA-Z0-9]+\^[a-zA-Z0-9]+"),
    (
        "arithmetic",
        r"\b[0-9]+(?:\.[0-9]+)?\s*[+\-×÷*/]\s*[0-9]+(?:\.[0-9]+)?(?:\s*[+\-×÷*/]\s*[0-9]+(?:\.[0-9]+)?)*\b",
    ),
    ("decimal", r"[0-9]+\.[0-9]+"),
    ("function_call", r"[a-zA-Z]+\([^)]*\)"),
    (
        "symbol",
        r"[π∞α-ωΑ-Ω√∛∜∑∏∫∬∭∮∇∂∆∴∵∀∃∈∉⊂⊃⊆⊇∩∪∅ℝℂℕℤℚ≈≅≡≠≤≥⊥∥∠°′″‰]",
    ),
];

/// A named pattern whose matches are emphasized.
#[derive(Debug, Clone)]
pub struct NotationRule {
    name: String,
    pattern: Regex,
}

impl NotationRule {
    /// Compile a rule.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
        })
    }

    /// Rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Emphasize matches inside plain spans; emphasized spans pass through.
    pub fn apply(&self, spans: Vec<Span>) -> Vec<Span> {
        let mut out = Vec::with_capacity(spans.len());
        for span in spans {
            if span.emphasis {
                push_merged(&mut out, &span.text, true);
                continue;
            }
            let mut last = 0;
            for m in self.pattern.find_iter(&span.text) {
                if m.start() == m.end() {
                    continue;
                }
                push_merged(&mut out, &span.text[last..m.start()], false);
                push_merged(&mut out, m.as_str(), true);
                last = m.end();
            }
            push_merged(&mut out, &span.text[last..], false);
        }
        out
    }
}
