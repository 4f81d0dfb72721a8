//! Text sanitization ahead of line classification.
//!
//! Upstream formatting stages sometimes leave HTML tags and entities in the
//! text. The sanitizer removes them without a full HTML parser: tags are
//! found by structural scanning and anything that does not look like a
//! complete tag is kept verbatim.

use unicode_normalization::UnicodeNormalization;

/// Named entities decoded by the sanitizer, in lookup order.
const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&hellip;", "..."),
];

/// Options for text sanitization.
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove `<...>` markup tags
    pub strip_tags: bool,

    /// Decode the fixed entity table
    pub decode_entities: bool,
}

impl SanitizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable tag stripping.
    pub fn with_tag_stripping(mut self, enabled: bool) -> Self {
        self.strip_tags = enabled;
        self
    }

    /// Enable or disable entity decoding.
    pub fn with_entity_decoding(mut self, enabled: bool) -> Self {
        self.decode_entities = enabled;
        self
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            strip_tags: true,
            decode_entities: true,
        }
    }
}

/// Sanitize text with default options.
pub fn sanitize(text: &str) -> String {
    Sanitizer::default().sanitize(text)
}

/// Text sanitizer. Total and idempotent.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    options: SanitizeOptions,
}

impl Sanitizer {
    /// Create a sanitizer with the given options.
    pub fn new(options: SanitizeOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Sanitize text.
    pub fn sanitize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let mut result = text.replace("\r\n", "\n").replace('\r', "\n");

        // Decoding can expose new tags ("&lt;b&gt;"), stripping can join
        // entity fragments, and a decoded "<" can compose with a following
        // combining mark. Run all three to a fixpoint.
        loop {
            let mut next = result.clone();
            if self.options.strip_tags {
                next = strip_tags(&next);
            }
            if self.options.decode_entities {
                next = decode_entities(&next);
            }
            if self.options.normalize_unicode {
                next = next.nfc().collect();
            }
            if next == result {
                break;
            }
            result = next;
        }

        normalize_whitespace(&result)
    }
}

/// Remove well-formed tags; leave malformed or unterminated ones in place.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match tag_len(after) {
            Some(len) => rest = &after[len..],
            None => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of the tag body up to and including `>`, if `after` opens a tag.
///
/// A tag never spans lines and never contains another `<`.
fn tag_len(after: &str) -> Option<usize> {
    let first = after.chars().next()?;
    if !(first.is_ascii_alphabetic() || matches!(first, '/' | '!' | '?')) {
        return None;
    }
    for (i, c) in after.char_indices() {
        match c {
            '>' => return Some(i + 1),
            '<' | '\n' => return None,
            _ => {}
        }
    }
    None
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match ENTITIES.iter().find(|(name, _)| tail.starts_with(name)) {
            Some((name, replacement)) => {
                out.push_str(replacement);
                rest = &tail[name.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Collapse intra-line whitespace, trim lines, keep at most one blank line
/// between paragraphs and none at either end.
fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = true;
    for raw in text.split('\n') {
        let line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            if !previous_blank {
                lines.push(line);
            }
            previous_blank = true;
        } else {
            lines.push(line);
            previous_blank = false;
        }
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
