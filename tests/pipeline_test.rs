//! Integration tests for the text pipeline: sanitize, classify, highlight,
//! parse and wrap.

use notepage::layout::wrap_spans;
use notepage::model::{spans_text, LineKind};
use notepage::parser::{
    classify, parse_spans, sanitize, strip_emphasis, to_marked, SanitizeOptions, Sanitizer,
};
use notepage::{FixedWidthMeasurer, Highlighter, NotationRule, Span, TextStyle};

const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "<p>Hello &amp; <b>welcome</b></p>",
    "&lt;script&gt;alert(1)&lt;/script&gt; after",
    "a < b and c > d",
    "<unterminated tag",
    "line one\r\nline two\r\n\r\n\r\n\r\nline three",
    "   indented\t\ttabs   and   spaces   ",
    "&amp;amp; double encoded &hellip;",
    "# Heading\n\n\n- bullet\n* star\n• dot",
    "Cafe\u{301} and caf\u{e9}",
    "a &lt;\u{338} b",
    "x &gt;\u{338} y",
];

// ==================== Sanitizer ====================

#[test]
fn test_sanitize_is_idempotent() {
    for sample in SAMPLES {
        let once = sanitize(sample);
        assert_eq!(sanitize(&once), once, "input {:?}", sample);
    }
}

#[test]
fn test_sanitize_is_total() {
    for sample in SAMPLES {
        let out = sanitize(sample);
        assert!(!out.contains("\n\n\n"));
        assert!(!out.contains('\r'));
        assert_eq!(out.trim(), out);
    }
}

#[test]
fn test_sanitize_examples() {
    assert_eq!(sanitize("<p>Hello &amp; <b>welcome</b></p>"), "Hello & welcome");
    assert_eq!(sanitize("a < b and c > d"), "a < b and c > d");
    assert_eq!(
        sanitize("line one\r\nline two\r\n\r\n\r\nline three"),
        "line one\nline two\n\nline three"
    );
    assert_eq!(sanitize("Cafe\u{301}"), "Caf\u{e9}");
}

#[test]
fn test_sanitizer_options() {
    let keep_tags = Sanitizer::new(SanitizeOptions::new().with_tag_stripping(false));
    assert_eq!(keep_tags.sanitize("<b>x</b> &amp;"), "<b>x</b> &");

    let raw = Sanitizer::new(
        SanitizeOptions::new()
            .with_entity_decoding(false)
            .with_unicode_normalization(false),
    );
    assert_eq!(raw.sanitize("x &amp; e\u{301}"), "x &amp; e\u{301}");
}

// ==================== Classifier ====================

#[test]
fn test_heading_level_is_bounded() {
    for n in 1..=8 {
        let line = format!("{} Title", "#".repeat(n));
        let lines = classify(&line);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Heading(n.min(3) as u8));
        assert_eq!(lines[0].text, "Title");
    }
}

#[test]
fn test_classify_mixed_document() {
    let lines = classify(&sanitize("# Heading\n\n\n- bullet\n* star\n• dot\n#hashtag\n-dash"));
    let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Heading(1),
            LineKind::Blank,
            LineKind::Bullet,
            LineKind::Bullet,
            LineKind::Bullet,
            LineKind::Paragraph,
            LineKind::Paragraph,
        ]
    );
    assert_eq!(lines[4].text, "dot");
    assert_eq!(lines[5].text, "#hashtag");
}

// ==================== Inline Spans ====================

#[test]
fn test_round_trip_without_delimiters() {
    let cases = [
        ("**bold** normal", "bold normal"),
        ("**bold text", "**bold text"),
        ("a **b** c **d", "a b c **d"),
        ("****", ""),
        ("no markup", "no markup"),
        ("**a****b**", "ab"),
    ];
    for (input, expected) in cases {
        let spans = parse_spans(input);
        assert_eq!(spans_text(&spans), expected, "input {:?}", input);
        assert_eq!(strip_emphasis(input), expected);
        assert!(spans.iter().all(|s| !s.text.is_empty()));
        assert!(spans.windows(2).all(|w| w[0].emphasis != w[1].emphasis));
    }
}

#[test]
fn test_marked_form_reparses() {
    for input in ["**bold** normal", "x **y** z", "plain"] {
        let spans = parse_spans(input);
        assert_eq!(parse_spans(&to_marked(&spans)), spans);
    }
}

// ==================== Highlighter ====================

#[test]
fn test_highlighting_preserves_text() {
    let highlighter = Highlighter::standard();
    for input in [
        "Let x = 5, and y = 2.5",
        "sin(x) + cos(y) = 1 near θ ≈ 0",
        "H2O = water, NaCl = salt",
        "∫ f(x) dx and ∑ a = 10",
        "**bold x = 1** and 3.14",
        "plain words only",
    ] {
        let spans = highlighter.highlight(input);
        assert_eq!(spans_text(&spans), strip_emphasis(input), "input {:?}", input);
    }
}

#[test]
fn test_custom_rule_list() {
    let highlighter =
        Highlighter::none().with_rule(NotationRule::new("units", r"\d+\s?(?:kg|m|s)\b").unwrap());
    let spans = highlighter.highlight("mass 5 kg over 10 s");
    let emphasized: Vec<&str> = spans
        .iter()
        .filter(|s| s.emphasis)
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(emphasized, vec!["5 kg", "10 s"]);
}

// ==================== Wrapper ====================

#[test]
fn test_width_bound_and_no_split() {
    let text = "Mitochondria are the **powerhouse of the cell** and produce ATP through \
                oxidative-phosphorylation, a process measured at 0.75 efficiency";
    let spans = Highlighter::standard().highlight(text);
    let source_words: Vec<String> = spans_text(&spans)
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let measurer = FixedWidthMeasurer::new(1.0).with_emphasis_width(1.5);
    for max_width in [8.0f32, 15.0, 25.0, 60.0, 500.0] {
        let lines = wrap_spans(&spans, max_width, 11.0, &measurer).unwrap();
        let mut words = Vec::new();
        for line in &lines {
            assert!(!line.is_empty());
            if !line.overflow {
                assert!(line.width <= max_width, "{} > {}", line.width, max_width);
            } else {
                assert_eq!(line.words().len(), 1);
            }
            words.extend(line.words());
        }
        assert_eq!(words, source_words);
    }
}

#[test]
fn test_wrap_uses_injected_measurer() {
    let spans = vec![Span::plain("aa bb cc")];
    let wide = |text: &str, _: &TextStyle| text.chars().count() as f32 * 3.0;
    let lines = wrap_spans(&spans, 15.0, 11.0, &wide).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "aa bb");
    assert_eq!(lines[1].text(), "cc");
}
