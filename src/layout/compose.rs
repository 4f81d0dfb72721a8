//! Page composition.
//!
//! The composer turns a [`Document`] into draw instructions in two phases.
//! Preparation sanitizes, classifies, highlights, wraps and measures every
//! section up front, so an empty document or a misbehaving measurer fails
//! before the sink sees a single instruction. Emission then walks the
//! prepared blocks with an explicit [`Cursor`], breaking pages before any
//! line would cross the bottom margin.

use crate::error::{Error, Result};
use crate::highlight::Highlighter;
use crate::model::{push_merged, Document, LineKind, Span, WrappedLine};
use crate::parser::{classify, parse_spans, Sanitizer};
use crate::render::{LayoutStats, RenderSink};

use super::config::{HeadingStyle, LayoutConfig};
use super::cursor::Cursor;
use super::measure::{measure_checked, TextMeasurer, TextStyle};
use super::wrap::Wrapper;

/// A wrapped line with the measured width of every span.
#[derive(Debug, Clone)]
struct PreparedLine {
    runs: Vec<(Span, f32)>,
    overflow: bool,
}

#[derive(Debug, Clone)]
enum Block {
    Blank,
    Heading {
        style: HeadingStyle,
        lines: Vec<PreparedLine>,
    },
    Bullet {
        marker_width: f32,
        font_size: f32,
        lines: Vec<PreparedLine>,
    },
    Paragraph {
        font_size: f32,
        lines: Vec<PreparedLine>,
    },
}

#[derive(Debug, Clone)]
struct PreparedSection {
    heading: Vec<PreparedLine>,
    blocks: Vec<Block>,
}

/// Lays out documents against one configuration.
pub struct Composer<'a> {
    config: &'a LayoutConfig,
    measurer: &'a dyn TextMeasurer,
    highlighter: &'a Highlighter,
    sanitizer: &'a Sanitizer,
}

impl<'a> Composer<'a> {
    /// Create a composer.
    pub fn new(
        config: &'a LayoutConfig,
        measurer: &'a dyn TextMeasurer,
        highlighter: &'a Highlighter,
        sanitizer: &'a Sanitizer,
    ) -> Self {
        Self {
            config,
            measurer,
            highlighter,
            sanitizer,
        }
    }

    /// Lay out `document`, sending draw instructions to `sink`.
    ///
    /// Returns [`Error::EmptyContent`] when no section has content after
    /// sanitization; nothing is drawn in that case.
    pub fn compose(&self, document: &Document, sink: &mut dyn RenderSink) -> Result<LayoutStats> {
        self.config.validate()?;

        let mut sections = Vec::new();
        for section in &document.sections {
            let body = self.sanitizer.sanitize(section.text());
            if body.is_empty() {
                log::debug!("Skipping empty section {:?}", section.name);
                continue;
            }
            let font_size = section.font_size.unwrap_or(self.config.base_font_size);
            sections.push(self.prepare_section(&section.name, &body, font_size)?);
        }
        if sections.is_empty() {
            return Err(Error::EmptyContent);
        }

        let timestamp = document.timestamp_label();
        let mut emitter = Emitter::start(self.config, sink, &document.title, timestamp.as_deref());
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                emitter.gap(self.config.section_gap);
            }
            emitter.stats.section_count += 1;
            emitter.heading(&self.config.section_heading, &section.heading);
            for block in &section.blocks {
                emitter.block(block);
            }
        }
        let stats = emitter.finish();

        log::debug!(
            "Laid out {:?}: {} page(s), {} line(s), {} overflow(s)",
            document.title,
            stats.page_count,
            stats.line_count,
            stats.overflow_count
        );
        Ok(stats)
    }

    fn prepare_section(&self, name: &str, body: &str, font_size: f32) -> Result<PreparedSection> {
        let style = &self.config.section_heading;
        let heading = self.prepare_lines(
            vec![Span::emphasized(name)],
            self.config.max_line_width,
            style.font_size,
        )?;

        let mut blocks = Vec::new();
        for line in classify(body) {
            let block = match line.kind {
                LineKind::Blank => Block::Blank,
                LineKind::Heading(level) => {
                    let style = *self.config.heading_style(level);
                    let mut spans = if self.config.highlight_notation
                        && self.config.highlight_headings
                    {
                        self.highlighter.highlight(&line.text)
                    } else {
                        parse_spans(&line.text)
                    };
                    if self.config.heading_bold {
                        spans = embolden(&spans);
                    }
                    Block::Heading {
                        style,
                        lines: self.prepare_lines(spans, self.config.max_line_width, style.font_size)?,
                    }
                }
                LineKind::Bullet => Block::Bullet {
                    marker_width: measure_checked(
                        self.measurer,
                        &self.config.bullet_marker,
                        &TextStyle::new(font_size, false),
                    )?,
                    font_size,
                    lines: self.prepare_lines(
                        self.body_spans(&line.text),
                        self.config.bullet_text_width(),
                        font_size,
                    )?,
                },
                LineKind::Paragraph => Block::Paragraph {
                    font_size,
                    lines: self.prepare_lines(
                        self.body_spans(&line.text),
                        self.config.max_line_width,
                        font_size,
                    )?,
                },
            };
            blocks.push(block);
        }

        Ok(PreparedSection { heading, blocks })
    }

    fn body_spans(&self, text: &str) -> Vec<Span> {
        if self.config.highlight_notation {
            self.highlighter.highlight(text)
        } else {
            parse_spans(text)
        }
    }

    fn prepare_lines(
        &self,
        spans: Vec<Span>,
        max_width: f32,
        font_size: f32,
    ) -> Result<Vec<PreparedLine>> {
        let wrapper = Wrapper::new(self.measurer, max_width, font_size);
        wrapper
            .wrap(&spans)?
            .into_iter()
            .map(|line| prepare_line(&wrapper, line))
            .collect()
    }
}

fn prepare_line(wrapper: &Wrapper<'_>, line: WrappedLine) -> Result<PreparedLine> {
    let mut runs = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        let width = wrapper.measure_spans(std::slice::from_ref(&span))?;
        runs.push((span, width));
    }
    Ok(PreparedLine {
        runs,
        overflow: line.overflow,
    })
}

fn embolden(spans: &[Span]) -> Vec<Span> {
    let mut out = Vec::with_capacity(1);
    for span in spans {
        push_merged(&mut out, &span.text, true);
    }
    out
}

/// Emission state: the sink, the cursor and running statistics.
struct Emitter<'c, 's> {
    config: &'c LayoutConfig,
    sink: &'s mut dyn RenderSink,
    title: &'c str,
    cursor: Cursor,
    stats: LayoutStats,
}

impl<'c, 's> Emitter<'c, 's> {
    fn start(
        config: &'c LayoutConfig,
        sink: &'s mut dyn RenderSink,
        title: &'c str,
        timestamp: Option<&str>,
    ) -> Self {
        sink.new_page(1);
        sink.stamp_header(title, timestamp);
        Self {
            config,
            sink,
            title,
            cursor: Cursor::start(config.content_top(timestamp.is_some())),
            stats: LayoutStats {
                page_count: 1,
                ..LayoutStats::default()
            },
        }
    }

    fn finish(self) -> LayoutStats {
        self.sink.stamp_footer(self.cursor.page);
        self.stats
    }

    fn break_page(&mut self) {
        self.sink.stamp_footer(self.cursor.page);
        self.cursor.next_page(self.config.content_top(false));
        self.sink.new_page(self.cursor.page);
        self.sink.stamp_header(self.title, None);
        self.stats.page_count += 1;
        log::trace!("Page break, now on page {}", self.cursor.page);
    }

    /// Vertical gap; dropped at the top of a page and clipped at the bottom.
    fn gap(&mut self, height: f32) {
        if self.cursor.is_fresh() || height <= 0.0 {
            return;
        }
        let advance = height.min(self.config.content_bottom() - self.cursor.y);
        if advance > 0.0 {
            self.cursor.advance(advance);
            self.sink.new_line(advance);
        }
    }

    fn set_emphasis(&mut self, on: bool) {
        if self.cursor.font.update_emphasis(on) {
            self.sink.set_emphasis(on);
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Blank => {
                self.stats.blank_count += 1;
                self.gap(self.config.blank_line_height);
            }
            Block::Heading { style, lines } => {
                self.stats.heading_count += 1;
                self.heading(style, lines);
            }
            Block::Bullet {
                marker_width,
                font_size,
                lines,
            } => {
                self.stats.bullet_count += 1;
                let x = self.config.left_margin + self.config.bullet_indent;
                for (i, line) in lines.iter().enumerate() {
                    let marker = (i == 0).then_some(*marker_width);
                    self.line(line, x, *font_size, self.config.line_height, 0.0, marker);
                }
            }
            Block::Paragraph { font_size, lines } => {
                self.stats.paragraph_count += 1;
                for line in lines {
                    self.line(
                        line,
                        self.config.left_margin,
                        *font_size,
                        self.config.line_height,
                        0.0,
                        None,
                    );
                }
            }
        }
    }

    fn heading(&mut self, style: &HeadingStyle, lines: &[PreparedLine]) {
        for (i, line) in lines.iter().enumerate() {
            let space_before = if i == 0 { style.space_before } else { 0.0 };
            self.line(
                line,
                self.config.left_margin,
                style.font_size,
                style.line_height,
                space_before,
                None,
            );
        }
        self.gap(style.space_after);
    }

    /// Place one wrapped line, breaking the page first if it would not fit.
    fn line(
        &mut self,
        line: &PreparedLine,
        x: f32,
        font_size: f32,
        line_height: f32,
        space_before: f32,
        marker_width: Option<f32>,
    ) {
        let bottom = self.config.content_bottom();
        let mut space = if self.cursor.is_fresh() { 0.0 } else { space_before };
        if !self.cursor.is_fresh() && !self.cursor.fits(space + line_height, bottom) {
            self.break_page();
            space = 0.0;
        }
        if space > 0.0 {
            self.cursor.advance(space);
            self.sink.new_line(space);
        }

        if self.cursor.font.update_size(font_size) {
            self.sink.set_font_size(font_size);
        }
        let y = self.cursor.y;

        if let Some(width) = marker_width {
            self.set_emphasis(false);
            self.sink
                .draw_text(&self.config.bullet_marker, self.config.left_margin, y, width);
        }

        let mut x = x;
        for (span, width) in &line.runs {
            self.set_emphasis(span.emphasis);
            self.sink.draw_text(&span.text, x, y, *width);
            x += width;
            if span.emphasis {
                self.stats.emphasized_span_count += 1;
            }
        }

        self.sink.new_line(line_height);
        self.cursor.advance(line_height);
        self.cursor.content_lines += 1;
        self.stats.line_count += 1;
        if line.overflow {
            self.stats.overflow_count += 1;
        }
    }
}
