//! notepage CLI - study notes layout tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use notepage::model::LineKind;
use notepage::parser::{classify, sanitize, to_marked};
use notepage::{
    Document, FixedWidthMeasurer, Highlighter, HeuristicMeasurer, JsonFormat, LayoutConfig,
    Notepage,
};

#[derive(Parser)]
#[command(name = "notepage")]
#[command(version)]
#[command(about = "Lay out study notes into paginated previews", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out section files into pages
    Layout {
        /// Document title stamped into every page header
        #[arg(short, long, default_value = "Document Summary")]
        title: String,

        /// File with the "Extracted Text" section
        #[arg(long, value_name = "FILE")]
        extracted: Option<PathBuf>,

        /// File with the "Summary" section
        #[arg(long, value_name = "FILE")]
        summary: Option<PathBuf>,

        /// File with the "Questions" section
        #[arg(long, value_name = "FILE")]
        questions: Option<PathBuf>,

        /// Layout configuration (JSON, missing fields use defaults)
        #[arg(short, long, value_name = "FILE", env = "NOTEPAGE_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page height in millimetres
        #[arg(long)]
        page_height: Option<f32>,

        /// Text column width in millimetres
        #[arg(long)]
        max_width: Option<f32>,

        /// Width measurement
        #[arg(long, value_enum, default_value = "heuristic")]
        measurer: MeasurerKind,

        /// Omit the "Generated on" line
        #[arg(long)]
        no_timestamp: bool,

        /// Disable notation highlighting
        #[arg(long)]
        no_highlight: bool,

        /// Highlight notation in heading lines too
        #[arg(long)]
        highlight_headings: bool,

        /// Lay out a notice page instead of failing when all sections are empty
        #[arg(long)]
        notice: bool,
    },

    /// Sanitize a file and print the result
    Sanitize {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show how each line of a file is classified and highlighted
    Inspect {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Disable notation highlighting
        #[arg(long)]
        no_highlight: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text page preview
    Text,
    /// Recorded draw instructions as JSON
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MeasurerKind {
    /// Proportional sans-serif approximation
    Heuristic,
    /// One unit per character (useful for diffing)
    Fixed,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Layout {
            title,
            extracted,
            summary,
            questions,
            config,
            format,
            compact,
            output,
            page_height,
            max_width,
            measurer,
            no_timestamp,
            no_highlight,
            highlight_headings,
            notice,
        }) => {
            let sources = SectionFiles {
                extracted,
                summary,
                questions,
            };
            load_config(config.as_deref())
                .map(|config| {
                    apply_overrides(
                        config,
                        page_height,
                        max_width,
                        no_highlight,
                        highlight_headings,
                    )
                })
                .and_then(|config| {
                    cmd_layout(
                        &title,
                        &sources,
                        config,
                        LayoutOutput {
                            format,
                            compact,
                            measurer,
                            timestamp: !no_timestamp,
                            notice,
                        },
                        output.as_deref(),
                    )
                })
        }
        Some(Commands::Sanitize { input, output }) => cmd_sanitize(&input, output.as_deref()),
        Some(Commands::Inspect {
            input,
            no_highlight,
        }) => cmd_inspect(&input, !no_highlight),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: notepage layout --summary <FILE>".yellow());
            println!("       notepage --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

struct SectionFiles {
    extracted: Option<PathBuf>,
    summary: Option<PathBuf>,
    questions: Option<PathBuf>,
}

struct LayoutOutput {
    format: OutputFormat,
    compact: bool,
    measurer: MeasurerKind,
    timestamp: bool,
    notice: bool,
}

fn read_section(path: Option<&Path>) -> CliResult<Option<String>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
            Ok(Some(text))
        }
        None => Ok(None),
    }
}

fn build_document(title: &str, sources: &SectionFiles) -> CliResult<Document> {
    let extracted = read_section(sources.extracted.as_deref())?;
    let summary = read_section(sources.summary.as_deref())?;
    let questions = read_section(sources.questions.as_deref())?;
    Ok(Document::study_notes(
        title,
        extracted.as_deref(),
        summary.as_deref(),
        questions.as_deref(),
    ))
}

fn load_config(path: Option<&Path>) -> CliResult<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let json = fs::read_to_string(path)?;
    let config: LayoutConfig = serde_json::from_str(&json)
        .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
    log::debug!("Loaded layout configuration from {}", path.display());
    Ok(config)
}

fn apply_overrides(
    mut config: LayoutConfig,
    page_height: Option<f32>,
    max_width: Option<f32>,
    no_highlight: bool,
    highlight_headings: bool,
) -> LayoutConfig {
    if let Some(height) = page_height {
        config.page_height = height;
    }
    if let Some(width) = max_width {
        config.max_line_width = width;
    }
    if no_highlight {
        config.highlight_notation = false;
    }
    if highlight_headings {
        config.highlight_headings = true;
    }
    config
}

fn render_layout(
    title: &str,
    sources: &SectionFiles,
    config: LayoutConfig,
    options: &LayoutOutput,
) -> CliResult<String> {
    let mut doc = build_document(title, sources)?;
    if options.timestamp {
        doc = doc.with_timestamp(chrono::Local::now());
    }

    let np = Notepage::new().with_config(config);
    let np = match options.measurer {
        MeasurerKind::Heuristic => np.with_measurer(HeuristicMeasurer::default()),
        MeasurerKind::Fixed => np.with_measurer(FixedWidthMeasurer::default()),
    };

    let result = if options.notice {
        np.layout_or_notice(&doc)?
    } else {
        np.layout(&doc)?
    };
    log::info!(
        "{} page(s), {} line(s)",
        result.stats.page_count,
        result.stats.line_count
    );

    let rendered = match options.format {
        OutputFormat::Text => notepage::render::to_text(&result.pages),
        OutputFormat::Json => {
            let format = if options.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            notepage::render::to_json(&result, format)?
        }
    };
    Ok(rendered)
}

fn cmd_layout(
    title: &str,
    sources: &SectionFiles,
    config: LayoutConfig,
    options: LayoutOutput,
    output: Option<&Path>,
) -> CliResult<()> {
    let rendered = render_layout(title, sources, config, &options)?;
    write_output(&rendered, output)
}

fn cmd_sanitize(input: &Path, output: Option<&Path>) -> CliResult<()> {
    let text = fs::read_to_string(input)?;
    write_output(&sanitize(&text), output)
}

fn inspect_lines(text: &str, highlight: bool) -> Vec<(LineKind, String)> {
    let highlighter = if highlight {
        Highlighter::standard()
    } else {
        Highlighter::none()
    };
    classify(&sanitize(text))
        .into_iter()
        .map(|line| {
            let marked = to_marked(&highlighter.highlight(&line.text));
            (line.kind, marked)
        })
        .collect()
}

fn cmd_inspect(input: &Path, highlight: bool) -> CliResult<()> {
    let text = fs::read_to_string(input)?;

    println!("{}", "Line Classification".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (i, (kind, marked)) in inspect_lines(&text, highlight).iter().enumerate() {
        let label = match kind {
            LineKind::Heading(level) => format!("H{}", level).as_str().green(),
            LineKind::Bullet => "bullet".yellow(),
            LineKind::Paragraph => "para".normal(),
            LineKind::Blank => "blank".dimmed(),
        };
        println!("{:>4} {:<8} {}", (i + 1).to_string().as_str().dimmed(), label, marked);
    }

    Ok(())
}

fn write_output(content: &str, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "notepage".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Study notes layout and pagination tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(format: OutputFormat) -> LayoutOutput {
        LayoutOutput {
            format,
            compact: false,
            measurer: MeasurerKind::Fixed,
            timestamp: false,
            notice: false,
        }
    }

    #[test]
    fn test_layout_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let summary = dir.path().join("summary.md");
        fs::write(&summary, "# Cells\n- nucleus\n- **membrane**").unwrap();

        let sources = SectionFiles {
            extracted: None,
            summary: Some(summary),
            questions: None,
        };
        let text =
            render_layout("Biology", &sources, LayoutConfig::default(), &options(OutputFormat::Text))
                .unwrap();
        assert!(text.starts_with("--- Page 1 ---\nBiology\n"));
        assert!(text.contains("Summary\nCells\n• nucleus\n• membrane\n"));
        assert!(text.contains("[Page 1]"));
    }

    #[test]
    fn test_layout_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let questions = dir.path().join("questions.md");
        fs::write(&questions, "What is x = 5?").unwrap();

        let sources = SectionFiles {
            extracted: None,
            summary: None,
            questions: Some(questions),
        };
        let json =
            render_layout("Math", &sources, LayoutConfig::default(), &options(OutputFormat::Json))
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["page_count"], 1);
        assert_eq!(value["pages"][0]["number"], 1);
    }

    #[test]
    fn test_empty_sections_need_notice_flag() {
        let dir = tempfile::tempdir().unwrap();
        let summary = dir.path().join("summary.md");
        fs::write(&summary, "   \n").unwrap();
        let sources = SectionFiles {
            extracted: None,
            summary: Some(summary),
            questions: None,
        };

        assert!(render_layout(
            "Empty",
            &sources,
            LayoutConfig::default(),
            &options(OutputFormat::Text)
        )
        .is_err());

        let mut with_notice = options(OutputFormat::Text);
        with_notice.notice = true;
        let text = render_layout("Empty", &sources, LayoutConfig::default(), &with_notice).unwrap();
        assert!(text.contains("No content available"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let sources = SectionFiles {
            extracted: Some(PathBuf::from("/nonexistent/notes.md")),
            summary: None,
            questions: None,
        };
        assert!(build_document("x", &sources).is_err());
    }

    #[test]
    fn test_load_config_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, r#"{"max_line_width": 120.0}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.max_line_width, 120.0);
        assert_eq!(config.page_height, 297.0);

        let config = apply_overrides(config, Some(200.0), None, true, true);
        assert_eq!(config.page_height, 200.0);
        assert!(!config.highlight_notation);
        assert!(config.highlight_headings);
    }

    #[test]
    fn test_inspect_lines() {
        let lines = inspect_lines("## Motion\n- v = d/t\n\ntext", true);
        assert_eq!(lines[0], (LineKind::Heading(2), "Motion".to_string()));
        assert_eq!(lines[1], (LineKind::Bullet, "**v = d/t**".to_string()));
        assert_eq!(lines[2].0, LineKind::Blank);
        assert_eq!(lines[3], (LineKind::Paragraph, "text".to_string()));
    }
}
