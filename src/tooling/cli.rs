//! CLI Tooling
//!
//! Command-line interface for every termglow renderer. Each command renders
//! into a string that the binary prints; only the spinner and glow animations
//! draw directly on the terminal while they run.

use crate::art::{self, HashAlgorithm};
use crate::config::{ConfigLoader, TermglowConfig};
use crate::console::{
    self, render_box, render_progress, render_table, BorderStyle, BoxOptions, Console, LoadingPlan,
    LogKind, ProgressOptions, Signal, TableOptions,
};
use crate::error::ApiError;
use crate::stats;
use crate::theme::{NamedColor, Styler, Theme};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Termglow CLI - Glow up your terminal!
#[derive(Parser)]
#[command(name = "termglow", version)]
#[command(about = "Glow up your terminal: boxes, tables, spinners and hash-derived ASCII art")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces the user config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Theme for this invocation
    #[arg(long, global = true, value_enum)]
    pub theme: Option<Theme>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw a styled box
    #[command(name = "box")]
    Boxed {
        /// Box content (words are joined with spaces)
        text: Vec<String>,
        /// Blank space around the text
        #[arg(long, default_value_t = 1)]
        padding: usize,
        #[arg(long, value_enum, default_value_t = BorderStyle::Double)]
        border: BorderStyle,
    },
    /// Render a table from a JSON array of rows, or an example table
    Table {
        /// Rows as JSON, e.g. '[["Name","Deps"],["termglow",0]]'
        #[arg(long)]
        json: Option<String>,
        /// Do not treat the first row as a header
        #[arg(long)]
        no_headers: bool,
        #[arg(long, value_enum, default_value_t = BorderStyle::Single)]
        border: BorderStyle,
    },
    /// Run an animated multi-phase spinner
    Loading {
        /// Phase labels
        phases: Vec<String>,
        /// Total duration in milliseconds
        #[arg(long, default_value_t = 5000)]
        duration_ms: u64,
    },
    /// Show progress bars from 0 to 100%
    Progress {
        #[arg(long, value_enum, default_value_t = Signal::Cycle)]
        signal: Signal,
        #[arg(long, default_value = "CLI Progress")]
        message: String,
        /// Percentage step between bars
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..=100))]
        step: u64,
    },
    /// Pulse text through bright and dim shades
    Glow {
        text: Vec<String>,
        /// Number of full shade cycles
        #[arg(long, default_value_t = 3)]
        cycles: u32,
    },
    /// Preview a theme's palette (not persisted)
    Theme {
        #[arg(value_enum)]
        name: Option<Theme>,
    },
    /// Preview a file as procedural ASCII art
    Image {
        path: PathBuf,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
        #[arg(long, value_enum)]
        algorithm: Option<HashAlgorithm>,
        /// Hash at most this many leading bytes
        #[arg(long)]
        max_bytes: Option<u64>,
    },
    /// Show file stats as a table
    Stats {
        path: PathBuf,
        #[arg(long, value_enum)]
        algorithm: Option<HashAlgorithm>,
    },
    /// Ask a question on the terminal
    Ask {
        question: Vec<String>,
        /// Free-text answer instead of yes/no
        #[arg(long)]
        text: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Execution context: resolved configuration and styling.
pub struct CliContext {
    config: TermglowConfig,
    styler: Styler,
    /// Whether animations and prompts may use the terminal
    interactive: bool,
}

impl CliContext {
    pub fn new(config: TermglowConfig, styler: Styler, interactive: bool) -> Self {
        Self {
            config,
            styler,
            interactive,
        }
    }

    /// Load configuration and apply the global CLI flags on top.
    pub fn from_cli(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        apply_overrides(&mut config, cli);
        let styler = Styler::detect(config.theme, config.color);
        let interactive = std::io::stdout().is_terminal();
        Ok(Self::new(config, styler, interactive))
    }

    pub fn config(&self) -> &TermglowConfig {
        &self.config
    }

    pub fn styler(&self) -> &Styler {
        &self.styler
    }

    /// Run `command` and return the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Boxed {
                text,
                padding,
                border,
            } => Ok(self.handle_box(text, *padding, *border)),
            Commands::Table {
                json,
                no_headers,
                border,
            } => self.handle_table(json.as_deref(), !*no_headers, *border),
            Commands::Loading {
                phases,
                duration_ms,
            } => Ok(self.handle_loading(phases, Duration::from_millis(*duration_ms))),
            Commands::Progress {
                signal,
                message,
                step,
            } => Ok(self.handle_progress(*signal, message, *step)),
            Commands::Glow { text, cycles } => Ok(self.handle_glow(text, *cycles)),
            Commands::Theme { name } => Ok(self.handle_theme(name.unwrap_or(Theme::Neon))),
            Commands::Image {
                path,
                width,
                height,
                algorithm,
                max_bytes,
            } => self.handle_image(path, *width, *height, *algorithm, *max_bytes),
            Commands::Stats { path, algorithm } => Ok(self.handle_stats(path, *algorithm)),
            Commands::Ask { question, text } => self.handle_ask(&question.join(" "), *text),
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }

    fn buffer(&self) -> Console<Vec<u8>> {
        Console::new(Vec::new(), self.styler)
    }

    fn handle_box(&self, text: &[String], padding: usize, border: BorderStyle) -> String {
        let text = if text.is_empty() {
            "Default box content".to_string()
        } else {
            text.join(" ")
        };
        let options = BoxOptions {
            padding,
            border,
            color: None,
        };
        render_box(&text, &options, &self.styler)
    }

    fn handle_table(
        &self,
        json: Option<&str>,
        headers: bool,
        border: BorderStyle,
    ) -> Result<String, ApiError> {
        let rows = match json {
            Some(json) => parse_json_rows(json)?,
            None => example_rows(),
        };
        let options = TableOptions {
            headers,
            border,
            color: None,
        };
        match render_table(&rows, &options, &self.styler) {
            Some(table) => Ok(table),
            None => Ok(console::format_log_line(
                LogKind::Warning,
                "No data for table",
                &self.styler,
            )),
        }
    }

    fn handle_loading(&self, phases: &[String], duration: Duration) -> String {
        let phases = if phases.is_empty() {
            vec![
                "Fetching".to_string(),
                "Building".to_string(),
                "Deploying".to_string(),
            ]
        } else {
            phases.to_vec()
        };
        let plan = LoadingPlan::new("CLI Loading Demo", phases, duration);
        let mut out = self.buffer();
        if self.interactive {
            let frames = console::run_loading(std::io::stdout(), plan, self.styler);
            info!(frames, "Loading animation finished");
        } else {
            for phase in &plan.phases {
                out.log(LogKind::Info, &format!("{}...", phase));
            }
        }
        out.log(LogKind::Success, "Loading complete!");
        into_text(out)
    }

    fn handle_progress(&self, signal: Signal, message: &str, step: u64) -> String {
        let options = ProgressOptions {
            message: message.to_string(),
            signal,
        };
        (0..=100)
            .step_by(step as usize)
            .map(|current| render_progress(current, 100, &options, &self.styler))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn handle_glow(&self, text: &[String], cycles: u32) -> String {
        let text = if text.is_empty() {
            "CLI Glow Text".to_string()
        } else {
            text.join(" ")
        };
        let color = self.styler.theme().accent();
        if self.interactive && cycles > 0 {
            let handle = console::start_glow(
                std::io::stdout(),
                text.clone(),
                color,
                console::GLOW_INTERVAL,
                self.styler,
            );
            handle.run_for(glow_run_time(cycles));
        }
        console::glow_frame(&text, color, 0, &self.styler)
    }

    fn handle_theme(&self, theme: Theme) -> String {
        let styler = Styler::new(theme, self.styler.enabled());
        let mut out = Console::new(Vec::new(), styler);
        out.print(&styler.heading(&format!("Theme: {}", theme)));
        out.print(&format!(
            "  {}  {}",
            styler.primary("primary"),
            styler.accent("accent")
        ));
        let samples = [
            NamedColor::Red,
            NamedColor::Green,
            NamedColor::Yellow,
            NamedColor::Blue,
            NamedColor::Magenta,
            NamedColor::Cyan,
            NamedColor::White,
            NamedColor::Gray,
        ];
        let line = samples
            .iter()
            .map(|c| styler.paint(c.name(), *c))
            .collect::<Vec<_>>()
            .join(" ");
        out.print(&format!("  {}", line));
        out.log(LogKind::Success, &format!("Theme applied: {}", theme));
        into_text(out)
    }

    fn handle_image(
        &self,
        path: &std::path::Path,
        width: Option<usize>,
        height: Option<usize>,
        algorithm: Option<HashAlgorithm>,
        max_bytes: Option<u64>,
    ) -> Result<String, ApiError> {
        let mut preview = self.config.preview.clone();
        if let Some(width) = width {
            preview.width = width;
        }
        if let Some(height) = height {
            preview.height = height;
        }
        if let Some(algorithm) = algorithm {
            preview.algorithm = algorithm;
        }
        if max_bytes.is_some() {
            preview.max_bytes = max_bytes;
        }
        let options = preview.options()?;

        let mut out = self.buffer();
        art::preview(path, &options, &mut out);
        Ok(into_text(out))
    }

    fn handle_stats(&self, path: &std::path::Path, algorithm: Option<HashAlgorithm>) -> String {
        let algorithm = algorithm.unwrap_or(self.config.preview.algorithm);
        let mut out = self.buffer();
        stats::show_stats(path, algorithm, &mut out);
        into_text(out)
    }

    fn handle_ask(&self, question: &str, text: bool) -> Result<String, ApiError> {
        if question.trim().is_empty() {
            return Err(ApiError::InvalidArgument("Question cannot be empty".to_string()));
        }
        if text {
            console::input(question, &self.styler)
        } else {
            let yes = console::confirm(question, &self.styler)?;
            Ok(if yes { "yes" } else { "no" }.to_string())
        }
    }
}

/// Time to show `cycles` full glow cycles; saturates instead of overflowing.
fn glow_run_time(cycles: u32) -> Duration {
    let shades = console::glow::GLOW_SHADES.len() as u32;
    console::GLOW_INTERVAL.saturating_mul(shades.saturating_mul(cycles))
}

fn apply_overrides(config: &mut TermglowConfig, cli: &Cli) {
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.no_color {
        config.color = false;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
}

/// Buffered console text without the trailing newline.
fn into_text(console: Console<Vec<u8>>) -> String {
    let text = String::from_utf8_lossy(&console.into_inner()).into_owned();
    text.trim_end_matches('\n').to_string()
}

/// Parse a JSON array of arrays; strings are used verbatim, other values as JSON text.
fn parse_json_rows(json: &str) -> Result<Vec<Vec<String>>, ApiError> {
    let rows: Vec<Vec<serde_json::Value>> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect())
}

fn example_rows() -> Vec<Vec<String>> {
    [
        ["Header1", "Header2"],
        ["Row1 Col1", "Row1 Col2"],
        ["42", "Answer"],
    ]
    .iter()
    .map(|row| row.iter().map(|c| c.to_string()).collect())
    .collect()
}
