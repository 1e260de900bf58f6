//! mdocx CLI - Markdown to Word document synthesis tool

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdocx::{DocxArtifact, DocxSynthesizer, JsonFormat, StyleConfig};

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn Markdown-flavored text into Word documents", long_about = None)]
struct Cli {
    /// Input file (.txt, .md, .docx) or "-" for stdin
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output .docx file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Style configuration (JSON)
    #[arg(long, value_name = "FILE", env = "MDOCX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more files to .docx
    Convert {
        /// Input files (.txt, .md, .docx) or "-" for stdin
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (single input) or directory (several inputs)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Style configuration (JSON)
        #[arg(long, value_name = "FILE", env = "MDOCX_CONFIG")]
        config: Option<PathBuf>,

        /// Align body paragraphs left instead of justifying them
        #[arg(long)]
        no_justify: bool,

        /// Print the package as base64 instead of writing a file
        #[arg(long, conflicts_with = "payload")]
        base64: bool,

        /// Print a JSON delivery payload instead of writing a file
        #[arg(long)]
        payload: bool,

        /// File name announced in the payload
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },

    /// Extract plain text from a .txt, .md or .docx file
    Extract {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the assembled document model as JSON
    Inspect {
        /// Input file or "-" for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Style configuration (JSON)
        #[arg(long, value_name = "FILE", env = "MDOCX_CONFIG")]
        config: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Dump the classified source lines instead of the styled model
        #[arg(long)]
        lines: bool,
    },

    /// Show document statistics
    Info {
        /// Input file or "-" for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the reference configuration or check a configuration file
    Config {
        /// Configuration file to validate
        #[arg(long, value_name = "FILE")]
        check: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            config,
            no_justify,
            base64,
            payload,
            name,
        }) => {
            let delivery = if base64 {
                Delivery::Base64
            } else if payload {
                Delivery::Payload(name)
            } else {
                Delivery::File
            };
            cmd_convert(&inputs, output.as_deref(), config.as_deref(), no_justify, delivery)
        }
        Some(Commands::Extract { input, output }) => cmd_extract(&input, output.as_deref()),
        Some(Commands::Inspect {
            input,
            output,
            config,
            compact,
            lines,
        }) => cmd_inspect(&input, output.as_deref(), config.as_deref(), compact, lines),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Config { check }) => cmd_config(check.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &[input],
                    cli.output.as_deref(),
                    cli.config.as_deref(),
                    false,
                    Delivery::File,
                )
            } else {
                println!("{}", "Usage: mdocx <FILE> [OUTPUT]".yellow());
                println!("       mdocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// How converted packages leave the process.
enum Delivery {
    File,
    Base64,
    Payload(Option<String>),
}

fn load_config(path: Option<&Path>) -> mdocx::Result<StyleConfig> {
    match path {
        Some(p) => {
            log::debug!("Loading configuration from {}", p.display());
            StyleConfig::from_path(p)
        }
        None => Ok(StyleConfig::default()),
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read source text from a file through the extractors, or from stdin.
fn read_source(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(mdocx::extract_text(path)?)
}

/// Pick an output path next to the input without overwriting it.
fn default_output(input: &Path) -> PathBuf {
    if is_stdin(input) {
        return PathBuf::from(mdocx::render::DEFAULT_FILE_NAME);
    }
    let candidate = input.with_extension("docx");
    if candidate == input {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        return input.with_file_name(format!("{}_mdocx.docx", stem));
    }
    candidate
}

/// Output path for every batch input, refusing two inputs that land on the same file.
fn batch_targets(inputs: &[PathBuf], output: Option<&Path>) -> Result<Vec<PathBuf>, String> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(inputs.len());

    for input in inputs {
        let target = match output {
            Some(dir) => dir.join(default_output(input).file_name().unwrap_or_default()),
            None => default_output(input),
        };
        if let Some(previous) = claimed.insert(target.clone(), input.as_path()) {
            return Err(format!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                target.display()
            ));
        }
        targets.push(target);
    }

    Ok(targets)
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    config: Option<&Path>,
    no_justify: bool,
    delivery: Delivery,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if no_justify {
        config = config.with_justify_body(false);
    }
    let synthesizer = DocxSynthesizer::new(config)?;

    if inputs.len() == 1 {
        return convert_single(&synthesizer, &inputs[0], output, delivery);
    }
    if !matches!(delivery, Delivery::File) {
        return Err("--base64 and --payload take a single input".into());
    }
    let targets = batch_targets(inputs, output)?;

    let pb = ProgressBar::new(inputs.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading inputs...");
    let mut texts = Vec::with_capacity(inputs.len());
    for input in inputs {
        texts.push(read_source(input)?);
        pb.inc(1);
    }

    pb.set_message("Synthesizing...");
    let results = synthesizer.convert_batch(&texts);
    pb.inc(1);
    pb.finish_with_message("Done!");

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let mut failures = 0;
    println!("\n{}", "Output files:".green().bold());
    for (i, ((input, target), result)) in inputs.iter().zip(&targets).zip(results).enumerate() {
        let branch = if i + 1 == inputs.len() { "└─" } else { "├─" };
        match result.and_then(|bytes| fs::write(target, bytes).map_err(mdocx::Error::from)) {
            Ok(()) => println!("  {} {}", branch.dimmed(), target.display()),
            Err(e) => {
                failures += 1;
                println!("  {} {} {}", branch.dimmed(), input.display(), e.to_string().red());
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} conversions failed", failures, inputs.len()).into());
    }
    Ok(())
}

fn convert_single(
    synthesizer: &DocxSynthesizer,
    input: &Path,
    output: Option<&Path>,
    delivery: Delivery,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_source(input)?;
    let bytes = synthesizer.convert(&text)?;

    match delivery {
        Delivery::Base64 => {
            println!("{}", DocxArtifact::new(bytes).to_base64());
        }
        Delivery::Payload(name) => {
            let name = name.unwrap_or_else(|| {
                default_output(input)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| mdocx::render::DEFAULT_FILE_NAME.to_string())
            });
            let artifact = DocxArtifact::new(bytes).with_file_name(name);
            println!("{}", artifact.to_payload_json()?);
        }
        Delivery::File => {
            let target = output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| default_output(input));
            fs::write(&target, &bytes)?;
            println!("{} {}", "Saved to".green(), target.display());
        }
    }

    Ok(())
}

fn cmd_extract(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = mdocx::extract_text(input)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_inspect(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    compact: bool,
    lines: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let synthesizer = DocxSynthesizer::new(load_config(config)?)?;
    let text = read_source(input)?;
    let format = JsonFormat::from_compact(compact);

    let json = if lines {
        mdocx::render::lines_to_json(&mdocx::parser::parse_text(&text), format)?
    } else {
        mdocx::render::to_json(&synthesizer.build_model(&text), format)?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_source(input)?;
    let result = DocxSynthesizer::default().convert_with_stats(&text)?;
    let stats = &result.stats;

    if json {
        println!("{}", mdocx::render::stats_to_json(stats, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if !is_stdin(input) {
        let format = mdocx::detect_format_from_path(input)?;
        println!("{}: {}", "Format".bold(), format);
    }
    println!("{}: {} bytes", "Package".bold(), result.content_len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Titles".bold(), stats.title_count);
    println!("{}: {}", "Subtitles".bold(), stats.subtitle_count);
    println!("{}: {}", "Body".bold(), stats.body_count);
    println!("{}: {}", "Blank".bold(), stats.blank_count);
    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_config(check: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match check {
        Some(path) => {
            let config = StyleConfig::from_path(path)?;
            println!("{} {}", "Valid configuration:".green(), path.display());
            println!("{}", config.to_json()?);
        }
        None => println!("{}", StyleConfig::default().to_json()?),
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to Word document synthesis tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/mdocx".dimmed());
    println!("License: MIT");
}
