use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use std::path::{Path, PathBuf};
use topicdoc_config::Config;
use topicdoc_engine::{Document, TopicRecord, io, parsing::snapshot, render::render_document};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// The parsed document model as JSON
    Json,
    /// Indented text outline of the document structure
    Outline,
}

#[derive(Parser)]
#[command(name = "topicdoc")]
#[command(about = "Parse and render a learning topic")]
struct Cli {
    /// Topic file: `.toml` or `.json` record, anything else is raw content
    #[arg(required_unless_present = "init_config")]
    topic: Option<PathBuf>,

    /// Code example file, replacing any code example in the topic record
    #[arg(short, long)]
    code: Option<PathBuf>,

    /// Language of the code example
    #[arg(short, long)]
    language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Config file (defaults to ~/.config/topicdoc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a config file with the default settings and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.init_config {
        return init_config(&cli);
    }

    let config = load_config(&cli)?;
    let Some(topic) = &cli.topic else {
        bail!("No topic file given");
    };

    let record = load_record(topic, &cli)?;
    let doc = record.parse(&config.parser);
    log::info!(
        "Parsed {} with {} entries",
        topic.display(),
        doc.entries.len()
    );

    println!("{}", render(&doc, cli.format, &config)?);
    Ok(())
}

/// Loads `--config`, or the default config file, falling back to defaults
/// when the file does not exist.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path);
            log::debug!("Config path: {}", path.display());
            Config::load_from_path(&path)?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };
    Ok(config.unwrap_or_default())
}

fn init_config(cli: &Cli) -> Result<()> {
    let config = Config::default();
    let path = match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path);
            config.save_to_path(&path)?;
            path
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    };
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}

fn load_record(topic: &Path, cli: &Cli) -> Result<TopicRecord> {
    let mut record = io::read_topic(topic)
        .with_context(|| format!("Failed to load topic {}", topic.display()))?;

    if let Some(code_path) = &cli.code {
        let code = io::read_file(code_path)
            .with_context(|| format!("Failed to read code example {}", code_path.display()))?;
        record.code_example = Some(code);
    }
    if let Some(language) = &cli.language {
        record.code_language = Some(language.clone());
    }
    Ok(record)
}

fn render(doc: &Document, format: Format, config: &Config) -> Result<String> {
    Ok(match format {
        Format::Html => render_document(doc, &config.render),
        Format::Json => serde_json::to_string_pretty(doc)?,
        Format::Outline => snapshot::outline(doc),
    })
}
