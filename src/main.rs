//! bizdoc CLI
//!
//! Reads an invoice or payment-statement record (`.json` or `.toml`) and
//! writes the composed document as JSON layout blocks.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- invoice invoice.json --lang ja > invoice.layout.json
//! cargo run -- statement statement.toml --output statement.layout.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bizdoc::{
    record, Config, DocumentKind, FilesystemResourceProvider, FontConfig, Generator,
    JsonRenderer, Localizer, Result,
};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Invoice,
    Statement,
}

impl From<Kind> for DocumentKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Invoice => DocumentKind::Invoice,
            Kind::Statement => DocumentKind::PaymentStatement,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Document variant to generate
    #[arg(value_enum)]
    kind: Kind,

    /// Record file (.json or .toml)
    record: PathBuf,

    /// Display language; unsupported languages fall back to English
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Font family name handed to the renderer
    #[arg(long)]
    font_name: Option<String>,

    #[arg(long)]
    font_normal: Option<PathBuf>,

    #[arg(long)]
    font_italic: Option<PathBuf>,

    #[arg(long)]
    font_bold: Option<PathBuf>,

    #[arg(long)]
    font_bold_italic: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = FontConfig::default();
        let fonts = FontConfig {
            family: self.font_name.clone().unwrap_or(defaults.family),
            normal: self.font_normal.clone(),
            italic: self.font_italic.clone(),
            bold: self.font_bold.clone(),
            bold_italic: self.font_bold_italic.clone(),
        };
        Config::default().with_lang(self.lang.as_str()).with_fonts(fonts)
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.config();
    let record = record::load(args.kind.into(), &args.record)?;

    let localizer = Localizer::load()?;
    let resources = FilesystemResourceProvider::for_record(&args.record);
    let generator = Generator::new(&localizer, &config, &resources);

    let mut renderer = JsonRenderer::new(config.fonts.clone());
    let bytes = generator.generate(&record, &mut renderer)?;

    match &args.output {
        Some(path) => fs::write(path, &bytes)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(&bytes)?;
        }
    }

    Ok(())
}
