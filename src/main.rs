use anyhow::Context;
use clap::Parser;
use rfpixel::rendering::raster;
use rfpixel::{Command, EditorConfig, EditorSession, Outcome};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Drive a pixel editor session from JSON commands on stdin, one per line.
#[derive(Parser, Debug)]
#[command(name = "rfpixel", version, about)]
struct Args {
    /// JSON editor configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Code file (`.db 0x00, ...`) to import before reading commands
    #[arg(long)]
    import: Option<PathBuf>,

    /// Write a PNG preview of the final grid here
    #[arg(long)]
    png: Option<PathBuf>,

    /// Pixels per cell in the PNG preview
    #[arg(long, default_value_t = 16)]
    scale: u32,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EditorConfig::from_json(&text)?
        }
        None => EditorConfig::default(),
    };

    let mut session = EditorSession::new(config)?;

    if let Some(path) = &args.import {
        let code = std::fs::read_to_string(path)
            .with_context(|| format!("reading code {}", path.display()))?;
        session.apply(Command::Import { code });
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let outcome = match serde_json::from_str::<Command>(&line) {
            Ok(cmd) => session.apply(cmd),
            Err(e) => {
                log::warn!("skipping malformed command: {}", e);
                continue;
            }
        };
        let js = serde_json::to_string(&outcome).unwrap_or_else(|_| {
            "{\"outcome\":\"unchanged\"}".to_string()
        });
        writeln!(out, "{}", js)?;
        out.flush()?;
    }

    if let Some(path) = &args.png {
        let shot = raster::rasterize(session.grid(), args.scale)?;
        std::fs::write(path, &shot.png_data)
            .with_context(|| format!("writing preview {}", path.display()))?;
    }

    // final code goes to stderr so stdout stays one JSON outcome per line
    if let Outcome::Exported { code } = session.apply(Command::Export) {
        eprintln!("{}", code);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("rfpixel failed: {:#}", e);
        std::process::exit(1);
    }
}
