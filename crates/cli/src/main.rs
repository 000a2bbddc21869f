#![deny(unsafe_code)]
//! CLI binary for the brainstream field-line viewer.
//!
//! Subcommands:
//! - `render` — run the field-line engine N ticks, write a PNG frame
//! - `resolve` — resolve a session id to its image records
//! - `list` — print the session ids available under a store root

mod error;

use brainstream_app::{DirStore, MockStore, SessionStore};
use brainstream_core::{FieldEngine, Pixmap, RenderLoop};
use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "brainstream", about = "Field-line animation and session gallery CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the engine for N ticks and write a PNG snapshot of the last frame.
    Render {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 1024)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 768)]
        height: usize,

        /// Number of animation ticks.
        #[arg(short, long, default_value_t = 300)]
        ticks: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Resolve a session id to its image records.
    Resolve {
        /// Session identifier.
        id: String,

        /// Directory store root ({root}/{id}/ holds the images). When
        /// omitted, a deterministic mock store answers instead.
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// List the session ids available under a store root.
    List {
        /// Directory store root.
        #[arg(long)]
        root: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            width,
            height,
            ticks,
            seed,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let engine = FieldEngine::from_json(width as f64, height as f64, seed, &params)?;
            let surface = Pixmap::new(width, height)?;
            let mut looper = RenderLoop::new(engine, Some(surface));
            looper.start();
            for _ in 0..ticks {
                looper.frame();
            }

            let surface = looper
                .surface()
                .ok_or_else(|| CliError::Io("render surface missing".into()))?;
            brainstream_app::snapshot::write_png(surface, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "ticks": ticks,
                    "seed": seed,
                    "params": looper.engine().params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {width}x{height}, {ticks} ticks, seed {seed} -> {}",
                    output.display()
                );
            }
        }
        Command::Resolve { id, root } => {
            let resolved = match &root {
                Some(root) => DirStore::new(root.clone()).resolve(&id)?,
                None => MockStore.resolve(&id)?,
            };
            match resolved {
                None => {
                    if cli.json {
                        let info = serde_json::json!({ "id": id, "found": false });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!("session {id}: not found");
                    }
                }
                Some(set) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&set)?);
                    } else {
                        println!("session {} ({} images)", set.guid, set.images.len());
                        for record in &set.images {
                            println!(
                                "  {:>8}  {}  {}",
                                record.id, record.timestamp, record.description
                            );
                        }
                    }
                }
            }
        }
        Command::List { root } => {
            let mut sessions: Vec<String> = std::fs::read_dir(&root)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", root.display())))?
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().into_string().ok())
                .collect();
            sessions.sort();

            if cli.json {
                let info = serde_json::json!({ "sessions": sessions });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sessions:");
                for name in sessions {
                    println!("  {name}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
