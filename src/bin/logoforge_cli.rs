//! LogoForge CLI - Bridge interface for the web layer
//!
//! Commands: generate, image, info, health, palettes
//! Outputs JSON to stdout
//! Returns non-zero on failure

use base64::Engine as _;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

use logoforge_core::{
    logging::init_cli_logger,
    service::{self, GenerateLogoBody},
    GeneratorConfig, LogoGenerator, PaletteSummary, PALETTES,
};

#[derive(Parser)]
#[command(name = "logoforge-cli")]
#[command(about = "LogoForge CLI - Procedural Logo Generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scratch directory for generated logos (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a logo
    Generate {
        /// JSON payload (GenerateLogoBody)
        #[arg(short, long)]
        payload: String,

        /// Seed for category selection
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Fetch a generated image by filename
    Image {
        #[arg(short, long)]
        filename: String,

        /// Write raw PNG bytes here instead of printing base64
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Service info
    Info,

    /// Health check
    Health,

    /// List color schemes
    Palettes,
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => println!(r#"{{"success": false, "error": "Serialization error: {}"}}"#, e),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => match GeneratorConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                print_json(&serde_json::json!({"success": false, "error": e.to_string()}));
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    match cli.command {
        Commands::Generate { payload, seed } => {
            let body: GenerateLogoBody = match serde_json::from_str(&payload) {
                Ok(b) => b,
                Err(e) => {
                    print_json(&serde_json::json!({
                        "success": false,
                        "error": format!("Invalid payload: {}", e),
                    }));
                    return ExitCode::FAILURE;
                }
            };

            let generator = LogoGenerator::new(&config);
            let result = match seed {
                Some(seed) => service::generate_logo(&generator, body, &mut StdRng::seed_from_u64(seed)),
                None => service::generate_logo(&generator, body, &mut rand::thread_rng()),
            };

            match result {
                Ok(response) => {
                    print_json(&response);
                    ExitCode::SUCCESS
                }
                Err(failure) => {
                    print_json(&failure);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Image { filename, output } => {
            let generator = LogoGenerator::new(&config);
            match service::image(&generator, &filename) {
                Ok(bytes) => match output {
                    Some(path) => match std::fs::write(&path, &bytes) {
                        Ok(()) => {
                            print_json(&serde_json::json!({
                                "found": true,
                                "filename": filename,
                                "written_to": path.display().to_string(),
                                "size": bytes.len(),
                            }));
                            ExitCode::SUCCESS
                        }
                        Err(e) => {
                            print_json(&serde_json::json!({"found": true, "error": e.to_string()}));
                            ExitCode::FAILURE
                        }
                    },
                    None => {
                        print_json(&serde_json::json!({
                            "found": true,
                            "filename": filename,
                            "media_type": "image/png",
                            "data_base64": base64::engine::general_purpose::STANDARD.encode(&bytes),
                        }));
                        ExitCode::SUCCESS
                    }
                },
                Err(e) => {
                    print_json(&serde_json::json!({"found": false, "error": e.to_string()}));
                    ExitCode::from(2)
                }
            }
        }

        Commands::Info => {
            print_json(&service::info());
            ExitCode::SUCCESS
        }

        Commands::Health => {
            print_json(&service::health());
            ExitCode::SUCCESS
        }

        Commands::Palettes => {
            let palettes: Vec<PaletteSummary> = PALETTES.iter().map(PaletteSummary::from).collect();
            print_json(&palettes);
            ExitCode::SUCCESS
        }
    }
}
