use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use preset_cli::catalog;
use preset_cli::cli::{Cli, Commands};
use preset_cli::confirm::{Confirmation, ConsoleConfirmation, PresetAnswer};
use preset_cli::error::{AppError, Result};
use preset_cli::horizon;
use preset_cli::suggest::{self, Analysis};
use preset_cli::urls;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let catalog_path = Path::new(&cli.catalog);
    let images_root = Path::new(&cli.images_root);

    match &cli.command {
        Commands::Suggest { name, yes, no } => {
            let preset_name = name.join(" ");
            let mut confirmation: Box<dyn Confirmation> = if *yes {
                Box::new(PresetAnswer(true))
            } else if *no {
                Box::new(PresetAnswer(false))
            } else {
                Box::new(ConsoleConfirmation)
            };
            run_suggest(catalog_path, images_root, &preset_name, confirmation.as_mut())
        }
        Commands::Urls { name, base_url } => {
            let preset_name = name.join(" ");
            run_urls(catalog_path, images_root, base_url, &preset_name)
        }
        Commands::Hide { file } => {
            let count = catalog::bulk::hide_all(Path::new(file))?;
            println!("Marked {count} presets as hidden in {file}");
            Ok(())
        }
        Commands::CheckCurvature {
            distance_km,
            refraction,
        } => {
            let radius = horizon::effective_radius_km(*refraction);
            println!(
                "Method 1 (d²/2R): {:.6} km",
                horizon::hidden_height_quadratic(*distance_km, radius)
            );
            println!(
                "Method 2 (R(1-cos(L₀/R))): {:.6} km",
                horizon::hidden_height_arc(*distance_km, radius)
            );
            Ok(())
        }
    }
}

fn run_suggest(
    catalog_path: &Path,
    images_root: &Path,
    preset_name: &str,
    confirmation: &mut dyn Confirmation,
) -> Result<()> {
    let mut catalog = catalog::load_catalog(catalog_path)?;

    println!();
    println!("Analyzing preset: {preset_name}");

    match suggest::analyze(&catalog, images_root, preset_name) {
        Analysis::NotFound => Err(AppError::PresetNotFound(preset_name.to_string())),
        Analysis::AlreadySet { image_dir } => {
            println!("Current imageDir: {image_dir}");
            println!("Directory name already set - no suggestion needed");
            Ok(())
        }
        Analysis::Suggestion(suggestion) => {
            println!("Current imageDir: <empty>");
            println!("Suggested directory name: {}", suggestion.candidate);

            if suggestion.already_exists {
                println!("Note: Directory '{}' already exists!", suggestion.candidate);
            }

            if !suggestion.similar.is_empty() {
                println!();
                println!("Similar existing directories found:");
                for found in &suggestion.similar {
                    println!(
                        "  - {} ({}% similar)",
                        found.name,
                        (found.ratio * 100.0) as u32
                    );
                }
            }

            if suggestion.already_exists {
                return Ok(());
            }

            println!();
            if confirmation.confirm("Would you like to create this directory and update the preset?")? {
                let dir_path = suggest::create_and_persist(
                    &mut catalog,
                    catalog_path,
                    images_root,
                    preset_name,
                    &suggestion.candidate,
                )?;
                println!("Created directory: {}", dir_path.display());
                println!("Updated preset's imageDir to: {}", suggestion.candidate);
            } else {
                println!("Operation cancelled.");
            }
            Ok(())
        }
    }
}

fn run_urls(
    catalog_path: &Path,
    images_root: &Path,
    base_url: &str,
    preset_name: &str,
) -> Result<()> {
    let catalog = catalog::load_catalog(catalog_path)?;
    let urls = urls::generate_image_urls(&catalog, images_root, base_url, preset_name)?;

    println!();
    println!("Generated URLs:");
    println!("{}", serde_json::to_string_pretty(&urls)?);
    Ok(())
}
