use clap::{Parser, Subcommand};

use crate::horizon;
use crate::urls::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "preset-cli")]
#[command(about = "Utilities for maintaining the horizon calculator preset catalogue")]
#[command(version = "1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the preset catalogue file
    #[arg(short, long, default_value = "assets/info/presets.json")]
    pub catalog: String,

    /// Base directory holding one image subdirectory per preset
    #[arg(short, long, default_value = "assets/images/presets")]
    pub images_root: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest an image directory for a preset and optionally create it
    Suggest {
        /// Preset name; multiple tokens are rejoined with single spaces
        #[arg(required = true)]
        name: Vec<String>,

        /// Create the directory and update the catalogue without prompting
        #[arg(long, conflicts_with = "no")]
        yes: bool,

        /// Report only; never create the directory
        #[arg(long)]
        no: bool,
    },

    /// Print the imageURL JSON fragment for a preset with a configured directory
    Urls {
        /// Preset name; multiple tokens are rejoined with single spaces
        #[arg(required = true)]
        name: Vec<String>,

        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Mark every preset in a bare-array list file as hidden
    Hide {
        /// Path to the preset list file
        file: String,
    },

    /// Compare the two hidden-height formulas for a given distance
    CheckCurvature {
        #[arg(long, default_value_t = 50.0)]
        distance_km: f64,

        #[arg(long, default_value_t = horizon::DEFAULT_REFRACTION)]
        refraction: f64,
    },
}
