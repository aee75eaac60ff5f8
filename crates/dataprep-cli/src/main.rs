use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{cmd_augment, cmd_init, cmd_invert, cmd_normalize, cmd_rotate};

#[derive(Parser)]
#[command(name = "dataprep")]
#[command(
    version,
    about = "Prepare folder-per-class image datasets for classification",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resize, whiten and invert every image of a dataset in place
    ///
    /// WARNING: source files are overwritten; there is no backup.
    Normalize {
        /// Dataset root (one subdirectory per class); defaults to the
        /// configured train_folder
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,

        /// Config file (YAML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output width in pixels
        #[arg(long, value_name = "N")]
        width: Option<u32>,

        /// Output height in pixels
        #[arg(long, value_name = "N")]
        height: Option<u32>,

        /// Exact background shade turned white before inversion (R,G,B)
        #[arg(long, value_name = "R,G,B")]
        grey: Option<String>,

        /// Record failing files and keep going instead of stopping
        #[arg(long)]
        continue_on_error: bool,

        /// Write a JSON report of the run
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Verbose output (config source, per-file details)
        #[arg(short, long)]
        verbose: bool,

        /// Suppress progress and summary output
        #[arg(short, long)]
        silent: bool,
    },

    /// Write randomly rotated copies of every image of a dataset
    Augment {
        /// Dataset root (one subdirectory per class); defaults to the
        /// configured train_folder
        #[arg(value_name = "ROOT")]
        root: Option<PathBuf>,

        /// First sequence number used for new files in each class
        #[arg(long, value_name = "N")]
        prior_count: u64,

        /// Config file (YAML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Rotated copies per source image
        #[arg(long, value_name = "N")]
        copies: Option<u32>,

        /// Angles are drawn from [-N, N) whole degrees
        #[arg(long, value_name = "DEG")]
        max_angle: Option<i32>,

        /// RNG seed for reproducible output
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// File name prefix of augmented images
        #[arg(long, value_name = "STR")]
        prefix: Option<String>,

        /// Rotation filter: "nearest" (default) or "bilinear"
        #[arg(long, value_name = "FILTER")]
        filter: Option<String>,

        /// Record failing files and keep going instead of stopping
        #[arg(long)]
        continue_on_error: bool,

        /// Write a JSON report of the run
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Verbose output (config source, per-file details)
        #[arg(short, long)]
        verbose: bool,

        /// Suppress progress and summary output
        #[arg(short, long)]
        silent: bool,
    },

    /// Rotate a single image onto a solid fill
    Rotate {
        /// Input image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image (format from extension)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Counter-clockwise angle in degrees
        #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
        angle: f64,

        /// Fill color (R,G,B); defaults to the top-left pixel
        #[arg(long, value_name = "R,G,B")]
        fill: Option<String>,

        /// Rotation filter: "nearest" (default) or "bilinear"
        #[arg(long, value_name = "FILTER")]
        filter: Option<String>,
    },

    /// Whiten the grey matte of a single image and swap black and white
    Invert {
        /// Input image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image (format from extension)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Background shade turned white first (R,G,B, default 127,127,127)
        #[arg(long, value_name = "R,G,B")]
        grey: Option<String>,
    },

    /// Write a config file with the default settings
    Init {
        /// Destination (default: ./dataprep.yml)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Normalize {
            root,
            config,
            width,
            height,
            grey,
            continue_on_error,
            report,
            verbose,
            silent,
        } => cmd_normalize(
            root,
            config,
            width,
            height,
            grey,
            continue_on_error,
            report,
            verbose,
            silent,
        ),

        Commands::Augment {
            root,
            prior_count,
            config,
            copies,
            max_angle,
            seed,
            prefix,
            filter,
            continue_on_error,
            report,
            verbose,
            silent,
        } => cmd_augment(
            root,
            prior_count,
            config,
            copies,
            max_angle,
            seed,
            prefix,
            filter,
            continue_on_error,
            report,
            verbose,
            silent,
        ),

        Commands::Rotate {
            input,
            output,
            angle,
            fill,
            filter,
        } => cmd_rotate(input, output, angle, fill, filter),

        Commands::Invert {
            input,
            output,
            grey,
        } => cmd_invert(input, output, grey),

        Commands::Init { output, force } => cmd_init(output, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_augment_requires_prior_count() {
        assert!(Cli::try_parse_from(["dataprep", "augment", "Images"]).is_err());

        let cli = Cli::try_parse_from([
            "dataprep",
            "augment",
            "Images",
            "--prior-count",
            "10",
            "--seed",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Augment {
                root,
                prior_count,
                seed,
                ..
            } => {
                assert_eq!(root, Some(PathBuf::from("Images")));
                assert_eq!(prior_count, 10);
                assert_eq!(seed, Some(3));
            }
            _ => panic!("expected augment"),
        }
    }

    #[test]
    fn test_rotate_accepts_negative_angle() {
        let cli =
            Cli::try_parse_from(["dataprep", "rotate", "a.png", "b.png", "--angle", "-12.5"])
                .unwrap();
        match cli.command {
            Commands::Rotate { angle, .. } => assert_eq!(angle, -12.5),
            _ => panic!("expected rotate"),
        }
    }
}
