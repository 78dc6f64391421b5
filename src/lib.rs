//! Labelbridge: glue between a YOLO detector and a Label Studio review loop.
//!
//! Detections come out of the model as numeric class ids and normalized
//! centre boxes; reviewers work with class names and percentage corner boxes.
//! This crate provides the small, pure conversions in between.
//!
//! # Modules
//!
//! - [`labels`]: Class-label registry (id <-> name lookups)
//! - [`coord`]: Bounding-box coordinate conversions
//! - [`error`]: Error types for labelbridge operations

pub mod coord;
pub mod error;
pub mod labels;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use serde::Serialize;

pub use error::LabelBridgeError;

/// The labelbridge CLI application.
#[derive(Parser)]
#[command(name = "labelbridge")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Look up the class name for a class id.
    Name(NameArgs),
    /// Look up the class id for a class name.
    Code(CodeArgs),
    /// Convert a normalized YOLO box to an integer pixel rectangle.
    ToPixel(ToPixelArgs),
    /// Convert a Label Studio percentage box to a normalized YOLO box.
    FromPercent(FromPercentArgs),
    /// Write a placeholder labels file with names class1..classN.
    InitLabels(InitLabelsArgs),
}

/// Output format for printed results.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the name subcommand.
#[derive(clap::Args)]
struct NameArgs {
    /// Class id as emitted by the detector.
    #[arg(allow_negative_numbers = true)]
    id: String,

    /// Labels file with one `'<id>': '<name>',` entry per line.
    #[arg(long, env = "LABELBRIDGE_LABELS")]
    labels: PathBuf,

    /// Output format for the result.
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,
}

/// Arguments for the code subcommand.
#[derive(clap::Args)]
struct CodeArgs {
    /// Class name to resolve.
    name: String,

    /// Labels file with one `'<id>': '<name>',` entry per line.
    #[arg(long, env = "LABELBRIDGE_LABELS")]
    labels: PathBuf,

    /// Match the plain class name instead of its list-rendered form.
    #[arg(long)]
    exact: bool,

    /// Output format for the result.
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,
}

/// Arguments for the to-pixel subcommand.
#[derive(clap::Args)]
struct ToPixelArgs {
    /// Normalized centre x.
    #[arg(allow_negative_numbers = true)]
    cx: f64,
    /// Normalized centre y.
    #[arg(allow_negative_numbers = true)]
    cy: f64,
    /// Normalized width.
    #[arg(allow_negative_numbers = true)]
    w: f64,
    /// Normalized height.
    #[arg(allow_negative_numbers = true)]
    h: f64,

    /// Image width in pixels.
    #[arg(long = "width")]
    image_width: f64,

    /// Image height in pixels.
    #[arg(long = "height")]
    image_height: f64,

    /// Output format for the result.
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,
}

/// Arguments for the from-percent subcommand.
#[derive(clap::Args)]
struct FromPercentArgs {
    /// Upper-left x in percent of the image width.
    #[arg(allow_negative_numbers = true)]
    x: f64,
    /// Upper-left y in percent of the image height.
    #[arg(allow_negative_numbers = true)]
    y: f64,
    /// Width in percent of the image width.
    #[arg(allow_negative_numbers = true)]
    w: f64,
    /// Height in percent of the image height.
    #[arg(allow_negative_numbers = true)]
    h: f64,

    /// Output format for the result.
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,
}

/// Arguments for the init-labels subcommand.
#[derive(clap::Args)]
struct InitLabelsArgs {
    /// Labels file to create.
    path: PathBuf,

    /// Number of classes to generate.
    #[arg(long)]
    count: usize,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    force: bool,
}

#[derive(Serialize)]
struct LookupResult<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct RelativeRow {
    x_center: String,
    y_center: String,
    width: String,
    height: String,
}

/// Run the labelbridge CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), LabelBridgeError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Name(args)) => run_name(args),
        Some(Commands::Code(args)) => run_code(args),
        Some(Commands::ToPixel(args)) => run_to_pixel(args),
        Some(Commands::FromPercent(args)) => run_from_percent(args),
        Some(Commands::InitLabels(args)) => run_init_labels(args),
        None => {
            println!("labelbridge {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Class-label lookups and box conversions for YOLO and Label Studio.");
            println!();
            println!("Run 'labelbridge --help' for usage information.");
            Ok(())
        }
    }
}

fn run_name(args: NameArgs) -> Result<(), LabelBridgeError> {
    let label_map = labels::read_label_map(&args.labels)?;
    let name = labels::class_name(&label_map, &args.id);
    if name == labels::UNKNOWN_CLASS {
        debug!("class id '{}' not found in {}", args.id, args.labels.display());
    }

    emit(
        args.output,
        name,
        &LookupResult {
            id: &args.id,
            name,
        },
    )
}

fn run_code(args: CodeArgs) -> Result<(), LabelBridgeError> {
    let label_map = labels::read_label_map(&args.labels)?;
    let id = if args.exact {
        labels::class_code_exact(&label_map, &args.name)
    } else {
        labels::class_code(&label_map, &args.name)
    };
    if id == labels::UNKNOWN_CLASS {
        debug!(
            "class name '{}' not found in {}",
            args.name,
            args.labels.display()
        );
    }

    emit(
        args.output,
        id,
        &LookupResult {
            id,
            name: &args.name,
        },
    )
}

fn run_to_pixel(args: ToPixelArgs) -> Result<(), LabelBridgeError> {
    let rect = coord::CenterBox::<coord::Normalized>::new(args.cx, args.cy, args.w, args.h)
        .to_pixel_rect(args.image_width, args.image_height);

    let text = format!("{} {} {} {}", rect.x, rect.y, rect.width, rect.height);
    emit(args.output, &text, &rect)
}

fn run_from_percent(args: FromPercentArgs) -> Result<(), LabelBridgeError> {
    let (x_center, y_center, width, height) =
        coord::label_tool_to_relative(args.x, args.y, args.w, args.h);

    let text = format!("{} {} {} {}", x_center, y_center, width, height);
    let row = RelativeRow {
        x_center,
        y_center,
        width,
        height,
    };
    emit(args.output, &text, &row)
}

fn run_init_labels(args: InitLabelsArgs) -> Result<(), LabelBridgeError> {
    let label_map = labels::LabelMap::generic(args.count);

    if args.force {
        labels::write_label_map(&args.path, &label_map)?;
    } else if !labels::create_label_map(&args.path, &label_map)? {
        warn!(
            "{} already exists; leaving it untouched (use --force to overwrite)",
            args.path.display()
        );
        return Ok(());
    }

    println!(
        "Wrote {} placeholder class name(s) to {}",
        label_map.len(),
        args.path.display()
    );
    Ok(())
}

fn emit<T: Serialize>(
    output: OutputFormat,
    text: &str,
    value: &T,
) -> Result<(), LabelBridgeError> {
    match output {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
