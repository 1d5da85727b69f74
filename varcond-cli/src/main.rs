use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use varcond::io::load_gray_field;
use varcond::{accumulate, Displacement};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Conditional-variance texture descriptor over a grayscale image"
)]
struct Cli {
    /// Path to the input image (decoded and converted to 8-bit grayscale).
    image: PathBuf,
    /// Column offset of the paired neighbor.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    dx: i64,
    /// Row offset of the paired neighbor.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dy: i64,
    /// Additional displacements to evaluate, as comma-separated `dx,dy` pairs.
    #[arg(long = "disp", value_name = "DX,DY", value_parser = parse_displacement)]
    extra: Vec<Displacement>,
    /// Write the JSON report to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

fn parse_displacement(raw: &str) -> Result<Displacement, String> {
    let (dx, dy) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `dx,dy`, got `{raw}`"))?;
    let dx: isize = dx
        .trim()
        .parse()
        .map_err(|_| format!("invalid dx in `{raw}`"))?;
    let dy: isize = dy
        .trim()
        .parse()
        .map_err(|_| format!("invalid dy in `{raw}`"))?;
    Ok(Displacement::new(dx, dy))
}

#[derive(Debug, Serialize)]
struct DescriptorRecord {
    dx: isize,
    dy: isize,
    value: f64,
    pairs: usize,
    groups: usize,
}

#[derive(Debug, Serialize)]
struct Output {
    image: String,
    width: usize,
    height: usize,
    mean_intensity: f64,
    descriptors: Vec<DescriptorRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("varcond=info".parse()?))
            .with_target(false)
            .init();
    }

    let field = load_gray_field(&cli.image)?;
    let view = field.view();

    let mut displacements = vec![Displacement::new(cli.dx as isize, cli.dy as isize)];
    displacements.extend(cli.extra);

    let mut descriptors = Vec::with_capacity(displacements.len());
    for disp in displacements {
        let hist = accumulate(view, disp)?;
        descriptors.push(DescriptorRecord {
            dx: disp.dx,
            dy: disp.dy,
            value: hist.weighted_variance()?,
            pairs: hist.total_pairs(),
            groups: hist.num_groups(),
        });
    }

    let output = Output {
        image: cli.image.display().to_string(),
        width: view.width(),
        height: view.height(),
        mean_intensity: view.mean(),
        descriptors,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
