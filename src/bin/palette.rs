use anyhow::{Context, Result, bail};
use clap::Parser;
use image_to_palette_wasm::{ColorEntry, SampledColor, decode, extract, sample_color};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Print the dominant colors of images, and optionally pick one pixel, as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths (PNG, JPEG or GIF)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of dominant colors to report
    #[arg(short = 'n', long, default_value_t = image_to_palette_wasm::DEFAULT_LIMIT)]
    limit: usize,

    /// Pick the pixel under this display coordinate, e.g. `120.5,40`
    #[arg(short, long, value_parser = parse_pair::<','>)]
    pick: Option<(f64, f64)>,

    /// Size the image is displayed at, e.g. `640x480`. Defaults to its natural size.
    #[arg(short, long, value_parser = parse_pair::<'x'>)]
    display: Option<(f64, f64)>,
}

#[derive(Serialize)]
struct Report {
    file: String,
    width: u32,
    height: u32,
    colors: Vec<ColorEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pick: Option<SampledColor>,
}

fn parse_pair<const SEP: char>(s: &str) -> Result<(f64, f64)> {
    let Some((a, b)) = s.split_once(SEP) else {
        bail!("expected two numbers separated by '{SEP}'");
    };
    Ok((a.trim().parse()?, b.trim().parse()?))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
        let buffer = decode(&bytes).with_context(|| format!("decoding {}", input.display()))?;
        let colors = extract(&buffer, args.limit);

        let pick = match args.pick {
            Some((x, y)) => {
                let (dw, dh) = args
                    .display
                    .unwrap_or((buffer.width() as f64, buffer.height() as f64));
                match sample_color(&buffer, x, y, dw, dh) {
                    Ok(picked) => Some(picked),
                    Err(e) => {
                        log::warn!("{}: pick at ({x}, {y}) ignored: {e}", input.display());
                        None
                    }
                }
            }
            None => None,
        };

        let report = Report {
            file: input.display().to_string(),
            width: buffer.width(),
            height: buffer.height(),
            colors,
            pick,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
