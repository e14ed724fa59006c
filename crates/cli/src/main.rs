#![deny(unsafe_code)]
//! CLI binary for the luv-picker.
//!
//! Subcommands:
//! - `color` prints the hex color for a hue/saturation/light triple
//! - `harmonics <scheme>` prints the harmony hues and their swatches,
//!   optionally writing them as a PNG row
//! - `palette` prints the palette matrix, optionally writing a PNG
//! - `wheel` writes the hue/saturation wheel PNG
//! - `spectrum <channel|all>` writes a spectrum strip PNG
//! - `list` prints schemes, channels, transforms and wheel policies

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use luv_picker_core::{
    Channel, ColorTransform, HarmonyScheme, PaletteConfig, PickerConfig, Session, Srgb,
    StripGeometry, TransformKind, WheelPolicy,
};
use luv_picker_raster::{
    render_palette, render_spectra, render_spectrum, render_swatches, render_wheel, snapshot,
};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "luv-picker", about = "Perceptual color picker toolkit")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to $LUV_PICKER_CONFIG or ./luv-picker.json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Color overrides shared by every rendering command. Unset values come
/// from the config's initial state.
#[derive(Args)]
struct ColorArgs {
    /// Hue in degrees.
    #[arg(long)]
    hue: Option<f64>,

    /// Saturation in [0, 100].
    #[arg(short, long)]
    saturation: Option<f64>,

    /// Light in [0, 100].
    #[arg(short, long)]
    light: Option<f64>,

    /// Color transform (hpluv, hsluv, oklch).
    #[arg(short, long)]
    transform: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the hex color of a hue/saturation/light triple.
    Color {
        #[command(flatten)]
        color: ColorArgs,
    },
    /// Print the hues and swatches of a harmony scheme.
    Harmonics {
        /// Scheme name (e.g. "triad", "split-complementary").
        scheme: String,

        #[command(flatten)]
        color: ColorArgs,

        /// Pixel size of one swatch in the PNG.
        #[arg(long, default_value_t = 40)]
        swatch_size: usize,

        /// Output PNG path for the swatch row.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the palette matrix and optionally write it as a PNG.
    Palette {
        #[command(flatten)]
        color: ColorArgs,

        /// Matrix side length in [1, 100].
        #[arg(long)]
        size: Option<usize>,

        /// Saturation spread across rows, in [0, 100].
        #[arg(long)]
        saturation_variation: Option<f64>,

        /// Light spread across rows, in [0, 100].
        #[arg(long)]
        light_variation: Option<f64>,

        /// Pixel size of one swatch in the PNG.
        #[arg(long)]
        cell_size: Option<usize>,

        /// Output PNG path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the hue/saturation wheel at a fixed light as a PNG.
    Wheel {
        #[command(flatten)]
        color: ColorArgs,

        /// Handling of cells outside the inscribed circle (clamp, mask).
        #[arg(long)]
        policy: Option<String>,

        /// Output PNG path.
        #[arg(short, long, default_value = "wheel.png")]
        output: PathBuf,
    },
    /// Write the strip for one channel, or all three stacked, as a PNG.
    Spectrum {
        /// Channel name (hue, saturation, light) or "all".
        channel: String,

        #[command(flatten)]
        color: ColorArgs,

        /// Strip length in pixels.
        #[arg(long)]
        length: Option<usize>,

        /// Strip height in pixels.
        #[arg(long)]
        height: Option<usize>,

        /// Output PNG path.
        #[arg(short, long, default_value = "spectrum.png")]
        output: PathBuf,
    },
    /// List harmony schemes, channels, transforms and wheel policies.
    List,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<PickerConfig, CliError> {
    match path {
        Some(path) => {
            let config = PickerConfig::load(path)?;
            info!(path = %path.display(), "loaded picker config");
            Ok(config)
        }
        None => Ok(PickerConfig::load_default()),
    }
}

/// Folds command-line overrides into `config` and revalidates it.
fn apply_color_args(config: &mut PickerConfig, args: &ColorArgs) -> Result<(), CliError> {
    let state = &mut config.initial;
    if let Some(hue) = args.hue {
        *state = state.with(Channel::Hue, hue);
    }
    if let Some(saturation) = args.saturation {
        *state = state.with(Channel::Saturation, saturation);
    }
    if let Some(light) = args.light {
        *state = state.with(Channel::Light, light);
    }
    if let Some(name) = &args.transform {
        TransformKind::from_name(name).map_err(|e| CliError::Input(e.to_string()))?;
        config.transform = name.clone();
    }
    config.validate()?;
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::List => {
            let schemes: Vec<&str> = HarmonyScheme::ALL.iter().map(|s| s.as_str()).collect();
            let channels: Vec<&str> = Channel::ALL.iter().map(|c| c.as_str()).collect();
            let transforms = TransformKind::list_names();
            let policies = [WheelPolicy::Clamp.to_string(), WheelPolicy::Mask.to_string()];
            if cli.json {
                print_json(&serde_json::json!({
                    "schemes": schemes,
                    "channels": channels,
                    "transforms": transforms,
                    "wheel_policies": policies,
                }))?;
            } else {
                println!("Schemes:");
                for name in schemes {
                    println!("  {name}");
                }
                println!("Channels:");
                println!("  {}", channels.join(", "));
                println!("Transforms:");
                println!("  {}", transforms.join(", "));
                println!("Wheel policies:");
                println!("  {}", policies.join(", "));
            }
        }
        Command::Color { color } => {
            apply_color_args(&mut config, &color)?;
            let session = Session::new(&config)?;
            let state = session.state();
            let hex = session.frame().current.to_hex();
            if cli.json {
                print_json(&serde_json::json!({
                    "hue": state.hue,
                    "saturation": state.saturation,
                    "light": state.light,
                    "transform": session.transform().name(),
                    "hex": hex,
                }))?;
            } else {
                println!("{hex}");
            }
        }
        Command::Harmonics {
            scheme,
            color,
            swatch_size,
            output,
        } => {
            config.harmony = scheme
                .parse::<HarmonyScheme>()
                .map_err(|e| CliError::Input(e.to_string()))?;
            apply_color_args(&mut config, &color)?;
            let session = Session::new(&config)?;
            let swatches = &session.frame().harmonics;
            if let Some(path) = &output {
                let colors: Vec<Srgb> = swatches.iter().map(|s| s.color).collect();
                let buffer = render_swatches(&colors, swatch_size)?;
                snapshot::write_png(&buffer, path)?;
                debug!(path = %path.display(), count = colors.len(), "wrote harmony swatches");
            }
            if cli.json {
                print_json(&serde_json::json!({
                    "scheme": session.scheme().as_str(),
                    "swatches": serde_json::to_value(swatches)?,
                    "markers": session.harmony_markers(),
                    "output": output.as_ref().map(|p| p.display().to_string()),
                }))?;
            } else {
                for swatch in swatches {
                    println!("{:>5}  {}", swatch.hue, swatch.color.to_hex());
                }
            }
        }
        Command::Palette {
            color,
            size,
            saturation_variation,
            light_variation,
            cell_size,
            output,
        } => {
            let base = config.palette;
            config.palette = PaletteConfig {
                size: size.unwrap_or(base.size),
                saturation_variation: saturation_variation.unwrap_or(base.saturation_variation),
                light_variation: light_variation.unwrap_or(base.light_variation),
            };
            if let Some(cell_size) = cell_size {
                config.palette_cell_size = cell_size;
            }
            apply_color_args(&mut config, &color)?;
            let session = Session::new(&config)?;
            let matrix = &session.frame().palette;
            if let Some(path) = &output {
                let buffer = render_palette(matrix, config.palette_cell_size)?;
                snapshot::write_png(&buffer, path)?;
                debug!(path = %path.display(), size = matrix.size(), "wrote palette");
            }
            let rows = matrix.to_hex_rows();
            if cli.json {
                print_json(&serde_json::json!({
                    "size": matrix.size(),
                    "rows": rows,
                    "output": output.as_ref().map(|p| p.display().to_string()),
                }))?;
            } else {
                for row in rows {
                    println!("{}", row.join(" "));
                }
                if let Some(path) = &output {
                    eprintln!("palette ({0}x{0}) -> {1}", matrix.size(), path.display());
                }
            }
        }
        Command::Wheel {
            color,
            policy,
            output,
        } => {
            if let Some(policy) = policy {
                config.wheel_policy = policy
                    .parse::<WheelPolicy>()
                    .map_err(|e| CliError::Input(e.to_string()))?;
            }
            apply_color_args(&mut config, &color)?;
            let session = Session::new(&config)?;
            let buffer = render_wheel(&session.frame().wheel, session.wheel_geometry())?;
            snapshot::write_png(&buffer, &output)?;
            let light = session.state().light;
            let (mx, my) = session.pointer_marker();
            if cli.json {
                print_json(&serde_json::json!({
                    "width": buffer.width(),
                    "height": buffer.height(),
                    "light": light,
                    "policy": session.wheel_policy().to_string(),
                    "marker": [mx, my],
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "wheel ({}x{}, light {light}, {}) -> {}",
                    buffer.width(),
                    buffer.height(),
                    session.wheel_policy(),
                    output.display()
                );
            }
        }
        Command::Spectrum {
            channel,
            color,
            length,
            height,
            output,
        } => {
            let channel = match channel.to_ascii_lowercase().as_str() {
                "all" => None,
                name => Some(
                    name.parse::<Channel>()
                        .map_err(|e| CliError::Input(e.to_string()))?,
                ),
            };
            let base = config.spectrum;
            config.spectrum = StripGeometry {
                length: length.unwrap_or(base.length),
                height: height.unwrap_or(base.height),
                ..base
            };
            apply_color_args(&mut config, &color)?;
            let session = Session::new(&config)?;
            let buffer = match channel {
                Some(channel) => {
                    render_spectrum(session.frame().spectrum(channel), session.strip_geometry())?
                }
                None => render_spectra(session.frame(), session.strip_geometry())?,
            };
            snapshot::write_png(&buffer, &output)?;
            let label = channel.map_or("all", Channel::as_str);
            if cli.json {
                print_json(&serde_json::json!({
                    "channel": label,
                    "width": buffer.width(),
                    "height": buffer.height(),
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "{label} spectrum ({}x{}) -> {}",
                    buffer.width(),
                    buffer.height(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<(), CliError> {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("picker.json");
        std::fs::write(&config, "{}").unwrap();
        let mut argv = vec!["luv-picker", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn harmonics_output_writes_one_swatch_per_hue() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triad.png");
        let out = path.to_str().unwrap();
        run_args(&["harmonics", "triad", "--swatch-size", "10", "-o", out]).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (30, 10));
    }

    #[test]
    fn spectrum_all_stacks_three_strips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spectra.png");
        let out = path.to_str().unwrap();
        run_args(&["spectrum", "all", "--length", "50", "--height", "4", "-o", out]).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (50, 12));
    }

    #[test]
    fn unknown_channel_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x.png");
        let err = run_args(&["spectrum", "alpha", "-o", out.to_str().unwrap()]).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }
}
