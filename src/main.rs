// The engine API is wider than what the binary itself drives; tests cover the rest
#![allow(dead_code)]

mod color;
mod config;
mod display;
mod error;
mod geometry;
mod pattern;
mod raster;

use config::Config;
use display::export::save_png;
use display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use error::Error;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "mandala.png";

/// Command line options; anything not given comes from the config file or defaults
#[derive(Debug, Default)]
struct Args {
    width: Option<u32>,
    height: Option<u32>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    write_config: Option<PathBuf>,
    window: bool,
}

fn parse_dimension(flag: &str, value: &str) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring {} {:?}: not a non-negative integer", flag, value);
            None
        },
    }
}

fn print_help() {
    println!("Usage: mandala [OPTIONS]");
    println!();
    println!("Options:");
    println!(
        "  --width W, -w W           Canvas width (default: {})",
        DEFAULT_WIDTH
    );
    println!(
        "  --height H, -h H          Canvas height (default: {})",
        DEFAULT_HEIGHT
    );
    println!("  --resolution WxH, -r WxH  Canvas size (e.g., 1024x768)");
    println!("  --config PATH, -c PATH    Load pattern settings from a JSON file");
    println!(
        "  --output PATH, -o PATH    PNG to write (default: {})",
        DEFAULT_OUTPUT
    );
    println!("  --write-config PATH       Save the effective settings as JSON");
    println!("  --window                  Show the result in a window (window feature)");
    println!("  --help                    Show this help message");
    println!();
    println!("Set RUST_LOG=debug for layout details.");
}

/// Parse command line arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--width" | "-w", Some(v)) => {
                parsed.width = parse_dimension("--width", v).or(parsed.width);
                i += 1;
            },
            ("--height" | "-h", Some(v)) => {
                parsed.height = parse_dimension("--height", v).or(parsed.height);
                i += 1;
            },
            ("--resolution" | "-r", Some(v)) => {
                // Parse WxH format (e.g., 1920x1080)
                match v.split_once('x') {
                    Some((w, h)) => {
                        parsed.width = parse_dimension("--resolution", w).or(parsed.width);
                        parsed.height = parse_dimension("--resolution", h).or(parsed.height);
                    },
                    None => log::warn!("Ignoring --resolution {:?}: expected WxH", v),
                }
                i += 1;
            },
            ("--config" | "-c", Some(v)) => {
                parsed.config = Some(PathBuf::from(v));
                i += 1;
            },
            ("--output" | "-o", Some(v)) => {
                parsed.output = Some(PathBuf::from(v));
                i += 1;
            },
            ("--write-config", Some(v)) => {
                parsed.write_config = Some(PathBuf::from(v));
                i += 1;
            },
            ("--window", _) => parsed.window = true,
            ("--help", _) => {
                print_help();
                std::process::exit(0);
            },
            (other, _) => log::warn!("Ignoring unknown or incomplete argument {:?}", other),
        }
        i += 1;
    }

    parsed
}

fn run(args: Args) -> Result<(), Error> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(w) = args.width {
        config.canvas.width = w;
    }
    if let Some(h) = args.height {
        config.canvas.height = h;
    }

    let mandala = config.mandala()?;
    if let Some(path) = &args.write_config {
        config.save(path)?;
        log::info!("Saved settings to {}", path.display());
    }

    log::info!(
        "Rendering {}x{} mandala: {} rings, {} spokes",
        mandala.width(),
        mandala.height(),
        mandala.config().rings.count,
        mandala.config().spokes.count
    );
    let buffer = mandala.render();

    let output = args.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if args.window {
        return show(&buffer, &output);
    }
    save_png(&buffer, &output)
}

/// Present the buffer until Escape or close; S saves a PNG
#[cfg(feature = "window")]
fn show(buffer: &display::PixelBuffer, output: &std::path::Path) -> Result<(), Error> {
    use display::{Display, InputEvent, RenderTarget};
    use sdl2::keyboard::Keycode;

    let (mut display, texture_creator) =
        Display::with_size("mandala", buffer.width(), buffer.height())?;
    let mut target = RenderTarget::with_size(&texture_creator, buffer.width(), buffer.height())?;

    println!("Controls:");
    println!("  S      - Save PNG to {}", output.display());
    println!("  Escape - Quit");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::S) => {
                    if let Err(e) = save_png(buffer, output) {
                        log::error!("Failed to save: {}", e);
                    }
                },
                InputEvent::KeyDown(_) => {},
            }
        }
        display.present(&mut target, buffer)?;
    }

    Ok(())
}

#[cfg(not(feature = "window"))]
fn show(buffer: &display::PixelBuffer, output: &std::path::Path) -> Result<(), Error> {
    log::warn!("Built without the window feature; writing a PNG instead");
    save_png(buffer, output)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    log::debug!("{:?}", args);

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
