//! framestamp CLI: stamp bitmap-font text onto raw frame buffers.

use clap::{Parser, Subcommand};
use framestamp::config::Config;
use framestamp::font::small_font;
use framestamp::pnm;
use framestamp::raster::{
    draw_string_gray8, draw_string_halo, draw_string_packed, BufferEncoding,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Parse and validate a WIDTHxHEIGHT resolution.
fn parse_resolution(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid resolution format '{}'. Use WIDTHxHEIGHT (e.g., 800x600)",
            s
        ));
    }
    let width: u32 = parts[0]
        .parse()
        .map_err(|_| format!("Invalid width '{}' in resolution", parts[0]))?;
    let height: u32 = parts[1]
        .parse()
        .map_err(|_| format!("Invalid height '{}' in resolution", parts[1]))?;
    if width == 0 || height == 0 {
        return Err(format!("Resolution must be nonzero, got {}x{}", width, height));
    }
    Ok((width, height))
}

/// Parse an XxY text origin.
fn parse_position(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid position format '{}'. Use XxY (e.g., 8x8)", s));
    }
    let x: u32 = parts[0]
        .parse()
        .map_err(|_| format!("Invalid x '{}' in position", parts[0]))?;
    let y: u32 = parts[1]
        .parse()
        .map_err(|_| format!("Invalid y '{}' in position", parts[1]))?;
    Ok((x, y))
}

/// Parse the buffer encoding name.
fn parse_mode(s: &str) -> Result<BufferEncoding, String> {
    BufferEncoding::from_str(s)
        .ok_or_else(|| format!("Unknown mode '{}'. Available modes: gray8, packed", s))
}

#[derive(Parser)]
#[command(name = "framestamp", about = "Stamp bitmap-font text onto raw frame buffers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text into a frame and write an uncompressed PGM/PBM snapshot
    Stamp {
        /// Text to stamp (printable ASCII)
        text: String,
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
        /// Raw input frame to stamp onto, instead of a blank frame
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Frame resolution as WIDTHxHEIGHT
        #[arg(short, long, value_parser = parse_resolution)]
        resolution: Option<(u32, u32)>,
        /// Text origin as XxY (pixels; byte columns for x in packed mode)
        #[arg(long, value_parser = parse_position)]
        at: Option<(u32, u32)>,
        /// Buffer encoding: gray8 or packed
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<BufferEncoding>,
        /// Foreground gray value (gray8 mode)
        #[arg(long)]
        fg: Option<u8>,
        /// Halo gray value (gray8 mode)
        #[arg(long)]
        bg: Option<u8>,
        /// Draw the contrast halo (gray8 mode)
        #[arg(long, overrides_with = "no_halo")]
        halo: bool,
        /// Skip the contrast halo
        #[arg(long)]
        no_halo: bool,
        /// Custom config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Render text in memory and print it to the terminal
    Preview {
        /// Text to render
        text: String,
        /// Skip the contrast halo
        #[arg(long)]
        no_halo: bool,
    },
    /// Print the built-in font's metrics
    FontInfo,
}

#[allow(clippy::too_many_arguments)]
fn run_stamp(
    text: &str,
    output: &PathBuf,
    input: Option<&PathBuf>,
    resolution: Option<(u32, u32)>,
    at: Option<(u32, u32)>,
    mode: Option<BufferEncoding>,
    fg: Option<u8>,
    bg: Option<u8>,
    halo: bool,
    no_halo: bool,
    config_path: Option<&PathBuf>,
) -> Result<(), String> {
    // A missing config file means defaults; a present but broken one is an
    // error.
    let cfg = Config::load(config_path.map(|p| p.as_path())).map_err(|e| e.to_string())?;

    // Merge settings: CLI args > config file > built-in defaults.
    let (width, height) = resolution.unwrap_or((cfg.output.width, cfg.output.height));
    let (x, y) = at.unwrap_or((cfg.overlay.x, cfg.overlay.y));
    let mode = mode
        .or_else(|| cfg.output.mode.as_deref().and_then(BufferEncoding::from_str))
        .unwrap_or_default();
    let fg = fg.unwrap_or(cfg.overlay.foreground);
    let bg = bg.unwrap_or(cfg.overlay.background);
    let halo = if halo {
        true
    } else if no_halo {
        false
    } else {
        cfg.overlay.halo
    };

    let expected = mode
        .buffer_len(width, height)
        .ok_or_else(|| format!("Packed mode needs a width divisible by 8, got {}", width))?;
    let mut buf = match input {
        Some(path) => {
            let data = std::fs::read(path)
                .map_err(|e| format!("Failed to read input frame '{}': {}", path.display(), e))?;
            if data.len() != expected {
                return Err(format!(
                    "Input frame '{}' is {} bytes, a {}x{} {} frame needs {}",
                    path.display(),
                    data.len(),
                    width,
                    height,
                    mode,
                    expected
                ));
            }
            data
        }
        None => vec![0u8; expected],
    };

    let font = small_font();
    match mode {
        BufferEncoding::PackedMono => {
            draw_string_packed(&mut buf, width, height, x, y, text, &font)
                .map_err(|e| e.to_string())?;
        }
        BufferEncoding::Gray8 => {
            if halo {
                draw_string_halo(&mut buf, width, height, x, y, text, fg, bg, &font)
                    .map_err(|e| e.to_string())?;
            } else {
                draw_string_gray8(&mut buf, width, height, x, y, text, fg, &font)
                    .map_err(|e| e.to_string())?;
            }
        }
    }

    let file = File::create(output)
        .map_err(|e| format!("Failed to create '{}': {}", output.display(), e))?;
    let mut writer = BufWriter::new(file);
    match mode {
        BufferEncoding::PackedMono => pnm::write_pbm(&mut writer, width, height, &buf),
        BufferEncoding::Gray8 => pnm::write_pgm(&mut writer, width, height, &buf),
    }
    .map_err(|e| format!("Failed to write '{}': {}", output.display(), e))?;

    println!(
        "Stamped \"{}\" at ({}, {}) into {}x{} {} frame -> {}",
        text,
        x,
        y,
        width,
        height,
        mode,
        output.display()
    );
    Ok(())
}

fn run_preview(text: &str, no_halo: bool) -> Result<(), String> {
    let font = small_font();
    // Size the buffer to the text plus a one-pixel halo margin.
    let width = text.len() as u32 * font.width() + 2;
    let height = font.height() + 2;
    let mut buf = vec![0u8; (width * height) as usize];

    if no_halo {
        draw_string_gray8(&mut buf, width, height, 1, 1, text, 255, &font)
            .map_err(|e| e.to_string())?;
    } else {
        draw_string_halo(&mut buf, width, height, 1, 1, text, 255, 128, &font)
            .map_err(|e| e.to_string())?;
    }

    for row in buf.chunks(width as usize) {
        let line: String = row
            .iter()
            .map(|&p| match p {
                255 => '#',
                128 => '+',
                _ => '.',
            })
            .collect();
        println!("{}", line);
    }
    Ok(())
}

fn run_font_info() {
    let font = small_font();
    println!("Built-in font:");
    println!("  glyph size:  {}x{} px", font.width(), font.height());
    println!(
        "  characters:  {:?} ..= {:?} ({} glyphs)",
        font.first_char() as char,
        (font.first_char() + font.glyph_count() - 1) as char,
        font.glyph_count()
    );
    println!("  row stride:  {} byte(s) per glyph row, MSB-left", font.row_stride());
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stamp {
            text,
            output,
            input,
            resolution,
            at,
            mode,
            fg,
            bg,
            halo,
            no_halo,
            config,
        } => {
            if let Err(e) = run_stamp(
                &text,
                &output,
                input.as_ref(),
                resolution,
                at,
                mode,
                fg,
                bg,
                halo,
                no_halo,
                config.as_ref(),
            ) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Preview { text, no_halo } => {
            if let Err(e) = run_preview(&text, no_halo) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::FontInfo => run_font_info(),
    }
}
