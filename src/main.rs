//! noisegen CLI - render noise fields and terrain to PNG.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use glam::DVec2;
use tracing::info;
use tracing_subscriber::EnvFilter;

use noisegen::export::{export_heightmap_png, export_normal_map_png, PngExportOptions};
use noisegen::render::{render_field, RenderConfig, RenderMode};
use noisegen::terrain::{generate_terrain_maps, TerrainConfig, TerrainSampler};
use noisegen::{Kernel, NoiseGenerator};

/// Seedable procedural noise renderer.
#[derive(Parser)]
#[command(name = "noisegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a noise field to a 16-bit grayscale PNG.
    Render {
        /// JSON render config; flags override its values.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output PNG path.
        #[arg(short, long, default_value = "noise.png")]
        output: PathBuf,

        /// Seed for the permutation table.
        #[arg(short, long)]
        seed: Option<u32>,

        /// Base noise kernel.
        #[arg(short, long)]
        kernel: Option<KernelArg>,

        /// Composition applied to the kernel.
        #[arg(short, long)]
        mode: Option<ModeArg>,

        /// Image width in pixels.
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels.
        #[arg(long)]
        height: Option<u32>,

        /// World units per pixel.
        #[arg(long)]
        spacing: Option<f64>,

        /// Sample the 3D kernel on the plane z = SLICE.
        #[arg(long)]
        slice: Option<f64>,

        /// Base frequency.
        #[arg(long)]
        frequency: Option<f64>,

        /// Number of fBm octaves (1-16).
        #[arg(long)]
        octaves: Option<u32>,

        /// Frequency multiplier per octave.
        #[arg(long)]
        lacunarity: Option<f64>,

        /// Amplitude multiplier per octave.
        #[arg(long)]
        gain: Option<f64>,

        /// Displacement scale for the warp mode.
        #[arg(long)]
        warp_strength: Option<f64>,
    },

    /// Render the derivative-noise terrain as a height map or normal map.
    Terrain {
        /// Output PNG path.
        #[arg(short, long, default_value = "terrain.png")]
        output: PathBuf,

        /// Image width in pixels.
        #[arg(long, default_value = "512")]
        width: u32,

        /// Image height in pixels.
        #[arg(long, default_value = "512")]
        height: u32,

        /// World units per pixel.
        #[arg(long, default_value = "8.0")]
        spacing: f64,

        /// World X of the top-left pixel.
        #[arg(long, default_value = "0.0")]
        origin_x: f64,

        /// World Z of the top-left pixel.
        #[arg(long, default_value = "0.0")]
        origin_y: f64,

        /// Write the normal map instead of the height map.
        #[arg(long)]
        normals: bool,

        /// Disable the cliff band.
        #[arg(long)]
        no_cliffs: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KernelArg {
    Perlin,
    Simplex,
    Value,
}

impl From<KernelArg> for Kernel {
    fn from(arg: KernelArg) -> Self {
        match arg {
            KernelArg::Perlin => Kernel::Perlin,
            KernelArg::Simplex => Kernel::Simplex,
            KernelArg::Value => Kernel::Value,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// One octave.
    Single,
    /// Fractal Brownian motion.
    Fbm,
    /// fBm with inter-octave rotation.
    Rotated,
    /// Domain-warped fBm.
    Warp,
}

impl From<ModeArg> for RenderMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => RenderMode::Single,
            ModeArg::Fbm => RenderMode::Fbm,
            ModeArg::Rotated => RenderMode::Rotated,
            ModeArg::Warp => RenderMode::Warp,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            output,
            seed,
            kernel,
            mode,
            width,
            height,
            spacing,
            slice,
            frequency,
            octaves,
            lacunarity,
            gain,
            warp_strength,
        } => {
            let mut render = match config {
                Some(path) => RenderConfig::from_json_file(&path)?,
                None => RenderConfig::default(),
            };
            if let Some(seed) = seed {
                render.seed = seed;
            }
            if let Some(kernel) = kernel {
                render.kernel = kernel.into();
            }
            if let Some(mode) = mode {
                render.mode = mode.into();
            }
            if let Some(width) = width {
                render.width = width;
            }
            if let Some(height) = height {
                render.height = height;
            }
            if let Some(spacing) = spacing {
                render.spacing = spacing;
            }
            if slice.is_some() {
                render.slice = slice;
            }
            if let Some(frequency) = frequency {
                render.fbm.frequency = frequency;
            }
            if let Some(octaves) = octaves {
                render.fbm.octaves = octaves;
            }
            if let Some(lacunarity) = lacunarity {
                render.fbm.lacunarity = lacunarity;
            }
            if let Some(gain) = gain {
                render.fbm.gain = gain;
            }
            if let Some(warp_strength) = warp_strength {
                render.warp_strength = warp_strength;
            }
            run_render(&render, output)
        }
        Commands::Terrain {
            output,
            width,
            height,
            spacing,
            origin_x,
            origin_y,
            normals,
            no_cliffs,
        } => {
            let config = if no_cliffs {
                TerrainConfig::without_cliffs()
            } else {
                TerrainConfig::default()
            };
            validate_size(width, height)?;
            run_terrain(config, width, height, DVec2::new(origin_x, origin_y), spacing, normals, output)
        }
    }
}

fn validate_size(width: u32, height: u32) -> Result<(), Box<dyn Error>> {
    if !(1..=8192).contains(&width) || !(1..=8192).contains(&height) {
        return Err(format!("image size must be between 1 and 8192, got {}x{}", width, height).into());
    }
    Ok(())
}

fn run_render(config: &RenderConfig, output: PathBuf) -> Result<(), Box<dyn Error>> {
    validate_size(config.width, config.height)?;
    if !(1..=16).contains(&config.fbm.octaves) {
        return Err(format!("octaves must be between 1 and 16, got {}", config.fbm.octaves).into());
    }

    info!(
        seed = config.seed,
        kernel = config.kernel.name(),
        mode = ?config.mode,
        width = config.width,
        height = config.height,
        "rendering noise field"
    );
    let start = Instant::now();

    let generator = NoiseGenerator::new(config.seed);
    let mut map = render_field(&generator, config);
    let (min, max) = map.value_range();
    info!(min, max, elapsed = ?start.elapsed(), "sampled field");

    map.normalize();
    export_heightmap_png(&map, &output, &PngExportOptions::default())?;
    info!(path = %output.display(), elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn run_terrain(
    config: TerrainConfig,
    width: u32,
    height: u32,
    origin: DVec2,
    spacing: f64,
    normals: bool,
    output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    info!(width, height, spacing, "sampling terrain");
    let start = Instant::now();

    let sampler = TerrainSampler::new(config);
    let mut maps = generate_terrain_maps(&sampler, width, height, origin, spacing);
    let (min, max) = maps.heights.value_range();
    info!(min, max, elapsed = ?start.elapsed(), "sampled terrain");

    let options = PngExportOptions::default();
    if normals {
        export_normal_map_png(width, height, &maps.normals, &output, &options)?;
    } else {
        maps.heights.normalize();
        export_heightmap_png(&maps.heights, &output, &options)?;
    }
    info!(path = %output.display(), elapsed = ?start.elapsed(), "done");
    Ok(())
}
