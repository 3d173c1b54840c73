use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use glam::Mat4;
use tracing_subscriber::EnvFilter;
use voxelfield_common::FieldConfig;
use voxelfield_kernel::{CameraState, JitterSource, SeededJitter, Tickable, Viewport, VoxelField};
use voxelfield_render::{DebugTextRenderer, RenderView, Renderer};
use voxelfield_tools::FieldInspector;

#[derive(Parser)]
#[command(name = "voxelfield-cli", about = "Headless voxel field tool")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON field configuration; defaults apply to missing fields
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Where the simulated pointer clicks.
#[derive(Args, Clone, Copy)]
struct PickArgs {
    /// Pointer x in pixels
    #[arg(long, default_value = "640")]
    x: f32,
    /// Pointer y in pixels
    #[arg(long, default_value = "360")]
    y: f32,
    /// Viewport width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,
    /// Viewport height in pixels
    #[arg(long, default_value = "720")]
    height: u32,
    /// Jitter seed; omit for entropy
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and the effective configuration
    Info,
    /// Pick once, then tick the field and report its state
    Simulate {
        #[command(flatten)]
        pick: PickArgs,
        /// Number of frames to tick
        #[arg(short, long, default_value = "120")]
        ticks: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Print every moving voxel at the end
        #[arg(long)]
        dump: bool,
    },
    /// Pick once and report the hit without ticking
    Pick {
        #[command(flatten)]
        pick: PickArgs,
    },
}

fn load_config(path: Option<&str>) -> anyhow::Result<FieldConfig> {
    match path {
        Some(p) => FieldConfig::load(p).with_context(|| format!("loading {p}")),
        None => Ok(FieldConfig::default()),
    }
}

fn build_field(config: FieldConfig, seed: Option<u64>) -> anyhow::Result<VoxelField> {
    let jitter: Box<dyn JitterSource> = match seed {
        Some(s) => Box::new(SeededJitter::new(s)),
        None => Box::new(SeededJitter::from_entropy()),
    };
    Ok(VoxelField::with_jitter(config, jitter)?)
}

fn pick(field: &mut VoxelField, view: &RenderView, args: PickArgs) -> bool {
    let viewport = Viewport::new(args.width, args.height);
    let camera = CameraState::new(
        Mat4::look_at_rh(view.eye, view.target, glam::Vec3::Y),
        Mat4::perspective_rh(
            view.fov_degrees.to_radians(),
            viewport.width.max(1) as f32 / viewport.height.max(1) as f32,
            0.1,
            1000.0,
        ),
    );
    match field.on_pick(args.x, args.y, &camera, viewport) {
        Some(outcome) => {
            let impact = outcome.impact;
            println!(
                "Hit at ({:.3}, {:.3}, {:.3}); {} voxels accepted the impulse",
                impact.x, impact.y, impact.z, outcome.accepted
            );
            true
        }
        None => {
            println!("Miss at ({}, {})", args.x, args.y);
            false
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");
    let view = RenderView::default();

    match cli.command {
        Commands::Info => {
            println!("voxelfield-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", voxelfield_render::crate_info());
            println!("tools: {}", voxelfield_tools::crate_info());
            println!(
                "field: {}x{}x{} voxels, spacing {}, size {}",
                config.dimensions.x,
                config.dimensions.y,
                config.dimensions.z,
                config.spacing,
                config.voxel_size
            );
            println!("motion: {:?}", config.motion);
        }
        Commands::Simulate {
            pick: args,
            ticks,
            dt,
            dump,
        } => {
            let mut field = build_field(config, args.seed)?;
            pick(&mut field, &view, args);
            for _ in 0..ticks {
                field.tick(dt);
            }
            println!("{}", FieldInspector::summary(&field));
            if dump {
                print!("{}", DebugTextRenderer::moving_only().render(&field, &view));
            }
        }
        Commands::Pick { pick: args } => {
            let mut field = build_field(config, args.seed)?;
            if pick(&mut field, &view, args) {
                for index in FieldInspector::moving_voxels(&field) {
                    if let Some(info) = FieldInspector::inspect_voxel(&field, index) {
                        println!("  {info}");
                    }
                }
            }
        }
    }

    Ok(())
}
