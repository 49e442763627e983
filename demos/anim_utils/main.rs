//! Animation preview CLI utility
//!
//! Headless front-end for the preview player working on unpacked animation
//! directories.
//!
//! # Features
//!
//! - **info**: Display directions, frame counts and bounding boxes
//! - **play**: Run the playback state machine and print the visited frames
//! - **export**: Export one direction as a looping GIF
//!
//! # Directory Format
//!
//! An unpacked animation is a directory holding PNG frames and a
//! `metadata.json` file:
//! ```json
//! {
//!   "signature": 116,
//!   "version": 6,
//!   "directions": [
//!     {
//!       "left": -24,
//!       "top": -72,
//!       "frames": ["dir_00/frame_000.png", "dir_00/frame_001.png"]
//!     }
//!   ]
//! }
//! ```
//!
//! # Configuration
//!
//! Player defaults come from an optional TOML file (`--config`) and
//! `DIRSPRITE_*` environment variables (`DIRSPRITE_TICK_MS=80`,
//! `DIRSPRITE_PLAY_MODE=ping_pong`, ...). Command-line flags win.
//!
//! # Usage
//!
//! ```bash
//! # Show animation information
//! cargo run --example anim_utils -- info walk/
//!
//! # Simulate 20 ticks of ping-pong playback on direction 3
//! cargo run --example anim_utils -- play walk/ -d 3 -n 20 --mode ping-pong
//!
//! # Export direction 2 with 120ms per frame
//! cargo run --example anim_utils -- export walk/ -d 2 -t 120 -o walk_2.gif
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dirsprite::prelude::*;
use log::{info, warn};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "anim_utils")]
#[command(author = "dirsprite project")]
#[command(version)]
#[command(about = "Preview and export directional sprite animations", long_about = None)]
struct Cli {
	/// TOML file with player defaults
	#[arg(short, long, global = true, value_name = "CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Display information about an unpacked animation
	Info(InfoArgs),
	/// Run playback without a display and print visited frames
	Play(PlayArgs),
	/// Export one direction as an animated GIF
	Export(ExportArgs),
}

#[derive(Args)]
struct InfoArgs {
	/// Unpacked animation directory
	#[arg(value_name = "DIR")]
	input: PathBuf,
}

#[derive(Args)]
struct PlayArgs {
	/// Unpacked animation directory
	#[arg(value_name = "DIR")]
	input: PathBuf,

	/// Direction to play
	#[arg(short, long, default_value_t = 0)]
	direction: usize,

	/// Number of ticks to simulate
	#[arg(short = 'n', long, default_value_t = 16)]
	ticks: usize,

	/// Play mode (overrides configuration)
	#[arg(short, long, value_enum)]
	mode: Option<ModeArg>,

	/// Stop at the end instead of looping
	#[arg(long, default_value_t = false)]
	once: bool,
}

#[derive(Args)]
struct ExportArgs {
	/// Unpacked animation directory
	#[arg(value_name = "DIR")]
	input: PathBuf,

	/// Direction to export
	#[arg(short, long, default_value_t = 0)]
	direction: usize,

	/// Frame delay in milliseconds (overrides configuration)
	#[arg(short, long, value_name = "MS")]
	tick_ms: Option<u32>,

	/// Output GIF path; nothing is written when omitted
	#[arg(short, long, value_name = "OUTPUT_GIF")]
	output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
	Forward,
	PingPong,
}

impl From<ModeArg> for PlayMode {
	fn from(mode: ModeArg) -> Self {
		match mode {
			ModeArg::Forward => Self::Forward,
			ModeArg::PingPong => Self::PingPong,
		}
	}
}

/// Direction entry of `metadata.json`
#[derive(Debug, Deserialize)]
struct DirectionMetadata {
	#[serde(default)]
	left: i32,
	#[serde(default)]
	top: i32,
	frames: Vec<PathBuf>,
}

/// Complete `metadata.json` structure
#[derive(Debug, Deserialize)]
struct AnimationMetadata {
	#[serde(default)]
	signature: u8,
	#[serde(default)]
	version: u8,
	directions: Vec<DirectionMetadata>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let options = load_options(cli.config.as_deref())?;

	match cli.command {
		Command::Info(args) => run_info(args),
		Command::Play(args) => run_play(args, options),
		Command::Export(args) => run_export(args, options),
	}
}

/// Layers player defaults: built-ins, then the config file, then environment
fn load_options(path: Option<&Path>) -> Result<PlayerOptions> {
	let mut builder = config::Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path).required(true));
	}
	builder = builder.add_source(config::Environment::with_prefix("DIRSPRITE").try_parsing(true));

	let options = builder
		.build()
		.context("Failed to read configuration")?
		.try_deserialize::<PlayerOptions>()
		.context("Invalid player configuration")?;
	Ok(options)
}

/// Load an unpacked animation directory
fn load_animation(dir: &Path) -> Result<AnimationSet> {
	let metadata_path = dir.join("metadata.json");
	let json = fs::read_to_string(&metadata_path)
		.with_context(|| format!("Failed to read {}", metadata_path.display()))?;
	let metadata: AnimationMetadata = serde_json::from_str(&json)
		.with_context(|| format!("Invalid metadata in {}", metadata_path.display()))?;

	if metadata.directions.is_empty() {
		bail!("{} declares no directions", metadata_path.display());
	}

	let mut directions = Vec::with_capacity(metadata.directions.len());
	for (index, entry) in metadata.directions.iter().enumerate() {
		let mut frames = Vec::with_capacity(entry.frames.len());
		for frame_path in &entry.frames {
			let path = dir.join(frame_path);
			let image = image::open(&path)
				.with_context(|| format!("Failed to open frame {}", path.display()))?
				.to_rgba8();
			frames.push(Frame::from_image(image));
		}

		let Some(first) = frames.first() else {
			bail!("Direction {index} has no frames");
		};
		let bounds = BoundingBox::new(entry.left, entry.top, first.width(), first.height());
		let direction = Direction::new(bounds, frames)
			.with_context(|| format!("Direction {index} is inconsistent"))?;
		directions.push(direction);
	}

	let header = Header {
		signature: metadata.signature,
		version: metadata.version,
	};
	Ok(AnimationSet::with_header(header, directions)?)
}

/// Handle info command
fn run_info(args: InfoArgs) -> Result<()> {
	let set = load_animation(&args.input)?;
	let header = set.header();

	println!("Animation: {}", args.input.display());
	println!("  Signature: {}", header.signature);
	println!("  Version: {}", header.version);
	println!("  Directions: {}", set.direction_count());
	println!("  Frames per Direction: {}", set.frames_per_direction());
	println!("  Total frames: {}", set.total_frames());

	for (index, direction) in set.directions().iter().enumerate() {
		println!("  [{index:2}] {} frames, box {}", direction.frame_count(), direction.bounds());
	}

	Ok(())
}

/// Handle play command
fn run_play(args: PlayArgs, mut options: PlayerOptions) -> Result<()> {
	let set = load_animation(&args.input)?;

	if let Some(mode) = args.mode {
		options.play_mode = mode.into();
	}
	if args.once {
		options.repeat = false;
	}

	let mut player = Player::for_set(&set, &options);
	player.set_direction(args.direction);
	if player.state().direction() != args.direction {
		warn!("Direction {} does not exist, using {}", args.direction, player.state().direction());
	}
	player.play();

	let interval = Duration::from_millis(u64::from(player.state().tick_interval_ms()));
	let mut visited = vec![player.state().frame()];
	for _ in 0..args.ticks {
		if !player.state().is_playing() {
			break;
		}
		player.update(interval);
		visited.push(player.state().frame());
	}

	let frames: Vec<String> = visited.iter().map(ToString::to_string).collect();
	println!(
		"Direction {} ({}, repeat {}): {}",
		player.state().direction(),
		player.state().play_mode(),
		player.state().repeat(),
		frames.join(" ")
	);
	info!("Finished {} after {} ticks", player.state().status(), visited.len() - 1);

	Ok(())
}

/// Handle export command
fn run_export(args: ExportArgs, options: PlayerOptions) -> Result<()> {
	let set = load_animation(&args.input)?;
	let tick_ms = args.tick_ms.unwrap_or(options.tick_ms);

	let request = ExportRequest::for_direction(&set, args.direction, tick_ms);
	let mut picker = FixedPath(args.output);

	match export_gif(&request, &mut picker).context("GIF export failed")? {
		ExportOutcome::Written {
			path,
			frames,
			bytes,
		} => {
			println!("✓ Exported direction {} -> {} ({frames} frames, {bytes} bytes)", request.direction, path.display());
		}
		ExportOutcome::DestinationNotSelected => {
			println!("No output path given, nothing written");
		}
	}

	Ok(())
}
