//! Sprite Parallax main entry point.
//!
//! A sprite-sheet animation scene written in Rust using:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The window shows five parallax background layers scrolling behind a player
//! dog and a handful of wandering enemies.
//!
//! # Controls
//!
//! - `1`..`0` – select the player's animation state
//! - `Up` / `Down` – change the scroll speed
//! - `Space` – spawn a random enemy
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, request every bitmap
//! 2. Each window frame:
//!    - read the keyboard and queue scene commands
//!    - settle finished bitmap loads into GPU textures
//!    - fire the scene tick with the current time
//!    - replay the last composed frame
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --state run --speed 8
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;

use spriteparallax::components::creature::AnimationState;
use spriteparallax::error::SceneError;
use spriteparallax::game::SceneCompositor;
use spriteparallax::resources::gameconfig::GameConfig;
use spriteparallax::resources::input::InputState;
use spriteparallax::surface::{RaylibSurface, open_window};
use spriteparallax::systems::input::{apply_controls, update_input_state};

/// Sprite-sheet animation with parallax scrolling
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Initial player animation state.
    #[arg(long, value_enum)]
    state: Option<AnimationState>,

    /// Initial scroll speed (overrides the config file).
    #[arg(long, value_name = "N")]
    speed: Option<u32>,

    /// Number of enemies to spawn (overrides the config file).
    #[arg(long, value_name = "N")]
    enemies: Option<u32>,

    /// Seed for enemy placement and wandering.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write the effective configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn load_config(cli: &Cli) -> GameConfig {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(speed) = cli.speed {
        config.scroll_speed = speed.min(config.max_scroll_speed);
    }
    if let Some(enemies) = cli.enemies {
        config.enemy_count = enemies;
    }
    config
}

fn run(cli: Cli) -> Result<(), SceneError> {
    let config = load_config(&cli);

    if let Some(maybe_path) = cli.write_config {
        let mut out = config.clone();
        if let Some(path) = maybe_path {
            out.config_path = path;
        }
        out.save_to_file()?;
        println!("Config written to {}", out.config_path.display());
        return Ok(());
    }

    let (mut rl, thread) = open_window(&config)?;
    let assets_dir = config.assets_dir.clone();

    let mut scene = SceneCompositor::new(config)?;
    if let Some(seed) = cli.seed {
        scene = scene.with_seed(seed);
    }
    scene.load_default_assets(&assets_dir);
    scene.populate();
    if let Some(state) = cli.state {
        scene.select_state(state);
    }
    scene.start();

    let mut surface = RaylibSurface::new();
    let mut input = InputState::default();

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        update_input_state(&mut input, &rl);
        apply_controls(&mut scene, &input);

        {
            let mut decoder = surface.decoder(&mut rl, &thread);
            scene.pump_assets(&mut decoder);
        }

        scene.tick(rl.get_time() * 1000.0);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        surface.present(&mut d, scene.frame());
    }

    scene.stop();
    info!(
        "Bye! {} frames composed, {} textures uploaded",
        scene.frame().frames_drawn(),
        surface.texture_count()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
