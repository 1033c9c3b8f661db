mod compose;
mod graphics;
mod offsets;
mod parts;
mod sprites;
mod state;
mod widget;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use druid::{AppLauncher, LocalizedString, WindowDesc};
use log::info;

use crate::sprites::PartSprites;
use crate::state::AppState;
use crate::widget::RobotWidget;

/// Animated robot demo: arrow keys move, W/S zoom, Space cycles the tint
/// color, left click walks the robot to the cursor, D toggles the debug
/// overlay, Q quits.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the six part textures (body.png, head.png,
    /// left_arm.png, right_arm.png, left_leg.png, right_leg.png)
    #[arg(long, default_value = "textures")]
    assets: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Window height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Start with the debug overlay enabled
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sprites = PartSprites::load(&args.assets)
        .with_context(|| format!("loading robot textures from {}", args.assets.display()))?;
    info!("loaded textures from {}", args.assets.display());

    let main_window = WindowDesc::new(RobotWidget::new(sprites))
        .title(LocalizedString::new("Animated Robot - Full Control"))
        .window_size((args.width, args.height))
        .resizable(false);

    let initial_state = AppState::new(args.width, args.height, args.debug);

    AppLauncher::with_window(main_window)
        .launch(initial_state)
        .map_err(|e| anyhow::anyhow!("failed to launch window: {e}"))?;

    Ok(())
}
