use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use player_overlay::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    player_overlay::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(?config, "Starting overlay");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
