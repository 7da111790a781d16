mod args;
mod demo;
mod geometry;
mod pipeline;
mod shaders;
mod state;

use anyhow::Result;

use shuriken_engine::device::GpuInit;
use shuriken_engine::logging::{init_logging, LoggingConfig};
use shuriken_engine::window::{Runtime, RuntimeConfig};

use args::Args;
use demo::DemoApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = Args::from_env()?;
    let app = DemoApp::new(args.demo);

    let config = RuntimeConfig {
        title: app.config().title.to_string(),
        max_frames: args.frames,
        ..RuntimeConfig::default()
    };
    let gpu_init = GpuInit::default().with_depth(app.config().depth);

    log::info!("starting {} demo", args.demo);

    Runtime::run(config, gpu_init, app)
}
