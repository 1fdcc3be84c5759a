#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Landfall experience.

mod config;
mod session;

use std::{env, io};

use anyhow::Result;
use clap::Parser;
use landfall_core::{Intent, SCREEN_HEIGHT, SCREEN_WIDTH};
use landfall_rendering::{
    HeadlessBackend, KeyStream, Presentation, RenderingBackend, Scene, ScriptedInput, TextSink,
};
use landfall_rendering_macroquad::MacroquadBackend;
use landfall_system_bootstrap::Bootstrap;
use landfall_world::{query, World};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use self::{
    config::{Args, LaunchConfig, Settings},
    session::Session,
};

/// Filter used when `RUST_LOG` names no directives.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Builds the log filter from `RUST_LOG` directives, falling back to info.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LOG_LEVEL.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Entry point for the Landfall command-line interface.
fn main() -> Result<()> {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let file = match args.config.as_deref() {
        Some(path) => LaunchConfig::load(path)?,
        None => LaunchConfig::default(),
    };
    let settings = Settings::resolve(args, file, rand::random::<u64>);

    let world = World::with_seed(settings.seed);
    let bootstrap = Bootstrap;
    println!("{}", bootstrap.welcome_banner(&world));
    info!(
        seed = bootstrap.seed(&world),
        levels = query::level_count(&world),
        "starting session"
    );

    let mut session = Session::new(world);
    let presentation = Presentation::new(
        settings.window_title,
        settings.cell_size,
        settings.fullscreen,
        session.scene(),
    )?;
    let update_scene = move |intent: Intent, scene: &mut Scene| {
        let flow = session.advance(intent);
        *scene = session.scene();
        flow
    };

    if settings.headless {
        let sink = TextSink::new(io::stdout().lock(), SCREEN_WIDTH, SCREEN_HEIGHT);
        match settings.script {
            Some(script) => {
                let input = ScriptedInput::parse(&script)?;
                HeadlessBackend::new(input, sink).run(presentation, update_scene)
            }
            None => {
                let input = KeyStream::new(io::stdin().lock());
                HeadlessBackend::new(input, sink).run(presentation, update_scene)
            }
        }
    } else {
        MacroquadBackend::new()
            .with_vsync(true)
            .run(presentation, update_scene)
    }
}
