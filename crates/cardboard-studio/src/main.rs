use std::path::PathBuf;

use anyhow::Result;
use cardboard_engine::bridge::{load_asset, DirAssetManager};
use cardboard_engine::core::{Engine, EngineConfig};
use cardboard_engine::device::WgpuRenderer;
use cardboard_engine::logging::{init_logging, LoggingConfig};
use cardboard_engine::scheduler::FrameScheduler;
use cardboard_engine::sensor::{NoSensors, SensorMonitor, LOOPER_ID_USER};
use cardboard_engine::window::{RuntimeConfig, WinitHost};

const SPLASH_ASSET: &str = "splash.txt";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut host = WinitHost::new(RuntimeConfig {
        title: "Cardboard Studio".to_string(),
        state_path: Some(PathBuf::from("cardboard.state")),
        ..Default::default()
    })?;

    let assets = DirAssetManager::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));
    match load_asset(&assets, SPLASH_ASSET) {
        Ok(bytes) => log::info!("loaded {SPLASH_ASSET} ({} bytes)", bytes.len()),
        Err(e) => log::warn!("{e}"),
    }

    let config = EngineConfig {
        animate_on_focus: true,
        report_fps: true,
        ..Default::default()
    };
    // Desktop hosts have no motion sensors; the stream stays empty.
    let sensors = SensorMonitor::new(&NoSensors, config.sensor_kind, LOOPER_ID_USER);
    let mut engine = Engine::new(
        config,
        WgpuRenderer::default(),
        sensors,
        host.restored_state(),
    );

    FrameScheduler::new().run(&mut host, &mut engine);

    host.persist_saved_state()
}
