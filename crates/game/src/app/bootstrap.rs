use std::env;
use std::path::Path;

use engine::{load_config, ConfigError, LoopConfig, Scene, CONFIG_ENV_VAR};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::demo_scene::DemoScene;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, ConfigError> {
    init_tracing();
    info!("=== SGE Startup ===");

    let config = resolve_config(env::var(CONFIG_ENV_VAR))?;
    let (surface_width, surface_height) = config.surface_size();
    info!(
        title = %config.title,
        width = config.width,
        height = config.height,
        scale = config.scale,
        surface_width,
        surface_height,
        vertical_sync = config.vertical_sync,
        show_frame_rate = config.show_frame_rate,
        "startup"
    );

    Ok(AppWiring {
        config,
        scene: Box::new(DemoScene::new()),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn resolve_config(raw_path: Result<String, env::VarError>) -> Result<LoopConfig, ConfigError> {
    match raw_path {
        Ok(path) => {
            info!(env_var = CONFIG_ENV_VAR, path = path.as_str(), "loading_config");
            load_config(Path::new(&path))
        }
        Err(env::VarError::NotPresent) => Ok(LoopConfig::default()),
        Err(err) => {
            warn!(
                env_var = CONFIG_ENV_VAR,
                error = %err,
                "unable to read config env var; falling back to defaults"
            );
            Ok(LoopConfig::default())
        }
    }
}
