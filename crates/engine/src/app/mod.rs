mod clock;
mod config;
mod input;
mod keyboard;
mod loop_runner;
mod metrics;
mod pointer;
mod scene;
mod window;

pub use clock::{frame_rate, FrameClock};
pub use config::{load_config, ConfigError, LoopConfig, CONFIG_ENV_VAR};
pub use input::{EdgeState, InputSink, InputState};
pub use keyboard::*;
pub use loop_runner::{run_app, run_app_with_metrics, AppError, EngineLoop, LoopState};
pub use metrics::{LoopMetricsSnapshot, MetricsHandle};
pub use pointer::*;
pub use scene::Scene;
pub use window::{button_id, key_id, scroll_offsets, GameWindow, WindowError, WinitWindow};
