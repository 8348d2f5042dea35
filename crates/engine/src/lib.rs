pub mod app;

pub use app::{
    frame_rate, load_config, run_app, run_app_with_metrics, AppError, ButtonId, ConfigError,
    EdgeState, EngineLoop, FrameClock, GameWindow, InputSink, InputState, KeyId,
    KeyInputTracker, LoopConfig, LoopMetricsSnapshot, LoopState, MetricsHandle,
    PointerInputTracker, Scene, WindowError, WinitWindow, CONFIG_ENV_VAR, KEY_COUNT,
    POINTER_BUTTON_COUNT,
};
