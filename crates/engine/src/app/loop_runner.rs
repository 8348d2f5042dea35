use thiserror::Error;
use tracing::{info, warn};

use super::clock::{frame_rate, FrameClock};
use super::metrics::MetricsAccumulator;
use super::scene::SceneSlot;
use super::window::{GameWindow, WindowError, WinitWindow};
use super::{ConfigError, InputState, LoopConfig, MetricsHandle, Scene};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error("engine loop cannot start from state {0:?}")]
    AlreadyStarted(LoopState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Running,
    Terminated,
}

type PreUpdateHook = Box<dyn FnMut(&InputState)>;

/// Drives one scene against one window, one fixed-order iteration per frame.
pub struct EngineLoop<W: GameWindow> {
    state: LoopState,
    config: LoopConfig,
    window: Option<W>,
    scene: SceneSlot,
    input: InputState,
    clock: FrameClock,
    pre_update: Option<PreUpdateHook>,
    metrics: MetricsAccumulator,
    metrics_handle: MetricsHandle,
    last_applied_title: Option<String>,
    frame_count: u64,
}

impl<W: GameWindow> EngineLoop<W> {
    pub fn new(config: LoopConfig, scene: Box<dyn Scene>) -> Self {
        let metrics = MetricsAccumulator::new(config.metrics_log_interval());
        Self {
            state: LoopState::Uninitialized,
            config,
            window: None,
            scene: SceneSlot::new(scene),
            input: InputState::new(),
            clock: FrameClock::new(),
            pre_update: None,
            metrics,
            metrics_handle: MetricsHandle::default(),
            last_applied_title: None,
            frame_count: 0,
        }
    }

    pub fn with_metrics(mut self, metrics_handle: MetricsHandle) -> Self {
        self.metrics_handle = metrics_handle;
        self
    }

    /// Runs before every scene update with the input the scene will see.
    pub fn with_pre_update_hook(mut self, hook: impl FnMut(&InputState) + 'static) -> Self {
        self.pre_update = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    /// Opens the window and initializes the scene. Nothing is retained if the
    /// window cannot be opened.
    pub fn start<F>(&mut self, open_window: F) -> Result<(), AppError>
    where
        F: FnOnce(&LoopConfig) -> Result<W, WindowError>,
    {
        if self.state != LoopState::Uninitialized {
            return Err(AppError::AlreadyStarted(self.state));
        }
        self.config.validate()?;

        let mut window = open_window(&self.config)?;
        if self.config.visible {
            window.show();
        }
        self.window = Some(window);

        self.scene.init();
        self.scene.start();
        info!(scene = self.scene.name(), "scene_initialized");

        self.clock.mark_frame_now();
        self.clock.set_delta(0.0);
        self.state = LoopState::Running;
        info!(
            title = %self.config.title,
            show_frame_rate = self.config.show_frame_rate,
            metrics_log_interval_ms = self.config.metrics_log_interval_ms,
            "loop_started"
        );
        Ok(())
    }

    /// Runs one iteration, or terminates if the window asked to close.
    pub fn step(&mut self) -> LoopState {
        if self.state != LoopState::Running {
            return self.state;
        }
        let Some(window) = self.window.as_mut() else {
            self.terminate();
            return self.state;
        };
        if window.should_close() {
            self.terminate();
            return self.state;
        }

        window.clear(self.config.clear_color);

        if let Some(hook) = self.pre_update.as_mut() {
            hook(&self.input);
        }

        self.scene.update(self.clock.delta(), &self.input);

        self.input.end_frame();

        if let Err(error) = window.present() {
            warn!(error = %error, frame = self.frame_count, "present_failed");
        }

        // Events drained here are first seen by the next update.
        window.poll_events(&mut self.input);

        let delta = self.clock.mark_frame_now();
        self.frame_count = self.frame_count.saturating_add(1);
        self.record_metrics(delta);

        if self.config.show_frame_rate {
            self.apply_frame_rate_title(delta);
        }

        self.state
    }

    pub fn run(&mut self) {
        while self.step() == LoopState::Running {}
    }

    pub fn terminate(&mut self) {
        if self.state == LoopState::Terminated {
            return;
        }
        self.scene.stop();
        if let Some(window) = self.window.take() {
            window.destroy();
        }
        self.state = LoopState::Terminated;
        info!(frames = self.frame_count, "shutdown");
    }

    fn record_metrics(&mut self, delta: f32) {
        self.metrics.record_frame(delta);
        if let Some(snapshot) = self.metrics.maybe_snapshot() {
            self.metrics_handle.publish(snapshot);
            info!(
                fps = snapshot.fps,
                frame_time_ms = snapshot.frame_time_ms,
                frames = snapshot.frames,
                scene = self.scene.name(),
                "loop_metrics"
            );
        }
    }

    fn apply_frame_rate_title(&mut self, delta: f32) {
        let Some(fps) = frame_rate(delta) else {
            return;
        };
        let next_title = frame_rate_title(&self.config.title, fps);
        if self.last_applied_title.as_deref() == Some(next_title.as_str()) {
            return;
        }
        if let Some(window) = self.window.as_mut() {
            window.set_title(&next_title);
        }
        self.last_applied_title = Some(next_title);
    }
}

fn frame_rate_title(title: &str, fps: f32) -> String {
    format!("{title} | FPS: {fps:.0}")
}

pub fn run_app(config: LoopConfig, scene: Box<dyn Scene>) -> Result<(), AppError> {
    run_app_with_metrics(config, scene, MetricsHandle::default())
}

pub fn run_app_with_metrics(
    config: LoopConfig,
    scene: Box<dyn Scene>,
    metrics_handle: MetricsHandle,
) -> Result<(), AppError> {
    let mut engine = EngineLoop::<WinitWindow>::new(config, scene).with_metrics(metrics_handle);
    engine.start(WinitWindow::open)?;
    engine.run();
    Ok(())
}
