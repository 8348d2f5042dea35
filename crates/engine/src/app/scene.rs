use tracing::{debug, warn};

use super::InputState;

/// A unit of game logic driven by the engine loop.
///
/// `init` runs exactly once before the first `update`; `update` runs once per
/// loop iteration and must tolerate `delta_seconds == 0.0`.
pub trait Scene {
    fn init(&mut self);
    fn update(&mut self, delta_seconds: f32, input: &InputState);
    fn start(&mut self) {}
    fn stop(&mut self) {}
    fn name(&self) -> &str {
        "scene"
    }
}

/// Owns the single active scene and enforces its lifecycle ordering.
pub(crate) struct SceneSlot {
    scene: Box<dyn Scene>,
    is_initialized: bool,
    is_active: bool,
}

impl SceneSlot {
    pub(crate) fn new(scene: Box<dyn Scene>) -> Self {
        Self {
            scene,
            is_initialized: false,
            is_active: false,
        }
    }

    pub(crate) fn name(&self) -> &str {
        self.scene.name()
    }

    /// Returns false if the scene was already initialized.
    pub(crate) fn init(&mut self) -> bool {
        if self.is_initialized {
            warn!(scene = self.scene.name(), "scene_init_repeated");
            return false;
        }
        self.scene.init();
        self.is_initialized = true;
        true
    }

    pub(crate) fn start(&mut self) {
        if self.is_active {
            return;
        }
        self.scene.start();
        self.is_active = true;
        debug!(scene = self.scene.name(), "scene_started");
    }

    pub(crate) fn stop(&mut self) {
        if !self.is_active {
            return;
        }
        self.scene.stop();
        self.is_active = false;
        debug!(scene = self.scene.name(), "scene_stopped");
    }

    pub(crate) fn update(&mut self, delta_seconds: f32, input: &InputState) {
        if !self.is_initialized {
            return;
        }
        self.scene.update(delta_seconds, input);
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.is_active
    }
}
