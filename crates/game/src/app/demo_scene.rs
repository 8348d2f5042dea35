use engine::app::{BUTTON_LEFT, KEY_ESCAPE, KEY_SPACE};
use engine::{InputState, Scene};
use tracing::{debug, info};

const STATUS_LOG_INTERVAL_SECONDS: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
enum DemoEvent {
    SpacePressed,
    SpaceHeld,
    SpaceReleased,
    EscapeReleased,
    Dragged { dx: f64, dy: f64 },
    Scrolled { dx: f64, dy: f64 },
    LeftClickReleased { x: f64, y: f64 },
}

/// Logs what the input trackers report each frame.
pub(crate) struct DemoScene {
    space_was_pressed: bool,
    space_was_held: bool,
    elapsed_seconds: f32,
    since_status_seconds: f32,
    frames: u64,
}

impl DemoScene {
    pub(crate) fn new() -> Self {
        Self {
            space_was_pressed: false,
            space_was_held: false,
            elapsed_seconds: 0.0,
            since_status_seconds: 0.0,
            frames: 0,
        }
    }

    fn observe(&mut self, input: &InputState) -> Vec<DemoEvent> {
        let keys = input.keys();
        let pointer = input.pointer();
        let mut events = Vec::new();

        let space_pressed = keys.is_pressed(KEY_SPACE);
        let space_held = keys.is_held(KEY_SPACE);
        if space_pressed && !self.space_was_pressed {
            events.push(DemoEvent::SpacePressed);
        }
        if space_held && !self.space_was_held {
            events.push(DemoEvent::SpaceHeld);
        }
        if keys.is_released(KEY_SPACE) {
            events.push(DemoEvent::SpaceReleased);
        }
        self.space_was_pressed = space_pressed;
        self.space_was_held = space_held;

        if keys.is_released(KEY_ESCAPE) {
            events.push(DemoEvent::EscapeReleased);
        }

        let (dx, dy) = pointer.position_delta();
        if pointer.is_dragging() && (dx != 0.0 || dy != 0.0) {
            events.push(DemoEvent::Dragged { dx, dy });
        }

        let (scroll_x, scroll_y) = pointer.scroll();
        if scroll_x != 0.0 || scroll_y != 0.0 {
            events.push(DemoEvent::Scrolled {
                dx: scroll_x,
                dy: scroll_y,
            });
        }

        if pointer.is_button_released(BUTTON_LEFT) {
            events.push(DemoEvent::LeftClickReleased {
                x: pointer.x(),
                y: pointer.y(),
            });
        }

        events
    }

    fn advance_time(&mut self, delta_seconds: f32) -> bool {
        self.frames = self.frames.saturating_add(1);
        self.elapsed_seconds += delta_seconds;
        self.since_status_seconds += delta_seconds;
        if self.since_status_seconds < STATUS_LOG_INTERVAL_SECONDS {
            return false;
        }
        self.since_status_seconds = 0.0;
        true
    }
}

impl Scene for DemoScene {
    fn init(&mut self) {
        info!(scene = self.name(), "demo_scene_init");
    }

    fn update(&mut self, delta_seconds: f32, input: &InputState) {
        if self.advance_time(delta_seconds) {
            info!(
                elapsed_seconds = self.elapsed_seconds,
                frames = self.frames,
                "demo_status"
            );
        }

        for event in self.observe(input) {
            match event {
                DemoEvent::SpacePressed => info!("space_pressed"),
                DemoEvent::SpaceHeld => info!("space_held"),
                DemoEvent::SpaceReleased => info!("space_released"),
                DemoEvent::EscapeReleased => info!("escape_released"),
                DemoEvent::Dragged { dx, dy } => debug!(dx, dy, "pointer_dragged"),
                DemoEvent::Scrolled { dx, dy } => info!(dx, dy, "pointer_scrolled"),
                DemoEvent::LeftClickReleased { x, y } => info!(x, y, "left_click_released"),
            }
        }
    }

    fn start(&mut self) {
        debug!(scene = self.name(), "demo_scene_start");
    }

    fn stop(&mut self) {
        info!(
            scene = self.name(),
            elapsed_seconds = self.elapsed_seconds,
            frames = self.frames,
            "demo_scene_stop"
        );
    }

    fn name(&self) -> &str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use engine::InputSink;

    use super::*;

    #[test]
    fn space_press_is_reported_once_then_held_then_released() {
        let mut scene = DemoScene::new();
        let mut input = InputState::new();

        input.on_key(KEY_SPACE, true);
        assert_eq!(scene.observe(&input), vec![DemoEvent::SpacePressed]);
        input.end_frame();
        assert!(scene.observe(&input).is_empty());

        input.on_key(KEY_SPACE, true);
        assert_eq!(scene.observe(&input), vec![DemoEvent::SpaceHeld]);
        input.end_frame();

        input.on_key(KEY_SPACE, false);
        assert_eq!(scene.observe(&input), vec![DemoEvent::SpaceReleased]);
        input.end_frame();
        assert!(scene.observe(&input).is_empty());
    }

    #[test]
    fn drag_and_scroll_are_reported() {
        let mut scene = DemoScene::new();
        let mut input = InputState::new();

        input.on_pointer_button(BUTTON_LEFT, true);
        input.on_pointer_move(10.0, 4.0);
        input.on_scroll(0.0, 2.0);

        assert_eq!(
            scene.observe(&input),
            vec![
                DemoEvent::Dragged {
                    dx: -10.0,
                    dy: -4.0
                },
                DemoEvent::Scrolled { dx: 0.0, dy: 2.0 },
            ]
        );

        input.end_frame();
        input.on_pointer_button(BUTTON_LEFT, false);
        assert_eq!(
            scene.observe(&input),
            vec![DemoEvent::LeftClickReleased { x: 10.0, y: 4.0 }]
        );
    }

    #[test]
    fn status_is_due_every_interval_and_zero_delta_is_tolerated() {
        let mut scene = DemoScene::new();
        assert!(!scene.advance_time(0.0));
        assert!(!scene.advance_time(4.0));
        assert!(scene.advance_time(1.0));
        assert!(!scene.advance_time(1.0));
        assert_eq!(scene.frames, 4);
        assert!((scene.elapsed_seconds - 6.0).abs() < f32::EPSILON);
    }

    #[test]
    fn update_runs_with_empty_input() {
        let mut scene = DemoScene::new();
        scene.init();
        scene.update(0.0, &InputState::new());
        scene.update(0.016, &InputState::new());
        assert_eq!(scene.frames, 2);
    }
}
