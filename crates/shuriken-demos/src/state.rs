use shuriken_engine::input::{InputEvent, InputFrame, Key, KeyState};
use shuriken_engine::transform::{Camera, CameraCommand};

/// Mutable per-demo state, owned by the app and touched only on the frame loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    frame: u64,
    camera: Option<Camera>,
    /// Last pointer position, halved.
    pointer: Option<(f32, f32)>,
}

/// A state change produced from input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StateMessage {
    Camera(CameraCommand),
    Pointer { x: f32, y: f32 },
    PointerLeft,
    Exit,
}

impl AppState {
    pub fn new(camera: Option<Camera>) -> Self {
        Self { frame: 0, camera, pointer: None }
    }

    /// Counter value the next frame will render with.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns the current counter, then increments it.
    pub fn advance(&mut self) -> u64 {
        let frame = self.frame;
        self.frame = self.frame.wrapping_add(1);
        frame
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Applies one message. Returns `true` when the demo should stop.
    pub fn apply(&mut self, msg: StateMessage) -> bool {
        match msg {
            StateMessage::Camera(cmd) => {
                // Demos without a movable camera ignore movement keys.
                if let Some(camera) = &mut self.camera {
                    camera.apply(cmd);
                    log::debug!("camera eye now {}", camera.eye);
                }
            }
            StateMessage::Pointer { x, y } => {
                self.pointer = Some((x, y));
                log::trace!("pointer at ({x}, {y})");
            }
            StateMessage::PointerLeft => self.pointer = None,
            StateMessage::Exit => return true,
        }
        false
    }
}

/// Translates this frame's input events into state messages, in arrival order.
///
/// Held keys repeat: every press event, repeats included, moves the camera
/// once.
pub fn messages_from_input(frame: &InputFrame) -> Vec<StateMessage> {
    frame
        .events
        .iter()
        .filter_map(|ev| match ev {
            InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, .. } => {
                Some(StateMessage::Exit)
            }
            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                CameraCommand::from_key(*key).map(StateMessage::Camera)
            }
            InputEvent::PointerMoved(p) => Some(StateMessage::Pointer { x: p.x / 2.0, y: p.y / 2.0 }),
            InputEvent::PointerLeft => Some(StateMessage::PointerLeft),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use shuriken_engine::input::PointerMoveEvent;

    fn press(key: Key, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat }
    }

    fn frame_with(events: Vec<InputEvent>) -> InputFrame {
        let mut frame = InputFrame::default();
        for ev in events {
            frame.push_event(ev);
        }
        frame
    }

    fn apply_all(state: &mut AppState, frame: &InputFrame) -> bool {
        messages_from_input(frame).into_iter().any(|m| state.apply(m))
    }

    // ── counter ───────────────────────────────────────────────────────────

    #[test]
    fn advance_post_increments() {
        let mut state = AppState::new(None);
        assert_eq!(state.advance(), 0);
        assert_eq!(state.advance(), 1);
        assert_eq!(state.frame(), 2);
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn one_forward_press_moves_eye_half_a_unit() {
        let mut state = AppState::new(Some(Camera::looking_at_origin(Vec3::new(0.0, 0.0, 5.0))));
        assert!(!apply_all(&mut state, &frame_with(vec![press(Key::W, false)])));
        assert_eq!(state.camera().unwrap().eye.z, 4.5);
    }

    #[test]
    fn repeats_count_and_releases_do_not() {
        let mut state = AppState::new(Some(Camera::looking_at_origin(Vec3::new(0.0, 0.0, 5.0))));
        let frame = frame_with(vec![
            press(Key::D, false),
            press(Key::D, true),
            InputEvent::Key { key: Key::D, state: KeyState::Released, repeat: false },
        ]);
        apply_all(&mut state, &frame);
        assert_eq!(state.camera().unwrap().eye.x, 1.0);
    }

    #[test]
    fn movement_without_camera_is_ignored() {
        let mut state = AppState::new(None);
        apply_all(&mut state, &frame_with(vec![press(Key::W, false)]));
        assert_eq!(state, AppState::new(None));
    }

    // ── pointer / exit ────────────────────────────────────────────────────

    #[test]
    fn pointer_is_halved() {
        let mut state = AppState::new(None);
        let moved = InputEvent::PointerMoved(PointerMoveEvent { x: 300.0, y: 101.0 });
        apply_all(&mut state, &frame_with(vec![moved]));
        assert_eq!(state.pointer(), Some((150.0, 50.5)));

        apply_all(&mut state, &frame_with(vec![InputEvent::PointerLeft]));
        assert_eq!(state.pointer(), None);
    }

    #[test]
    fn escape_requests_exit() {
        let mut state = AppState::new(None);
        assert!(apply_all(&mut state, &frame_with(vec![press(Key::Escape, false)])));
    }
}
