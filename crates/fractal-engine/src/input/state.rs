use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Last known cursor position in physical pixels; `None` while outside.
    pub cursor_pos: Option<(f64, f64)>,

    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Folds `ev` into the held state and records it (plus transitions) in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events for keys held during focus loss never arrive.
                    for key in self.keys_down.drain() {
                        frame.keys_released.insert(key);
                    }
                }
            }

            InputEvent::CursorMoved { x, y } => {
                self.cursor_pos = Some((*x, *y));
            }

            InputEvent::CursorLeft => {
                self.cursor_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::MouseWheel(_) => {}
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_and_release_record_transitions() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, key(Key::W, KeyState::Pressed));
        assert!(s.key_down(Key::W));
        assert!(f.was_pressed(Key::W));

        f.clear();
        s.apply_event(&mut f, key(Key::W, KeyState::Released));
        assert!(!s.key_down(Key::W));
        assert!(f.keys_released.contains(&Key::W));
        assert!(!f.was_pressed(Key::W));
    }

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::A, KeyState::Pressed));
        f.clear();
        s.apply_event(&mut f, InputEvent::Key { key: Key::A, state: KeyState::Pressed, repeat: true });
        assert!(f.keys_pressed.is_empty());
        assert_eq!(f.events.len(), 1);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, InputEvent::Focused(true));
        s.apply_event(&mut f, key(Key::D, KeyState::Pressed));
        f.clear();

        s.apply_event(&mut f, InputEvent::Focused(false));
        assert!(!s.focused);
        assert!(s.keys_down.is_empty());
        assert!(f.keys_released.contains(&Key::D));
    }

    #[test]
    fn cursor_tracking() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, InputEvent::CursorMoved { x: 10.0, y: 20.0 });
        assert_eq!(s.cursor_pos, Some((10.0, 20.0)));
        s.apply_event(&mut f, InputEvent::CursorLeft);
        assert_eq!(s.cursor_pos, None);
        assert_eq!(f.events.len(), 2);
    }
}
