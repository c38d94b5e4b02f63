#[cfg(all(target_os = "linux", feature = "window"))]
pub mod x11;
#[cfg(all(target_os = "linux", feature = "window"))]
pub type WindowContext = x11::WindowContextX11;

use glam::IVec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    WindowSizeChange { size: IVec2 },
    KeyPress { key: Key, repeat: bool },
    KeyRelease { key: Key },
    WindowClose,
    Unknown,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Key {
    Escape,

    #[default]
    Unknown,
}

impl InputEvent {
    pub fn is_quit_request(&self) -> bool {
        matches!(self, InputEvent::WindowClose | InputEvent::KeyPress { key: Key::Escape, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_and_escape_request_quit() {
        assert!(InputEvent::WindowClose.is_quit_request());
        assert!(InputEvent::KeyPress { key: Key::Escape, repeat: false }.is_quit_request());
        assert!(InputEvent::KeyPress { key: Key::Escape, repeat: true }.is_quit_request());
    }

    #[test]
    fn other_events_do_not_request_quit() {
        assert!(!InputEvent::KeyRelease { key: Key::Escape }.is_quit_request());
        assert!(!InputEvent::KeyPress { key: Key::Unknown, repeat: false }.is_quit_request());
        assert!(!InputEvent::WindowSizeChange { size: IVec2::new(400, 400) }.is_quit_request());
        assert!(!InputEvent::Unknown.is_quit_request());
    }
}
