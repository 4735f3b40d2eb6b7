use glam::Vec2;

/// A movement key, independent of physical layout.
///
/// The desktop app maps both WASD and the arrow keys onto these four
/// values; the game never sees scancodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

/// A device-independent input event.
///
/// The game consumes events drained from an [`InputQueue`], never raw
/// window callbacks. This keeps world logic identical between the
/// windowed app and headless tests.
///
/// [`InputQueue`]: crate::InputQueue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A movement key went down.
    KeyDown(MoveKey),
    /// A movement key was released.
    KeyUp(MoveKey),
    /// The pointer moved to a new position in screen coordinates.
    MouseMove(Vec2),
}
