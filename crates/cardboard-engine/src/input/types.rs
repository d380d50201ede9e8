/// Key transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Down,
    Up,
}

/// Pointer (touch or mouse) transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MotionAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw input events delivered by the host.
///
/// Motion coordinates are in surface pixels of the first pointer; whole numbers
/// are pixels, fractions come from sub-pixel precise devices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        /// Stable platform key code.
        code: u32,
        action: KeyAction,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    Motion {
        action: MotionAction,
        x: f32,
        y: f32,
    },
}
