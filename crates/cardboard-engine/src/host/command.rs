/// Lifecycle commands delivered by the host, numbered as the native app glue
/// numbers them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    InputChanged,
    /// A window is available; get it ready.
    WindowReady,
    /// The window is being hidden or closed; release it.
    WindowGone,
    WindowResized,
    WindowRedrawNeeded,
    ContentRectChanged,
    FocusGained,
    FocusLost,
    ConfigChanged,
    LowMemory,
    Start,
    Resume,
    /// The host asks for the current state to be saved.
    SaveState,
    Pause,
    Stop,
    Destroy,
    /// Code not known to this build.
    Unknown(i32),
}

impl Command {
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Command::InputChanged,
            1 => Command::WindowReady,
            2 => Command::WindowGone,
            3 => Command::WindowResized,
            4 => Command::WindowRedrawNeeded,
            5 => Command::ContentRectChanged,
            6 => Command::FocusGained,
            7 => Command::FocusLost,
            8 => Command::ConfigChanged,
            9 => Command::LowMemory,
            10 => Command::Start,
            11 => Command::Resume,
            12 => Command::SaveState,
            13 => Command::Pause,
            14 => Command::Stop,
            15 => Command::Destroy,
            other => Command::Unknown(other),
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Command::InputChanged => 0,
            Command::WindowReady => 1,
            Command::WindowGone => 2,
            Command::WindowResized => 3,
            Command::WindowRedrawNeeded => 4,
            Command::ContentRectChanged => 5,
            Command::FocusGained => 6,
            Command::FocusLost => 7,
            Command::ConfigChanged => 8,
            Command::LowMemory => 9,
            Command::Start => 10,
            Command::Resume => 11,
            Command::SaveState => 12,
            Command::Pause => 13,
            Command::Stop => 14,
            Command::Destroy => 15,
            Command::Unknown(code) => code,
        }
    }
}
