#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // User Input
    Quit,
    TogglePlayPause,
    VolumeUp,
    VolumeDown,
    SeekForward,
    SeekBackward,
    ToggleMute,

    // Grid
    Move(NavDirection),
    PlaySelected,
    PlayIndex(usize),

    // Progress bar click, fraction of the bar width
    SeekTo(f64),
}
