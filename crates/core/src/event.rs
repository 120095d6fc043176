/// All messages that can flow through the dashboard's update loop.
///
/// Sources:
/// - Timer subscription      → `Tick`
/// - Icon cells              → `Launch`
/// - Window background       → `DragStart`
/// - Stylesheet watcher task → `ThemeReloaded`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// One-second timer tick, drives the stats publisher.
    Tick,
    /// User pressed the icon at this layout index.
    Launch(usize),
    /// User pressed the window background; start a native window move.
    DragStart,
    /// Stylesheet changed on disk.
    ThemeReloaded,
}
