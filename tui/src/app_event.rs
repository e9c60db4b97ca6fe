use crossterm::event::KeyEvent;

/// Events delivered to the [`App`](crate::app::App) loop.
///
/// Key and resize events originate on the input thread; `ExitRequest` is sent
/// when the terminal's event stream ends so the UI shuts down instead of
/// spinning on a dead channel.
#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Resize(u16, u16),

    /// Request to exit the application gracefully.
    ExitRequest,
}
