use crate::ui::tui::Tui;

/// Leaves the alternate screen before the default hook prints, otherwise the
/// panic message is lost with the raw-mode terminal.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = Tui::restore() {
            tracing::error!(error = %e, "terminal_restore_failed");
        }
        tracing::error!(panic = %panic_info, "panic");
        hook(panic_info);
    }));
}
