//! Terminal setup and restoration

use youstream_core::prelude::*;

/// Restore the terminal before the default panic output is printed, so the
/// message is readable and the shell is left usable.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
