//! Main TUI runner - terminal lifecycle and event loop

use ratatui::DefaultTerminal;
use youstream_api::{ApiClient, Backend};
use youstream_app::config::Settings;
use youstream_app::{signals, Engine};
use youstream_core::prelude::*;

use crate::{event, render, terminal};

/// Run the client against the backend named in `settings` until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let client = ApiClient::new(&settings.to_http_config())
        .with_context(|| format!("Failed to create client for {}", settings.api.base_url))?;
    debug!("HTTP client ready for {}", client.base_url());

    let mut engine = Engine::new(settings, client);
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop exited with error: {}", e);
    }
    result
}

/// Drain background results, draw, then wait briefly for input.
fn run_loop<B: Backend>(terminal: &mut DefaultTerminal, engine: &mut Engine<B>) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    info!("Quit requested, leaving event loop");
    Ok(())
}
