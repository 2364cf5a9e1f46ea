use crate::api::UsersClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;
use tokio::runtime::Handle;

fn body_size(cols: u16, rows: u16) -> (u16, u16) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    (body.width.max(1), body.height.max(1))
}

/// Run the terminal UI until the operator quits.
///
/// The user fetch runs on `handle`; its result comes back through the event
/// channel so all state changes happen on this thread.
pub fn run(config: Config, handle: Handle) -> io::Result<()> {
    let client = UsersClient::new(config.api.users_url.clone())
        .map_err(|err| io::Error::other(err.to_string()))?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(&config.ui);
    let events = EventHandler::new(tick_rate);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        let (width, height) = body_size(cols, rows);
        app.on_resize(width, height);
    }

    app.start_fetch();
    let tx = events.sender();
    handle.spawn(async move {
        let result = client.get_users().await;
        // The receiver is gone only when the UI has already exited.
        let _ = tx.send(AppEvent::UsersLoaded(result));
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                let (width, height) = body_size(cols, rows);
                app.on_resize(width, height);
            }
            Ok(AppEvent::UsersLoaded(result)) => app.on_users_loaded(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Shutting down");
    drop(guard);
    Ok(())
}
