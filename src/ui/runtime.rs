use crate::api::UsersApi;
use crate::config::Config;
use crate::effects::{Runtime, RuntimeHandles};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Runs the console until the user quits.
///
/// The users runtime lives on its own task; this loop only redraws and
/// forwards terminal input, store snapshots and notices into [`App`].
pub async fn run(config: Config, api: Arc<dyn UsersApi>, start: Route) -> anyhow::Result<()> {
    let RuntimeHandles {
        dispatcher,
        mut state,
        mut notices,
        task,
    } = Runtime::spawn(api, config.timing.clone());

    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(config.ui.tick_rate());
    let mut app = App::new(
        dispatcher,
        events.sender(),
        &config.timing,
        config.ui.toast_duration(),
    );
    info!(route = %start, "console started");
    app.navigate(start);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Tick) => app.on_tick(Instant::now()),
                Some(AppEvent::Resize) => {}
                Some(AppEvent::Navigate(route)) => app.navigate(route),
                None => break,
            },
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = state.borrow_and_update().clone();
                app.on_state(snapshot);
            }
            Some(notice) = notices.recv() => app.on_notice(notice),
            else => break,
        }
    }

    // Dropping the app drops the last dispatcher, which stops the runtime.
    drop(app);
    let _ = task.await;
    drop(guard);
    info!("console stopped");
    Ok(())
}
