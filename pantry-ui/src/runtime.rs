//! Event loop
//!
//! Runs on a single thread. UI events and request outcomes are funneled
//! through one loop and handed to [`App::handle`] one at a time. A generate
//! request runs as its own task; the loop keeps serving UI events while it is
//! outstanding and picks up its outcome as a [`AppEvent::RequestSettled`].
//!
//! When the UI event source closes, an outstanding request is still awaited
//! so that its outcome is rendered before the loop returns.

use crate::app::{App, Effect, View};
use crate::client::{GenerateError, RecipeService};
use crate::events::{AppEvent, UiEvent};
use pantry_common::api::Recipe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Drive `app` until the UI source closes; returns the view
pub async fn run<V: View>(
    mut app: App,
    service: Arc<dyn RecipeService>,
    mut view: V,
    mut ui_events: mpsc::Receiver<UiEvent>,
) -> V {
    let (settled_tx, mut settled_rx) = mpsc::channel::<Result<Vec<Recipe>, GenerateError>>(1);
    let mut ui_open = true;

    app.render_all(&mut view);

    loop {
        if !ui_open {
            if !app.is_loading() {
                break;
            }
            info!("Waiting for outstanding recipe request before exit");
        }

        let event = tokio::select! {
            Some(result) = settled_rx.recv() => AppEvent::RequestSettled(result),
            ui = ui_events.recv(), if ui_open => match ui {
                Some(event) => AppEvent::Ui(event),
                None => {
                    debug!("UI event source closed");
                    ui_open = false;
                    continue;
                }
            },
            else => break,
        };

        if let Some(Effect::Generate(request)) = app.handle(event, &mut view) {
            let service = Arc::clone(&service);
            let settled_tx = settled_tx.clone();
            tokio::spawn(async move {
                let result = service.generate(&request).await;
                // Receiver only goes away when the loop has already exited
                let _ = settled_tx.send(result).await;
            });
        }
    }

    view
}
