use qr_layout::{ImagePayload, PrintDispatcher, PrintLayout, UnitMode, print_layout};
use tokio::sync::mpsc;

use crate::{LayoutCommand, LayoutUpdate};

/// Worker task that owns the session and applies commands in order
///
/// Runs until every command sender is dropped, then hands the session back
/// so the host can inspect the final layout.
pub async fn worker_task<D: PrintDispatcher>(
    mut session: PrintLayout,
    payload: ImagePayload,
    dispatcher: D,
    mut command_rx: mpsc::UnboundedReceiver<LayoutCommand>,
    update_tx: mpsc::UnboundedSender<LayoutUpdate>,
) -> PrintLayout {
    while let Some(cmd) = command_rx.recv().await {
        process_command(
            cmd,
            &mut session,
            &payload,
            &dispatcher,
            &mut command_rx,
            &update_tx,
        )
        .await;
    }
    session
}

async fn process_command<D: PrintDispatcher>(
    cmd: LayoutCommand,
    session: &mut PrintLayout,
    payload: &ImagePayload,
    dispatcher: &D,
    command_rx: &mut mpsc::UnboundedReceiver<LayoutCommand>,
    update_tx: &mpsc::UnboundedSender<LayoutUpdate>,
) {
    match cmd {
        LayoutCommand::Touch(event) => {
            if session.handle_touch(&event).is_some() {
                send_layout(session, update_tx);
            }
        }
        LayoutCommand::Pinch(event) => {
            if session.handle_pinch(&event).is_some() {
                send_layout(session, update_tx);
            }
        }
        LayoutCommand::SetField { field, text } => {
            session.set_field_text(field, text);
            send_layout(session, update_tx);
        }
        LayoutCommand::SetEditMode { enabled } => {
            session.set_edit_mode(enabled);
            let _ = update_tx.send(LayoutUpdate::EditModeChanged { enabled });
        }
        LayoutCommand::RenderPreview => {
            // Only the newest preview matters; anything else queued behind
            // it is applied first so the preview reflects it
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let LayoutCommand::RenderPreview = next_cmd {
                    log::debug!("Discarding queued preview render, using newer request");
                } else {
                    Box::pin(process_command(
                        next_cmd,
                        session,
                        payload,
                        dispatcher,
                        command_rx,
                        update_tx,
                    ))
                    .await;
                }
            }

            let _ = update_tx.send(LayoutUpdate::DocumentRendered {
                mode: UnitMode::Pixels,
                html: session.preview_document(payload),
            });
        }
        LayoutCommand::RenderPrint => {
            let _ = update_tx.send(LayoutUpdate::DocumentRendered {
                mode: UnitMode::Percent,
                html: session.print_document(payload),
            });
        }
        LayoutCommand::Print => match print_layout(session, payload, dispatcher).await {
            Ok(()) => {
                let _ = update_tx.send(LayoutUpdate::Printed);
            }
            Err(e) => {
                log::error!("Print failed: {}", e);
                let _ = update_tx.send(LayoutUpdate::Error {
                    message: format!("Print failed: {}", e),
                });
            }
        },
    }
}

fn send_layout(session: &PrintLayout, update_tx: &mpsc::UnboundedSender<LayoutUpdate>) {
    let _ = update_tx.send(LayoutUpdate::LayoutChanged {
        layout: session.snapshot(),
    });
}
