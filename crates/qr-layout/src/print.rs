use crate::session::PrintLayout;
use crate::types::{ImagePayload, Result};
use std::future::Future;

/// Something that can turn print markup into paper
///
/// The layout only builds the document; what happens to it afterwards
/// (native print dialog, file, network printer) is up to the implementor.
pub trait PrintDispatcher {
    fn dispatch(&self, html: String) -> impl Future<Output = Result<()>> + Send;
}

/// Render the print document for the current layout and hand it off
pub async fn print_layout<D: PrintDispatcher>(
    session: &PrintLayout,
    payload: &ImagePayload,
    dispatcher: &D,
) -> Result<()> {
    let html = session.print_document(payload);
    let layout = session.snapshot();
    log::info!(
        "Dispatching print: {}x{} at ({}, {})",
        layout.width,
        layout.height,
        layout.x,
        layout.y
    );
    dispatcher.dispatch(html).await
}
