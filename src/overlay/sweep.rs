//! Periodic sweep loop — fixed-interval full re-pass.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use wayaku_core::table::TranslationTable;
use wayaku_dom::document::Document;
use wayaku_dom::rewrite::rewrite_page;

use super::Overlay;

impl Overlay {
    /// Background task: full re-pass on a fixed interval.
    ///
    /// An opt-in safety net for changes the observer cannot see, such as
    /// direct text edits. Ticks are skipped until the document is ready.
    pub(super) async fn sweep_loop(
        doc: Arc<Document>,
        table: Arc<TranslationTable>,
        interval: Duration,
    ) {
        loop {
            tokio::time::sleep(interval).await;

            if !doc.is_ready() {
                debug!("sweep: document not ready, skipping");
                continue;
            }

            let outcome = rewrite_page(&doc, &table);
            if outcome.rewritten > 0 {
                info!("sweep: rewrote {} text leaves", outcome.rewritten);
            } else {
                debug!("sweep: nothing to rewrite");
            }
        }
    }
}
