//! Mutation observer loop — debounced re-pass after inserts.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};
use wayaku_core::table::TranslationTable;
use wayaku_dom::document::{Document, Mutation};
use wayaku_dom::rewrite::rewrite_page;

use super::Overlay;

impl Overlay {
    /// Background task: readiness bootstrap, then debounced re-passes.
    ///
    /// Each insert starts a debounce window; everything that queues up
    /// inside the window is folded into a single pass. Removals carry no
    /// new text and schedule nothing. A lagged subscription re-converges
    /// with a catch-up pass since the pass always covers the whole tree.
    pub(super) async fn observer_loop(
        doc: Arc<Document>,
        table: Arc<TranslationTable>,
        debounce: Duration,
        mut mutations: broadcast::Receiver<Mutation>,
        mut ready: watch::Receiver<bool>,
    ) {
        if ready.wait_for(|loaded| *loaded).await.is_err() {
            info!("observer: readiness channel closed, stopping");
            return;
        }
        let outcome = rewrite_page(&doc, &table);
        info!(
            "overlay: initial pass rewrote {} of {} text leaves",
            outcome.rewritten, outcome.scanned
        );

        loop {
            match mutations.recv().await {
                Ok(Mutation::ChildAdded { .. }) => {}
                Ok(Mutation::ChildRemoved { .. }) => {
                    debug!("observer: removal noted, no rewrite needed");
                    continue;
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!("observer: lagged behind {missed} mutations, running a catch-up pass");
                }
                Err(RecvError::Closed) => {
                    info!("observer: mutation channel closed, stopping");
                    break;
                }
            }

            tokio::time::sleep(debounce).await;
            loop {
                match mutations.try_recv() {
                    Ok(_) => {}
                    Err(TryRecvError::Lagged(_)) => {}
                    Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                }
            }

            let outcome = rewrite_page(&doc, &table);
            if outcome.rewritten > 0 {
                info!("observer: rewrote {} text leaves", outcome.rewritten);
            } else {
                debug!("observer: pass rewrote nothing");
            }
        }
    }
}
