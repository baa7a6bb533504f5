//! Overlay runtime — readiness bootstrap, mutation observer, periodic sweep.
//!
//! The observer task is the primary strategy: it waits for the document to
//! become ready, runs the initial pass, and schedules a debounced re-pass
//! after every insert. The sweep task is an opt-in safety net that re-runs
//! the pass on a fixed interval.

mod observer;
mod sweep;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;
use wayaku_core::config::{OverlayConfig, SweepConfig};
use wayaku_core::table::TranslationTable;
use wayaku_dom::document::Document;

/// The localization overlay bound to one document.
pub struct Overlay {
    doc: Arc<Document>,
    table: Arc<TranslationTable>,
    overlay_config: OverlayConfig,
    sweep_config: SweepConfig,
}

impl Overlay {
    /// Create an overlay. Nothing runs until [`Overlay::start`].
    pub fn new(
        doc: Arc<Document>,
        table: Arc<TranslationTable>,
        overlay_config: OverlayConfig,
        sweep_config: SweepConfig,
    ) -> Self {
        Self {
            doc,
            table,
            overlay_config,
            sweep_config,
        }
    }

    /// Start the overlay tasks.
    ///
    /// The mutation subscription is opened here, before the observer waits
    /// for readiness, so an insert racing the initial pass still schedules
    /// a follow-up.
    pub fn start(&self) -> OverlayHandle {
        let mutations = self.doc.subscribe();
        let ready = self.doc.ready_changed();
        let debounce = Duration::from_millis(self.overlay_config.debounce_ms);

        let doc = self.doc.clone();
        let table = self.table.clone();
        let observer = tokio::spawn(async move {
            Self::observer_loop(doc, table, debounce, mutations, ready).await;
        });

        let sweep = if self.sweep_config.enabled {
            let doc = self.doc.clone();
            let table = self.table.clone();
            let interval = Duration::from_secs(self.sweep_config.interval_secs);
            Some(tokio::spawn(async move {
                Self::sweep_loop(doc, table, interval).await;
            }))
        } else {
            None
        };

        info!(
            "overlay: started | debounce: {}ms | sweep: {}",
            self.overlay_config.debounce_ms,
            if self.sweep_config.enabled { "on" } else { "off" },
        );
        OverlayHandle { observer, sweep }
    }

    /// Run until Ctrl-C, then stop every scheduled rewrite.
    pub async fn run(&self) -> anyhow::Result<()> {
        let handle = self.start();
        tokio::signal::ctrl_c().await?;
        info!("Received shutdown signal");
        handle.shutdown();
        Ok(())
    }
}

/// Handles of the running overlay tasks.
pub struct OverlayHandle {
    observer: JoinHandle<()>,
    sweep: Option<JoinHandle<()>>,
}

impl OverlayHandle {
    /// Abort the observer and sweep tasks. No further pass starts after
    /// this returns; a debounce window in flight dies at its sleep,
    /// though a pass already executing may finish.
    pub fn shutdown(&self) {
        self.observer.abort();
        if let Some(h) = &self.sweep {
            h.abort();
        }
        info!("overlay: stopped");
    }
}
