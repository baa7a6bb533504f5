//! Demo page — a small English dashboard tree for the overlay to localize.
//!
//! `wayaku run` builds this page, starts the overlay against it, and then
//! replays a scripted lifecycle: deferred readiness, a toast insertion, an
//! empty-state row. Each overlay trigger can be watched in the logs.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use wayaku_core::error::WayakuError;
use wayaku_dom::document::Document;
use wayaku_dom::node::NodeId;

/// Build the sample dashboard: sidebar navigation plus a key-table pane.
/// Every label starts in English.
pub fn sample_page(doc: &Document) -> Result<(), WayakuError> {
    let root = doc.root();

    let nav = doc.create_element("nav");
    doc.append_child(root, nav)?;
    for label in crate::menu::english_labels() {
        leaf(doc, nav, "li", label)?;
    }

    let main = doc.create_element("main");
    doc.append_child(root, main)?;
    leaf(doc, main, "button", "Create New Key")?;

    let table = doc.create_element("table");
    doc.append_child(main, table)?;
    let header = doc.create_element("tr");
    doc.append_child(table, header)?;
    for column in [
        "Key ID",
        "Key Alias",
        "Secret Key",
        "Created At",
        "Expires",
        "Spend (USD)",
    ] {
        leaf(doc, header, "th", column)?;
    }

    let row = doc.create_element("tr");
    doc.append_child(table, row)?;
    leaf(doc, row, "td", "a1b2c3d4")?;
    // Key alias set by the user, not a UI string.
    leaf(doc, row, "td", "Acme Corp Production")?;
    leaf(doc, row, "td", "sk-...9f3e")?;
    leaf(doc, row, "td", "2025-11-02 14:31")?;
    leaf(doc, row, "td", "Never")?;
    leaf(doc, row, "td", "12.48")?;

    let row = doc.create_element("tr");
    doc.append_child(table, row)?;
    leaf(doc, row, "td", "e5f6a7b8")?;
    leaf(doc, row, "td", "No alias set")?;
    leaf(doc, row, "td", "sk-...77c1")?;
    leaf(doc, row, "td", "2025-11-04 09:12")?;
    leaf(doc, row, "td", "2026-02-01 00:00")?;
    leaf(doc, row, "td", "0.00")?;

    let footer = doc.create_element("footer");
    doc.append_child(main, footer)?;
    for fragment in ["Showing", "1-2", "of", "2", "results", "Previous", "Next"] {
        leaf(doc, footer, "span", fragment)?;
    }

    Ok(())
}

/// Replay the page lifecycle against a running overlay.
pub async fn drive(doc: Arc<Document>) {
    tokio::time::sleep(Duration::from_millis(300)).await;
    info!("demo: document finished loading");
    doc.mark_ready();

    tokio::time::sleep(Duration::from_secs(2)).await;
    info!("demo: inserting clipboard toast");
    if let Err(e) = insert_toast(&doc) {
        warn!("demo: toast insert failed: {e}");
    }

    tokio::time::sleep(Duration::from_secs(2)).await;
    info!("demo: key table emptied");
    if let Err(e) = insert_empty_state(&doc) {
        warn!("demo: empty-state insert failed: {e}");
    }

    tokio::time::sleep(Duration::from_secs(1)).await;
    println!("{}", doc.render(doc.root()));
    info!("demo: lifecycle complete, press Ctrl-C to stop");
}

fn insert_toast(doc: &Document) -> Result<(), WayakuError> {
    let toast = doc.create_element("div");
    let text = doc.create_text("API Key copied to clipboard");
    doc.append_child(toast, text)?;
    doc.append_child(doc.root(), toast)
}

fn insert_empty_state(doc: &Document) -> Result<(), WayakuError> {
    let parent = pane(doc).unwrap_or(doc.root());
    let row = doc.create_element("tr");
    let text = doc.create_text("No data");
    doc.append_child(row, text)?;
    doc.append_child(parent, row)
}

/// The `main` pane of the sample page, when present.
fn pane(doc: &Document) -> Option<NodeId> {
    doc.children(doc.root())
        .into_iter()
        .find(|&id| doc.tag(id).as_deref() == Some("main"))
}

fn leaf(doc: &Document, parent: NodeId, tag: &str, content: &str) -> Result<(), WayakuError> {
    let element = doc.create_element(tag);
    let text = doc.create_text(content);
    doc.append_child(element, text)?;
    doc.append_child(parent, element)
}
