//! # wayaku-dom
//!
//! In-memory document tree and page rewriter for the Wayaku overlay.

pub mod document;
pub mod node;
pub mod rewrite;

mod walk;
