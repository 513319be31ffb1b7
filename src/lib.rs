#![doc(test(attr(deny(warnings))))]

//! Tally Core is a running-total ledger: it parses free-form "category: amount"
//! lines, fuzzy-merges near-duplicate category labels, and accumulates signed
//! totals per category with exact undo of the last submitted batch.

pub mod errors;
pub mod ledger;
pub mod matching;
pub mod parse;
pub mod resolve;
pub mod utils;

pub use errors::{LedgerError, SubmitError, UndoError};
pub use ledger::{CategoryTotal, Delta, Ledger, Snapshot};
pub use parse::{parse_line, ParsedEntry};
pub use resolve::{resolve_category, resolve_category_with_threshold, SIMILARITY_THRESHOLD};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally Core tracing initialized.");
    });
}
