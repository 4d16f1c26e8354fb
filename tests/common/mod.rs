//! Common test utilities and fixtures

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use strategy_resolver::{StrategyKind, StrategyParams};

/// Every discriminator value used across the built-in predicates, plus
/// values no predicate accepts
pub const ALPHAS: &[&str] = &["paper", "plastic", "metal", ""];
pub const BETAS: &[&str] = &[
    "quantity",
    "paper_quantity",
    "paper_weight",
    "weight",
    "Quantity",
    "",
];

/// The only (alpha, beta) pair each variant applies to
pub fn documented_pairs() -> Vec<(StrategyKind, &'static str, &'static str)> {
    vec![
        (StrategyKind::Quantity, "paper", "quantity"),
        (StrategyKind::PaperQuantity, "paper", "paper_quantity"),
        (StrategyKind::PaperWeight, "paper", "paper_weight"),
    ]
}

/// Sample order payload
pub fn sample_input() -> Value {
    json!({"quantity": 10})
}

/// Parameters satisfying every built-in variant at once
pub fn all_params() -> StrategyParams {
    StrategyParams::new()
        .with("quantity_type", "ream")
        .with("paper_quantity_type", "A4")
        .with("weight_type", "80gsm")
}

/// Run `f` with a thread-local subscriber and return everything it logged
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || LogSink(sink.clone()))
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

struct LogSink(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
