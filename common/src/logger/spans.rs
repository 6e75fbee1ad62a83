use tracing::{Level, Span};

use super::TraceId;

/// Root span for one user-triggered operation (a voice capture, a
/// cache install, ...). Children inherit the trace_id automatically.
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::span!(
        Level::INFO,
        "op",
        op = name,
        trace_id = %trace_id
    )
}
