/// Scriptly system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of autocomplete suggestions returned per call.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum partial-query length before suggestions are computed.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Execution time at or below which a script counts as fast enough
/// for an urgent situation (seconds).
pub const FAST_EXECUTION_SECS: u32 = 60;

/// Sort sentinel for records without an execution time: they order
/// after every record that declares one.
pub const EXECUTION_TIME_SENTINEL_SECS: u32 = u32::MAX;
