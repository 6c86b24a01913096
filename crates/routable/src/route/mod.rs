/// Route module: pattern compilation and parameter handling
///
/// Pure functional components with no router state:
/// - `pattern` turns format strings into typed segments
/// - `params` extracts bindings and applies merge precedence

pub mod params;
pub mod pattern;

// Re-export commonly used types
pub use params::{extract, merge_params, query_params, Params};
pub use pattern::{classify_segment, compile, RoutePattern, Segment, PARAM_SIGIL};
