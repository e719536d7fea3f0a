use crate::commands::{CmdMessage, CmdResult};
use crate::search::QueryMatcher;

/// One-shot search: no debounce, just the matcher.
pub fn run(matcher: &QueryMatcher, query: &str) -> CmdResult {
    let results = matcher.find(query);
    let mut result = CmdResult::default();
    if !matcher.accepts(query) {
        result.add_message(CmdMessage::info(format!(
            "Type at least {} characters to search.",
            matcher.min_query_chars()
        )));
    } else if results.is_empty() {
        result.add_message(CmdMessage::info(format!("No results for \"{}\".", query)));
    }
    result.with_results(results)
}
