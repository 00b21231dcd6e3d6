//! Brace expansion for folder path expressions
//!
//! `assets/{css,js}` becomes `assets/css` and `assets/js`. Only a single,
//! non-nested group is understood: the body runs from the first `{` to the
//! first `}` and is split naively on commas, so `a/{b,{c,d}}` or
//! `{a,b}/{c,d}` produce literal leftovers rather than a full cartesian
//! expansion. Anything without a well-formed group passes through untouched.

use tracing::debug;

/// Expand one path expression into the concrete paths it denotes
pub fn expand(expr: &str) -> Vec<String> {
    let (Some(open), Some(close)) = (expr.find('{'), expr.find('}')) else {
        return vec![expr.to_string()];
    };

    if close < open {
        debug!(expr, "expand: closing brace precedes opening brace, passing through");
        return vec![expr.to_string()];
    }

    let prefix = &expr[..open];
    let body = &expr[open + 1..close];
    let suffix = &expr[close + 1..];

    let expanded: Vec<String> = body
        .split(',')
        .map(|part| format!("{}{}{}", prefix, part.trim(), suffix))
        .collect();

    debug!(expr, count = expanded.len(), "expand: complete");
    expanded
}

/// Whether the expression contains a group `expand` would split
pub fn has_brace_group(expr: &str) -> bool {
    matches!((expr.find('{'), expr.find('}')), (Some(open), Some(close)) if open < close)
}
