//! Dotted-call normalization.
//!
//! Rewrites `Kind.action(args)` into the canonical shell-style form
//! `action Kind args...` consumed by the dispatcher. Lines that do not
//! match the dotted-call shape pass through unchanged, and malformed
//! argument lists degrade to whatever tokens could be derived — this
//! step never errors.

use crate::tokenizer::split;

/// Normalizes one raw input line.
///
/// Recognized shape: `<Kind>.<action>(<argList>)` where `argList` is a
/// comma-separated list of scalar tokens, or an optional identity token
/// followed by a single `{...}` object literal. The literal's single
/// quotes are rewritten to double quotes and it is carried onward as
/// one quoted argument, so it survives tokenization as valid JSON text.
#[must_use]
pub fn normalize(line: &str) -> String {
    let trimmed = line.trim();

    // First parenthesized group, non-greedy: first '(' to the first ')'.
    let Some(open) = trimmed.find('(') else {
        return trimmed.to_string();
    };
    let Some(close) = trimmed[open..].find(')').map(|i| open + i) else {
        return trimmed.to_string();
    };

    // The head before the parenthesis must be a single Kind.action token.
    let Some(target) = split(&trimmed[..open]).into_iter().next() else {
        return trimmed.to_string();
    };
    let mut pieces = target.splitn(3, '.');
    let (Some(kind), Some(action), None) = (pieces.next(), pieces.next(), pieces.next()) else {
        return trimmed.to_string();
    };
    if kind.is_empty() || action.is_empty() {
        return trimmed.to_string();
    }

    let params = &trimmed[open + 1..close];
    let args = rewrite_params(params);
    format!("{action} {kind} {args}").trim_end().to_string()
}

/// Rewrites a parenthesized argument list into space-separated form.
fn rewrite_params(params: &str) -> String {
    // A brace-delimited object literal takes over the whole tail: the
    // optional identity token before it is kept, the literal becomes a
    // single quoted JSON argument.
    if let Some(brace_open) = params.find('{') {
        if let Some(brace_close) = params[brace_open..].find('}').map(|i| brace_open + i) {
            let literal = params[brace_open..=brace_close].replace('\'', "\"");
            let id = split(&params[..brace_open])
                .into_iter()
                .next()
                .map(|token| token.trim_matches(',').to_string())
                .unwrap_or_default();
            return format!("{id} '{literal}'").trim_start().to_string();
        }
    }

    params
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
