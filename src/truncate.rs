//! Shortening of oversized assertion failure explanations

use crate::ci::{ci_marker_present, running_on_ci};
use crate::config::RunOptions;

/// Character budget applied when the caller does not supply one: eight
/// 80-column lines.
pub const DEFAULT_TRUNCATION_LENGTH: usize = 8 * 80;

/// Hint appended to the summary line. `-vv` is the host runner's flag.
pub const TRUNCATION_USAGE_MSG: &str = "use '-vv' to show";

/// Truncate `explanation` if the current run is eligible for it, else hand
/// it back untouched.
pub fn truncate_if_required(
    explanation: Vec<String>,
    options: &RunOptions,
    max_length: Option<usize>,
) -> Vec<String> {
    if should_truncate(options) {
        return truncate_explanation(explanation, max_length);
    }
    explanation
}

/// Whether assertion output from the current run may be shortened.
pub fn should_truncate(options: &RunOptions) -> bool {
    !options.shows_full_output() && !running_on_ci()
}

/// [`should_truncate`] with the environment lookup passed in: eligible only
/// below `-vv` and outside CI.
pub fn should_truncate_with_env(options: &RunOptions, is_set: impl Fn(&str) -> bool) -> bool {
    !options.shows_full_output() && !ci_marker_present(is_set)
}

/// Cut an explanation down to `max_length` characters, the module default
/// when `None`.
///
/// Lines whose concatenated character count stays within the budget come
/// back unchanged. Otherwise whole lines are kept while they fit, the first
/// line past the budget is cut to the remaining budget and marked with
/// `...`, and a blank line plus a summary reporting the hidden line count
/// are appended.
pub fn truncate_explanation(lines: Vec<String>, max_length: Option<usize>) -> Vec<String> {
    let max_length = max_length.unwrap_or(DEFAULT_TRUNCATION_LENGTH);

    let total_length: usize = lines.iter().map(|line| char_len(line)).sum();
    if total_length <= max_length {
        return lines;
    }

    // Walk to the first line that would push the running count past the budget
    let mut kept_chars = 0;
    let mut break_index = None;
    for (index, line) in lines.iter().enumerate() {
        let line_length = char_len(line);
        if kept_chars + line_length > max_length {
            break_index = Some(index);
            break;
        }
        kept_chars += line_length;
    }

    // Unreachable once the total is over budget
    let Some(break_index) = break_index else {
        return lines;
    };

    let original_count = lines.len();
    let mut truncated = lines;
    truncated.truncate(break_index + 1);
    let mut final_line = truncated.pop().unwrap_or_default();

    if !final_line.is_empty() {
        let budget_left = max_length - kept_chars;
        final_line = format!("{}...", char_prefix(&final_line, budget_left));
    }
    truncated.push(final_line);

    // The breaking line is only partially shown, so it counts as hidden too
    let hidden_line_count = original_count - truncated.len() + 1;

    let mut summary = String::from("...Full output truncated");
    if hidden_line_count == 1 {
        summary.push_str(" (1 line hidden)");
    } else {
        summary.push_str(&format!(" ({} lines hidden)", hidden_line_count));
    }
    summary.push_str(", ");
    summary.push_str(TRUNCATION_USAGE_MSG);

    truncated.push(String::new());
    truncated.push(summary);
    truncated
}

/// Character count of `s` (`char`s, not bytes)
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `max_chars` characters of `s`, the whole string if shorter
fn char_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => &s[..cut],
        None => s,
    }
}
