//! Formatting of evaluation results.

/// Format a finite result as display text.
///
/// With no precision the shortest text that round-trips the value is used,
/// so `0.1 + 0.2` shows every significant digit. With a precision the value
/// is rounded to that many decimal places and trailing zeros are trimmed.
/// Integers never carry a `.0`, and negative zero is shown as `0`.
///
/// ```rust
/// use keypad::eval::format_result;
///
/// assert_eq!(format_result(20.0, None), "20");
/// assert_eq!(format_result(0.1 + 0.2, None), "0.30000000000000004");
/// assert_eq!(format_result(0.1 + 0.2, Some(10)), "0.3");
/// ```
pub fn format_result(value: f64, precision: Option<usize>) -> String {
    let text = match precision {
        None => format!("{value}"),
        Some(places) => {
            let fixed = format!("{value:.places$}");
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        }
    };

    // Covers both -0 from the evaluator and values rounded to zero.
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
