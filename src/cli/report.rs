// ============================================================
// Layer 1 — Report Rendering
// ============================================================
// Builds the exact stdout lines. The whole observable contract
// of the program is two fixed shapes:
//
//   Result: <signed-decimal>     on success
//   Result: Error                on any failure
//
// The "Result: " prefix appears on BOTH paths — the error line
// reuses the same report shape as the success line, and callers
// of the program match on that. The prefix is part of the
// contract, not a formatting accident to clean up.
//
// Number rendering is i64's standard Display: a '-' for negative
// values, no leading zeros, no '+'.

/// The fixed prefix of every report line
pub const REPORT_PREFIX: &str = "Result: ";

/// The fixed text of the failure report
pub const ERROR_TEXT: &str = "Error";

/// Render the success report line (without trailing newline)
pub fn success_line(value: i64) -> String {
    format!("{}{}", REPORT_PREFIX, value)
}

/// Render the failure report line (without trailing newline)
pub fn error_line() -> String {
    format!("{}{}", REPORT_PREFIX, ERROR_TEXT)
}
