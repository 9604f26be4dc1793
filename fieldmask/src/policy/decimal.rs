//! Decimal sanitizing for comma-separated numbers.
//!
//! Both `.` and `,` are accepted while typing and normalized to `,`. The first
//! comma separates the integer part from the decimal part; later commas are
//! dropped and their digits joined to the decimal part.

/// Whitespace as browsers strip it from form input: Unicode `White_Space`
/// plus the byte order mark, minus NEL (U+0085).
fn is_form_space(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{0085}' => false,
        _ => ch.is_whitespace(),
    }
}

/// How a leading minus sign is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SignMode {
    /// A `-` in first position is kept; every other `-` is stripped.
    Leading,
    /// No sign handling: `-` is stripped everywhere.
    Rejected,
    /// `-` is kept wherever it appears.
    Passthrough,
}

/// Sanitizer settings derived from a decimal mask policy.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalConfig {
    /// Maximum digits after the separator; `None` keeps them all.
    pub(crate) max_decimals: Option<usize>,
    pub(crate) sign: SignMode,
}

impl DecimalConfig {
    fn keeps(self, ch: char) -> bool {
        ch.is_ascii_digit() || ch == ',' || (ch == '-' && self.sign == SignMode::Passthrough)
    }

    /// Applies the decimal sanitizer to `value`.
    ///
    /// Total over any input. Fractions are truncated, never rounded.
    pub(crate) fn apply_to(self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        let normalized: String = value
            .chars()
            .filter(|&ch| !is_form_space(ch))
            .map(|ch| if ch == '.' { ',' } else { ch })
            .collect();

        let (sign, body) = match normalized.strip_prefix('-') {
            Some(rest) if self.sign == SignMode::Leading => ("-", rest),
            _ => ("", normalized.as_str()),
        };

        let kept: String = body.chars().filter(|&ch| self.keeps(ch)).collect();
        let Some((integer, fraction)) = kept.split_once(',') else {
            return format!("{sign}{kept}");
        };

        let fraction = fraction.chars().filter(|&ch| ch != ',');
        let fraction: String = match self.max_decimals {
            Some(limit) => fraction.take(limit).collect(),
            None => fraction.collect(),
        };

        if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer},{fraction}")
        }
    }
}
