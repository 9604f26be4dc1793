//! Progressive digit patterns for document, phone and postal code fields.
//!
//! A [`DigitPattern`] splits a run of digits into fixed-size groups joined by
//! literal separators. Formatting is progressive: a separator is written only
//! once a digit follows it, so partial input shows partial punctuation and
//! never ends in a dangling separator.

/// Grouping of digits with the literals placed between groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitPattern {
    /// Literal written before the first group once the second group starts.
    lead: &'static str,
    /// Size of each digit group, in order.
    groups: &'static [usize],
    /// Literal written before group `i + 1`. Always one shorter than `groups`.
    separators: &'static [&'static str],
}

/// Brazilian individual taxpayer ID: `###.###.###-##`.
pub const CPF: DigitPattern = DigitPattern {
    lead: "",
    groups: &[3, 3, 3, 2],
    separators: &[".", ".", "-"],
};

/// Brazilian company taxpayer ID: `##.###.###/####-##`.
pub const CNPJ: DigitPattern = DigitPattern {
    lead: "",
    groups: &[2, 3, 3, 4, 2],
    separators: &[".", ".", "/", "-"],
};

/// Ten-digit phone number: `(##) ####-####`.
pub const LANDLINE: DigitPattern = DigitPattern {
    lead: "(",
    groups: &[2, 4, 4],
    separators: &[") ", "-"],
};

/// Eleven-digit phone number: `(##) #####-####`.
pub const MOBILE: DigitPattern = DigitPattern {
    lead: "(",
    groups: &[2, 5, 4],
    separators: &[") ", "-"],
};

/// Brazilian postal code (CEP): `#####-###`.
pub const CEP: DigitPattern = DigitPattern {
    lead: "",
    groups: &[5, 3],
    separators: &["-"],
};

impl DigitPattern {
    /// Total number of digits the pattern holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.groups.iter().sum()
    }

    /// Formats `digits` progressively.
    ///
    /// Characters other than ASCII digits are skipped; digits past
    /// [`capacity`](Self::capacity) are dropped.
    #[must_use]
    pub fn format(&self, digits: &str) -> String {
        let digits: Vec<char> = digits
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.capacity())
            .collect();
        let mut out = String::with_capacity(digits.len() + self.literal_len());
        let first_group = self.groups.first().copied().unwrap_or(0);
        if digits.len() > first_group {
            out.push_str(self.lead);
        }

        let mut rest = digits.as_slice();
        for (index, &size) in self.groups.iter().enumerate() {
            if rest.is_empty() {
                break;
            }
            if index > 0 {
                out.push_str(self.separators[index - 1]);
            }
            let (group, tail) = rest.split_at(size.min(rest.len()));
            out.extend(group);
            rest = tail;
        }
        out
    }

    fn literal_len(&self) -> usize {
        self.lead.len() + self.separators.iter().map(|s| s.len()).sum::<usize>()
    }
}

/// Keeps ASCII digits only, up to `limit` of them.
pub(crate) fn digits_only(value: &str, limit: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// Formats a CPF or CNPJ depending on how many digits are present.
pub(crate) fn document_number(value: &str) -> String {
    let digits = digits_only(value, CNPJ.capacity());
    if digits.len() <= CPF.capacity() {
        CPF.format(&digits)
    } else {
        CNPJ.format(&digits)
    }
}

/// Formats a landline or mobile number depending on how many digits are present.
pub(crate) fn phone_number(value: &str) -> String {
    let digits = digits_only(value, MOBILE.capacity());
    if digits.len() <= LANDLINE.capacity() {
        LANDLINE.format(&digits)
    } else {
        MOBILE.format(&digits)
    }
}

pub(crate) fn postal_code(value: &str) -> String {
    CEP.format(&digits_only(value, CEP.capacity()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_match_national_formats() {
        assert_eq!(CPF.capacity(), 11);
        assert_eq!(CNPJ.capacity(), 14);
        assert_eq!(LANDLINE.capacity(), 10);
        assert_eq!(MOBILE.capacity(), 11);
        assert_eq!(CEP.capacity(), 8);
    }

    #[test]
    fn cpf_punctuation_grows_with_input() {
        assert_eq!(CPF.format(""), "");
        assert_eq!(CPF.format("123"), "123");
        assert_eq!(CPF.format("1234"), "123.4");
        assert_eq!(CPF.format("1234567"), "123.456.7");
        assert_eq!(CPF.format("123456789"), "123.456.789");
        assert_eq!(CPF.format("1234567890"), "123.456.789-0");
        assert_eq!(CPF.format("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cnpj_punctuation_grows_with_input() {
        assert_eq!(CNPJ.format("123456789012"), "12.345.678/9012");
        assert_eq!(CNPJ.format("1234567890123"), "12.345.678/9012-3");
        assert_eq!(CNPJ.format("12345678901234"), "12.345.678/9012-34");
    }

    #[test]
    fn phone_lead_waits_for_third_digit() {
        assert_eq!(LANDLINE.format("1"), "1");
        assert_eq!(LANDLINE.format("11"), "11");
        assert_eq!(LANDLINE.format("113"), "(11) 3");
        assert_eq!(LANDLINE.format("113333"), "(11) 3333");
        assert_eq!(LANDLINE.format("1133334"), "(11) 3333-4");
    }

    #[test]
    fn format_drops_digits_past_capacity() {
        assert_eq!(CEP.format("1234567890"), "12345-678");
    }

    #[test]
    fn format_skips_multibyte_and_non_digit_text() {
        assert_eq!(CEP.format("aéééé"), "");
        assert_eq!(CPF.format("ééé"), "");
        assert_eq!(CPF.format("1é2é3é4"), "123.4");
        assert_eq!(MOBILE.format("(11) 9８7654321"), "(11) 97654-321");
    }

    #[test]
    fn document_switches_to_cnpj_after_eleven_digits() {
        assert_eq!(document_number("12345678901"), "123.456.789-01");
        assert_eq!(document_number("123456789012"), "12.345.678/9012");
        assert_eq!(document_number("123.456.789-012"), "12.345.678/9012");
    }

    #[test]
    fn document_caps_at_fourteen_digits() {
        assert_eq!(document_number("1234567890123499"), "12.345.678/9012-34");
    }

    #[test]
    fn phone_switches_to_mobile_at_eleven_digits() {
        assert_eq!(phone_number("1133334444"), "(11) 3333-4444");
        assert_eq!(phone_number("11987654321"), "(11) 98765-4321");
        assert_eq!(phone_number("(11) 3333-44449"), "(11) 33334-4449");
    }

    #[test]
    fn postal_code_ignores_letters_and_non_ascii_digits() {
        assert_eq!(postal_code("12345678"), "12345-678");
        assert_eq!(postal_code("cep: 01310-100"), "01310-100");
        assert_eq!(postal_code("١٢٣"), "");
    }
}
