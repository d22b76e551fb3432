//! Locale-aware decimal formatting with number-part spans.

use super::attributed::{Attribute, AttributedText, NumberPart};
use super::locale::Locale;

const GROUP_SIZE: usize = 3;

/// Format `value` with at most `max_fraction_digits`, dropping trailing
/// zeros, using the locale's separators.
///
/// Integer digits, fraction digits and both separators are tagged with
/// their [`NumberPart`]. A leading minus sign is left untagged.
pub fn format_decimal(value: f64, max_fraction_digits: usize, locale: Locale) -> AttributedText {
    let mut out = AttributedText::new();

    if value.is_nan() {
        out.push_tagged("NaN", Attribute::NumberPart(NumberPart::Integer));
        return out;
    }
    if value.is_infinite() {
        if value.is_sign_negative() {
            out.push_str("-");
        }
        out.push_tagged("∞", Attribute::NumberPart(NumberPart::Integer));
        return out;
    }

    let rounded = format!("{:.*}", max_fraction_digits, value.abs());
    let (integer, fraction) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push_str("-");
    }

    push_grouped_integer(&mut out, integer, locale);

    if !fraction.is_empty() {
        out.push_tagged(
            locale.decimal_separator(),
            Attribute::NumberPart(NumberPart::DecimalSeparator),
        );
        out.push_tagged(fraction, Attribute::NumberPart(NumberPart::Fraction));
    }

    out
}

/// Format a whole number without fraction digits.
pub fn format_integer(value: u64, locale: Locale) -> AttributedText {
    let mut out = AttributedText::new();
    push_grouped_integer(&mut out, &value.to_string(), locale);
    out
}

fn push_grouped_integer(out: &mut AttributedText, digits: &str, locale: Locale) {
    let lead = match digits.len() % GROUP_SIZE {
        0 => GROUP_SIZE,
        n => n,
    };
    let (head, mut rest) = digits.split_at(lead.min(digits.len()));
    out.push_tagged(head, Attribute::NumberPart(NumberPart::Integer));

    while !rest.is_empty() {
        let (group, tail) = rest.split_at(GROUP_SIZE.min(rest.len()));
        out.push_tagged(
            locale.grouping_separator(),
            Attribute::NumberPart(NumberPart::GroupingSeparator),
        );
        out.push_tagged(group, Attribute::NumberPart(NumberPart::Integer));
        rest = tail;
    }
}
