//! Lenient decoders for optional station fields.
//!
//! The station dataset mixes strings and numbers for the same key and
//! uses empty strings for "no value". These helpers fold all of that into
//! plain `Option`s.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode an optional text field.
///
/// Empty strings, nulls, booleans and objects are absent. Numbers keep
/// their JSON spelling. Arrays are joined with `", "`.
pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text_from_value))
}

/// Decode an optional numeric field.
///
/// Accepts JSON numbers and strings that start with a number, reading the
/// longest numeric prefix after leading whitespace (`"42.36 N"` is 42.36).
/// Anything else, including NaN or infinite values, is absent.
pub(super) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Decode an optional numeric field, keeping its spelling.
///
/// Strings are kept verbatim when they start with a finite number; JSON
/// numbers are rendered in their shortest form. Anything else is absent.
pub(super) fn numeric_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(numeric_text_from_value))
}

fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(text_from_value).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_float(s),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn numeric_text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => number_from_value(value).map(|_| s.clone()),
        Value::Number(_) => number_from_value(value).map(|n| n.to_string()),
        _ => None,
    }
}

/// Parse the longest decimal float at the start of `s`.
///
/// Leading whitespace is skipped and trailing garbage ignored. At least one
/// digit is required; an exponent is only taken if it has digits.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_keeps_strings() {
        assert_eq!(text_from_value(&json!("Shell")), Some("Shell".to_string()));
        assert_eq!(text_from_value(&json!("  ")), Some("  ".to_string()));
    }

    #[test]
    fn text_treats_empty_and_null_as_absent() {
        assert_eq!(text_from_value(&json!("")), None);
        assert_eq!(text_from_value(&json!(null)), None);
        assert_eq!(text_from_value(&json!(true)), None);
        assert_eq!(text_from_value(&json!({"open": "6AM"})), None);
    }

    #[test]
    fn text_renders_numbers() {
        assert_eq!(
            text_from_value(&json!(6175550100u64)),
            Some("6175550100".to_string())
        );
    }

    #[test]
    fn text_joins_arrays() {
        assert_eq!(
            text_from_value(&json!(["Mon: 6AM-10PM", "", "Tue: 6AM-10PM"])),
            Some("Mon: 6AM-10PM, Tue: 6AM-10PM".to_string())
        );
        assert_eq!(text_from_value(&json!([])), None);
    }

    #[test]
    fn number_accepts_numbers_and_numeric_strings() {
        assert_eq!(number_from_value(&json!(42.3601)), Some(42.3601));
        assert_eq!(number_from_value(&json!("-71.0589")), Some(-71.0589));
        assert_eq!(number_from_value(&json!(" 4.5 ")), Some(4.5));
        assert_eq!(number_from_value(&json!(12)), Some(12.0));
    }

    #[test]
    fn number_reads_leading_prefix() {
        assert_eq!(number_from_value(&json!("42.3601 N")), Some(42.3601));
        assert_eq!(number_from_value(&json!("-71.0589,")), Some(-71.0589));
        assert_eq!(number_from_value(&json!("  \t42.5deg")), Some(42.5));
        assert_eq!(number_from_value(&json!("1e3x")), Some(1000.0));
        assert_eq!(number_from_value(&json!("7e")), Some(7.0));
        assert_eq!(number_from_value(&json!(".5")), Some(0.5));
        assert_eq!(number_from_value(&json!("3.")), Some(3.0));
    }

    #[test]
    fn leading_float_needs_a_digit() {
        assert_eq!(leading_float("-"), None);
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("-.e5"), None);
        assert_eq!(leading_float("N 42.36"), None);
        assert_eq!(leading_float("Infinity"), None);
    }

    #[test]
    fn numeric_text_keeps_spelling() {
        assert_eq!(
            numeric_text_from_value(&json!("4.50")),
            Some("4.50".to_string())
        );
        assert_eq!(numeric_text_from_value(&json!(4.5)), Some("4.5".to_string()));
        assert_eq!(numeric_text_from_value(&json!(212)), Some("212".to_string()));
        assert_eq!(numeric_text_from_value(&json!(4.0)), Some("4".to_string()));
    }

    #[test]
    fn numeric_text_rejects_non_numbers() {
        assert_eq!(numeric_text_from_value(&json!("n/a")), None);
        assert_eq!(numeric_text_from_value(&json!("")), None);
        assert_eq!(numeric_text_from_value(&json!(null)), None);
        assert_eq!(numeric_text_from_value(&json!(true)), None);
    }

    #[test]
    fn number_rejects_garbage() {
        assert_eq!(number_from_value(&json!("abc")), None);
        assert_eq!(number_from_value(&json!("")), None);
        assert_eq!(number_from_value(&json!("NaN")), None);
        assert_eq!(number_from_value(&json!("inf")), None);
        assert_eq!(number_from_value(&json!(null)), None);
        assert_eq!(number_from_value(&json!([1.0])), None);
    }
}
