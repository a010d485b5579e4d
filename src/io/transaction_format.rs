//! Transaction line format handling
//!
//! Converts raw input lines into [`Command`]s and renders amounts and the
//! final balance report.
//!
//! # Line format
//!
//! `<accountId>,<operation>,<amount>`, for example `A1001,DEPOSIT,200`.
//! Fields are trimmed of ASCII whitespace and control characters, the
//! operation is case-insensitive, and trailing empty fields are ignored
//! (`A1001,DEPOSIT,5,,` is a valid line).
//!
//! # Validation order
//!
//! 1. Field count (exactly three)
//! 2. Amount (must parse as a number)
//! 3. Account (resolved by the engine)
//! 4. Operation keyword (resolved by the engine)
//!
//! A line that fails several checks reports the first one, so
//! `A1001,FOO,notanumber` is an invalid number, not an invalid operation,
//! and `A9999,FOO,10` is an unknown account. The sign of the amount is
//! checked last, by the account.
//!
//! # Number format
//!
//! Decimal and hexadecimal (`0x1.8p3`) notation are accepted, with an
//! optional `d`/`f` suffix. `Infinity` and `NaN` are spelled out, and output
//! always carries a fractional digit (`200.0`, `1.0E7`).

use crate::types::{Account, Command, LedgerError};
use csv::{ReaderBuilder, Terminator, Trim};
use std::io::Write;

/// Number of fields in a well-formed transaction line
const FIELD_COUNT: usize = 3;

/// Parse a raw transaction line into a command
///
/// Parsing is pure: the same line always yields the same result. The
/// operation keyword is upper-cased but not validated here.
///
/// # Errors
///
/// Returns:
/// - `MalformedTransaction` if the line does not have exactly three fields
/// - `UnparseableAmount` if the third field is not a number
pub fn parse_transaction(raw: &str) -> Result<Command, LedgerError> {
    let fields = split_fields(raw)?;
    if fields.len() != FIELD_COUNT {
        return Err(LedgerError::malformed(raw));
    }

    let account_id = trim_field(&fields[0]);
    let keyword = trim_field(&fields[1]).to_uppercase();
    let amount =
        parse_amount(trim_field(&fields[2])).ok_or_else(|| LedgerError::unparseable_amount(raw))?;

    Ok(Command::new(account_id, keyword, amount))
}

/// Strip leading and trailing characters up to and including U+0020
///
/// Covers spaces, tabs, carriage returns and other control characters, but
/// not Unicode spaces such as U+00A0.
fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c <= ' ')
}

/// Split a line on commas, dropping trailing empty fields
///
/// Quoting is disabled so a `"` is an ordinary character, only `\n` ends a
/// record so a stray `\r` stays inside its field, and fields are left
/// untrimmed so that a whitespace-only last field still counts. A line
/// holding more than one record is malformed as a whole.
fn split_fields(raw: &str) -> Result<Vec<String>, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::None)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(raw.as_bytes());

    let mut records = reader.records();
    let mut fields: Vec<String> = match records.next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        Some(Err(_)) => return Err(LedgerError::malformed(raw)),
        None => Vec::new(),
    };

    if records.next().is_some() {
        return Err(LedgerError::malformed(raw));
    }

    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    Ok(fields)
}

/// Parse an amount field
///
/// Accepts decimal and exponent notation with an optional sign and an
/// optional `d`, `D`, `f` or `F` suffix, hexadecimal floating-point literals
/// (`0x1p4`, `-0X.8P1d`), plus the literals `Infinity` and `NaN`.
/// Lower-case `inf`/`nan` spellings are rejected.
pub fn parse_amount(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    if unsigned == "Infinity" || unsigned == "NaN" {
        return text.parse().ok();
    }

    let body = text
        .strip_suffix(|c: char| matches!(c, 'd' | 'D' | 'f' | 'F'))
        .unwrap_or(text);

    let (negative, digits) = match body.as_bytes().first() {
        Some(b'-') => (true, &body[1..]),
        Some(b'+') => (false, &body[1..]),
        _ => (false, body),
    };
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        return parse_hex_amount(hex).map(|value| if negative { -value } else { value });
    }

    let is_decimal = body
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return None;
    }

    body.parse().ok()
}

/// Parse the part of a hexadecimal literal after `0x`
///
/// `<hex digits>[.<hex digits>]p<signed decimal exponent>`, with at least
/// one hex digit and a mandatory binary exponent.
fn parse_hex_amount(text: &str) -> Option<f64> {
    let (significand, exponent) = text.split_once(|c: char| c == 'p' || c == 'P')?;
    let (whole, fraction) = significand.split_once('.').unwrap_or((significand, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let exponent_digits = exponent
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(exponent);
    if exponent_digits.is_empty() || !exponent_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Anything beyond this range is zero or infinite anyway
    const EXPONENT_LIMIT: i64 = 100_000;
    let exponent: i64 = match exponent.parse::<i64>() {
        Ok(value) => value.clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT),
        Err(_) if exponent.starts_with('-') => -EXPONENT_LIMIT,
        Err(_) => EXPONENT_LIMIT,
    };

    // 128 bits hold far more than the 53 significant bits of an f64; digits
    // that no longer fit only contribute a sticky bit for rounding.
    let mut mantissa: u128 = 0;
    let mut scale: i64 = 0;
    for (index, c) in whole.chars().chain(fraction.chars()).enumerate() {
        let digit = c.to_digit(16)? as u128;
        if mantissa >> 120 == 0 {
            mantissa = (mantissa << 4) | digit;
            if index >= whole.len() {
                scale -= 4;
            }
        } else {
            if digit != 0 {
                mantissa |= 1;
            }
            if index < whole.len() {
                scale += 4;
            }
        }
    }

    let scale = scale.clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT);
    let exponent = (exponent + scale).clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT) as i32;
    Some(scale_by_power_of_two(mantissa as f64, exponent))
}

/// Multiply by `2^exponent`, stepping so intermediate powers stay finite
fn scale_by_power_of_two(mut value: f64, mut exponent: i32) -> f64 {
    const STEP: i32 = 1000;
    while exponent > STEP {
        value *= 2f64.powi(STEP);
        exponent -= STEP;
    }
    while exponent < -STEP {
        value *= 2f64.powi(-STEP);
        exponent += STEP;
    }
    value * 2f64.powi(exponent)
}

/// Render an amount or balance
///
/// Magnitudes in `[0.001, 10^7)` (and zero) are written as plain decimals
/// with at least one fractional digit; everything else uses
/// `<mantissa>E<exponent>`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = value.to_string();
        return if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        };
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// Write the end-of-session balance report
///
/// A blank line, a `Final balances:` header, then one `<id>: <balance>`
/// line per account in the order given.
pub fn write_final_balances(accounts: &[Account], output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Final balances:")?;
    for account in accounts {
        writeln!(output, "{}: {}", account.id, format_amount(account.balance))?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorKind, Operation};
    use rstest::rstest;

    #[rstest]
    #[case("A1001,DEPOSIT,200", "A1001", Operation::Deposit, 200.0)]
    #[case("A1002,WITHDRAW,150", "A1002", Operation::Withdraw, 150.0)]
    #[case("  A1001 ,\tdeposit ,  12.5  ", "A1001", Operation::Deposit, 12.5)]
    #[case("A1001,Withdraw,-3", "A1001", Operation::Withdraw, -3.0)]
    #[case("A1001,DEPOSIT,5,,", "A1001", Operation::Deposit, 5.0)]
    #[case("A9999,DEPOSIT,1e2", "A9999", Operation::Deposit, 100.0)]
    #[case("\"A1\",DEPOSIT,1", "\"A1\"", Operation::Deposit, 1.0)]
    #[case(",DEPOSIT,1", "", Operation::Deposit, 1.0)]
    #[case("A1001,DEPOSIT,5\r", "A1001", Operation::Deposit, 5.0)]
    #[case("\u{1}A1001\u{1f},DEPOSIT,1", "A1001", Operation::Deposit, 1.0)]
    #[case("\u{a0}A1001,DEPOSIT,1", "\u{a0}A1001", Operation::Deposit, 1.0)]
    #[case("A1001,DEPOSIT,0x1p4", "A1001", Operation::Deposit, 16.0)]
    fn test_parse_valid_lines(
        #[case] raw: &str,
        #[case] account_id: &str,
        #[case] operation: Operation,
        #[case] amount: f64,
    ) {
        let command = parse_transaction(raw).unwrap();
        assert_eq!(command, Command::new(account_id, operation, amount));
    }

    #[rstest]
    #[case::empty("")]
    #[case::one_field("A1001")]
    #[case::two_fields("A1001,DEPOSIT")]
    #[case::trailing_empty_amount("A1001,DEPOSIT,")]
    #[case::four_fields("A1001,DEPOSIT,5,6")]
    #[case::only_commas(",,,")]
    #[case::carriage_return_inside("A1001,DEPOSIT,5\rA1001,DEPOSIT,9999")]
    #[case::embedded_newline("A1001,DEPOSIT,5\nA1002,DEPOSIT,1")]
    fn test_parse_wrong_field_count(#[case] raw: &str) {
        let err = parse_transaction(raw).unwrap_err();
        assert_eq!(err, LedgerError::malformed(raw));
    }

    #[test]
    fn test_whitespace_amount_is_invalid_number() {
        // A blank last field is not empty, so the count check passes
        let raw = "A1001,DEPOSIT, ";
        assert_eq!(
            parse_transaction(raw).unwrap_err(),
            LedgerError::unparseable_amount(raw)
        );
    }

    #[test]
    fn test_invalid_number_cites_whole_line() {
        let err = parse_transaction("A1001,DEPOSIT,abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid number in transaction: A1001,DEPOSIT,abc"
        );
    }

    #[test]
    fn test_unicode_space_is_not_trimmed_from_amount() {
        let raw = "A1001,DEPOSIT,\u{a0}5";
        assert_eq!(
            parse_transaction(raw).unwrap_err(),
            LedgerError::unparseable_amount(raw)
        );
    }

    #[test]
    fn test_operation_keyword_is_upper_cased_not_validated() {
        let command = parse_transaction("A1001,fly,10").unwrap();
        assert_eq!(command.keyword, "FLY");
        assert_eq!(
            command.operation(),
            Err(LedgerError::invalid_operation("FLY"))
        );
    }

    #[test]
    fn test_number_checked_before_operation() {
        let err = parse_transaction("A1001,FOO,notanumber").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAmount);
    }

    #[test]
    fn test_parse_is_idempotent() {
        for raw in ["A1001,DEPOSIT,200", "A1001,FLY,10", "x", "A1,DEPOSIT,abc"] {
            assert_eq!(parse_transaction(raw), parse_transaction(raw));
        }
    }

    #[rstest]
    #[case("200", Some(200.0))]
    #[case("+7", Some(7.0))]
    #[case("-0.5", Some(-0.5))]
    #[case(".5", Some(0.5))]
    #[case("5.", Some(5.0))]
    #[case("1e3", Some(1000.0))]
    #[case("2.5E-1", Some(0.25))]
    #[case("10d", Some(10.0))]
    #[case("10F", Some(10.0))]
    #[case("Infinity", Some(f64::INFINITY))]
    #[case("-Infinity", Some(f64::NEG_INFINITY))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("d", None)]
    #[case("inf", None)]
    #[case("infinity", None)]
    #[case("1_000", None)]
    #[case("1,5", None)]
    #[case("0x10", None)]
    #[case("0x1p4", Some(16.0))]
    #[case("0X1.8p1", Some(3.0))]
    #[case("0x1.fp4", Some(31.0))]
    #[case("0x10p-4", Some(1.0))]
    #[case("0xAp0", Some(10.0))]
    #[case("+0x1p+2", Some(4.0))]
    #[case("-0x.8P1d", Some(-1.0))]
    #[case("0x1p-1074", Some(f64::from_bits(1)))]
    #[case("0x1p99999999999999999999", Some(f64::INFINITY))]
    #[case("0x1p-99999999999999999999", Some(0.0))]
    #[case("0x1p", None)]
    #[case("0xp1", None)]
    #[case("0x.p1", None)]
    #[case("0x1gp1", None)]
    #[case("0x1p1.5", None)]
    fn test_parse_amount(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount(text), expected);
    }

    #[test]
    fn test_parse_amount_nan() {
        assert!(parse_amount("NaN").unwrap().is_nan());
        assert_eq!(parse_amount("nan"), None);
    }

    #[rstest]
    #[case(200.0, "200.0")]
    #[case(700.0, "700.0")]
    #[case(0.0, "0.0")]
    #[case(-0.0, "-0.0")]
    #[case(12.5, "12.5")]
    #[case(-40.0, "-40.0")]
    #[case(0.001, "0.001")]
    #[case(9999999.0, "9999999.0")]
    #[case(10000000.0, "1.0E7")]
    #[case(12345678.9, "1.23456789E7")]
    #[case(0.0001, "1.0E-4")]
    #[case(-0.00015, "-1.5E-4")]
    #[case(0.1 + 0.2, "0.30000000000000004")]
    #[case(f64::INFINITY, "Infinity")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    #[case(f64::NAN, "NaN")]
    fn test_format_amount(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[test]
    fn test_write_final_balances() {
        let accounts = vec![Account::new("A1001", 700.0), Account::new("A1002", 100.0)];
        let mut output = Vec::new();

        write_final_balances(&accounts, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nFinal balances:\nA1001: 700.0\nA1002: 100.0\n"
        );
    }
}
