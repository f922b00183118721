//! Text-to-scalar parsing used by the `set` operator.
//!
//! Integers auto-detect their base from a prefix: `0x`/`0X` hexadecimal,
//! `0o`/`0O` and a bare leading `0` octal, `0b`/`0B` binary, decimal
//! otherwise. Signed targets accept a leading `+` or `-`.

const INVALID_SYNTAX: &str = "invalid syntax";
const OUT_OF_RANGE: &str = "value out of range";

fn split_radix(digits: &str) -> (u32, &str) {
    let bytes = digits.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => (16, &digits[2..]),
            b'o' | b'O' => (8, &digits[2..]),
            b'b' | b'B' => (2, &digits[2..]),
            _ => (8, &digits[1..]),
        }
    } else {
        (10, digits)
    }
}

/// Parse an unsigned integer with base auto-detection.
pub(crate) fn parse_unsigned(text: &str) -> Result<u64, &'static str> {
    let (radix, digits) = split_radix(text);
    // from_str_radix would accept a sign here
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(INVALID_SYNTAX);
    }
    u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => OUT_OF_RANGE,
        _ => INVALID_SYNTAX,
    })
}

/// Parse a signed integer with base auto-detection.
pub(crate) fn parse_signed(text: &str) -> Result<i64, &'static str> {
    let (negative, magnitude) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = i128::from(parse_unsigned(magnitude)?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| OUT_OF_RANGE)
}

/// Narrow a parsed integer to the target type.
pub(crate) fn narrow<T, U>(value: U) -> Result<T, &'static str>
where
    T: TryFrom<U>,
{
    T::try_from(value).map_err(|_| OUT_OF_RANGE)
}

pub(crate) fn parse_float(text: &str) -> Result<f64, &'static str> {
    text.parse::<f64>().map_err(|_| INVALID_SYNTAX)
}

/// Accepts the usual spellings: `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
pub(crate) fn parse_bool(text: &str) -> Result<bool, &'static str> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(INVALID_SYNTAX),
    }
}

pub(crate) fn parse_char(text: &str) -> Result<char, &'static str> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err("expected exactly one character"),
    }
}
