use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::{ArgError, ValueKind};
use crate::prelude::Capturable;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub(crate) struct InvalidScan {
    token: String,
    type_name: &'static str,
}

impl InvalidScan {
    fn new<T>(token: &str) -> Self {
        Self {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn into_arg_error(self, name: impl Into<String>) -> ArgError {
        ArgError::InvalidValue {
            name: name.into(),
            token: self.token,
            type_name: self.type_name,
        }
    }
}

/// Capture a whole token into `T`.
///
/// The token is scanned plainly first.
/// If that scan succeeds without consuming the whole token, the token is rescanned as base-16.
/// Either way, the accepted scan must consume the entire token.
pub(crate) fn capture<T: Capturable>(token: &str) -> Result<T, InvalidScan> {
    match T::scan(token) {
        Some((value, consumed)) if consumed == token.len() => Ok(value),
        Some(_) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' partially scanned, falling back to base-16.");
            }

            match T::scan_hex(token) {
                Some((value, consumed)) if consumed == token.len() => Ok(value),
                _ => Err(InvalidScan::new::<T>(token)),
            }
        }
        None => Err(InvalidScan::new::<T>(token)),
    }
}

/// Capture a single element from the front of a delimited `input`, returning it along with the number of bytes consumed.
///
/// An element ends at the `separator`, at whitespace, or at the end of the input.
pub(crate) fn capture_element<T: Capturable>(
    input: &str,
    separator: char,
) -> Result<(T, usize), InvalidScan> {
    let at_boundary = |consumed: usize| {
        input[consumed..]
            .chars()
            .next()
            .map_or(true, |c| c == separator || c.is_whitespace())
    };
    let element = || {
        input
            .split(|c: char| c == separator || c.is_whitespace())
            .next()
            .unwrap_or(input)
    };

    match T::scan(input) {
        Some((value, consumed)) if at_boundary(consumed) => Ok((value, consumed)),
        Some(_) => match T::scan_hex(input) {
            Some((value, consumed)) if at_boundary(consumed) => Ok((value, consumed)),
            _ => Err(InvalidScan::new::<T>(element())),
        },
        None => Err(InvalidScan::new::<T>(element())),
    }
}

fn leading_whitespace(input: &str) -> usize {
    input.len() - input.trim_start().len()
}

fn is_digit(byte: Option<&u8>, radix: u32) -> bool {
    byte.map_or(false, |b| (*b as char).is_digit(radix))
}

// Locate an optionally signed run of digits following any leading whitespace.
// Returns the number text (sign included, `0x` prefix excluded) and the end offset.
fn integer_extent(input: &str, radix: u32) -> Option<(String, usize)> {
    let bytes = input.as_bytes();
    let mut cursor = leading_whitespace(input);
    let mut text = String::default();

    if let Some(sign @ (b'+' | b'-')) = bytes.get(cursor) {
        text.push(*sign as char);
        cursor += 1;
    }

    if radix == 16
        && bytes.get(cursor) == Some(&b'0')
        && matches!(bytes.get(cursor + 1), Some(b'x' | b'X'))
        && is_digit(bytes.get(cursor + 2), radix)
    {
        cursor += 2;
    }

    let digits = cursor;

    while is_digit(bytes.get(cursor), radix) {
        cursor += 1;
    }

    if cursor == digits {
        return None;
    }

    text.push_str(&input[digits..cursor]);
    Some((text, cursor))
}

// Locate a decimal floating point number (ex: `-1.5e3`) following any leading whitespace.
// Returns the start & end offsets.
fn float_extent(input: &str) -> Option<(usize, usize)> {
    let bytes = input.as_bytes();
    let start = leading_whitespace(input);
    let mut cursor = start;

    if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
        cursor += 1;
    }

    let mut digits = 0;

    while is_digit(bytes.get(cursor), 10) {
        cursor += 1;
        digits += 1;
    }

    if bytes.get(cursor) == Some(&b'.') {
        cursor += 1;

        while is_digit(bytes.get(cursor), 10) {
            cursor += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return None;
    }

    // The exponent only counts when it is complete.
    if matches!(bytes.get(cursor), Some(b'e' | b'E')) {
        let mut exponent = cursor + 1;

        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }

        if is_digit(bytes.get(exponent), 10) {
            while is_digit(bytes.get(exponent), 10) {
                exponent += 1;
            }

            cursor = exponent;
        }
    }

    Some((start, cursor))
}

macro_rules! capturable_integer {
    ($($t:ty),*) => {
        $(
            impl Capturable for $t {
                const KIND: ValueKind = ValueKind::Numeric;

                fn scan(input: &str) -> Option<(Self, usize)> {
                    let (text, consumed) = integer_extent(input, 10)?;
                    <$t>::from_str_radix(&text, 10)
                        .ok()
                        .map(|value| (value, consumed))
                }

                fn scan_hex(input: &str) -> Option<(Self, usize)> {
                    let (text, consumed) = integer_extent(input, 16)?;
                    <$t>::from_str_radix(&text, 16)
                        .ok()
                        .map(|value| (value, consumed))
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

capturable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! capturable_float {
    ($($t:ty),*) => {
        $(
            impl Capturable for $t {
                const KIND: ValueKind = ValueKind::Numeric;

                fn scan(input: &str) -> Option<(Self, usize)> {
                    let (start, end) = float_extent(input)?;
                    input[start..end]
                        .parse::<$t>()
                        .ok()
                        .map(|value| (value, end))
                }

                fn scan_hex(input: &str) -> Option<(Self, usize)> {
                    let (value, consumed) = i64::scan_hex(input)?;
                    Some((value as $t, consumed))
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

capturable_float!(f32, f64);

impl Capturable for String {
    const KIND: ValueKind = ValueKind::Text;

    fn scan(input: &str) -> Option<(Self, usize)> {
        Some((input.to_string(), input.len()))
    }

    fn render(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", 12)]
    #[case("-12", -12)]
    #[case("+7", 7)]
    #[case(" 5", 5)]
    #[case("0xC", 12)]
    #[case("0XFF", 255)]
    #[case("-0x10", -16)]
    #[case("1f", 31)]
    fn capture_i32(#[case] token: &str, #[case] expected: i32) {
        assert_eq!(capture::<i32>(token).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("abc")]
    #[case("12 ")]
    #[case("0xZ")]
    #[case("1.5")]
    #[case("99999999999")]
    fn capture_i32_invalid(#[case] token: &str) {
        assert_eq!(
            capture::<i32>(token).unwrap_err(),
            InvalidScan {
                token: token.to_string(),
                type_name: "i32",
            }
        );
    }

    #[rstest]
    #[case("3", 3)]
    #[case("0x1", 1)]
    fn capture_u8(#[case] token: &str, #[case] expected: u8) {
        assert_eq!(capture::<u8>(token).unwrap(), expected);
    }

    #[rstest]
    #[case("-3")]
    #[case("256")]
    fn capture_u8_invalid(#[case] token: &str) {
        assert_matches!(capture::<u8>(token), Err(InvalidScan { .. }));
    }

    #[rstest]
    #[case("0.25", 0.25)]
    #[case("0.250", 0.25)]
    #[case("-1.5", -1.5)]
    #[case("2", 2.0)]
    #[case(".5", 0.5)]
    #[case("1e3", 1000.0)]
    #[case("2.5E-1", 0.25)]
    #[case("0x10", 16.0)]
    fn capture_f64(#[case] token: &str, #[case] expected: f64) {
        assert_eq!(capture::<f64>(token).unwrap(), expected);
    }

    #[rstest]
    #[case("1e+")]
    #[case(".")]
    #[case("nan")]
    #[case("0.2x")]
    fn capture_f64_invalid(#[case] token: &str) {
        assert_matches!(capture::<f64>(token), Err(InvalidScan { .. }));
    }

    #[test]
    fn capture_f32() {
        assert_eq!(capture::<f32>("0.25").unwrap(), 0.25f32);
    }

    #[rstest]
    #[case("hello me")]
    #[case("")]
    #[case(" padded ")]
    #[case("-dash")]
    #[case("0xC")]
    fn capture_string(#[case] token: &str) {
        assert_eq!(capture::<String>(token).unwrap(), token.to_string());
    }

    #[rstest]
    #[case("3,4", ',', 3, 1)]
    #[case("3", ',', 3, 1)]
    #[case("3 4", ',', 3, 1)]
    #[case("34;5", ';', 34, 2)]
    #[case("0x1,2", ',', 1, 3)]
    fn capture_element_i32(
        #[case] input: &str,
        #[case] separator: char,
        #[case] expected: i32,
        #[case] expected_consumed: usize,
    ) {
        assert_eq!(
            capture_element::<i32>(input, separator).unwrap(),
            (expected, expected_consumed)
        );
    }

    #[rstest]
    #[case("x,4", "x")]
    #[case("3x,4", "3x")]
    #[case("3;4", "3;4")]
    fn capture_element_i32_invalid(#[case] input: &str, #[case] expected_token: &str) {
        assert_eq!(
            capture_element::<i32>(input, ',').unwrap_err(),
            InvalidScan {
                token: expected_token.to_string(),
                type_name: "i32",
            }
        );
    }

    #[test]
    fn render() {
        assert_eq!(12i32.render(), "12");
        assert_eq!(0.2f32.render(), "0.2");
        assert_eq!("stone".to_string().render(), "stone");
        assert_eq!(<String as Capturable>::KIND, ValueKind::Text);
        assert_eq!(<u64 as Capturable>::KIND, ValueKind::Numeric);
    }

    #[test]
    fn scan_hex_text() {
        assert_eq!(String::scan_hex("0x1F"), None);
        assert_eq!(u8::scan_hex("0x1F"), Some((31, 4)));
    }

    #[test]
    fn into_arg_error() {
        let error = capture::<u32>("abc").unwrap_err().into_arg_error("--nb (-n)");
        assert_eq!(
            error,
            ArgError::InvalidValue {
                name: "--nb (-n)".to_string(),
                token: "abc".to_string(),
                type_name: "u32",
            }
        );
    }
}
