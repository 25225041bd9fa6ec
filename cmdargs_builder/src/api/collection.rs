#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::capture::{capture_element, InvalidScan};
use crate::model::ArgError;
use crate::prelude::Capturable;

/// Scan every element of a delimited token.
/// Runs of the separator (and whitespace) count as a single delimiter.
pub(crate) fn scan_elements<T: Capturable>(
    token: &str,
    separator: char,
) -> Result<Vec<T>, InvalidScan> {
    let mut values = Vec::default();
    let mut rest = token;

    loop {
        rest = rest.trim_start_matches(|c: char| c == separator || c.is_whitespace());

        if rest.is_empty() {
            break;
        }

        let (value, consumed) = capture_element::<T>(rest, separator)?;
        values.push(value);
        rest = &rest[consumed..];
    }

    Ok(values)
}

/// Split a token into its raw text elements.
/// Runs of the separator count as a single delimiter; whitespace is preserved.
pub(crate) fn split_elements(token: &str, separator: char) -> Vec<&str> {
    token
        .split(separator)
        .filter(|element| !element.is_empty())
        .collect()
}

/// Accumulates the values of a multi-value parameter, enforcing its arity (when required).
#[derive(Debug)]
pub(crate) struct ValueBuffer<T> {
    name: String,
    required: Option<usize>,
    values: Vec<T>,
}

impl<T: Clone> ValueBuffer<T> {
    pub(crate) fn new(name: impl Into<String>, required: Option<usize>) -> Self {
        Self {
            name: name.into(),
            required,
            values: Vec::default(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn extend(&mut self, values: impl IntoIterator<Item = T>) {
        self.values.extend(values);
    }

    /// Whether the buffer wants more values.
    /// Only an arity enforcing buffer that is still short of its required count is open.
    pub(crate) fn is_open(&self) -> bool {
        match self.required {
            Some(n) => self.values.len() < n,
            None => false,
        }
    }

    /// Finish the buffer.
    ///
    /// When the arity is enforced, a single value is broadcast to fill the required count.
    /// Any other count that differs from the required count is an error.
    pub(crate) fn close(self) -> Result<Vec<T>, ArgError> {
        let ValueBuffer {
            name,
            required,
            mut values,
        } = self;

        if let Some(n) = required {
            if values.len() == 1 && n > 1 {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Broadcasting the single value of '{name}' to {n} values.");
                }

                let value = values[0].clone();
                values.resize(n, value);
            }

            if values.len() != n {
                return Err(ArgError::ArityMismatch {
                    name,
                    expected: n,
                    provided: values.len(),
                });
            }
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case("3,4", ',', vec![3, 4])]
    #[case("4,3 ", ',', vec![4, 3])]
    #[case("1,,2", ',', vec![1, 2])]
    #[case(",1,2,", ',', vec![1, 2])]
    #[case("1 2", ',', vec![1, 2])]
    #[case("1;2;;3", ';', vec![1, 2, 3])]
    #[case("0x1,0x2", ',', vec![1, 2])]
    #[case("", ',', vec![])]
    #[case(",,", ',', vec![])]
    fn scan_elements_i32(#[case] token: &str, #[case] separator: char, #[case] expected: Vec<i32>) {
        assert_eq!(scan_elements::<i32>(token, separator).unwrap(), expected);
    }

    #[rstest]
    #[case("1,x")]
    #[case("1;2")]
    #[case("1.5,2")]
    fn scan_elements_invalid(#[case] token: &str) {
        assert_matches!(scan_elements::<i32>(token, ','), Err(InvalidScan { .. }));
    }

    #[test]
    fn scan_elements_f64() {
        assert_eq!(
            scan_elements::<f64>("0.5,1.25,-2", ',').unwrap(),
            vec![0.5, 1.25, -2.0]
        );
    }

    #[rstest]
    #[case("a,b", vec!["a", "b"])]
    #[case("a b,c", vec!["a b", "c"])]
    #[case("a,,b,", vec!["a", "b"])]
    #[case("", vec![])]
    fn split_elements_text(#[case] token: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_elements(token, ','), expected);
    }

    #[rstest]
    #[case(None, vec![7, 8], vec![7, 8])]
    #[case(None, vec![7], vec![7])]
    #[case(Some(2), vec![7, 8], vec![7, 8])]
    #[case(Some(3), vec![5], vec![5, 5, 5])]
    #[case(Some(1), vec![5], vec![5])]
    #[case(Some(0), vec![], vec![])]
    fn close_ok(
        #[case] required: Option<usize>,
        #[case] feed: Vec<u32>,
        #[case] expected: Vec<u32>,
    ) {
        let mut buffer = ValueBuffer::new("--x", required);
        buffer.extend(feed);
        assert_eq!(buffer.close().unwrap(), expected);
    }

    #[rstest]
    #[case(3, vec![7, 8])]
    #[case(2, vec![7, 8, 9])]
    #[case(2, vec![])]
    #[case(0, vec![1])]
    fn close_arity_mismatch(#[case] required: usize, #[case] feed: Vec<u32>) {
        let provided = feed.len();
        let mut buffer = ValueBuffer::new("--x (-x)", Some(required));
        buffer.extend(feed);
        assert_eq!(
            buffer.close().unwrap_err(),
            ArgError::ArityMismatch {
                name: "--x (-x)".to_string(),
                expected: required,
                provided,
            }
        );
    }

    #[test]
    fn is_open() {
        for _ in 0..100 {
            let required: usize = thread_rng().gen_range(1..10);
            let mut buffer: ValueBuffer<usize> = ValueBuffer::new("--x", Some(required));

            for i in 0..required {
                assert!(buffer.is_open());
                buffer.extend([i]);
            }

            assert!(!buffer.is_open());
            assert_eq!(buffer.name(), "--x");
            assert_eq!(buffer.close().unwrap(), (0..required).collect::<Vec<usize>>());
        }

        let buffer: ValueBuffer<usize> = ValueBuffer::new("--x", None);
        assert!(!buffer.is_open());
    }
}
