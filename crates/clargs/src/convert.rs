//! Conversion of raw argument text into typed values.

use std::path::PathBuf;

/// Types an argument value can be read as.
///
/// Conversion is locale-independent and ignores surrounding whitespace.
pub trait FromArg: Sized {
    fn from_arg(raw: &str) -> Option<Self>;
}

macro_rules! from_arg_via_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )*
    };
}

from_arg_via_parse!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

impl FromArg for String {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromArg for PathBuf {
    fn from_arg(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }
}

impl FromArg for bool {
    fn from_arg(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(i32::from_arg("-20"), Some(-20));
        assert_eq!(f64::from_arg(" 123 "), Some(123.0));
        assert_eq!(f64::from_arg("-6001.45e-2"), Some(-60.0145));
        assert_eq!(u8::from_arg("-1"), None);
        assert_eq!(i32::from_arg("12abc"), None);
        assert_eq!(i32::from_arg(""), None);
    }

    #[test]
    fn strings_are_taken_verbatim() {
        assert_eq!(String::from_arg(" a b "), Some(" a b ".to_string()));
        assert_eq!(PathBuf::from_arg("in.txt"), Some(PathBuf::from("in.txt")));
    }

    #[test]
    fn booleans() {
        assert_eq!(bool::from_arg("TRUE"), Some(true));
        assert_eq!(bool::from_arg("0"), Some(false));
        assert_eq!(bool::from_arg("off"), Some(false));
        assert_eq!(bool::from_arg("maybe"), None);
    }
}
