use std::path::PathBuf;
use std::str::FromStr;

use crate::prelude::Value;

macro_rules! from_str_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Value for $ty {
                fn parse_text(text: &str) -> Option<Self> {
                    <$ty>::from_str(text).ok()
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

from_str_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

impl Value for bool {
    fn parse_text(text: &str) -> Option<Self> {
        match text {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Value for String {
    fn parse_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl Value for PathBuf {
    fn parse_text(text: &str) -> Option<Self> {
        Some(PathBuf::from(text))
    }

    fn render(&self) -> String {
        self.display().to_string()
    }
}

// Space separated, within a single token.
impl<T: Value> Value for Vec<T> {
    fn parse_text(text: &str) -> Option<Self> {
        text.split(' ')
            .filter(|piece| !piece.is_empty())
            .map(T::parse_text)
            .collect()
    }

    fn render(&self) -> String {
        self.iter()
            .map(Value::render)
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// The name of `T` as shown in help and error messages: `std::any::type_name` without module paths.
pub(crate) fn type_label<T>() -> String {
    strip_paths(std::any::type_name::<T>())
}

fn strip_paths(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = 0;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(1))]
    #[case("-100", Some(-100))]
    #[case("+7", Some(7))]
    #[case("", None)]
    #[case("1.0", None)]
    #[case("foo", None)]
    fn parse_i32(#[case] text: &str, #[case] expected: Option<i32>) {
        assert_eq!(i32::parse_text(text), expected);
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("false", Some(false))]
    #[case("True", None)]
    #[case("1", None)]
    #[case("", None)]
    fn parse_bool(#[case] text: &str, #[case] expected: Option<bool>) {
        assert_eq!(bool::parse_text(text), expected);
    }

    #[test]
    fn parse_string() {
        assert_eq!(String::parse_text(""), Some("".to_string()));
        assert_eq!(
            String::parse_text("www.google.com"),
            Some("www.google.com".to_string())
        );
    }

    #[rstest]
    #[case("1 2 3", Some(vec![1, 2, 3]))]
    #[case(" 1  2 ", Some(vec![1, 2]))]
    #[case("", Some(vec![]))]
    #[case("1 x 3", None)]
    fn parse_vec(#[case] text: &str, #[case] expected: Option<Vec<u8>>) {
        assert_eq!(Vec::<u8>::parse_text(text), expected);
    }

    #[test]
    fn render() {
        assert_eq!(1920u32.render(), "1920");
        assert_eq!((-0.5f64).render(), "-0.5");
        assert_eq!(false.render(), "false");
        assert_eq!(".".to_string().render(), ".");
        assert_eq!(PathBuf::from("/tmp").render(), "/tmp");
        assert_eq!(vec![1u8, 2, 3].render(), "1 2 3");
        assert_eq!(Vec::<u8>::new().render(), "");
    }

    #[rstest]
    #[case("i32", "i32")]
    #[case("alloc::string::String", "String")]
    #[case("alloc::vec::Vec<alloc::string::String>", "Vec<String>")]
    #[case("std::path::PathBuf", "PathBuf")]
    #[case(
        "core::option::Option<(u8, alloc::string::String)>",
        "Option<(u8, String)>"
    )]
    fn strip(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(strip_paths(name), expected);
    }

    #[test]
    fn labels() {
        assert_eq!(type_label::<u32>(), "u32");
        assert_eq!(type_label::<String>(), "String");
        assert_eq!(type_label::<Vec<String>>(), "Vec<String>");
    }
}
