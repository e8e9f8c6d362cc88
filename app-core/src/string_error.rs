//! Conversion of arbitrary errors into `String` errors with some context.

use std::fmt::Display;

pub trait ErrorStringExt<T> {
    /// Replaces the error with `"{msg}: {error}"`.
    fn err_to_string(self, msg: &str) -> Result<T, String>;
}

impl<T, E: Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.map_err(|err| format!("{msg}: {err}"))
    }
}

impl<T> ErrorStringExt<T> for Option<T> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.ok_or_else(|| msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_to_string_prefixes_message() {
        let res: Result<u8, _> = "x".parse::<u8>();
        let err = res.err_to_string("could not parse").unwrap_err();
        assert!(err.starts_with("could not parse: "));
    }

    #[test]
    fn test_none_to_string() {
        let res: Option<u8> = None;
        assert_eq!(res.err_to_string("nothing here"), Err("nothing here".into()));
        assert_eq!(Some(3).err_to_string("nothing here"), Ok(3));
    }
}
