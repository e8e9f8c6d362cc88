//! Key-value lookup of user-visible strings.
//!
//! Properties are stored as plain text, one `KEY=value` pair per line. Lines
//! starting with `#` and blank lines are ignored. Escaped newlines (`\n`) and
//! tabs (`\t`) in values are expanded.

use std::{collections::HashMap, fmt::Display, path::Path};

use thiserror::Error;

use crate::string_error::ErrorStringExt;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("missing property '{0}'")]
    MissingKey(String),

    #[error("malformed property in line {line}: '{content}'")]
    Malformed { line: usize, content: String },
}

/// Lookup service for all user-visible text.
pub trait StringLookup {
    fn get(&self, key: &str) -> Result<&str, PropertyError>;

    /// Like `get`, but falls back to the key itself (and logs a warning).
    /// Used where a missing label should not abort rendering.
    fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{err}");
                key
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    pub fn parse(raw: &str) -> Result<Self, PropertyError> {
        let mut values = HashMap::new();
        for (line_no, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(PropertyError::Malformed {
                    line: line_no + 1,
                    content: line.to_owned(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(PropertyError::Malformed {
                    line: line_no + 1,
                    content: line.to_owned(),
                });
            }
            let value = value.trim().replace("\\n", "\n").replace("\\t", "\t");
            if values.insert(key.to_owned(), value).is_some() {
                log::warn!("property '{key}' defined more than once, using last value");
            }
        }
        Ok(Self { values })
    }

    pub fn from_path(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path).err_to_string("could not read properties file")?;
        Self::parse(&raw).err_to_string("could not parse properties file")
    }

    /// Overwrites existing values with the ones from `other`.
    pub fn merge(&mut self, other: Properties) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StringLookup for Properties {
    fn get(&self, key: &str) -> Result<&str, PropertyError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| PropertyError::MissingKey(key.to_owned()))
    }
}

/// Replaces the `{}` placeholders in `template` with `args`, in order.
/// Surplus placeholders are left as they are.
pub fn fill_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "# titles\nCHART_TITLE = Data Visualization\n\nLOADED_DATA=Loaded {} instances\\nwith {} labels\nEQUATION=a=b\n";

    #[test]
    fn test_parse_and_get() {
        let props = Properties::parse(RAW).unwrap();
        assert_eq!(props.len(), 3);
        assert_eq!(props.get("CHART_TITLE"), Ok("Data Visualization"));
        assert_eq!(props.get("EQUATION"), Ok("a=b"));
        assert_eq!(
            props.get("LOADED_DATA"),
            Ok("Loaded {} instances\nwith {} labels")
        );
    }

    #[test]
    fn test_missing_key() {
        let props = Properties::parse(RAW).unwrap();
        assert_eq!(
            props.get("NOPE"),
            Err(PropertyError::MissingKey("NOPE".into()))
        );
        assert_eq!(props.get_or_key("NOPE"), "NOPE");
    }

    #[test]
    fn test_malformed_line() {
        let err = Properties::parse("A=1\nthis is not a property\n").unwrap_err();
        assert_eq!(
            err,
            PropertyError::Malformed {
                line: 2,
                content: "this is not a property".into()
            }
        );
        assert!(Properties::parse("=value").is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let mut props = Properties::parse("A=1\nB=2").unwrap();
        props.merge(Properties::parse("B=3\nC=4").unwrap());
        assert_eq!(props.get("A"), Ok("1"));
        assert_eq!(props.get("B"), Ok("3"));
        assert_eq!(props.get("C"), Ok("4"));
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(
            fill_template("{} instances, {} labels", &[&3, &"two"]),
            "3 instances, two labels"
        );
        assert_eq!(fill_template("{} and {}", &[&1]), "1 and {}");
        assert_eq!(fill_template("no placeholder", &[&1]), "no placeholder");
    }
}
