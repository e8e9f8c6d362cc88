#![warn(clippy::all, rust_2018_idioms)]

//! Parser for tab separated data (TSD), the text format in which data
//! points are entered.
//!
//! Every non-blank line describes one instance:
//!
//! ```text
//! @name<TAB>label<TAB>x,y
//! ```
//!
//! Names start with `@` and must be unique. The label `null` marks an
//! unlabelled instance.

use std::collections::HashSet;

use thiserror::Error;

pub const NULL_LABEL: &str = "null";
const NAME_PREFIX: char = '@';
const FIELD_DELIMITER: char = '\t';
const COORDINATE_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: String,
    pub label: Option<String>,
    pub point: [f64; 2],
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("name must start with '@'")]
    MissingPrefix,

    #[error("name is empty")]
    EmptyName,

    #[error("expected 3 tab separated fields, found {0}")]
    FieldCount(usize),

    #[error("label is empty")]
    EmptyLabel,

    #[error("point must be two numbers separated by ','")]
    InvalidPoint,

    #[error("coordinates must be finite")]
    NonFinite,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid data in line {line}: {reason}")]
    InvalidLine { line: usize, reason: LineError },

    #[error("duplicate instance name '{name}' in line {line}")]
    DuplicateName { line: usize, name: String },
}

/// Instances in the order they appear in the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    instances: Vec<Instance>,
}

impl DataSet {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut instances = Vec::new();
        let mut names = HashSet::new();
        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            if line.trim().is_empty() {
                continue;
            }
            log::trace!("line {}: '{}'", line_no, line);
            let instance = parse_line(line).map_err(|reason| ParseError::InvalidLine {
                line: line_no,
                reason,
            })?;
            if !names.insert(instance.name.clone()) {
                return Err(ParseError::DuplicateName {
                    line: line_no,
                    name: instance.name,
                });
            }
            instances.push(instance);
        }
        log::debug!("parsed {} instances", instances.len());
        Ok(Self { instances })
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Distinct labels in order of first appearance, unlabelled instances
    /// are not counted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for label in self.instances.iter().filter_map(|i| i.label.as_deref()) {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }

    /// Points grouped by label, in order of first appearance.
    pub fn series(&self) -> Vec<(Option<&str>, Vec<[f64; 2]>)> {
        let mut series: Vec<(Option<&str>, Vec<[f64; 2]>)> = Vec::new();
        for instance in self.instances.iter() {
            let label = instance.label.as_deref();
            match series.iter_mut().find(|(l, _)| *l == label) {
                Some((_, points)) => points.push(instance.point),
                None => series.push((label, vec![instance.point])),
            }
        }
        series
    }

    /// `[xmin, xmax, ymin, ymax]`, `None` for an empty data set.
    pub fn bounds(&self) -> Option<[f64; 4]> {
        self.instances.iter().map(|i| i.point).fold(None, |acc, [x, y]| {
            Some(match acc {
                None => [x, x, y, y],
                Some([xmin, xmax, ymin, ymax]) => {
                    [xmin.min(x), xmax.max(x), ymin.min(y), ymax.max(y)]
                }
            })
        })
    }
}

fn parse_line(line: &str) -> Result<Instance, LineError> {
    let fields: Vec<&str> = line.trim_end().split(FIELD_DELIMITER).collect();
    let [name, label, point] = fields[..] else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let name = name.trim();
    let Some(stripped) = name.strip_prefix(NAME_PREFIX) else {
        return Err(LineError::MissingPrefix);
    };
    if stripped.trim().is_empty() {
        return Err(LineError::EmptyName);
    }

    let label = match label.trim() {
        "" => return Err(LineError::EmptyLabel),
        NULL_LABEL => None,
        label => Some(label.to_owned()),
    };

    let Some((x, y)) = point.split_once(COORDINATE_DELIMITER) else {
        return Err(LineError::InvalidPoint);
    };
    let (Ok(x), Ok(y)) = (x.trim().parse::<f64>(), y.trim().parse::<f64>()) else {
        return Err(LineError::InvalidPoint);
    };
    if !(x.is_finite() && y.is_finite()) {
        return Err(LineError::NonFinite);
    }

    Ok(Instance {
        name: name.to_owned(),
        label,
        point: [x, y],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "@a\tred\t1,2\n@b\tnull\t-1.5,3e2\n\n@c\tblue\t0, 0\n@d\tred\t4,1\n";

    #[test]
    fn test_parse_valid_text() {
        let _ = env_logger::builder().is_test(true).try_init();
        let data = DataSet::parse(TEXT).unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(
            data.instances()[1],
            Instance {
                name: "@b".into(),
                label: None,
                point: [-1.5, 300.0]
            }
        );
        assert_eq!(data.labels(), ["red", "blue"]);
        assert_eq!(data.bounds(), Some([-1.5, 4.0, 0.0, 300.0]));
    }

    #[test]
    fn test_series_grouped_by_label() {
        let data = DataSet::parse(TEXT).unwrap();
        let series = data.series();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0], (Some("red"), vec![[1.0, 2.0], [4.0, 1.0]]));
        assert_eq!(series[1], (None, vec![[-1.5, 300.0]]));
        assert_eq!(series[2], (Some("blue"), vec![[0.0, 0.0]]));
    }

    #[test]
    fn test_empty_text() {
        let data = DataSet::parse("\n  \n").unwrap();
        assert!(data.is_empty());
        assert_eq!(data.bounds(), None);
    }

    #[test]
    fn test_invalid_lines() {
        let cases = [
            ("a\tred\t1,2", LineError::MissingPrefix),
            ("@\tred\t1,2", LineError::EmptyName),
            ("@a red 1,2", LineError::FieldCount(1)),
            ("@a\tred\t1,2\textra", LineError::FieldCount(4)),
            ("@a\t\t1,2", LineError::EmptyLabel),
            ("@a\tred\t1;2", LineError::InvalidPoint),
            ("@a\tred\tx,2", LineError::InvalidPoint),
            ("@a\tred\tinf,2", LineError::NonFinite),
        ];
        for (line, reason) in cases {
            let text = format!("@ok\tnull\t0,0\n{line}\n");
            assert_eq!(
                DataSet::parse(&text),
                Err(ParseError::InvalidLine { line: 2, reason }),
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn test_duplicate_name() {
        let err = DataSet::parse("@a\tred\t1,2\n@b\tred\t1,2\n@a\tblue\t0,0").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateName {
                line: 3,
                name: "@a".into()
            }
        );
    }
}
