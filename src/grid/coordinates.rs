//! Grid coordinate extraction from dot-separated tile filenames
//!
//! A tile named `tile.3.-2.png` splits into the fields `tile`, `3`, `-2`, `png`.
//! A [`CoordinateRule`] selects which two adjacent fields hold `x` and `y`.

use crate::io::configuration::{DEFAULT_COORDINATE_FIELD, FIELD_SEPARATOR};
use crate::io::error::{Result, malformed_filename};
use std::path::Path;

/// Location of the coordinate pair among the filename fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateRule {
    /// Coordinates are the two fields following the first `skip` fields
    AfterPrefix {
        /// Number of leading fields before `x`
        skip: usize,
    },
    /// Coordinates are the two fields preceding the last `trailing` fields
    BeforeSuffix {
        /// Number of fields after `y`, extension included
        trailing: usize,
    },
}

impl Default for CoordinateRule {
    fn default() -> Self {
        Self::AfterPrefix {
            skip: DEFAULT_COORDINATE_FIELD,
        }
    }
}

impl CoordinateRule {
    /// Indices of the `x` and `y` fields for a name with `field_count` fields
    ///
    /// Returns `None` when the name has too few fields for this rule
    pub const fn field_indices(self, field_count: usize) -> Option<(usize, usize)> {
        let x = match self {
            Self::AfterPrefix { skip } => Some(skip),
            Self::BeforeSuffix { trailing } => match trailing.checked_add(2) {
                Some(tail) => field_count.checked_sub(tail),
                None => None,
            },
        };

        match x {
            Some(x) if x < field_count && x + 1 < field_count => Some((x, x + 1)),
            _ => None,
        }
    }

    /// Extract the `(x, y)` grid coordinate from a tile path
    ///
    /// Only the file name takes part, so dots in directory names are ignored.
    ///
    /// # Errors
    ///
    /// Returns a malformed filename error if:
    /// - The path has no UTF-8 file name
    /// - The name has too few fields for this rule
    /// - Either selected field is not an integer
    pub fn parse(self, path: &Path) -> Result<(i32, i32)> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| malformed_filename(path, &"file name is missing or not UTF-8"))?;

        let fields: Vec<&str> = name.split(FIELD_SEPARATOR).collect();
        let (x_index, y_index) = self.field_indices(fields.len()).ok_or_else(|| {
            malformed_filename(
                path,
                &format!(
                    "expected two coordinate fields ({}) but the name has only {} fields",
                    self.describe(),
                    fields.len()
                ),
            )
        })?;

        let x = parse_field(path, &fields, x_index, "x")?;
        let y = parse_field(path, &fields, y_index, "y")?;
        Ok((x, y))
    }

    fn describe(self) -> String {
        match self {
            Self::AfterPrefix { skip } => format!("after {skip} leading fields"),
            Self::BeforeSuffix { trailing } => format!("before {trailing} trailing fields"),
        }
    }
}

fn parse_field(path: &Path, fields: &[&str], index: usize, axis: &str) -> Result<i32> {
    let field = fields.get(index).copied().ok_or_else(|| {
        malformed_filename(path, &format!("{axis} field at position {index} is missing"))
    })?;

    field.parse::<i32>().map_err(|e| {
        malformed_filename(
            path,
            &format!("{axis} field '{field}' at position {index} is not an integer ({e})"),
        )
    })
}
