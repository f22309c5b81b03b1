//! Column grid layout.
//!
//! Computes contact centres for a set of vertical columns. Column `i` sits
//! at `x = i * xpitch`; contact `j` of that column sits at
//! `y = j * ypitch + y_shift[i]`. Output is column-major.

use serde::{Deserialize, Serialize};

use crate::probe::{Point, ProbeError, ProbeResult};

/// Number of contacts in each column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactsPerColumn {
    /// Same count in every column.
    Uniform(usize),
    /// One count per column.
    PerColumn(Vec<usize>),
}

impl Default for ContactsPerColumn {
    fn default() -> Self {
        Self::Uniform(10)
    }
}

impl ContactsPerColumn {
    /// Expands to exactly one count per column.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::LengthMismatch`] if a per-column list does not
    /// have `num_columns` entries.
    pub fn normalise(&self, num_columns: usize) -> ProbeResult<Vec<usize>> {
        match self {
            Self::Uniform(count) => Ok(vec![*count; num_columns]),
            Self::PerColumn(counts) if counts.len() == num_columns => Ok(counts.clone()),
            Self::PerColumn(counts) => Err(ProbeError::length_mismatch(
                "num_contact_per_column",
                num_columns,
                counts.len(),
            )),
        }
    }
}

/// Computes contact positions for `num_columns` columns.
///
/// `y_shift_per_column` defaults to all zeros.
///
/// # Errors
///
/// Returns [`ProbeError::LengthMismatch`] if `counts` or
/// `y_shift_per_column` does not have one entry per column.
#[allow(clippy::cast_precision_loss)] // counts are far below 2^52
pub fn generate_columns(
    num_columns: usize,
    counts: &ContactsPerColumn,
    xpitch: f64,
    ypitch: f64,
    y_shift_per_column: Option<&[f64]>,
) -> ProbeResult<Vec<Point>> {
    let counts = counts.normalise(num_columns)?;

    let shifts = match y_shift_per_column {
        Some(shifts) if shifts.len() == num_columns => shifts.to_vec(),
        Some(shifts) => {
            return Err(ProbeError::length_mismatch(
                "y_shift_per_column",
                num_columns,
                shifts.len(),
            ))
        }
        None => vec![0.0; num_columns],
    };

    let mut positions = Vec::with_capacity(counts.iter().sum());
    for (column, (&count, &shift)) in counts.iter().zip(&shifts).enumerate() {
        let x = column as f64 * xpitch;
        positions.extend((0..count).map(|row| Point::new(x, (row as f64).mul_add(ypitch, shift))));
    }

    Ok(positions)
}
