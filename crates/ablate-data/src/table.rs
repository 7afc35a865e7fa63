//! Coercion of table-like inputs into `ndarray` arrays.
//!
//! Evaluators accept feature matrices and targets in several shapes: owned
//! arrays, array views, plain row vectors and polars frames. Everything is
//! normalized to `Array2<f64>` / `Array1<f64>` here, preserving row and
//! column order and values exactly, before any masking logic runs.

use crate::error::{DataError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use polars::prelude::{Column, DataFrame, DataType, Series};

/// A two-dimensional, table-like feature input.
#[derive(Debug, Clone, Copy)]
pub enum FeatureTable<'a> {
    /// Dense numeric array (rows = samples).
    Array(ArrayView2<'a, f64>),
    /// Row-major vectors, one per sample.
    Rows(&'a [Vec<f64>]),
    /// Labeled polars table; every column must be numeric or boolean.
    Frame(&'a DataFrame),
}

impl<'a> From<ArrayView2<'a, f64>> for FeatureTable<'a> {
    fn from(view: ArrayView2<'a, f64>) -> Self {
        Self::Array(view)
    }
}

impl<'a> From<&'a Array2<f64>> for FeatureTable<'a> {
    fn from(array: &'a Array2<f64>) -> Self {
        Self::Array(array.view())
    }
}

impl<'a> From<&'a [Vec<f64>]> for FeatureTable<'a> {
    fn from(rows: &'a [Vec<f64>]) -> Self {
        Self::Rows(rows)
    }
}

impl<'a> From<&'a Vec<Vec<f64>>> for FeatureTable<'a> {
    fn from(rows: &'a Vec<Vec<f64>>) -> Self {
        Self::Rows(rows.as_slice())
    }
}

impl<'a> From<&'a DataFrame> for FeatureTable<'a> {
    fn from(frame: &'a DataFrame) -> Self {
        Self::Frame(frame)
    }
}

impl FeatureTable<'_> {
    /// Short name of the input representation.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Array(_) => "array",
            Self::Rows(_) => "rows",
            Self::Frame(_) => "dataframe",
        }
    }

    /// Coerce into an owned `Array2<f64>`.
    ///
    /// `argument` names the input in error messages (e.g. `"X_train"`).
    ///
    /// # Errors
    /// Returns [`DataError::RaggedRows`] for rows of unequal length,
    /// [`DataError::UnsupportedType`] for non-numeric frame columns and
    /// [`DataError::NullValues`] for frames containing nulls.
    pub fn to_array(&self, argument: &'static str) -> Result<Array2<f64>> {
        match self {
            Self::Array(view) => Ok(view.to_owned()),
            Self::Rows(rows) => rows_to_array(rows, argument),
            Self::Frame(frame) => frame_to_array(frame, argument),
        }
    }
}

/// A one-dimensional target input.
#[derive(Debug, Clone, Copy)]
pub enum TargetColumn<'a> {
    /// Dense numeric array.
    Array(ArrayView1<'a, f64>),
    /// Plain slice.
    Slice(&'a [f64]),
    /// Polars series; must be numeric or boolean without nulls.
    Series(&'a Series),
}

impl<'a> From<ArrayView1<'a, f64>> for TargetColumn<'a> {
    fn from(view: ArrayView1<'a, f64>) -> Self {
        Self::Array(view)
    }
}

impl<'a> From<&'a Array1<f64>> for TargetColumn<'a> {
    fn from(array: &'a Array1<f64>) -> Self {
        Self::Array(array.view())
    }
}

impl<'a> From<&'a [f64]> for TargetColumn<'a> {
    fn from(values: &'a [f64]) -> Self {
        Self::Slice(values)
    }
}

impl<'a> From<&'a Vec<f64>> for TargetColumn<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Self::Slice(values.as_slice())
    }
}

impl<'a> From<&'a Series> for TargetColumn<'a> {
    fn from(series: &'a Series) -> Self {
        Self::Series(series)
    }
}

impl<'a> From<&'a Column> for TargetColumn<'a> {
    fn from(column: &'a Column) -> Self {
        Self::Series(column.as_materialized_series())
    }
}

impl TargetColumn<'_> {
    /// Number of values, without coercing.
    pub fn len(&self) -> usize {
        match self {
            Self::Array(view) => view.len(),
            Self::Slice(values) => values.len(),
            Self::Series(series) => series.len(),
        }
    }

    /// Whether the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coerce into an owned `Array1<f64>`.
    ///
    /// # Errors
    /// Returns [`DataError::UnsupportedType`] or [`DataError::NullValues`]
    /// for series that cannot be read as `f64` values.
    pub fn to_array(&self, argument: &'static str) -> Result<Array1<f64>> {
        match self {
            Self::Array(view) => Ok(view.to_owned()),
            Self::Slice(values) => Ok(Array1::from(values.to_vec())),
            Self::Series(series) => Ok(Array1::from(series_values(series, argument)?)),
        }
    }
}

/// Coerce any feature-table input into an owned array.
///
/// # Errors
/// See [`FeatureTable::to_array`].
pub fn to_array<'a>(table: impl Into<FeatureTable<'a>>, argument: &'static str) -> Result<Array2<f64>> {
    table.into().to_array(argument)
}

fn rows_to_array(rows: &[Vec<f64>], argument: &'static str) -> Result<Array2<f64>> {
    let n_features = rows.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(rows.len() * n_features);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != n_features {
            return Err(DataError::RaggedRows {
                argument,
                row,
                expected: n_features,
                actual: values.len(),
            });
        }
        flat.extend_from_slice(values);
    }
    Ok(Array2::from_shape_vec((rows.len(), n_features), flat)?)
}

fn frame_to_array(frame: &DataFrame, argument: &'static str) -> Result<Array2<f64>> {
    let (n_rows, n_cols) = frame.shape();
    let mut out = Array2::<f64>::zeros((n_rows, n_cols));
    for (j, column) in frame.get_columns().iter().enumerate() {
        let values = series_values(column.as_materialized_series(), argument)?;
        out.column_mut(j).assign(&ArrayView1::from(values.as_slice()));
    }
    Ok(out)
}

const fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Boolean
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Int32
            | DataType::Int64
            | DataType::Float32
            | DataType::Float64
    )
}

fn series_values(series: &Series, argument: &'static str) -> Result<Vec<f64>> {
    if !is_numeric(series.dtype()) {
        return Err(DataError::UnsupportedType {
            argument,
            column: series.name().to_string(),
            dtype: series.dtype().to_string(),
        });
    }
    if series.null_count() > 0 {
        return Err(DataError::NullValues {
            argument,
            column: series.name().to_string(),
        });
    }

    let cast = series.cast(&DataType::Float64)?;
    cast.f64()?
        .iter()
        .map(|value| {
            value.ok_or_else(|| DataError::NullValues {
                argument,
                column: series.name().to_string(),
            })
        })
        .collect()
}
