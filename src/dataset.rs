use ndarray::{Array2, ArrayView2};

use crate::error::{invalid_input, Result};

/// Packs row vectors into a matrix, rejecting ragged or empty input.
pub fn rows_to_array(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n_cols = rows
        .first()
        .map(Vec::len)
        .ok_or_else(|| invalid_input("dataset has no rows"))?;
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n_cols) {
        return Err(invalid_input(format!(
            "row {i} has {} features, expected {n_cols}",
            row.len()
        )));
    }
    let values: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), n_cols), values)
        .map_err(|err| invalid_input(err.to_string()))
}

pub(crate) fn check_features(x: ArrayView2<f64>) -> Result<()> {
    if x.nrows() == 0 {
        return Err(invalid_input("dataset has no rows"));
    }
    if x.ncols() == 0 {
        return Err(invalid_input("dataset has no features"));
    }
    if let Some(((row, col), _)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(invalid_input(format!(
            "non-finite feature value at row {row}, column {col}"
        )));
    }
    Ok(())
}

pub(crate) fn check_lengths(n_x: usize, n_y: usize) -> Result<()> {
    if n_x != n_y {
        return Err(invalid_input(format!(
            "features have {n_x} rows but labels have {n_y}"
        )));
    }
    Ok(())
}
