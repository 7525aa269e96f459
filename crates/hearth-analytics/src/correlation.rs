//! Pearson correlation between numeric columns.

use hearth_core::{Dataset, NumericColumn};
use tracing::debug;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Computes the Pearson correlation coefficient between two columns.
///
/// The column names are used only for error context. Requires at least two
/// paired values; a zero-variance column makes the coefficient undefined
/// and is reported as [`AnalyticsError::ZeroVariance`] rather than as 0.
pub fn pearson(
    x_name: &str,
    xs: &[f64],
    y_name: &str,
    ys: &[f64],
) -> AnalyticsResult<f64> {
    if xs.len() != ys.len() {
        return Err(AnalyticsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(AnalyticsError::InsufficientData {
            required: 2,
            actual: xs.len(),
        });
    }
    for (index, (&x, &y)) in xs.iter().zip(ys).enumerate() {
        if !x.is_finite() {
            return Err(AnalyticsError::NonFiniteValue {
                column: x_name.to_string(),
                row: index + 1,
            });
        }
        if !y.is_finite() {
            return Err(AnalyticsError::NonFiniteValue {
                column: y_name.to_string(),
                row: index + 1,
            });
        }
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 {
        return Err(AnalyticsError::zero_variance(x_name));
    }
    if var_y == 0.0 {
        return Err(AnalyticsError::zero_variance(y_name));
    }

    let coefficient = covariance / (var_x.sqrt() * var_y.sqrt());
    debug!(x = x_name, y = y_name, coefficient, "computed correlation");
    Ok(coefficient)
}

/// Correlates two numeric columns of a dataset.
pub fn column_correlation(
    dataset: &Dataset,
    x: NumericColumn,
    y: NumericColumn,
) -> AnalyticsResult<f64> {
    pearson(
        x.header(),
        &dataset.column(x),
        y.header(),
        &dataset.column(y),
    )
}
