use crate::{Error, Result, Vector};

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptyInput("y_true and y_pred must not be empty"));
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / diff.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x.abs()).sum() / diff.len() as f64)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 5.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 4.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_absolute_error() {
        let y_true = array![1.0, -2.0, 3.0, 0.0];
        let y_pred = array![2.0, -2.0, 1.0, 0.0];

        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert!((mae - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);

        let mean_only = array![2.5, 2.5, 2.5, 2.5];
        let r2 = r2_score(&y_true, &mean_only).unwrap();
        assert!(r2.abs() < 1e-10);
    }

    #[test]
    fn test_metrics_reject_bad_input() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0];
        assert!(matches!(
            mean_squared_error(&y_true, &y_pred),
            Err(Error::LengthMismatch { expected: 2, got: 1 })
        ));

        let empty = Vector::zeros(0);
        assert!(matches!(r2_score(&empty, &empty), Err(Error::EmptyInput(_))));
    }
}
