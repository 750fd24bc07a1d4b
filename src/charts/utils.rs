/// Min and max of the finite values, widened by 5% of their span on each side.
pub fn padded_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            Some((min, max)) => Some((min.min(v), max.max(v))),
            None => Some((v, v)),
        })?;

    let span = (max - min).max(0.01);
    Some((min - span * 0.05, max + span * 0.05))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range_widens_by_five_percent() {
        let (min, max) = padded_range([0.0, 10.0, 5.0].into_iter()).unwrap();
        assert!((min - -0.5).abs() < 1e-9);
        assert!((max - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_padded_range_single_value_is_not_empty() {
        let (min, max) = padded_range(std::iter::once(2.0)).unwrap();
        assert!(min < 2.0 && max > 2.0);
    }

    #[test]
    fn test_padded_range_ignores_non_finite() {
        let (min, max) = padded_range([f64::NAN, 1.0, f64::INFINITY, 3.0].into_iter()).unwrap();
        assert!(min > 0.8 && max < 3.2);
        assert!(padded_range([f64::NAN].into_iter()).is_none());
    }
}
