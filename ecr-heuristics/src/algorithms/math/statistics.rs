#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/statistics_test.rs"]
mod statistics_test;

use crate::utils::{Float, compare_floats_refs};

/// Gets mean of values using given slice.
pub fn get_mean_slice(values: &[Float]) -> Float {
    if values.is_empty() {
        0.
    } else {
        let sum: Float = values.iter().sum();
        sum / values.len() as Float
    }
}

/// Gets mean of values using given iterator.
pub fn get_mean_iter<Iter>(values: Iter) -> Float
where
    Iter: Iterator<Item = Float>,
{
    let (sum, count) = values.fold((0., 0), |(sum, count), item| (sum + item, count + 1));

    if count == 0 { 0. } else { sum / count as Float }
}

/// Returns variance and mean.
pub fn get_variance_mean(values: &[Float]) -> (Float, Float) {
    if values.is_empty() {
        return (0., 0.);
    }

    let mean = get_mean_slice(values);

    let (first, second) = values.iter().fold((0., 0.), |acc, v| {
        let dev = v - mean;
        (acc.0 + dev * dev, acc.1 + dev)
    });

    // NOTE Bessel's correction is not used here
    let variance = (first - (second * second / values.len() as Float)) / (values.len() as Float);

    (variance.max(0.), mean)
}

/// Returns median of values.
pub fn get_median(values: &[Float]) -> Float {
    if values.is_empty() {
        return 0.;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(compare_floats_refs);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 { (sorted[middle - 1] + sorted[middle]) / 2. } else { sorted[middle] }
}

/// Returns Gini coefficient of non-negative values: 0 means perfect equality, values close
/// to 1 mean that almost everything is concentrated in one value.
pub fn get_gini(values: &[Float]) -> Float {
    let total: Float = values.iter().sum();
    if values.is_empty() || total <= 0. {
        return 0.;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(compare_floats_refs);

    let size = sorted.len() as Float;
    let weighted = sorted
        .iter()
        .enumerate()
        .map(|(idx, value)| (2. * (idx + 1) as Float - size - 1.) * value)
        .sum::<Float>();

    weighted / (size * total)
}
