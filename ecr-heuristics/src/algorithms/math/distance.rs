#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates euclidean distance between two vectors of the same size.
pub fn euclidean_distance<A, B>(a: A, b: B) -> Float
where
    A: Iterator<Item = Float>,
    B: Iterator<Item = Float>,
{
    a.zip(b).fold(Float::default(), |acc, (a, b)| acc + (a - b) * (a - b)).sqrt()
}

/// Calculates a mean pairwise euclidean distance over given points. Returns zero when there
/// are less than two points.
pub fn mean_pairwise_distance<'a, P, F, I>(points: &'a [P], coordinates: F) -> Float
where
    F: Fn(&'a P) -> I,
    I: Iterator<Item = Float>,
{
    if points.len() < 2 {
        return 0.;
    }

    let (sum, count) = points.iter().enumerate().fold((0., 0_usize), |acc, (idx, left)| {
        points.iter().skip(idx + 1).fold(acc, |(sum, count), right| {
            (sum + euclidean_distance(coordinates(left), coordinates(right)), count + 1)
        })
    });

    sum / count as Float
}
