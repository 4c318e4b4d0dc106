use super::*;

#[test]
fn can_calculate_euclidean_distance() {
    let distance = euclidean_distance([0., 0.].into_iter(), [3., 4.].into_iter());

    assert_eq!(distance, 5.);
}

#[test]
fn can_calculate_mean_pairwise_distance() {
    let points = vec![vec![0., 0.], vec![3., 4.], vec![0., 0.]];

    let distance = mean_pairwise_distance(&points, |point| point.iter().cloned());

    // pairs: 5, 0, 5
    assert!((distance - 10. / 3.).abs() < 1E-9);
}

#[test]
fn can_return_zero_distance_for_less_than_two_points() {
    let points = vec![vec![1., 2.]];

    assert_eq!(mean_pairwise_distance(&points, |point| point.iter().cloned()), 0.);
    assert_eq!(mean_pairwise_distance::<Vec<Float>, _, _>(&[], |point| point.iter().cloned()), 0.);
}
