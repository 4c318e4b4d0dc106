use super::*;

fn brute_force_cost(costs: &[Vec<Float>]) -> Float {
    fn permute(costs: &[Vec<Float>], row: usize, used: &mut Vec<bool>, acc: Float, best: &mut Float) {
        if row == costs.len() {
            *best = best.min(acc);
            return;
        }

        (0..used.len()).for_each(|col| {
            if !used[col] {
                used[col] = true;
                permute(costs, row + 1, used, acc + costs[row][col], best);
                used[col] = false;
            }
        });
    }

    let mut best = Float::MAX;
    permute(costs, 0, &mut vec![false; costs[0].len()], 0., &mut best);

    best
}

#[test]
fn can_solve_square_assignment_with_known_optimum() {
    let costs = vec![vec![4., 1., 3.], vec![2., 0., 5.], vec![3., 2., 2.]];

    let assignment = solve_assignment(&costs).expect("cannot solve");

    assert_eq!(assignment.pairs, vec![(0, 1), (1, 0), (2, 2)]);
    assert_eq!(assignment.cost, 5.);
}

parameterized_test! {can_solve_rectangular_assignment, (costs, expected_size), {
    can_solve_rectangular_assignment_impl(costs, expected_size);
}}

can_solve_rectangular_assignment! {
    case_01_wide: (vec![vec![10., 2., 8.], vec![7., 3., 1.]], 2),
    case_02_tall: (vec![vec![10., 2.], vec![7., 3.], vec![1., 9.]], 2),
    case_03_single: (vec![vec![5.]], 1),
}

fn can_solve_rectangular_assignment_impl(costs: Vec<Vec<Float>>, expected_size: usize) {
    let assignment = solve_assignment(&costs).expect("cannot solve");

    assert_eq!(assignment.pairs.len(), expected_size);

    let mut rows = assignment.pairs.iter().map(|(row, _)| *row).collect::<Vec<_>>();
    let mut cols = assignment.pairs.iter().map(|(_, col)| *col).collect::<Vec<_>>();
    rows.dedup();
    cols.sort_unstable();
    cols.dedup();
    assert_eq!(rows.len(), expected_size);
    assert_eq!(cols.len(), expected_size);

    let expected_cost = if costs.len() <= costs[0].len() {
        brute_force_cost(&costs)
    } else {
        let transposed = (0..costs[0].len()).map(|col| costs.iter().map(|row| row[col]).collect()).collect::<Vec<Vec<_>>>();
        brute_force_cost(&transposed)
    };
    assert_eq!(assignment.cost, expected_cost);
}

#[test]
fn can_match_brute_force_on_random_matrices() {
    let random = crate::helpers::utils::create_test_random();

    (0..20).for_each(|_| {
        let size = random.uniform_int(1, 5) as usize;
        let costs = (0..size)
            .map(|_| (0..size).map(|_| random.uniform_int(0, 50) as Float).collect())
            .collect::<Vec<Vec<_>>>();

        let assignment = solve_assignment(&costs).expect("cannot solve");

        assert_eq!(assignment.cost, brute_force_cost(&costs));
    });
}

parameterized_test! {can_reject_invalid_matrix, costs, {
    assert!(solve_assignment(&costs).is_err());
}}

can_reject_invalid_matrix! {
    case_01_empty: Vec::<Vec<Float>>::new(),
    case_02_empty_row: vec![Vec::<Float>::new()],
    case_03_ragged: vec![vec![1., 2.], vec![1.]],
    case_04_infinite: vec![vec![1., Float::INFINITY], vec![1., 2.]],
    case_05_nan: vec![vec![Float::NAN]],
}
