use super::*;

parameterized_test! {can_detect_stagnation, (fitness, patience, expected), {
    can_detect_stagnation_impl(fitness, patience, expected);
}}

can_detect_stagnation! {
    case_01_stagnated: (vec![-100., -100., -100., -100.], 3, true),
    case_02_not_yet: (vec![-100., -100., -100.], 3, false),
    case_03_improved: (vec![-100., -100., -100., -50.], 3, false),
    case_04_marginal_improvement: (vec![-100., -99.99, -99.98, -99.97], 3, true),
}

fn can_detect_stagnation_impl(fitness: Vec<Float>, patience: usize, expected: bool) {
    let mut statistics = HeuristicStatistics::default();
    fitness.into_iter().for_each(|fitness| {
        statistics.on_generation(fitness, 0.0005);
    });

    let result = MaxStagnation::new(patience).is_termination(&statistics);

    assert_eq!(result, expected);
}
