use super::*;

parameterized_test! {can_detect_target, (fitness, target, expected), {
    can_detect_target_impl(fitness, target, expected);
}}

can_detect_target! {
    case_01_above: (Some(-2000.), -3000., true),
    case_02_equal: (Some(-3000.), -3000., true),
    case_03_below: (Some(-3001.), -3000., false),
    case_04_no_generations: (None, -3000., false),
}

fn can_detect_target_impl(fitness: Option<Float>, target: Float, expected: bool) {
    let mut statistics = HeuristicStatistics::default();
    if let Some(fitness) = fitness {
        statistics.on_generation(fitness, 0.);
    }

    let result = TargetFitness::new(target).is_termination(&statistics);

    assert_eq!(result, expected);
}
