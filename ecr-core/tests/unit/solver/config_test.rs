use super::*;

parameterized_test! {can_create_config_from_preset, (name, expected), {
    can_create_config_from_preset_impl(name, expected);
}}

can_create_config_from_preset! {
    case_01_quick: ("quick", (50, 20, 10, 10)),
    case_02_medium: ("medium", (100, 50, 20, 25)),
    case_03_standard: ("standard", (200, 100, 40, 50)),
    case_04_full: ("full", (1000, 2000, 200, 200)),
    case_05_default: ("default", (100, 100, 20, 50)),
}

fn can_create_config_from_preset_impl(name: &str, expected: (usize, usize, usize, usize)) {
    let preset = SolverPreset::from_str(name).unwrap();

    let config = SolverConfig::from_preset(preset);

    assert_eq!((config.population_size, config.max_generations, config.elite_size, config.patience), expected);
    assert!(config.validate().is_ok());
}

#[test]
fn can_reject_unknown_preset() {
    let result = SolverPreset::from_str("huge");

    assert!(result.err().is_some_and(|err| err.to_string().contains("unknown preset: 'huge'")));
}

#[test]
fn can_use_default_values() {
    let config = SolverConfig::default();

    assert_eq!(config, SolverConfig::from_preset(SolverPreset::Default));
    assert_eq!(config.convergence_threshold, 0.0005);
    assert_eq!(config.target_fitness, -3000.);
    assert_eq!(config.crossover_probability, 0.85);
    assert_eq!(config.mutation_probability, 0.25);
    assert_eq!(config.max_mutation_rate, 0.5);
    assert_eq!(config.diversity_sample, 50);
    assert!(config.imbalance.is_none());
}

parameterized_test! {can_validate_config, (modify, expected), {
    can_validate_config_impl(modify, expected);
}}

can_validate_config! {
    case_01_zero_population: (|c: &mut SolverConfig| { c.population_size = 0; c.elite_size = 0; },
        Some("population size must be positive, elite size (0) must be less than population size (0)")),
    case_02_zero_generations: (|c: &mut SolverConfig| c.max_generations = 0, Some("max generations must be positive")),
    case_03_large_elite: (|c: &mut SolverConfig| c.elite_size = 100, Some("elite size (100) must be less than population size (100)")),
    case_04_bad_crossover: (|c: &mut SolverConfig| c.crossover_probability = 1.5, Some("crossover probability must be in [0, 1] range, got 1.5")),
    case_05_bad_imbalance: (|c: &mut SolverConfig| c.imbalance = Some(ImbalanceConfig { alpha: 0.9, ..ImbalanceConfig::default() }), Some("alpha and beta must be non-negative and sum to one, got 0.9 and 0.3")),
    case_06_valid: (|c: &mut SolverConfig| c.imbalance = Some(ImbalanceConfig::default()), None),
}

fn can_validate_config_impl(modify: fn(&mut SolverConfig), expected: Option<&str>) {
    let mut config = SolverConfig::default();
    modify(&mut config);

    let result = config.validate();

    assert_eq!(result.err().map(|err| err.to_string()), expected.map(|msg| msg.to_string()));
}
