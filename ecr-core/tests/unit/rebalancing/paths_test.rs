use super::*;

fn create_path(from: &str, to: &str, cost: Float, priority: Float) -> RepositioningPath {
    RepositioningPath {
        from: from.to_string(),
        to: to.to_string(),
        containers: 0,
        distance: 2000.,
        cost,
        transit_days: 4,
        priority,
    }
}

fn get_pairs(paths: &[RepositioningPath]) -> Vec<(&str, &str)> {
    paths.iter().map(|path| (path.from.as_str(), path.to.as_str())).collect()
}

parameterized_test! {can_get_path_cost, (distance, expected), {
    can_get_path_cost_impl(distance, expected);
}}

can_get_path_cost! {
    case_01_same_place: (0., 45.),
    case_02_short: (1000., 85.),
    case_03_long: (7500., 345.),
}

fn can_get_path_cost_impl(distance: Float, expected: Float) {
    assert!((get_path_cost(distance, &RebalanceConfig::default()) - expected).abs() < 1E-9);
}

#[test]
fn can_get_path_priority() {
    let mut network = PortNetwork::default();
    network.set_importance("A", 0.9).set_importance("B", 0.7);
    let config = RebalanceConfig::default();

    assert!((get_path_priority("A", "B", 0., &network, &config) - (0.6 + 0.32)).abs() < 1E-9);
    assert!((get_path_priority("C", "D", 1000., &network, &config) - 0.5).abs() < 1E-9);
}

parameterized_test! {can_get_path_containers, (distance, base_amount, expected), {
    can_get_path_containers_impl(distance, base_amount, expected);
}}

can_get_path_containers! {
    case_01_long: (6000., 500, 350),
    case_02_medium: (3000., 500, 500),
    case_03_short: (500., 500, 650),
    case_04_min_lot: (6000., 100, 100),
    case_05_max_per_path: (500., 1000, 1000),
    case_06_long_boundary: (5000., 500, 500),
    case_07_short_boundary: (1000., 500, 500),
}

fn can_get_path_containers_impl(distance: Float, base_amount: usize, expected: usize) {
    let config = RebalanceConfig { base_amount, ..RebalanceConfig::default() };

    assert_eq!(get_path_containers(distance, &config), expected);
}

#[test]
fn can_create_feasible_paths_ordered_by_priority() {
    let mut network = PortNetwork::default();
    network.add_distance("E1", "S1", 3000.).add_distance("E1", "S2", 500.).add_distance("E2", "S1", 20_000.);
    let analysis = ImbalanceAnalysis {
        excess_ports: vec!["E1".to_string(), "E2".to_string()],
        shortage_ports: vec!["S1".to_string(), "S2".to_string()],
        ..ImbalanceAnalysis::default()
    };

    let paths = create_paths(&analysis, &network, &RebalanceConfig::default());

    assert_eq!(get_pairs(paths.as_slice()), vec![("E1", "S2"), ("E1", "S1")]);
    assert_eq!(paths[0].transit_days, 1);
    assert_eq!(paths[1].transit_days, 6);
    assert_eq!(paths[1].cost, get_path_cost(3000., &RebalanceConfig::default()));
    assert!(paths.iter().all(|path| path.containers == 0));
}

#[test]
fn can_match_paths_with_minimum_total_cost() {
    let costs = [[4., 1., 3.], [2., 0., 5.], [3., 2., 2.]];
    let paths = costs
        .iter()
        .enumerate()
        .flat_map(|(row, values)| {
            values.iter().enumerate().map(move |(col, &cost)| create_path(&format!("E{row}"), &format!("S{col}"), cost, 0.5))
        })
        .collect::<Vec<_>>();

    let (selected, is_fallback) = match_paths(paths.as_slice(), &RebalanceConfig::default());

    assert!(!is_fallback);
    assert_eq!(get_pairs(selected.as_slice()), vec![("E0", "S1"), ("E1", "S0"), ("E2", "S2")]);
    assert_eq!(selected.iter().map(|path| path.cost).sum::<Float>(), 5.);
    assert!(selected.iter().all(|path| path.containers == 500));
}

#[test]
fn can_drop_matches_on_infeasible_pairs() {
    let paths = vec![
        create_path("E0", "S0", 1., 0.5),
        create_path("E0", "S1", 1., 0.5),
        create_path("E0", "S2", 1., 0.5),
        create_path("E1", "S0", 1., 0.5),
        create_path("E2", "S0", 1., 0.5),
    ];

    let (selected, is_fallback) = match_paths(paths.as_slice(), &RebalanceConfig::default());

    assert!(!is_fallback);
    assert_eq!(selected.len(), 2);
    assert!(selected.iter().all(|path| paths.contains(&RepositioningPath { containers: 0, ..path.clone() })));
    assert_ne!(selected[0].to, selected[1].to);
    assert_ne!(selected[0].from, selected[1].from);
}

#[test]
fn can_fallback_to_priority_when_assignment_fails() {
    let paths = vec![create_path("E0", "S0", Float::INFINITY, 0.9), create_path("E0", "S1", Float::INFINITY, 0.8)];

    let (selected, is_fallback) = match_paths(paths.as_slice(), &RebalanceConfig::default());

    assert!(is_fallback);
    assert_eq!(get_pairs(selected.as_slice()), vec![("E0", "S0")]);
    assert_eq!(selected[0].containers, 500);
}

#[test]
fn can_match_no_paths() {
    let (selected, is_fallback) = match_paths(&[], &RebalanceConfig::default());

    assert!(selected.is_empty());
    assert!(!is_fallback);
}
