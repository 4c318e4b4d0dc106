use super::*;

fn create_levels(levels: &[(&str, Float)]) -> Vec<(String, Float)> {
    levels.iter().map(|&(port, level)| (port.to_string(), level)).collect()
}

#[test]
fn can_classify_ports() {
    let analysis = ImbalanceAnalysis::new(create_levels(&[("A", 100.), ("B", 0.), ("C", 50.)]), 0.5);

    assert_eq!(analysis.excess_ports, vec!["A".to_string()]);
    assert_eq!(analysis.shortage_ports, vec!["B".to_string()]);
    assert_eq!(analysis.balanced_ports, vec!["C".to_string()]);
    assert_eq!(analysis.mean, 50.);
    assert!((analysis.std_dev - (5000. / 3. as Float).sqrt()).abs() < 1E-9);
    assert!((analysis.excess_threshold - (50. + 0.5 * analysis.std_dev)).abs() < 1E-9);
    assert!(!analysis.is_balanced());
}

parameterized_test! {can_detect_balanced_levels, (levels, factor), {
    can_detect_balanced_levels_impl(levels, factor);
}}

can_detect_balanced_levels! {
    case_01_equal: (vec![("A", 10.), ("B", 10.), ("C", 10.)], 0.5),
    case_02_wide_band: (vec![("A", 10.), ("B", 10.), ("C", 10.), ("D", 100.)], 2.),
    case_03_empty: (vec![], 0.5),
}

fn can_detect_balanced_levels_impl(levels: Vec<(&str, Float)>, factor: Float) {
    let analysis = ImbalanceAnalysis::new(create_levels(levels.as_slice()), factor);

    assert!(analysis.is_balanced());
}

#[test]
fn can_keep_port_levels() {
    let levels = create_levels(&[("A", 1.), ("B", 2.)]);

    let analysis = ImbalanceAnalysis::new(levels.clone(), 0.5);

    assert_eq!(analysis.port_levels, levels);
}
