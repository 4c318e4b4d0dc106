use super::*;
use crate::helpers::models::*;
use crate::models::CostConstants;

#[test]
fn can_convert_shipped_containers_into_empty_at_destination() {
    let parameters = create_single_schedule_parameters(100., 500., (1000., 0.));

    let inventory = simulate(&[100.], &[20.], &parameters);

    assert_eq!(inventory, vec![vec![880., 120.]]);
}

#[test]
fn can_floor_origin_level_at_zero() {
    let parameters = create_single_schedule_parameters(100., 500., (50., 0.));

    let inventory = simulate(&[100.], &[20.], &parameters);

    assert_eq!(inventory, vec![vec![0., 120.]]);
    assert!(inventory.iter().flatten().all(|level| *level >= 0.));
}

#[test]
fn can_process_schedules_in_chronological_order() {
    let parameters = ParameterSet::new(
        create_ports(&[("A", 100.), ("B", 0.)]),
        vec![create_route("R1", 10., 100.)],
        vec![create_schedule("S1", 0, 1, 0, 2.), create_schedule("S2", 0, 0, 1, 1.)],
        CostConstants::default(),
    )
    .unwrap();

    // S2 departs first and moves 60 from A to B, then S1 moves 10 back
    let inventory = simulate(&[10., 60.], &[0., 0.], &parameters);

    assert_eq!(inventory, vec![vec![40., 60.], vec![50., 50.]]);
}

#[test]
fn can_treat_missing_genes_as_zero() {
    let parameters = create_test_parameters();

    let inventory = simulate(&[10.], &[], &parameters);

    assert_eq!(inventory.len(), 4);
    assert_eq!(inventory[0], vec![990., 510., 100.]);
    assert_eq!(inventory[3], vec![990., 510., 100.]);
}

#[test]
fn can_conserve_total_inventory_without_flooring() {
    let parameters = create_test_parameters();
    let total = parameters.initial_inventories().iter().sum::<Float>();

    let inventory = simulate(&[50., 30., 50., 30.], &[0.5, 0.3, 0.5, 0.3], &parameters);

    inventory.iter().for_each(|row| {
        assert!((row.iter().sum::<Float>() - total).abs() < 1E-9);
    });
}

#[test]
fn can_simulate_deterministically() {
    let parameters = create_test_parameters();
    let (full, empty) = (vec![50., 30., 50., 30.], vec![0.5, 0.3, 0.5, 0.3]);

    assert_eq!(simulate(&full, &empty, &parameters), simulate(&full, &empty, &parameters));
}

#[test]
fn can_get_final_and_window_levels() {
    let parameters = create_test_parameters();
    let inventory = simulate(&[100., 0., 100., 0.], &[0., 0., 0., 0.], &parameters);

    assert_eq!(final_levels(&inventory, &parameters), vec![800., 700., 100.]);
    assert_eq!(window_levels(&inventory, &parameters, 2), vec![800., 700., 100.]);
    assert_eq!(window_levels(&inventory, &parameters, 4), vec![850., 650., 100.]);
    assert_eq!(window_levels(&inventory, &parameters, 10), vec![850., 650., 100.]);
    assert_eq!(final_levels(&vec![], &parameters), vec![1000., 500., 100.]);
    assert_eq!(window_levels(&vec![], &parameters, 5), vec![1000., 500., 100.]);
}
