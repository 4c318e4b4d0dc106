use super::*;
use crate::helpers::models::*;

#[test]
fn can_create_candidate_with_simulated_inventory() {
    let parameters = create_single_schedule_parameters(100., 500., (1000., 0.));

    let candidate = Candidate::new(vec![100.], vec![20.], &parameters).unwrap();

    assert_eq!(candidate.inventory(), &vec![vec![880., 120.]]);
    assert!(!candidate.is_evaluated());
    assert_eq!(candidate.genes().collect::<Vec<_>>(), vec![100., 20.]);
}

parameterized_test! {can_reject_allocation_size_mismatch, (full, empty), {
    can_reject_allocation_size_mismatch_impl(full, empty);
}}

can_reject_allocation_size_mismatch! {
    case_01_short_full: (vec![1., 2., 3.], vec![1., 2., 3., 4.]),
    case_02_short_empty: (vec![1., 2., 3., 4.], vec![1.]),
    case_03_long: (vec![1., 2., 3., 4., 5.], vec![1., 2., 3., 4., 5.]),
}

fn can_reject_allocation_size_mismatch_impl(full: Vec<Float>, empty: Vec<Float>) {
    let parameters = create_test_parameters();

    assert!(Candidate::new(full, empty, &parameters).is_err());
}

#[test]
fn can_rederive_inventory_and_invalidate_fitness_on_modify() {
    let parameters = create_single_schedule_parameters(100., 500., (1000., 0.));
    let mut candidate = Candidate::new(vec![100.], vec![20.], &parameters).unwrap();
    candidate.set_fitness(-10.);
    assert!(candidate.is_evaluated());

    candidate.modify(&parameters, |full, empty| {
        full[0] = 200.;
        empty[0] = 0.;
    });

    assert_eq!(candidate.inventory(), &vec![vec![800., 200.]]);
    assert!(!candidate.is_evaluated());
    assert_eq!(candidate.fitness(), Float::NEG_INFINITY);
}

#[test]
fn can_split_into_genes() {
    let parameters = create_test_parameters();
    let candidate = Candidate::from_genes(vec![1., 2., 3., 4.], vec![5., 6., 7., 8.], &parameters);

    let (full, empty) = candidate.into_genes();

    assert_eq!(full, vec![1., 2., 3., 4.]);
    assert_eq!(empty, vec![5., 6., 7., 8.]);
}
