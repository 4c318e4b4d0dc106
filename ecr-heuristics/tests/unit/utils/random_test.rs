use super::*;

#[test]
fn can_reproduce_sequence_with_the_same_seed() {
    let draw = |random: &DefaultRandom| {
        (0..10).map(|_| (random.uniform_int(0, 100), random.uniform_real(0., 1.), random.normal(0., 1.))).collect::<Vec<_>>()
    };

    assert_eq!(draw(&DefaultRandom::new_repeatable(42)), draw(&DefaultRandom::new_repeatable(42)));
    assert_ne!(draw(&DefaultRandom::new_repeatable(42)), draw(&DefaultRandom::new_repeatable(43)));
}

#[test]
fn can_return_int_from_closed_interval() {
    let random = DefaultRandom::new_repeatable(0);

    let values = (0..1000).map(|_| random.uniform_int(1, 3)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (1..=3).contains(value)));
    assert!(values.contains(&1));
    assert!(values.contains(&3));
}

parameterized_test! {can_handle_is_hit_edge_cases, (probability, expected), {
    can_handle_is_hit_edge_cases_impl(probability, expected);
}}

can_handle_is_hit_edge_cases! {
    case_01_zero: (0., false),
    case_02_negative: (-1., false),
    case_03_nan: (Float::NAN, false),
    case_04_one: (1., true),
    case_05_greater_than_one: (2., true),
}

fn can_handle_is_hit_edge_cases_impl(probability: Float, expected: bool) {
    let random = DefaultRandom::new_repeatable(0);

    assert!((0..100).all(|_| random.is_hit(probability) == expected));
}

#[test]
fn can_return_mean_for_degenerate_normal() {
    let random = DefaultRandom::new_repeatable(0);

    assert_eq!(random.normal(5., 0.), 5.);
    assert_eq!(random.normal(5., -1.), 5.);
    assert_eq!(random.normal(5., Float::NAN), 5.);
}

#[test]
fn can_split_into_deterministic_streams() {
    let first = DefaultRandom::new_repeatable(7);
    let second = DefaultRandom::new_repeatable(7);

    let first_values = (0..5).map(|_| first.split().uniform_int(0, 1000)).collect::<Vec<_>>();
    let second_values = (0..5).map(|_| second.split().uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(first_values, second_values);
}
