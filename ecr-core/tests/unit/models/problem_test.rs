use super::*;
use crate::helpers::models::*;

#[test]
fn can_keep_rank_order_by_departure() {
    let parameters = ParameterSet::new(
        create_ports(&[("A", 10.), ("B", 0.)]),
        vec![create_route("R1", 10., 100.)],
        vec![
            create_schedule("S1", 0, 0, 1, 5.),
            create_schedule("S2", 0, 1, 0, 1.),
            create_schedule("S3", 0, 0, 1, 5.),
            create_schedule("S4", 0, 1, 0, 3.),
        ],
        CostConstants::default(),
    )
    .unwrap();

    assert_eq!(parameters.rank_order(), &[1, 3, 0, 2]);
}

#[test]
fn can_group_schedules_by_route() {
    let parameters = create_test_parameters();

    assert_eq!(parameters.route_schedules(0), &[0, 2]);
    assert_eq!(parameters.route_schedules(1), &[1, 3]);
    assert!(parameters.route_schedules(2).is_empty());
    assert_eq!(parameters.schedule_route(3).id, "R2");
}

#[test]
fn can_get_expected_empty_and_initial_inventories() {
    let parameters = create_test_parameters();

    assert_eq!(parameters.expected_empty(0), 0.5);
    assert_eq!(parameters.expected_empty(1), 0.3);
    assert_eq!(parameters.initial_inventories(), vec![1000., 500., 100.]);
}

parameterized_test! {can_reject_invalid_schedules, (schedules, expected), {
    can_reject_invalid_schedules_impl(schedules, expected);
}}

can_reject_invalid_schedules! {
    case_01_no_schedules: (vec![], "parameter set has no schedules"),
    case_02_unknown_route: (vec![create_schedule("S1", 1, 0, 1, 0.)], "schedule 'S1' refers to unknown port or route"),
    case_03_unknown_origin: (vec![create_schedule("S2", 0, 2, 1, 0.)], "schedule 'S2' refers to unknown port or route"),
    case_04_unknown_destination: (vec![create_schedule("S3", 0, 0, 5, 0.)], "schedule 'S3' refers to unknown port or route"),
}

fn can_reject_invalid_schedules_impl(schedules: Vec<Schedule>, expected: &str) {
    let result = ParameterSet::new(
        create_ports(&[("A", 10.), ("B", 0.)]),
        vec![create_route("R1", 10., 100.)],
        schedules,
        CostConstants::default(),
    );

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}
