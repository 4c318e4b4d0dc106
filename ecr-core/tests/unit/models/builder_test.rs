use super::*;
use crate::helpers::models::create_major_ports_builder;

fn create_schedule_row(id: &str, route_id: &str, origin_id: &str, destination_id: &str, departure: Float) -> ScheduleRow {
    ScheduleRow {
        id: id.to_string(),
        route_id: route_id.to_string(),
        origin_id: origin_id.to_string(),
        destination_id: destination_id.to_string(),
        departure,
        planned_arrival: departure + 10.,
        actual_arrival: None,
    }
}

fn create_port_row(id: &str, initial_inventory: Float) -> PortRow {
    PortRow { id: id.to_string(), initial_inventory }
}

#[test]
fn can_build_parameters_from_rows() {
    let parameters = create_major_ports_builder().build().unwrap();

    assert_eq!(parameters.ports().len(), 7);
    assert_eq!(parameters.routes().len(), 2);
    assert_eq!(parameters.schedules().len(), 3);
    assert_eq!(parameters.routes()[0].demand, 100.);
    assert_eq!(parameters.routes()[1].demand, 50.);
    assert_eq!(parameters.routes()[0].capacity, 5000.);
    assert!(parameters.diagnostics().is_empty());
}

parameterized_test! {can_derive_demand_from_order_weight, (order_weight, expected), {
    can_derive_demand_from_order_weight_impl(order_weight, expected);
}}

can_derive_demand_from_order_weight! {
    case_01_exact: (Some(60_000.), 2.),
    case_02_rounded_up: (Some(60_001.), 3.),
    case_03_small: (Some(1.), 1.),
    case_04_missing: (None, FALLBACK_DEMAND),
    case_05_zero: (Some(0.), FALLBACK_DEMAND),
}

fn can_derive_demand_from_order_weight_impl(order_weight: Option<Float>, expected: Float) {
    let mut builder = ParameterSetBuilder::default();
    builder
        .add_port(create_port_row("A", 10.))
        .add_port(create_port_row("B", 10.))
        .add_vessel(VesselRow { id: "V1".to_string(), capacity: 100. })
        .add_route(RouteRow { id: "R1".to_string(), vessel_id: Some("V1".to_string()), order_weight })
        .add_schedule(create_schedule_row("S1", "R1", "A", "B", 0.));

    let parameters = builder.build().unwrap();

    assert_eq!(parameters.routes()[0].demand, expected);
    assert_eq!(parameters.diagnostics().len(), if order_weight.is_some_and(|w| w > 0.) { 0 } else { 1 });
}

#[test]
fn can_use_fallbacks_for_missing_references() {
    let mut builder = ParameterSetBuilder::default();
    builder
        .add_port(create_port_row("A", 10.))
        .add_route(RouteRow { id: "R1".to_string(), vessel_id: Some("V404".to_string()), order_weight: Some(30_000.) })
        .add_schedule(create_schedule_row("S1", "R1", "A", "B", 0.))
        .add_schedule(create_schedule_row("S2", "R2", "B", "A", 1.));

    let parameters = builder.build().unwrap();

    assert_eq!(parameters.ports().len(), 2);
    assert_eq!(parameters.ports()[1], Port { id: "B".to_string(), initial_inventory: 0. });
    assert_eq!(parameters.routes().len(), 2);
    assert_eq!(parameters.routes()[0].capacity, FALLBACK_CAPACITY);
    assert_eq!(parameters.routes()[1].id, "R2");
    assert_eq!(parameters.routes()[1].demand, FALLBACK_DEMAND);
    assert_eq!(parameters.routes()[1].capacity, FALLBACK_CAPACITY);
    assert_eq!(parameters.diagnostics().len(), 3);
}

#[test]
fn can_sort_schedules_by_departure() {
    let mut builder = ParameterSetBuilder::default();
    builder
        .add_port(create_port_row("A", 10.))
        .add_port(create_port_row("B", 10.))
        .add_route(RouteRow { id: "R1".to_string(), vessel_id: None, order_weight: Some(30_000.) })
        .add_schedule(create_schedule_row("S1", "R1", "A", "B", 3.))
        .add_schedule(create_schedule_row("S2", "R1", "B", "A", 1.))
        .add_schedule(create_schedule_row("S3", "R1", "A", "B", 3.));

    let parameters = builder.build().unwrap();

    let ids = parameters.schedules().iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["S2", "S1", "S3"]);
    assert_eq!(parameters.rank_order(), &[0, 1, 2]);
}

parameterized_test! {can_calculate_delay, (actual_arrival, expected), {
    can_calculate_delay_impl(actual_arrival, expected);
}}

can_calculate_delay! {
    case_01_no_actual: (None, 0.),
    case_02_early: (Some(8.), 0.),
    case_03_late: (Some(12.5), 2.),
    case_04_on_time: (Some(10.), 0.),
}

fn can_calculate_delay_impl(actual_arrival: Option<Float>, expected: Float) {
    let mut builder = ParameterSetBuilder::default();
    builder
        .add_port(create_port_row("A", 10.))
        .add_port(create_port_row("B", 10.))
        .add_route(RouteRow { id: "R1".to_string(), vessel_id: None, order_weight: None })
        .add_schedule(ScheduleRow { actual_arrival, ..create_schedule_row("S1", "R1", "A", "B", 0.) });

    let parameters = builder.build().unwrap();

    assert_eq!(parameters.schedules()[0].delay_days, expected);
}

#[test]
fn can_ignore_duplicate_and_invalid_ports() {
    let mut builder = ParameterSetBuilder::default();
    builder
        .add_port(create_port_row("A", -5.))
        .add_port(create_port_row("A", 100.))
        .add_port(create_port_row("B", 10.))
        .add_route(RouteRow { id: "R1".to_string(), vessel_id: None, order_weight: None })
        .add_schedule(create_schedule_row("S1", "R1", "A", "B", 0.));

    let parameters = builder.build().unwrap();

    assert_eq!(parameters.initial_inventories(), vec![0., 10.]);
    assert!(parameters.diagnostics().iter().any(|msg| msg.contains("duplicate port 'A'")));
    assert!(parameters.diagnostics().iter().any(|msg| msg.contains("invalid initial inventory")));
}

#[test]
fn can_fail_without_schedules() {
    let mut builder = ParameterSetBuilder::default();
    builder.add_port(create_port_row("A", 10.));

    assert!(builder.build().is_err());
}

#[test]
fn can_use_custom_costs() {
    let mut builder = create_major_ports_builder();
    builder.with_costs(CostConstants { theta: 0.1, weight_per_teu: 15_000., ..CostConstants::default() });

    let parameters = builder.build().unwrap();

    assert_eq!(parameters.routes()[0].demand, 200.);
    assert_eq!(parameters.expected_empty(0), 500.);
}

parameterized_test! {can_replace_invalid_weight_per_teu, weight_per_teu, {
    can_replace_invalid_weight_per_teu_impl(weight_per_teu);
}}

can_replace_invalid_weight_per_teu! {
    case_01_zero: 0.,
    case_02_negative: -30_000.,
    case_03_nan: Float::NAN,
    case_04_infinite: Float::INFINITY,
}

fn can_replace_invalid_weight_per_teu_impl(weight_per_teu: Float) {
    let mut builder = create_major_ports_builder();
    builder.with_costs(CostConstants { weight_per_teu, ..CostConstants::default() });

    let parameters = builder.build().unwrap();

    assert_eq!(parameters.costs().weight_per_teu, CostConstants::default().weight_per_teu);
    assert_eq!(parameters.routes()[0].demand, 100.);
    assert_eq!(parameters.routes()[1].demand, 50.);
    assert_eq!(parameters.diagnostics().len(), 1);
    assert!(parameters.diagnostics()[0].starts_with("weight per TEU must be positive"));
}
