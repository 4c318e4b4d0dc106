use super::*;

#[test]
fn can_share_one_flag_between_quotas() {
    let first = get_interruption_flag();
    let second = get_interruption_flag();

    match (first, second) {
        (Some(first), Some(second)) => assert!(Arc::ptr_eq(&first, &second)),
        (None, None) => {}
        _ => unreachable!("handler state must be the same for all calls"),
    }
}

#[test]
fn can_report_reached_quota_when_flag_is_set() {
    let should_interrupt = Arc::new(AtomicBool::new(false));
    let quota = InterruptionQuota { should_interrupt: should_interrupt.clone() };
    assert!(!quota.is_reached());

    should_interrupt.store(true, Ordering::Relaxed);

    assert!(quota.is_reached());
}
