use super::*;

#[test]
fn second_submit_is_dropped_while_pending() {
    let mut guard = InFlight::default();
    assert!(guard.try_begin(Operation::SaveContact));
    assert!(!guard.try_begin(Operation::SaveContact));
    assert!(guard.is_pending(Operation::SaveContact));
}

#[test]
fn finish_readmits_operation() {
    let mut guard = InFlight::default();
    assert!(guard.try_begin(Operation::SaveUser));
    guard.finish(Operation::SaveUser);
    assert!(!guard.is_pending(Operation::SaveUser));
    assert!(guard.try_begin(Operation::SaveUser));
}

#[test]
fn operations_are_independent() {
    let mut guard = InFlight::default();
    assert!(guard.try_begin(Operation::SaveMeasurement));
    assert!(guard.try_begin(Operation::DeleteMeasurement));
    assert!(!guard.is_pending(Operation::SaveTailoringItem));
}
