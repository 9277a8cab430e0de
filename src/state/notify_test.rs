use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut n = Notifications::default();
    let a = n.info("Success", "Contact saved to database");
    let b = n.error("Error", "Could not save contact");
    assert!(b > a);
    assert_eq!(n.toasts[1].kind, ToastKind::Destructive);
}

#[test]
fn dismiss_removes_by_id() {
    let mut n = Notifications::default();
    let a = n.info("A", "");
    let b = n.info("B", "");
    n.dismiss(a);
    assert_eq!(n.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn queue_is_capped_oldest_first() {
    let mut n = Notifications::default();
    for i in 0..5 {
        n.info(&format!("t{i}"), "");
    }
    assert_eq!(n.toasts.len(), MAX_TOASTS);
    assert_eq!(n.toasts[0].title, "t2");
}
