use super::*;

#[test]
fn feature_labels_are_in_display_order() {
    let labels: Vec<&str> = FEATURES.iter().map(|f| f.label).collect();
    assert_eq!(labels, vec!["Operational Control", "Real-Time Sync", "Audit & Accountability", "Role-Based Access"]);
}

#[test]
fn trust_section_shows_three_reviews() {
    assert_eq!(REVIEWS.len(), 3);
    assert!(REVIEWS.iter().all(|r| !r.full_review.is_empty() && !r.department.is_empty()));
}
