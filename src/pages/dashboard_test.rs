use super::*;

#[test]
fn greeting_follows_the_clock() {
    assert_eq!(greeting(0), "Good morning");
    assert_eq!(greeting(11), "Good morning");
    assert_eq!(greeting(12), "Good afternoon");
    assert_eq!(greeting(16), "Good afternoon");
    assert_eq!(greeting(17), "Good evening");
    assert_eq!(greeting(23), "Good evening");
}
