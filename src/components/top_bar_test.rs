use super::*;

#[test]
fn initials_take_first_letters_of_two_words() {
    assert_eq!(initials("Demo Tailor"), "DT");
    assert_eq!(initials("  asha   rao  "), "AR");
}

#[test]
fn initials_of_one_word_use_two_letters() {
    assert_eq!(initials("admin"), "AD");
    assert_eq!(initials("x"), "X");
}

#[test]
fn initials_default_when_blank() {
    assert_eq!(initials("   "), "U");
}

#[test]
fn current_fiscal_year_comes_first() {
    assert_eq!(FISCAL_YEARS.first(), Some(&"2025 - 2026"));
}
