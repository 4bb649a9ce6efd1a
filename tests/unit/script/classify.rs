use super::*;

#[test]
fn detects_devanagari() {
    assert!(is_non_latin_script("नमस्ते"));
    assert!(is_non_latin_script("Happy दिवाली 2024"));
    assert!(!is_non_latin_script("Hello"));
    assert!(!is_non_latin_script(""));
}

#[test]
fn block_boundaries_are_inclusive() {
    assert!(is_non_latin_script("\u{0900}"));
    assert!(is_non_latin_script("\u{097F}"));
    assert!(!is_non_latin_script("\u{08FF}"));
    // Bengali sits right after the Devanagari block.
    assert!(!is_non_latin_script("\u{0980}"));
}

#[test]
fn language_follows_script() {
    assert_eq!(FontLanguage::for_text("नमस्ते"), FontLanguage::Hindi);
    assert_eq!(FontLanguage::for_text("Sale!"), FontLanguage::English);
    assert_eq!(FontLanguage::for_text(""), FontLanguage::English);
}

#[test]
fn parses_language_names() {
    assert_eq!("Hindi".parse::<FontLanguage>().unwrap(), FontLanguage::Hindi);
    assert_eq!("en".parse::<FontLanguage>().unwrap(), FontLanguage::English);
    assert!("klingon".parse::<FontLanguage>().is_err());
}
