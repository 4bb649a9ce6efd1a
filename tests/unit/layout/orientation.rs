use super::*;

#[test]
fn classifies_measured_frames() {
    assert_eq!(classify_orientation(500.0, 500.0), Some(Orientation::Square));
    assert_eq!(
        classify_orientation(800.0, 500.0),
        Some(Orientation::Landscape)
    );
    assert_eq!(
        classify_orientation(500.0, 800.0),
        Some(Orientation::Portrait)
    );
}

#[test]
fn unmeasured_frames_have_no_orientation() {
    assert_eq!(classify_orientation(0.0, 500.0), None);
    assert_eq!(classify_orientation(500.0, 0.0), None);
    assert_eq!(classify_orientation(-10.0, 500.0), None);
    assert_eq!(classify_orientation(f64::NAN, 500.0), None);
    assert_eq!(classify_orientation(f64::INFINITY, 500.0), None);
}

#[test]
fn serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Orientation::Landscape).unwrap(),
        "\"landscape\""
    );
    assert_eq!(Orientation::Portrait.as_str(), "portrait");
}
