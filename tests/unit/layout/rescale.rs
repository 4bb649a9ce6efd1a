use super::*;
use crate::scene::model::{FontStyle, FontWeight, ImageElement, TextElement};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn unmeasured_frame_is_a_no_op() {
    let p = rescale_position(
        Point::new(10.0, 10.0),
        FrameSize::new(0.0, 0.0),
        1.0,
        Some(Orientation::Square),
    );
    assert_eq!(p, Point::new(10.0, 10.0));

    let p = rescale_position(
        Point::new(10.0, 10.0),
        FrameSize::new(500.0, 0.0),
        3.0,
        None,
    );
    assert_eq!(p, Point::new(10.0, 10.0));
}

#[test]
fn square_doubles_by_ratio() {
    let p = rescale_position(
        Point::new(10.0, 10.0),
        FrameSize::new(500.0, 500.0),
        1.0,
        Some(Orientation::Square),
    );
    assert_eq!(p, Point::new(20.0, 20.0));
}

#[test]
fn portrait_applies_correction() {
    let p = rescale_position(
        Point::new(10.0, 10.0),
        FrameSize::new(500.0, 800.0),
        1.0,
        Some(Orientation::Portrait),
    );
    assert!(approx(p.x, 20.0 / 1.5));
    assert!(approx(p.y, 20.0 / 1.5));
}

#[test]
fn landscape_and_unknown_share_the_portrait_branch() {
    let portrait = rescale_factor(0.5, Some(Orientation::Portrait));
    assert!(approx(rescale_factor(0.5, Some(Orientation::Landscape)), portrait));
    assert!(approx(rescale_factor(0.5, None), portrait));
    assert!(approx(rescale_factor(0.5, Some(Orientation::Square)), 1.0));
}

#[test]
fn placement_derives_orientation_from_frame() {
    let placement = Placement::for_frame(FrameSize::new(400.0, 400.0), 0.75);
    assert_eq!(placement.orientation, Some(Orientation::Square));
    assert_eq!(placement.apply(Point::new(4.0, 8.0)), Point::new(6.0, 12.0));
}

#[test]
fn place_moves_positions_only() {
    let elements = vec![
        RenderableElement::Text(TextElement {
            id: "t1".to_string(),
            x: 10.0,
            y: 36.0,
            text: "Hi".to_string(),
            font_size: 16.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            fill: "#000000".to_string(),
            label: String::new(),
        }),
        RenderableElement::Image(ImageElement {
            id: "i1".to_string(),
            x: 5.0,
            y: 5.0,
            width: 80.0,
            height: 40.0,
            src: "logo.png".to_string(),
            label: "logo".to_string(),
            scale_x: 1.0,
            scale_y: 1.0,
        }),
    ];

    let placed = Placement::for_frame(FrameSize::new(300.0, 300.0), 1.0).place(&elements);
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].id(), "t1");
    assert_eq!(placed[0].position(), Point::new(20.0, 72.0));
    assert_eq!(placed[1].position(), Point::new(10.0, 10.0));
    let RenderableElement::Image(img) = &placed[1] else {
        panic!("expected image");
    };
    assert_eq!((img.width, img.height), (80.0, 40.0));
}
