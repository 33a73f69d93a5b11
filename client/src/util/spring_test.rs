use super::*;

fn run(follower: &mut Follower, pointer: Pointer, secs: f64) -> (f64, f64) {
    let frame = 1.0 / 60.0;
    let mut elapsed = 0.0;
    let mut pos = follower.position();
    while elapsed < secs {
        pos = follower.step(pointer, frame);
        elapsed += frame;
    }
    pos
}

#[test]
fn follower_starts_centred_on_origin() {
    assert_eq!(Follower::dot().position(), (-DOT_OFFSET, -DOT_OFFSET));
    assert_eq!(Follower::outline().position(), (-OUTLINE_OFFSET, -OUTLINE_OFFSET));
}

#[test]
fn dot_converges_to_pointer_minus_offset() {
    let mut dot = Follower::dot();
    let pointer = Pointer { x: 400.0, y: 250.0 };
    let (x, y) = run(&mut dot, pointer, 3.0);
    assert!((x - 396.0).abs() < 0.05, "x = {x}");
    assert!((y - 246.0).abs() < 0.05, "y = {y}");
}

#[test]
fn outline_converges_to_pointer_minus_offset() {
    let mut outline = Follower::outline();
    let pointer = Pointer { x: 100.0, y: 80.0 };
    let (x, y) = run(&mut outline, pointer, 4.0);
    assert!((x - 80.0).abs() < 0.05, "x = {x}");
    assert!((y - 60.0).abs() < 0.05, "y = {y}");
    assert!(outline.is_settled(pointer));
}

#[test]
fn dot_responds_faster_than_outline() {
    let mut dot = Follower::dot();
    let mut outline = Follower::outline();
    let pointer = Pointer { x: 500.0, y: 500.0 };
    let (dot_x, _) = run(&mut dot, pointer, 0.1);
    let (outline_x, _) = run(&mut outline, pointer, 0.1);
    let dot_progress = (dot_x + DOT_OFFSET) / 500.0;
    let outline_progress = (outline_x + OUTLINE_OFFSET) / 500.0;
    assert!(dot_progress > outline_progress, "dot {dot_progress} vs outline {outline_progress}");
}

#[test]
fn step_clamps_huge_frame_gaps() {
    let mut spring = Spring::new(DOT_SPRING, 0.0);
    let pos = spring.step(100.0, 30.0);
    assert!(pos.is_finite());
    assert!(pos > 0.0 && pos < 150.0, "pos = {pos}");
}

#[test]
fn zero_or_negative_dt_does_not_move() {
    let mut spring = Spring::new(OUTLINE_SPRING, 10.0);
    assert_eq!(spring.step(50.0, 0.0), 10.0);
    assert_eq!(spring.step(50.0, -1.0), 10.0);
}

#[test]
fn markers_at_rest_report_settled_without_moving() {
    let mut markers = CursorMarkers::default();
    let before = markers;
    assert!(markers.step(Pointer::default(), 1.0 / 60.0));
    assert_eq!(markers, before);
}

#[test]
fn markers_settle_after_pointer_moves() {
    let mut markers = CursorMarkers::default();
    let pointer = Pointer { x: 320.0, y: 180.0 };
    assert!(!markers.step(pointer, 1.0 / 60.0));

    let mut frames = 1;
    while !markers.step(pointer, 1.0 / 60.0) {
        frames += 1;
        assert!(frames < 600, "markers still moving after 10 s");
    }
    assert_eq!(markers.dot.position(), (320.0 - DOT_OFFSET, 180.0 - DOT_OFFSET));
    assert_eq!(markers.outline.position(), (320.0 - OUTLINE_OFFSET, 180.0 - OUTLINE_OFFSET));
}

#[test]
fn translate_css_formats_two_decimals() {
    assert_eq!(translate_css((1.0, 2.346)), "transform: translate3d(1.00px, 2.35px, 0);");
}
