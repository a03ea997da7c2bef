use crate::*;
use web_time::{Duration, Instant};

fn horizontal_slider(initial: f32) -> (Slider, SharedProgress) {
    let binding = SharedProgress::new(initial);
    let slider = Slider::new(
        binding.clone(),
        SliderConfiguration::default(),
        SliderConstants::default(),
        200.0,
    )
    .expect("valid slider");
    (slider, binding)
}

#[test]
fn construction_seeds_progress_and_offsets() {
    let (slider, _) = horizontal_slider(0.25);
    assert_eq!(slider.progress(), 0.25);
    assert_eq!(slider.gesture().session().committed_offset, 50.0);
    assert!(!slider.is_dragging());
    assert_eq!(slider.visual_scale(), 1.0);
}

#[test]
fn construction_rejects_bad_configuration() {
    let binding = SharedProgress::new(0.5);
    let err = Slider::new(
        binding.clone(),
        SliderConfiguration::default(),
        SliderConstants::default(),
        0.0,
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveTrackLength(0.0));

    let err = Slider::new(
        binding,
        SliderConfiguration::default(),
        SliderConstants::default().with_stretchiness(2.0),
        100.0,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
}

#[test]
fn down_reports_drag_start_once() {
    let (mut slider, _) = horizontal_slider(0.5);
    let changes = slider.on_pointer_down();
    assert_eq!(changes.as_slice(), &[SliderChange::Dragging(true)]);
    assert!(slider.is_dragging());
    assert!(slider.on_pointer_down().is_empty());
}

#[test]
fn move_reports_progress_and_clamped_binding_write() {
    let (mut slider, binding) = horizontal_slider(0.9);
    slider.on_pointer_down();

    // 180 + 40 = 220 -> 200 + 20 * 0.15 = 203 -> 1.015
    let changes = slider.on_pointer_move(Point::new(40.0, 0.0));
    assert_eq!(changes.len(), 2);
    assert!(matches!(changes[0], SliderChange::Progress(p) if (p - 1.015).abs() < 1e-5));
    assert_eq!(changes[1], SliderChange::BindingWritten(1.0));
    assert_eq!(binding.get(), 1.0);
    assert!(slider.visual_scale() < 1.0);
    assert_eq!(slider.scale_anchor(), Edge::Leading);
}

#[test]
fn move_without_change_reports_nothing() {
    let (mut slider, _) = horizontal_slider(0.5);
    slider.on_pointer_down();
    assert!(slider.on_pointer_move(Point::new(0.0, 35.0)).is_empty());
}

#[test]
fn release_commits_and_lingers() {
    let (mut slider, binding) = horizontal_slider(0.5);
    let start = Instant::now();
    slider.on_pointer_down();
    slider.on_pointer_move(Point::new(-400.0, 0.0));
    assert_eq!(slider.progress(), -0.1);
    assert_eq!(slider.scale_anchor(), Edge::Trailing);

    let changes = slider.on_pointer_up_at(start);
    assert_eq!(
        changes.as_slice(),
        &[
            SliderChange::Progress(0.0),
            SliderChange::BindingWritten(0.0)
        ]
    );
    assert_eq!(binding.get(), 0.0);
    assert!(slider.is_dragging());
    assert_eq!(
        slider.next_deadline(),
        Some(start + gesture_constants::RELEASE_LINGER)
    );

    assert!(slider.tick(start + Duration::from_millis(1_200)).is_empty());
    assert_eq!(
        slider.tick(start + Duration::from_millis(1_250)).as_slice(),
        &[SliderChange::Dragging(false)]
    );
    assert!(!slider.is_dragging());
}

#[test]
fn press_during_linger_keeps_flag_without_reporting() {
    let (mut slider, _) = horizontal_slider(0.5);
    let start = Instant::now();
    slider.on_pointer_down();
    slider.on_pointer_up_at(start);

    assert!(slider.on_pointer_down().is_empty());
    assert!(slider.is_dragging());
    assert!(slider.tick(start + Duration::from_secs(2)).is_empty());
    assert!(slider.is_dragging());
}

#[test]
fn commit_twice_is_stable() {
    let (mut slider, _) = horizontal_slider(0.5);
    slider.on_pointer_down();
    slider.on_pointer_move(Point::new(37.0, 0.0));
    slider.commit();
    let first = slider.progress();
    assert!(slider.commit().is_empty());
    assert_eq!(slider.progress(), first);
}

#[test]
fn external_boundary_writes_are_ignored() {
    let (mut slider, binding) = horizontal_slider(0.4);

    assert!(slider.on_external_progress_set(0.0).is_empty());
    assert_eq!(slider.progress(), 0.4);
    assert!(slider.on_external_progress_set(1.0).is_empty());
    assert_eq!(slider.progress(), 0.4);
    // The binding keeps the foreign value; the asymmetry is intentional.
    assert_eq!(binding.get(), 1.0);

    let changes = slider.on_external_progress_set(0.5);
    assert_eq!(changes.as_slice(), &[SliderChange::Progress(0.5)]);
    assert_eq!(slider.progress(), 0.5);
    assert_eq!(slider.gesture().session().committed_offset, 100.0);
}

#[test]
fn direct_binding_writes_are_picked_up_by_next_event() {
    let (mut slider, binding) = horizontal_slider(0.2);
    binding.set(0.75);

    let changes = slider.on_pointer_down();
    assert_eq!(
        changes.as_slice(),
        &[SliderChange::Progress(0.75), SliderChange::Dragging(true)]
    );
    assert_eq!(slider.gesture().session().cumulative_offset, 150.0);
}

#[test]
fn own_writes_never_reenter_inward_path() {
    let (mut slider, _) = horizontal_slider(0.5);
    slider.on_pointer_down();
    slider.on_pointer_move(Point::new(10.0, 0.0));
    assert!(slider.sync_external().is_empty());
    assert_eq!(slider.progress(), 0.55);
}

#[test]
fn hit_area_gates_pointer_down() {
    let (mut slider, _) = horizontal_slider(0.5);
    let bounds = Rect::from_origin_size(Point::new(100.0, 100.0), Size::new(200.0, 20.0));

    // Left of the control but inside the doubled width.
    assert_eq!(
        slider
            .on_pointer_down_in(Point::new(60.0, 110.0), bounds)
            .as_slice(),
        &[SliderChange::Dragging(true)]
    );

    let (mut other, _) = horizontal_slider(0.5);
    assert!(other
        .on_pointer_down_in(Point::new(100.0, 200.0), bounds)
        .is_empty());
    assert!(!other.is_dragging());
}

#[test]
fn relayout_while_idle_rederives_offsets() {
    let (mut slider, _) = horizontal_slider(0.5);
    slider.set_track_size(Size::new(300.0, 40.0)).unwrap();
    assert_eq!(slider.track().length(), 300.0);
    assert_eq!(slider.gesture().session().committed_offset, 150.0);
    assert_eq!(slider.progress(), 0.5);
}

#[test]
fn relayout_mid_drag_keeps_offsets() {
    let (mut slider, _) = horizontal_slider(0.5);
    slider.on_pointer_down();
    slider.set_track_length(400.0).unwrap();
    assert_eq!(slider.gesture().session().committed_offset, 100.0);

    slider.on_pointer_move(Point::new(100.0, 0.0));
    assert_eq!(slider.progress(), 0.5);
}

#[test]
fn invalid_relayout_keeps_previous_geometry() {
    let (mut slider, _) = horizontal_slider(0.5);
    assert!(slider.set_track_length(-1.0).is_err());
    assert!(slider.set_track_size(Size::new(0.0, 10.0)).is_err());
    assert_eq!(slider.track().length(), 200.0);
}

#[test]
fn snapshot_mirrors_outputs() {
    let binding = SharedProgress::new(0.0);
    let mut slider = Slider::new(
        binding,
        SliderConfiguration::default()
            .with_axis(Axis::Vertical)
            .with_fill_type(FillType::Centered),
        SliderConstants::default(),
        100.0,
    )
    .unwrap();
    slider.on_pointer_down();
    slider.on_pointer_move(Point::new(0.0, 50.0));

    let snapshot = slider.snapshot();
    assert!((snapshot.progress + 0.075).abs() < 1e-6);
    assert!(snapshot.is_dragging);
    assert_eq!(snapshot.scale_anchor, Edge::Top);
    assert_eq!(snapshot.axis, Axis::Vertical);
    assert_eq!(snapshot.fill_type, FillType::Centered);
    assert_eq!(snapshot.visual_scale, slider.visual_scale());

    let effect = slider.scale_effect();
    assert_eq!(effect.scale_y, 1.0);
    assert_eq!(effect.scale_x, snapshot.visual_scale);
}
