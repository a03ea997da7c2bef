//! Replays a scripted gesture against an elastic slider and prints one line
//! per frame. Set `RUST_LOG=sliderui_core=trace` to see the mapper work.

use sliderui_core::prelude::*;
use web_time::{Duration, Instant};

const TRACK_LENGTH: f32 = 200.0;
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy)]
enum Step {
    Press,
    DragTo(f32),
    Release,
    External(f32),
    Wait(u64),
}

fn script() -> Vec<Step> {
    let mut steps = vec![Step::Press];
    steps.extend((1..=12).map(|i| Step::DragTo(i as f32 * 25.0)));
    steps.push(Step::Release);
    steps.push(Step::Wait(600));
    steps.push(Step::Press);
    steps.extend((1..=10).map(|i| Step::DragTo(i as f32 * -40.0)));
    steps.push(Step::Release);
    steps.push(Step::Wait(1_300));
    steps.push(Step::External(0.4));
    steps.push(Step::External(1.0));
    steps
}

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn report(frame: usize, step: Step, slider: &Slider, changes: &SliderChanges) {
    let snapshot = slider.snapshot();
    log::info!(
        "#{frame:03} {step:?}: progress={:.4} dragging={} scale={:.4} anchor={:?} changes={:?}",
        snapshot.progress,
        snapshot.is_dragging,
        snapshot.visual_scale,
        snapshot.scale_anchor,
        changes.as_slice()
    );
}

fn main() {
    init_logging();

    let binding = SharedProgress::new(0.25);
    let mut slider = match Slider::new(
        binding.clone(),
        SliderConfiguration::default().with_symbol("speaker.wave.2"),
        SliderConstants::default(),
        TRACK_LENGTH,
    ) {
        Ok(slider) => slider,
        Err(err) => {
            log::error!("cannot build slider: {err}");
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let mut now = start;

    for (frame, step) in script().into_iter().enumerate() {
        let mut changes = match step {
            Step::Press => slider.on_pointer_down(),
            Step::DragTo(x) => slider.on_pointer_move(Point::new(x, 0.0)),
            Step::Release => slider.on_pointer_up_at(now),
            Step::External(value) => slider.on_external_progress_set(value),
            Step::Wait(millis) => {
                now += Duration::from_millis(millis);
                SliderChanges::new()
            }
        };
        now += FRAME;
        changes.extend(slider.tick(now));
        report(frame, step, &slider, &changes);
    }

    println!(
        "final progress {:.4}, binding {:.4}, dragging {}, replayed over {:?}",
        slider.progress(),
        binding.get(),
        slider.is_dragging(),
        now - start
    );
}
