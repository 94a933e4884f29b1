use std::time::Duration;

use crate::image_pipeline::common::timing::{PipelineTimings, Timer};

#[test]
fn test_repeated_steps_accumulate() {
    let mut timings = PipelineTimings::new();
    timings.add_step("overlay_stream", Duration::from_millis(3));
    timings.add_step("convert_still", Duration::from_millis(2));
    timings.add_step("overlay_stream", Duration::from_millis(5));

    assert_eq!(timings.get_step("overlay_stream"), Some(Duration::from_millis(8)));
    assert_eq!(timings.get_step("convert_still"), Some(Duration::from_millis(2)));
    assert_eq!(timings.get_step("load_bitmap"), None);
    assert_eq!(timings.total_duration(), Duration::from_millis(10));
}

#[test]
fn test_timer_records_under_its_name() {
    let mut timings = PipelineTimings::new();
    Timer::start("load_bitmap").record(&mut timings);
    assert!(timings.get_step("load_bitmap").is_some());
    assert_eq!(timings.total_duration(), timings.get_step("load_bitmap").unwrap());
}
