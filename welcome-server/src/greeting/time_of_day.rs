//! Greeting chosen from the visitor's local hour.

use std::ops::Range;

/// Hour bands, checked in order. Hours matching none are late night.
static BANDS: &[(Range<u32>, &str)] = &[
    (5..11, "🌤️上午好，一日之计在于晨"),
    (11..13, "☀️中午好，该摸鱼吃午饭了"),
    (13..15, "🕞下午好，懒懒地睡个午觉吧"),
    (15..16, "🍵三点几啦，饮茶先啦"),
    (16..19, "🌇夕阳无限好，只是近黄昏"),
    (19..24, "🌔晚上好，夜生活嗨起来"),
];

/// Midnight until 05:00.
const LATE_NIGHT: &str = "🌌夜深了，早点休息，少熬夜";

/// Greeting for a 24-hour clock hour (`0..=23`).
pub fn time_greeting(hour: u32) -> &'static str {
    BANDS
        .iter()
        .find(|(band, _)| band.contains(&hour))
        .map_or(LATE_NIGHT, |(_, greeting)| *greeting)
}
