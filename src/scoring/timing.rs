use crate::{PostTime, UserContext};

pub const TIMING_MAX: i32 = 15;

// TODO: derive personalized windows from UserContext::follower_timezones once
// the composer supplies a follower distribution.
pub fn timing_score(when: PostTime, _user: Option<&UserContext>) -> i32 {
    let mut score = 8;

    if when.is_peak() {
        score += 5;
    } else if when.is_decent() {
        score += 2;
    }

    if when.is_weekday() {
        score += 2;
    }

    score.min(TIMING_MAX)
}

/// Human-readable scheduling hint for the current hour bucket. Returns `None`
/// inside a peak window; at most one message fires otherwise.
pub fn posting_time_hint(when: PostTime) -> Option<&'static str> {
    if when.is_peak() {
        return None;
    }

    if when.is_weekend() {
        return Some("Weekdays typically see higher engagement for most content types.");
    }

    match when.utc_hour {
        4..=10 => Some("Post during peak hours (9am-12pm or 7pm-10pm EST) for maximum engagement."),
        11..=12 => Some("Peak hours are 9am-12pm and 7pm-10pm (EST). Consider scheduling for later."),
        18..=22 => Some(
            "Peak evening hours (7pm-10pm EST) are approaching. Consider waiting 1-2 hours for better reach.",
        ),
        _ => None,
    }
}
