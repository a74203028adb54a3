//! Core countdown logic for the burpee timer.
//!
//! Everything in this crate is a pure state machine plus display formatting:
//! no browser APIs, no rendering. The Yew frontend in `main.rs` owns a
//! [`BurpeeTimer`] through `use_reducer` and treats its view as a projection
//! of this state, so the whole countdown is testable on the native host.

use std::rc::Rc;
use yew::Reducible;

/// The fixed workout length split evenly across all reps.
pub const TOTAL_WORKOUT_MS: f64 = 20.0 * 60.0 * 1000.0;

/// Period of the countdown callback driving [`BurpeeTimer::tick`].
pub const TICK_MS: u32 = 100;

/// Time allotted to a single rep. Fractional when the rep count does not
/// divide the 20-minute total evenly.
pub fn rep_duration_ms(total_reps: u32) -> f64 {
    TOTAL_WORKOUT_MS / f64::from(total_reps.max(1))
}

/// Split a millisecond duration into whole seconds and a tenths digit,
/// truncating (never rounding). Negative inputs yield negative parts; the
/// display clamp happens in [`format_time`].
pub fn parse_seconds(ms: f64) -> (i64, i64) {
    let total_seconds = (ms / 1000.0).floor() as i64;
    let tenths = ((ms / 100.0) % 10.0).floor() as i64;
    (total_seconds, tenths)
}

/// Format a millisecond duration as `"<seconds>.<tenths>"` for the big
/// countdown display. Total over all of `f64`: values below zero (possible
/// when a tick overshoots the rep boundary) clamp to `"0.0"`.
pub fn format_time(ms: f64) -> String {
    let (total_seconds, tenths) = parse_seconds(ms);
    format!("{}.{}", total_seconds.max(0), tenths.max(0))
}

/// Countdown state machine for one workout session.
///
/// Single-writer by construction: the ticking scheduler and the four user
/// actions are the only mutators, and the UI reads it read-only. A session
/// runs `total_reps` reps of `rep_duration_ms` each and halts the instant
/// `current_rep` reaches `total_reps`.
#[derive(Debug, Clone, PartialEq)]
pub struct BurpeeTimer {
    pub total_reps: u32,
    pub rep_duration_ms: f64,
    pub current_rep: u32,
    pub time_remaining_ms: f64,
    pub started: bool,
    pub paused: bool,
}

impl BurpeeTimer {
    /// Fresh session for the given rep count. A count of zero (the degraded
    /// result of a missing or malformed query parameter) is clamped to 1.
    pub fn new(total_reps: u32) -> Self {
        let total_reps = total_reps.max(1);
        let rep_duration_ms = rep_duration_ms(total_reps);
        Self {
            total_reps,
            rep_duration_ms,
            current_rep: 0,
            time_remaining_ms: rep_duration_ms,
            started: false,
            paused: false,
        }
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Halt and reset to the first rep. Unlike completion, this also resets
    /// the display back to a full rep.
    pub fn stop(&mut self) {
        self.started = false;
        self.paused = false;
        self.current_rep = 0;
        self.time_remaining_ms = self.rep_duration_ms;
    }

    /// All reps consumed. The display is intentionally left at the final
    /// rep until the next start.
    pub fn is_complete(&self) -> bool {
        self.current_rep >= self.total_reps
    }

    /// Advance the countdown by one fixed period.
    ///
    /// A completed session marks itself not-started and otherwise leaves the
    /// state untouched. While idle or paused the tick is a no-op, so the
    /// scheduler may keep firing across a pause without drift. Otherwise one
    /// tick is subtracted, and the tick that drains the remainder to zero or
    /// below is the one that advances the rep and resets the remainder, so a
    /// 12 000 ms rep rolls over on exactly its 120th tick.
    pub fn tick(&mut self) {
        if self.is_complete() {
            self.started = false;
            return;
        }
        if !self.started || self.paused {
            return;
        }
        self.time_remaining_ms -= f64::from(TICK_MS);
        if self.time_remaining_ms <= 0.0 {
            self.current_rep += 1;
            self.time_remaining_ms = self.rep_duration_ms;
        }
    }
}

/// User actions plus the scheduler tick, dispatched by the frontend.
pub enum TimerAction {
    Start,
    Pause,
    Resume,
    Stop,
    Tick,
}

impl Reducible for BurpeeTimer {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: TimerAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TimerAction::Start => next.start(),
            TimerAction::Pause => next.pause(),
            TimerAction::Resume => next.resume(),
            TimerAction::Stop => next.stop(),
            TimerAction::Tick => next.tick(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(timer: &mut BurpeeTimer, n: u32) {
        for _ in 0..n {
            timer.tick();
        }
    }

    #[test]
    fn format_time_clamps_negative_input() {
        assert_eq!(format_time(-5.0), "0.0");
        assert_eq!(format_time(-12_345.0), "0.0");
    }

    #[test]
    fn format_time_truncates() {
        assert_eq!(format_time(0.0), "0.0");
        assert_eq!(format_time(99.0), "0.0");
        assert_eq!(format_time(100.0), "0.1");
        assert_eq!(format_time(12_345.0), "12.3");
        assert_eq!(format_time(20_000.0), "20.0");
        assert_eq!(format_time(1_199_999.0), "1199.9");
    }

    #[test]
    fn format_time_matches_truncated_seconds_and_tenths() {
        for ms in (0..60_000u32).step_by(137) {
            let expected = format!("{}.{}", ms / 1000, (ms / 100) % 10);
            assert_eq!(format_time(f64::from(ms)), expected, "ms = {}", ms);
        }
    }

    #[test]
    fn hundred_reps_give_twelve_second_reps() {
        let timer = BurpeeTimer::new(100);
        assert_eq!(timer.rep_duration_ms, 12_000.0);
        assert_eq!(timer.time_remaining_ms, 12_000.0);
        assert_eq!(timer.current_rep, 0);
        assert!(!timer.started);
        assert!(!timer.paused);
    }

    #[test]
    fn zero_reps_clamp_to_one() {
        let timer = BurpeeTimer::new(0);
        assert_eq!(timer.total_reps, 1);
        assert_eq!(timer.rep_duration_ms, TOTAL_WORKOUT_MS);
    }

    #[test]
    fn rep_advances_on_the_120th_tick() {
        let mut timer = BurpeeTimer::new(100);
        timer.start();

        run_ticks(&mut timer, 119);
        assert_eq!(timer.current_rep, 0);
        assert_eq!(timer.time_remaining_ms, 100.0);

        timer.tick();
        assert_eq!(timer.current_rep, 1);
        assert_eq!(timer.time_remaining_ms, 12_000.0);
    }

    #[test]
    fn ticks_do_nothing_before_start() {
        let mut timer = BurpeeTimer::new(100);
        run_ticks(&mut timer, 50);
        assert_eq!(timer, BurpeeTimer::new(100));
    }

    #[test]
    fn pause_freezes_the_remainder() {
        let mut timer = BurpeeTimer::new(100);
        timer.start();
        run_ticks(&mut timer, 10);
        let frozen = timer.time_remaining_ms;

        timer.pause();
        run_ticks(&mut timer, 500);
        assert_eq!(timer.time_remaining_ms, frozen);
        assert_eq!(timer.current_rep, 0);

        timer.resume();
        timer.tick();
        assert_eq!(timer.time_remaining_ms, frozen - 100.0);
    }

    #[test]
    fn stop_resets_from_any_state() {
        let mut timer = BurpeeTimer::new(100);
        timer.start();
        run_ticks(&mut timer, 250);
        timer.pause();

        timer.stop();
        assert!(!timer.started);
        assert!(!timer.paused);
        assert_eq!(timer.current_rep, 0);
        assert_eq!(timer.time_remaining_ms, timer.rep_duration_ms);
    }

    #[test]
    fn completing_all_reps_halts_without_stop() {
        // 4000 reps of 300 ms, 3 ticks each.
        let mut timer = BurpeeTimer::new(4000);
        assert_eq!(timer.rep_duration_ms, 300.0);
        timer.start();

        run_ticks(&mut timer, 3 * 4000);
        assert_eq!(timer.current_rep, 4000);
        assert!(timer.is_complete());
        // The halting tick is the next one to fire.
        assert!(timer.started);
        timer.tick();
        assert!(!timer.started);

        // Further ticks leave the final display alone.
        let settled = timer.clone();
        run_ticks(&mut timer, 10);
        assert_eq!(timer, settled);
    }

    #[test]
    fn restart_after_completion_halts_again_without_reset() {
        let mut timer = BurpeeTimer::new(4000);
        timer.start();
        run_ticks(&mut timer, 3 * 4000 + 1);
        assert!(!timer.started);

        timer.start();
        timer.tick();
        assert!(!timer.started);
        assert_eq!(timer.current_rep, 4000);
    }

    #[test]
    fn fractional_rep_duration_rolls_over() {
        // 7 reps do not divide 20 minutes evenly.
        let mut timer = BurpeeTimer::new(7);
        let rep_len = TOTAL_WORKOUT_MS / 7.0;
        assert_eq!(timer.rep_duration_ms, rep_len);
        timer.start();

        // 1714 ticks leave ~28.6 ms; the 1715th overshoots below zero and
        // must advance the rep rather than display a negative remainder.
        run_ticks(&mut timer, 1714);
        assert_eq!(timer.current_rep, 0);
        assert!(timer.time_remaining_ms > 0.0);

        timer.tick();
        assert_eq!(timer.current_rep, 1);
        assert_eq!(timer.time_remaining_ms, rep_len);
    }
}
