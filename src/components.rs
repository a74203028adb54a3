//! Yew components for the two views: the rep configuration form and the
//! countdown screen. All timer semantics live in the library crate; these
//! components only project state and forward user actions.

use burpee_timer::{format_time, rep_duration_ms, BurpeeTimer, TimerAction, TICK_MS};
use gloo_timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{CHIME_SRC, DEFAULT_REPS, REPS_PARAM, TIMER_PATH};
use crate::media::{Chime, WakeLock};
use crate::utils;

/// Configuration form: pick a rep count, preview the per-rep duration, and
/// submit a plain GET to the timer view. Validation is left to the HTML
/// `min` hint; bad values degrade downstream instead of being rejected.
#[function_component(SetReps)]
pub fn set_reps() -> Html {
    let reps = use_state(|| DEFAULT_REPS);

    let oninput = {
        let reps = reps.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Keep the last good value while the field is mid-edit.
            if let Ok(value) = input.value().parse::<u32>() {
                reps.set(value);
            }
        })
    };

    html! {
        <form action={TIMER_PATH} method="get" class="set-reps">
            <label for="reps">{ "Number of Reps:" }</label>
            <input
                type="number"
                id="reps"
                name={REPS_PARAM}
                required=true
                min="1"
                value={reps.to_string()}
                {oninput}
            />
            <p class="per-rep-hint">
                { format!("Time per rep: {} seconds", format_time(rep_duration_ms(*reps))) }
            </p>
            <button type="submit" class="btn-start">{ "Start Workout" }</button>
        </form>
    }
}

/// Plain navigation back to the configuration page.
#[function_component(BackButton)]
pub fn back_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| utils::navigate_home());
    html! {
        <button class="btn-back" {onclick}>{ "Back" }</button>
    }
}

/// Timer view: reads the rep count off the query string and mounts the
/// countdown with it.
#[function_component(TimerPage)]
pub fn timer_page() -> Html {
    let reps = utils::reps_from_query();
    html! { <TimerControl {reps} /> }
}

#[derive(Properties, PartialEq)]
pub struct TimerControlProps {
    pub reps: u32,
}

/// The countdown screen. Owns the [`BurpeeTimer`] state machine through
/// `use_reducer`; the tick interval, chime, and wake lock are effects keyed
/// off that state, so the view stays a pure projection of it.
#[function_component(TimerControl)]
pub fn timer_control(props: &TimerControlProps) -> Html {
    let timer = {
        let reps = props.reps;
        use_reducer(move || BurpeeTimer::new(reps))
    };
    let chime = use_mut_ref(|| Chime::new(CHIME_SRC));
    let wake_lock = use_mut_ref(WakeLock::new);

    // Tick loop, alive exactly while the timer is started. Dropping the
    // Interval clears the pending callback, so restarts and unmounts never
    // leave a duplicate timer behind.
    {
        let dispatcher = timer.dispatcher();
        use_effect_with(timer.started, move |&started| {
            let interval = started.then(|| {
                Interval::new(TICK_MS, move || dispatcher.dispatch(TimerAction::Tick))
            });
            move || drop(interval)
        });
    }

    // Chime once per rep advance. A stop resets current_rep to 0, which
    // must stay silent.
    {
        let chime = chime.clone();
        use_effect_with(timer.current_rep, move |&rep| {
            if rep > 0 {
                chime.borrow().play();
            }
            || ()
        });
    }

    // Hold a screen wake lock while running; released on pause-less stop,
    // completion, and unmount alike, and a no-op where unsupported.
    {
        let wake_lock = wake_lock.clone();
        use_effect_with(timer.started, move |&started| {
            if started {
                wake_lock.borrow().acquire();
            }
            move || wake_lock.borrow().release()
        });
    }

    let on_start = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| timer.dispatch(TimerAction::Start))
    };
    let on_pause = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| timer.dispatch(TimerAction::Pause))
    };
    let on_resume = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| timer.dispatch(TimerAction::Resume))
    };
    let on_stop = {
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| timer.dispatch(TimerAction::Stop))
    };

    // First touch/click anywhere on the screen primes audio playback,
    // before autoplay policies get a chance to mute the first real chime.
    let on_first_interaction = {
        let chime = chime.clone();
        Callback::from(move |_: MouseEvent| chime.borrow().prime())
    };

    html! {
        <div class="timer-screen" onclick={on_first_interaction}>
            <div class="timer-card">
                <p class="rep-counter">
                    { format!("Rep {} of {}", timer.current_rep, timer.total_reps) }
                </p>
                <p class="time-display">
                    { format_time(timer.time_remaining_ms) }
                </p>
                <div class="timer-buttons">
                    if !timer.started {
                        <button class="btn-start" onclick={on_start}>{ "Start" }</button>
                    } else if timer.paused {
                        <button class="btn-resume" onclick={on_resume}>{ "Resume" }</button>
                    } else {
                        <button class="btn-pause" onclick={on_pause}>{ "Pause" }</button>
                    }
                    <button class="btn-stop" onclick={on_stop}>{ "Stop" }</button>
                </div>
                <BackButton />
            </div>
        </div>
    }
}
