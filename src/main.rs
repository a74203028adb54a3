//! Burpee timer frontend: a Yew app with two views, the rep configuration
//! form at `/` and the countdown screen at `/timer?reps=<n>`. Navigation
//! between them is a plain GET, so each view mounts with fresh state.

use yew::prelude::*;

mod components;
mod config;
mod media;
mod utils;

use components::{SetReps, TimerPage};
use config::TIMER_PATH;

#[function_component(Home)]
fn home() -> Html {
    html! {
        <div class="page">
            <h1>{ "Workout Timer" }</h1>
            <SetReps />
        </div>
    }
}

/// Pick a view off the current pathname; anything unknown falls back to the
/// configuration page.
#[function_component(App)]
fn app() -> Html {
    if utils::current_path() == TIMER_PATH {
        html! { <TimerPage /> }
    } else {
        html! { <Home /> }
    }
}

fn main() {
    // Route panics to the browser console.
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
