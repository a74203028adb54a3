//! Best-effort media side effects: the rep-completion chime and the screen
//! wake lock. Every failure path here is logged and swallowed; nothing in
//! this module may block or break the countdown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

/// Rep-completion sound, constructed once per timer mount.
pub struct Chime {
    audio: Option<HtmlAudioElement>,
    primed: Cell<bool>,
}

impl Chime {
    pub fn new(src: &str) -> Self {
        let audio = HtmlAudioElement::new_with_src(src).ok();
        if audio.is_none() {
            log::warn!("audio element unavailable, reps will be silent");
        }
        Self {
            audio,
            primed: Cell::new(false),
        }
    }

    /// One-time muted play/pause inside the first user gesture, to satisfy
    /// autoplay policies that would otherwise reject the first real chime.
    pub fn prime(&self) {
        if self.primed.replace(true) {
            return;
        }
        let Some(audio) = &self.audio else { return };
        audio.set_muted(true);
        match audio.play() {
            Ok(promise) => {
                let audio = audio.clone();
                spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => {
                            let _ = audio.pause();
                            audio.set_current_time(0.0);
                        }
                        Err(err) => log::debug!("audio prime rejected: {:?}", err),
                    }
                    audio.set_muted(false);
                });
            }
            Err(err) => {
                audio.set_muted(false);
                log::debug!("audio prime failed: {:?}", err);
            }
        }
    }

    /// Fire-and-forget playback; the countdown never waits on it.
    pub fn play(&self) {
        let Some(audio) = &self.audio else { return };
        // Rewind so short reps retrigger the chime from the top.
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => {
                spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("chime playback rejected: {:?}", err);
                    }
                });
            }
            Err(err) => log::warn!("chime playback failed: {:?}", err),
        }
    }
}

/// Screen wake lock held while the timer runs.
///
/// `navigator.wakeLock` is reached through `Reflect` so a browser without
/// the capability is a silent no-op rather than a missing binding.
pub struct WakeLock {
    sentinel: Rc<RefCell<Option<JsValue>>>,
}

impl WakeLock {
    pub fn new() -> Self {
        Self {
            sentinel: Rc::new(RefCell::new(None)),
        }
    }

    /// Request a screen wake lock and stash the sentinel once granted.
    /// Denial (permissions, hidden page) is logged and ignored.
    pub fn acquire(&self) {
        let navigator = gloo_utils::window().navigator();
        let Ok(lock) = Reflect::get(navigator.as_ref(), &JsValue::from_str("wakeLock")) else {
            return;
        };
        if lock.is_undefined() || lock.is_null() {
            // Capability absent on this platform.
            return;
        }
        let Ok(request) = Reflect::get(&lock, &JsValue::from_str("request")) else {
            return;
        };
        let Some(request) = request.dyn_ref::<Function>() else {
            return;
        };
        let Ok(promise) = request.call1(&lock, &JsValue::from_str("screen")) else {
            return;
        };
        let sentinel = self.sentinel.clone();
        spawn_local(async move {
            match JsFuture::from(Promise::from(promise)).await {
                Ok(granted) => *sentinel.borrow_mut() = Some(granted),
                Err(err) => log::warn!("screen wake lock denied: {:?}", err),
            }
        });
    }

    /// Release the held sentinel, if any.
    pub fn release(&self) {
        let Some(sentinel) = self.sentinel.borrow_mut().take() else {
            return;
        };
        let Ok(release) = Reflect::get(&sentinel, &JsValue::from_str("release")) else {
            return;
        };
        let Some(release) = release.dyn_ref::<Function>() else {
            return;
        };
        match release.call0(&sentinel) {
            Ok(promise) => {
                spawn_local(async move {
                    let _ = JsFuture::from(Promise::from(promise)).await;
                });
            }
            Err(err) => log::debug!("wake lock release failed: {:?}", err),
        }
    }
}

impl Default for WakeLock {
    fn default() -> Self {
        Self::new()
    }
}
