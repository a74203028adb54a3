//! Application-level configuration constants.

/// Rep count pre-filled in the configuration form.
pub const DEFAULT_REPS: u32 = 100;

/// Rep count used when the timer page gets no usable query parameter.
pub const FALLBACK_REPS: u32 = 1;

/// Static audio asset played on each rep completion.
pub const CHIME_SRC: &str = "/chime.mp3";

/// Path of the timer view; the configuration form submits here.
pub const TIMER_PATH: &str = "/timer";

/// Query parameter carrying the rep count between the two views.
pub const REPS_PARAM: &str = "reps";
