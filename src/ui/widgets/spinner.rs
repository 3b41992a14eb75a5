use crate::state::State;

/// Animation frames for the loading indicator.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return the current spinner frame, or an empty string when idle.
///
pub fn frame(state: &State) -> &'static str {
    if state.is_loading() {
        FRAMES[state.get_spinner_index() % FRAMES.len()]
    } else {
        ""
    }
}
