//! Shared stacking helpers used by the desktop reducer.

use crate::model::{DesktopState, WindowId};

/// Takes the next value from the shared stacking counter.
///
/// Returns `None` once the counter is exhausted; values are never reused.
pub fn next_z_index(state: &mut DesktopState) -> Option<u32> {
    let next = state.z_counter().checked_add(1)?;
    state.set_z_counter(next);
    Some(next)
}

/// Raises `window_id` strictly above every other window.
///
/// Returns `false` when the stacking counter is exhausted and nothing changed.
pub fn raise_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(z_index) = next_z_index(state) else {
        return false;
    };
    state.window_mut(window_id).z_index = z_index;
    true
}

/// The open window currently drawn on top.
pub fn top_window(state: &DesktopState) -> Option<WindowId> {
    state
        .windows()
        .filter(|w| w.is_open)
        .max_by_key(|w| w.z_index)
        .map(|w| w.id)
}
