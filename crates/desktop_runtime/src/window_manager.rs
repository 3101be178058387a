//! Window stack transitions used by the desktop reducer.
//!
//! Every successful open or focus consumes exactly one value from
//! [`DesktopState::stack_counter`], so stack orders are unique and strictly increasing over the
//! life of the page. Misses (focusing or closing a window that is not open) leave the state
//! untouched.

use crate::model::{DesktopState, OpenWindowEntry, WindowId};

fn next_stack_order(state: &mut DesktopState) -> u64 {
    state.stack_counter += 1;
    state.stack_counter
}

/// Opens `window_id`, or raises it when already open. Returns the assigned stack order.
pub fn open_window(state: &mut DesktopState, window_id: WindowId) -> u64 {
    let stack_order = next_stack_order(state);
    match state.windows.iter_mut().find(|entry| entry.id == window_id) {
        Some(entry) => entry.stack_order = stack_order,
        None => state.windows.push(OpenWindowEntry {
            id: window_id,
            stack_order,
        }),
    }
    stack_order
}

/// Raises an open window to the top of the stack.
///
/// Returns `None` without consuming the counter when the window is not open.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> Option<u64> {
    let index = state
        .windows
        .iter()
        .position(|entry| entry.id == window_id)?;
    let stack_order = next_stack_order(state);
    state.windows[index].stack_order = stack_order;
    Some(stack_order)
}

/// Removes a window from the stack. Returns `true` when something was removed.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let before_len = state.windows.len();
    state.windows.retain(|entry| entry.id != window_id);
    state.windows.len() != before_len
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_open_receives_order_one() {
        let mut state = DesktopState::default();
        assert_eq!(open_window(&mut state, WindowId::About), 1);
        assert_eq!(state.stack_counter, 1);
    }

    #[test]
    fn reopening_raises_without_duplicating() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::About);
        open_window(&mut state, WindowId::Projects);
        let order = open_window(&mut state, WindowId::About);

        assert_eq!(order, 3);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.stack_order(WindowId::About), Some(3));
        assert_eq!(state.topmost(), Some(WindowId::About));
    }

    #[test]
    fn focusing_a_closed_window_does_not_consume_the_counter() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Skills);

        assert_eq!(focus_window(&mut state, WindowId::Pet), None);
        assert_eq!(state.stack_counter, 1);
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn close_reports_whether_anything_was_removed() {
        let mut state = DesktopState::default();
        open_window(&mut state, WindowId::Contact);

        assert!(close_window(&mut state, WindowId::Contact));
        assert!(!close_window(&mut state, WindowId::Contact));
        assert!(state.windows.is_empty());
    }
}
