//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::model::{AssetLink, DeepLinkState, DesktopState, LauncherTarget, WindowId};
use crate::window_manager::{close_window, focus_window, open_window};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or raise it when already open.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window. Closing a window that is not open is a no-op.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise an open window. Focusing a window that is not open is a no-op.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Activate a desktop icon.
    ActivateLauncher {
        /// What the icon does.
        target: LauncherTarget,
    },
    /// Open the windows named by the boot URL, in order.
    ApplyDeepLink {
        /// Parsed deep-link payload.
        deep_link: DeepLinkState,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Trigger a browser download of a static asset.
    DownloadAsset(AssetLink),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Stack operations never fail: misses on close and focus leave the state unchanged, which the
/// runtime provider detects by comparing before and after.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            open_window(state, window_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            close_window(state, window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(state, window_id);
        }
        DesktopAction::ActivateLauncher { target } => match target {
            LauncherTarget::OpenWindow(window_id) => {
                open_window(state, window_id);
            }
            LauncherTarget::Download(asset) => effects.push(RuntimeEffect::DownloadAsset(asset)),
        },
        DesktopAction::ApplyDeepLink { deep_link } => {
            for window_id in deep_link.open {
                open_window(state, window_id);
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action)
    }

    fn open(state: &mut DesktopState, window_id: WindowId) {
        apply(state, DesktopAction::OpenWindow { window_id });
    }

    #[test]
    fn focus_brings_an_earlier_window_back_to_top() {
        let mut state = DesktopState::default();
        open(&mut state, WindowId::About);
        open(&mut state, WindowId::Projects);
        apply(
            &mut state,
            DesktopAction::FocusWindow {
                window_id: WindowId::About,
            },
        );

        assert_eq!(state.topmost(), Some(WindowId::About));
        assert_eq!(state.stack_order(WindowId::About), Some(3));
        assert_eq!(state.stack_order(WindowId::Projects), Some(2));
    }

    #[test]
    fn double_close_leaves_an_empty_desktop() {
        let mut state = DesktopState::default();
        open(&mut state, WindowId::About);
        for _ in 0..2 {
            let effects = apply(
                &mut state,
                DesktopAction::CloseWindow {
                    window_id: WindowId::About,
                },
            );
            assert!(effects.is_empty());
        }
        assert!(state.windows.is_empty());
    }

    #[test]
    fn opening_twice_keeps_one_entry_with_the_later_order() {
        let mut state = DesktopState::default();
        open(&mut state, WindowId::Pet);
        open(&mut state, WindowId::Pet);

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.stack_order(WindowId::Pet), Some(2));
    }

    #[test]
    fn reopen_after_close_outranks_everything_before() {
        let mut state = DesktopState::default();
        open(&mut state, WindowId::About);
        open(&mut state, WindowId::Skills);
        apply(
            &mut state,
            DesktopAction::CloseWindow {
                window_id: WindowId::About,
            },
        );
        open(&mut state, WindowId::About);

        assert_eq!(state.stack_order(WindowId::About), Some(3));
        assert_eq!(state.topmost(), Some(WindowId::About));
    }

    #[test]
    fn resume_launcher_emits_download_without_touching_the_stack() {
        let mut state = DesktopState::default();
        let asset = AssetLink {
            href: "/Resume.pdf",
            download_name: "resume.pdf",
        };
        let effects = apply(
            &mut state,
            DesktopAction::ActivateLauncher {
                target: LauncherTarget::Download(asset),
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::DownloadAsset(asset)]);
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn deep_link_opens_in_order_and_last_is_topmost() {
        let mut state = DesktopState::default();
        apply(
            &mut state,
            DesktopAction::ApplyDeepLink {
                deep_link: DeepLinkState {
                    open: vec![WindowId::About, WindowId::Projects],
                },
            },
        );

        assert_eq!(state.open_ids(), vec![WindowId::About, WindowId::Projects]);
        assert_eq!(state.topmost(), Some(WindowId::Projects));
    }

    mod proptests {
        use std::collections::BTreeSet;

        use proptest::prelude::*;

        use super::*;

        fn window_id_strategy() -> impl Strategy<Value = WindowId> {
            (0usize..WindowId::ALL.len()).prop_map(|index| WindowId::ALL[index])
        }

        fn action_strategy() -> impl Strategy<Value = DesktopAction> {
            prop_oneof![
                window_id_strategy().prop_map(|window_id| DesktopAction::OpenWindow { window_id }),
                window_id_strategy().prop_map(|window_id| DesktopAction::CloseWindow { window_id }),
                window_id_strategy().prop_map(|window_id| DesktopAction::FocusWindow { window_id }),
            ]
        }

        proptest! {
            #[test]
            fn stack_invariants_hold_for_any_sequence(
                actions in prop::collection::vec(action_strategy(), 0..64)
            ) {
                let mut state = DesktopState::default();
                let mut assigned = BTreeSet::new();

                for action in actions {
                    let before = state.clone();
                    let target = match &action {
                        DesktopAction::OpenWindow { window_id }
                        | DesktopAction::CloseWindow { window_id }
                        | DesktopAction::FocusWindow { window_id } => *window_id,
                        _ => unreachable!(),
                    };
                    let raises = match &action {
                        DesktopAction::OpenWindow { .. } => true,
                        DesktopAction::FocusWindow { .. } => before.is_open(target),
                        _ => false,
                    };

                    reduce_desktop(&mut state, action);

                    let ids: BTreeSet<_> = state.windows.iter().map(|entry| entry.id).collect();
                    prop_assert_eq!(ids.len(), state.windows.len());

                    if raises {
                        prop_assert_eq!(state.stack_counter, before.stack_counter + 1);
                        prop_assert_eq!(state.topmost(), Some(target));
                        let order = state.stack_order(target).unwrap_or_default();
                        prop_assert!(assigned.insert(order), "stack order {} reused", order);
                        prop_assert!(before.windows.iter().all(|entry| entry.stack_order < order));
                    } else {
                        prop_assert_eq!(state.stack_counter, before.stack_counter);
                    }
                }
            }
        }
    }
}
