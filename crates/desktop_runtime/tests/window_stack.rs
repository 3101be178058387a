use desktop_runtime::drag::{initial_position, WindowGeometry};
use desktop_runtime::manifest::{DOCK_ENTRIES, LEFT_LAUNCHERS, RIGHT_LAUNCHERS};
use desktop_runtime::{
    parse_deep_link_from_query, reduce_desktop, DesktopAction, DesktopState, LauncherTarget,
    PointerPosition, RuntimeEffect, ViewportSize, WindowId, WindowPosition,
};
use pretty_assertions::assert_eq;

fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    reduce_desktop(state, action)
}

#[test]
fn icon_clicks_drive_the_stack_like_a_visitor_would() {
    let mut state = DesktopState::default();

    for launcher in LEFT_LAUNCHERS {
        let effects = dispatch(
            &mut state,
            DesktopAction::ActivateLauncher {
                target: launcher.target,
            },
        );
        assert!(effects.is_empty(), "{} should not emit effects", launcher.label);
    }
    assert_eq!(
        state.open_ids(),
        vec![
            WindowId::About,
            WindowId::Projects,
            WindowId::Experience,
            WindowId::Skills
        ]
    );
    assert_eq!(state.topmost(), Some(WindowId::Skills));

    dispatch(
        &mut state,
        DesktopAction::FocusWindow {
            window_id: WindowId::About,
        },
    );
    dispatch(
        &mut state,
        DesktopAction::CloseWindow {
            window_id: WindowId::Skills,
        },
    );
    assert_eq!(state.topmost(), Some(WindowId::About));
    assert!(!state.is_open(WindowId::Skills));
}

#[test]
fn resume_icon_downloads_and_leaves_windows_alone() {
    let mut state = DesktopState::default();
    let resume = RIGHT_LAUNCHERS
        .iter()
        .find(|launcher| matches!(launcher.target, LauncherTarget::Download(_)))
        .map(|launcher| launcher.target);
    let Some(target) = resume else {
        panic!("right column should carry the resume launcher");
    };

    let effects = dispatch(&mut state, DesktopAction::ActivateLauncher { target });

    assert_eq!(effects.len(), 1);
    let RuntimeEffect::DownloadAsset(asset) = &effects[0];
    assert_eq!(asset.href, "/Resume.pdf");
    assert_eq!(asset.download_name, "Hania_Seifeldeen_Resume.pdf");
    assert!(state.windows.is_empty());
}

#[test]
fn dock_reopens_a_closed_window_above_everything() {
    let mut state = DesktopState::default();
    for entry in DOCK_ENTRIES {
        dispatch(
            &mut state,
            DesktopAction::OpenWindow {
                window_id: entry.window_id,
            },
        );
    }
    let highest_before = state.stack_counter;

    dispatch(
        &mut state,
        DesktopAction::CloseWindow {
            window_id: WindowId::Contact,
        },
    );
    dispatch(
        &mut state,
        DesktopAction::OpenWindow {
            window_id: WindowId::Contact,
        },
    );

    assert_eq!(state.stack_order(WindowId::Contact), Some(highest_before + 1));
    assert_eq!(state.windows.len(), DOCK_ENTRIES.len());
}

#[test]
fn boot_link_with_noise_opens_only_known_windows() {
    let parsed = parse_deep_link_from_query("?utm=x&open=pet,,Bogus,CONTACT");
    assert_eq!(parsed.rejected.len(), 1);

    let mut state = DesktopState::default();
    dispatch(
        &mut state,
        DesktopAction::ApplyDeepLink {
            deep_link: parsed.state,
        },
    );
    assert_eq!(state.open_ids(), vec![WindowId::Pet, WindowId::Contact]);
}

#[test]
fn dragged_then_maximized_window_restores_its_spot() {
    let viewport = ViewportSize::new(1280, 800);
    let start = initial_position(viewport, 0.0);
    assert_eq!(start, WindowPosition::new(100, 50));

    let mut geometry = WindowGeometry::new(start);
    geometry.begin_drag(PointerPosition::new(200, 60));
    assert!(geometry.drag_to(PointerPosition::new(230, 10)));
    geometry.end_drag();
    assert_eq!(geometry.position, WindowPosition::new(130, 0));

    geometry.toggle_maximized();
    let maximized = geometry.rendered_rect(viewport);
    assert_eq!((maximized.x, maximized.y), (0, 0));
    assert_eq!(maximized.h, 800 - 80);

    geometry.toggle_maximized();
    let restored = geometry.rendered_rect(viewport);
    assert_eq!((restored.x, restored.y), (130, 0));
}
