//! End-to-end behavior of the app info drop target.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use launchpad::prelude::*;
use launchpad::widget::animation::Easing;
use launchpad::widget::widgets::{BACKGROUND_ALPHA, is_launchable_application};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn calculator() -> ComponentName {
    ComponentName::new("com.android.calculator2", ".Calculator")
}

fn info_target() -> (InfoDropTarget, Arc<NavigationQueue>) {
    init_logging();
    let navigator = Arc::new(NavigationQueue::new());
    let config = DropTargetConfig::default().with_easing(Easing::Linear);
    let target = InfoDropTarget::new(&Theme::light(), &config, navigator.clone())
        .expect("default theme defines the hover tint");
    (target, navigator)
}

fn every_kind_of_item() -> Vec<DraggedItem> {
    let app = ApplicationInfo::new("Calculator", calculator());
    vec![
        app.clone().into(),
        ShortcutInfo::from_application(&app).into(),
        ShortcutInfo::new(
            "Docs",
            Intent::new()
                .with_action(Intent::ACTION_VIEW)
                .with_data("https://example.com"),
        )
        .into(),
        ShortcutInfo::new("Direct", Intent::new().with_component(calculator())).into(),
        WidgetInfo::new(ComponentName::new("com.android.deskclock", ".ClockWidget")).into(),
        FolderInfo::new("Tools").into(),
        DraggedItem::Other {
            item_type: ItemType::AppWidget,
        },
    ]
}

#[test]
fn scenario_application_is_armed_hovered_and_opens_details() {
    let (mut target, navigator) = info_target();
    let mut drag = DragObject::new(
        ApplicationInfo::new("Calculator", calculator()),
        DragAction::Copy,
        Point::ZERO,
    );

    target.on_drag_start(&drag.drag_info, drag.drag_action);
    assert_eq!(target.state(), DropTargetState::Armed);
    assert!(target.visibility().is_visible());

    target.on_drag_enter(&mut drag);
    assert_eq!(target.state(), DropTargetState::Hovering);
    let now = Instant::now();
    target.advance_animations(now);
    target.advance_animations(now + Duration::from_millis(100));
    assert_eq!(target.background_alpha(), target.hover_color().alpha8());

    assert!(!target.accept_drop(&drag));
    assert_eq!(
        navigator.drain(),
        vec![NavigationRequest::ApplicationDetails(calculator())]
    );

    target.on_drag_end();
    assert_eq!(target.state(), DropTargetState::Idle);
    assert!(!target.visibility().is_visible());
}

#[test]
fn scenario_widget_never_arms() {
    let (mut target, _) = info_target();
    let mut drag = DragObject::new(
        WidgetInfo::new(ComponentName::new("com.android.deskclock", ".ClockWidget")),
        DragAction::Move,
        Point::ZERO,
    );

    target.on_drag_start(&drag.drag_info, drag.drag_action);
    assert_eq!(target.state(), DropTargetState::Idle);
    assert_eq!(target.visibility(), Visibility::Collapsed);

    target.on_drag_enter(&mut drag);
    assert_eq!(target.state(), DropTargetState::Idle);
    assert!(!target.is_animating());
    assert_eq!(target.background_alpha(), 0);
}

#[test]
fn scenario_exit_before_enter_finishes_ends_transparent() {
    let (mut target, _) = info_target();
    let mut drag = DragObject::new(
        ApplicationInfo::new("Calculator", calculator()),
        DragAction::Copy,
        Point::ZERO,
    );
    target.on_drag_start(&drag.drag_info, drag.drag_action);

    let start = Instant::now();
    target.on_drag_enter(&mut drag);
    target.advance_animations(start);
    target.advance_animations(start + Duration::from_millis(30));
    assert!(target.background_alpha() > 0);

    target.on_drag_exit(&mut drag);
    assert!(!target.is_hovering());

    let mut now = start + Duration::from_millis(30);
    while target.advance_animations(now) {
        now += Duration::from_millis(16);
    }
    assert_eq!(target.background_alpha(), 0);
    assert_eq!(target.state(), DropTargetState::Armed);
}

#[test]
fn start_arms_exactly_the_launchable_applications() {
    let (mut target, _) = info_target();

    for item in every_kind_of_item() {
        target.on_drag_start(&item, DragAction::Move);
        let expected = is_launchable_application(&item);
        assert_eq!(target.is_armed(), expected, "{item:?}");
        assert_eq!(target.visibility().is_visible(), expected, "{item:?}");
        target.on_drag_end();
    }
}

#[test]
fn accept_drop_never_consumes_the_item() {
    let (mut target, navigator) = info_target();

    for item in every_kind_of_item() {
        let drag = DragObject::new(item, DragAction::Move, Point::ZERO);
        assert!(!target.accept_drop(&drag));
    }

    // Applications, application icons, and shortcuts with an explicit component.
    assert_eq!(navigator.len(), 3);
}

#[test]
fn end_always_resets_and_hovering_implies_armed() {
    let (mut target, _) = info_target();
    let app: DraggedItem = ApplicationInfo::new("Calculator", calculator()).into();
    let mut drag = DragObject::new(app.clone(), DragAction::Copy, Point::ZERO);

    type Step = fn(&mut InfoDropTarget, &DraggedItem, &mut DragObject);
    let steps: [Step; 5] = [
        |t, item, _| t.on_drag_start(item, DragAction::Copy),
        |t, _, d| t.on_drag_enter(d),
        |t, _, d| t.on_drag_exit(d),
        |t, _, _| t.on_drag_end(),
        |t, _, _| t.on_drag_start(&FolderInfo::new("Work").into(), DragAction::Move),
    ];

    // Every sequence of four steps, including ineligible starts mid-hover.
    for n in 0..steps.len().pow(4) {
        let mut code = n;
        for _ in 0..4 {
            steps[code % steps.len()](&mut target, &app, &mut drag);
            code /= steps.len();
            assert!(!target.is_hovering() || target.is_armed());
            if !target.is_armed() {
                assert_eq!(target.state(), DropTargetState::Idle);
                assert_eq!(target.visibility(), Visibility::Collapsed);
            }
        }
        target.on_drag_end();
        assert_eq!(target.state(), DropTargetState::Idle);
        assert_eq!(target.background_alpha(), 0);
        assert!(!target.is_animating());
    }
}

#[test]
fn missing_or_malformed_tint_is_a_configuration_error() {
    init_logging();
    let navigator = Arc::new(NavigationQueue::new());

    let mut theme = Theme::light();
    theme.variables.remove(tokens::INFO_TARGET_HOVER_TINT);
    let err = InfoDropTarget::new(&theme, &DropTargetConfig::default(), navigator.clone())
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::MissingToken { .. }));

    let mut theme = Theme::dark();
    theme.variables.set(tokens::INFO_TARGET_HOVER_TINT, "teal");
    let err = InfoDropTarget::new(&theme, &DropTargetConfig::default(), navigator.clone())
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidColor { .. }));

    let config = DropTargetConfig::default().with_hover_tint_token("no-such-token");
    let err = InfoDropTarget::new(&Theme::light(), &config, navigator).unwrap_err();
    assert_eq!(err.to_string(), "theme token 'no-such-token' is not defined");
}

#[test]
fn controller_drives_the_target_end_to_end() {
    let (target, navigator) = info_target();
    let target = Rc::new(RefCell::new(target));
    target
        .borrow_mut()
        .set_hit_rect(Rect::new(0.0, 0.0, 240.0, 56.0));

    let mut controller = DragController::new();
    controller.add_drag_listener(target.clone());
    controller.add_drop_target(target.clone());

    // A folder never arms the target, so it is never hit.
    controller.start_drag(FolderInfo::new("Tools"), DragAction::Move, Point::new(100.0, 30.0));
    assert!(!target.borrow().is_drop_enabled());
    assert_eq!(controller.drop_at(Point::new(100.0, 30.0)), DropOutcome::NoTarget);

    // An application arms it, hovers, and is sent back to its source.
    controller.start_drag(
        ApplicationInfo::new("Calculator", calculator()),
        DragAction::Copy,
        Point::new(100.0, 500.0),
    );
    assert_eq!(target.borrow().state(), DropTargetState::Armed);

    controller.move_to(Point::new(100.0, 30.0));
    assert_eq!(target.borrow().state(), DropTargetState::Hovering);
    assert!(controller
        .drag_object()
        .is_some_and(|drag| drag.drag_view.paint().is_some()));

    let outcome = controller.drop_at(Point::new(100.0, 30.0));
    assert_eq!(outcome, DropOutcome::Rejected);
    assert_eq!(target.borrow().state(), DropTargetState::Idle);
    assert_eq!(
        navigator.drain(),
        vec![NavigationRequest::ApplicationDetails(calculator())]
    );
}

#[test]
fn config_file_feeds_the_target() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
[drop_target]
transition_duration_ms = 200
easing = "linear"

[colors]
info-target-hover-tint = "#33B5E580"
"##
    )
    .unwrap();

    let config = LauncherConfig::from_file(file.path()).unwrap();
    let theme = config.theme(Theme::light()).unwrap();
    let target =
        InfoDropTarget::new(&theme, &config.drop_target, Arc::new(NavigationQueue::new())).unwrap();

    assert_eq!(target.hover_color(), Color::from_argb(0x8033B5E5));
    assert_eq!(target.base().transition_duration(), Duration::from_millis(200));
    assert_eq!(BACKGROUND_ALPHA, "alpha");
}
