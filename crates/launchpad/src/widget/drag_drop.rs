//! The launcher's drag and drop protocol.
//!
//! A [`DragController`] owns one drag session at a time. Widgets take part
//! in two roles:
//!
//! - A [`DragListener`] hears when a drag starts and ends, whether or not the
//!   item ever reaches it. Drop targets use this to arm themselves.
//! - A [`DropTarget`] receives enter/over/exit while the pointer is over its
//!   hit rectangle, and is asked to accept the item on release.
//!
//! The session is single-threaded: every callback runs on the UI thread, in
//! the order described on each controller method.
//!
//! ```ignore
//! let target = Rc::new(RefCell::new(InfoDropTarget::new(&theme, &config, navigator)?));
//! controller.add_drag_listener(target.clone());
//! controller.add_drop_target(target.clone());
//!
//! controller.start_drag(app, DragAction::Copy, Point::new(10.0, 400.0));
//! controller.move_to(Point::new(40.0, 20.0));
//! let outcome = controller.drop_at(Point::new(40.0, 20.0));
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use launchpad_core::logging::{span_names, targets};
use launchpad_core::PerfSpan;
use launchpad_render::{Paint, Point, Rect};

use crate::item::DraggedItem;

/// What the drag source intends to do with the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragAction {
    /// The item leaves its source (workspace icons).
    #[default]
    Move,
    /// The source keeps the item (all-apps entries).
    Copy,
}

/// The floating image that follows the pointer during a drag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragView {
    paint: Option<Paint>,
}

impl DragView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The paint applied over the drag image, if any.
    pub fn paint(&self) -> Option<&Paint> {
        self.paint.as_ref()
    }

    /// Set or clear the paint.
    pub fn set_paint(&mut self, paint: Option<Paint>) {
        self.paint = paint;
    }
}

/// Everything a drop target learns about the drag in progress.
#[derive(Debug, Clone)]
pub struct DragObject {
    /// Current pointer position, in launcher coordinates.
    pub position: Point,
    /// The dragged item. Targets only read it.
    pub drag_info: Arc<DraggedItem>,
    pub drag_action: DragAction,
    pub drag_view: DragView,
    /// Set once the pointer has been released (or the drag cancelled).
    pub drag_complete: bool,
    pub cancelled: bool,
}

impl DragObject {
    pub fn new(item: impl Into<DraggedItem>, drag_action: DragAction, position: Point) -> Self {
        Self {
            position,
            drag_info: Arc::new(item.into()),
            drag_action,
            drag_view: DragView::new(),
            drag_complete: false,
            cancelled: false,
        }
    }
}

/// Observer of drag session start and end.
pub trait DragListener {
    /// A drag of `item` has started.
    fn on_drag_start(&mut self, item: &DraggedItem, action: DragAction);

    /// The drag session has ended, with or without a drop.
    fn on_drag_end(&mut self);
}

/// A region that items can be dropped on.
pub trait DropTarget {
    /// Whether the controller should consider this target at all.
    fn is_drop_enabled(&self) -> bool;

    /// The pointer moved into this target.
    fn on_drag_enter(&mut self, drag: &mut DragObject);

    /// The pointer moved within this target.
    fn on_drag_over(&mut self, _drag: &mut DragObject) {}

    /// The pointer left this target, or was released over it.
    fn on_drag_exit(&mut self, drag: &mut DragObject);

    /// Complete a drop this target accepted.
    fn on_drop(&mut self, drag: &DragObject);

    /// Decide whether to take the item. Called once, on release.
    fn accept_drop(&mut self, drag: &DragObject) -> bool;

    /// The area, in launcher coordinates, where this target receives drags.
    fn hit_rect(&self) -> Rect;
}

/// State of the drag controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag is active.
    Idle,
    /// A drag is in progress.
    Dragging,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A target accepted the item.
    Accepted,
    /// The item was released over a target that declined it.
    Rejected,
    /// The item was released outside every enabled target.
    NoTarget,
}

impl DropOutcome {
    /// Whether the item was taken by a target.
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

type SharedListener = Rc<RefCell<dyn DragListener>>;
type SharedTarget = Rc<RefCell<dyn DropTarget>>;

/// Runs drag sessions and routes them to listeners and drop targets.
#[derive(Default)]
pub struct DragController {
    listeners: Vec<SharedListener>,
    targets: Vec<SharedTarget>,
    drag: Option<DragObject>,
    /// Index into `targets` of the target under the pointer.
    current_target: Option<usize>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_drag_listener(&mut self, listener: SharedListener) {
        self.listeners.push(listener);
    }

    /// Register a drop target. Later targets sit above earlier ones.
    pub fn add_drop_target(&mut self, target: SharedTarget) {
        self.targets.push(target);
    }

    /// Returns the current drag state.
    pub fn state(&self) -> DragState {
        if self.drag.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The drag in progress.
    pub fn drag_object(&self) -> Option<&DragObject> {
        self.drag.as_ref()
    }

    /// Start a drag session.
    ///
    /// Every listener hears `on_drag_start` before the first target is
    /// entered. A session already in progress is cancelled first.
    pub fn start_drag(&mut self, item: impl Into<DraggedItem>, action: DragAction, position: Point) {
        if self.drag.is_some() {
            tracing::warn!(target: targets::DRAG, "drag started while another was active; cancelling it");
            self.cancel();
        }

        let _span = PerfSpan::new(span_names::DRAG_START);
        let drag = DragObject::new(item, action, position);
        tracing::debug!(
            target: targets::DRAG,
            item_type = ?drag.drag_info.item_type(),
            ?action,
            "drag started"
        );
        for listener in &self.listeners {
            listener.borrow_mut().on_drag_start(&drag.drag_info, action);
        }
        self.drag = Some(drag);
        self.move_to(position);
    }

    /// Move the pointer, delivering exit/enter on a target change and
    /// `on_drag_over` otherwise.
    pub fn move_to(&mut self, position: Point) {
        let hit = self.find_drop_target(position);
        let previous = self.current_target;
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.position = position;

        if hit != previous {
            if let Some(index) = previous {
                self.targets[index].borrow_mut().on_drag_exit(drag);
            }
            if let Some(index) = hit {
                tracing::trace!(target: targets::DRAG, target_index = index, "drag entered target");
                self.targets[index].borrow_mut().on_drag_enter(drag);
            }
            self.current_target = hit;
        } else if let Some(index) = hit {
            self.targets[index].borrow_mut().on_drag_over(drag);
        }
    }

    /// Release the item at `position`.
    ///
    /// The target under the pointer is exited with `drag_complete` set, then
    /// asked to accept; `on_drop` runs only if it accepted. The session then
    /// ends and every listener hears `on_drag_end`.
    pub fn drop_at(&mut self, position: Point) -> DropOutcome {
        if self.drag.is_none() {
            tracing::debug!(target: targets::DRAG, "drop without an active drag ignored");
            return DropOutcome::NoTarget;
        }
        self.move_to(position);

        let target = self.current_target.take();
        let outcome = match (self.drag.as_mut(), target) {
            (Some(drag), Some(index)) => {
                drag.drag_complete = true;
                let mut target = self.targets[index].borrow_mut();
                target.on_drag_exit(drag);
                if target.accept_drop(drag) {
                    target.on_drop(drag);
                    DropOutcome::Accepted
                } else {
                    DropOutcome::Rejected
                }
            }
            _ => DropOutcome::NoTarget,
        };

        tracing::debug!(target: targets::DRAG, ?outcome, "drag dropped");
        self.end_drag();
        outcome
    }

    /// Abandon the drag without dropping.
    pub fn cancel(&mut self) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.cancelled = true;
        drag.drag_complete = true;
        if let Some(index) = self.current_target.take() {
            self.targets[index].borrow_mut().on_drag_exit(drag);
        }

        tracing::debug!(target: targets::DRAG, "drag cancelled");
        self.end_drag();
    }

    fn end_drag(&mut self) {
        self.drag = None;
        self.current_target = None;
        for listener in &self.listeners {
            listener.borrow_mut().on_drag_end();
        }
    }

    /// The topmost enabled target whose hit rect contains `position`.
    fn find_drop_target(&self, position: Point) -> Option<usize> {
        self.targets.iter().enumerate().rev().find_map(|(index, target)| {
            let target = target.borrow();
            (target.is_drop_enabled() && target.hit_rect().contains(position)).then_some(index)
        })
    }
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("listeners", &self.listeners.len())
            .field("targets", &self.targets.len())
            .field("drag", &self.drag)
            .field("current_target", &self.current_target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ApplicationInfo, ComponentName, FolderInfo};

    #[derive(Default)]
    struct Recorder {
        rect: Rect,
        enabled: bool,
        accept: bool,
        events: Vec<String>,
    }

    impl Recorder {
        fn shared(rect: Rect, accept: bool) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                rect,
                enabled: true,
                accept,
                events: Vec::new(),
            }))
        }
    }

    impl DragListener for Recorder {
        fn on_drag_start(&mut self, _item: &DraggedItem, _action: DragAction) {
            self.events.push("start".into());
        }

        fn on_drag_end(&mut self) {
            self.events.push("end".into());
        }
    }

    impl DropTarget for Recorder {
        fn is_drop_enabled(&self) -> bool {
            self.enabled
        }

        fn on_drag_enter(&mut self, _drag: &mut DragObject) {
            self.events.push("enter".into());
        }

        fn on_drag_over(&mut self, _drag: &mut DragObject) {
            self.events.push("over".into());
        }

        fn on_drag_exit(&mut self, drag: &mut DragObject) {
            self.events.push(format!("exit(complete={})", drag.drag_complete));
        }

        fn on_drop(&mut self, _drag: &DragObject) {
            self.events.push("drop".into());
        }

        fn accept_drop(&mut self, _drag: &DragObject) -> bool {
            self.events.push("accept?".into());
            self.accept
        }

        fn hit_rect(&self) -> Rect {
            self.rect
        }
    }

    fn app() -> ApplicationInfo {
        ApplicationInfo::new("Clock", ComponentName::new("com.android.deskclock", ".DeskClock"))
    }

    fn controller_with(target: &Rc<RefCell<Recorder>>) -> DragController {
        let mut controller = DragController::new();
        controller.add_drag_listener(target.clone());
        controller.add_drop_target(target.clone());
        controller
    }

    #[test]
    fn test_drop_sequence_when_accepted() {
        let target = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), true);
        let mut controller = controller_with(&target);

        controller.start_drag(app(), DragAction::Copy, Point::new(50.0, 300.0));
        assert_eq!(controller.state(), DragState::Dragging);
        controller.move_to(Point::new(50.0, 25.0));
        controller.move_to(Point::new(60.0, 25.0));
        let outcome = controller.drop_at(Point::new(60.0, 25.0));

        assert_eq!(outcome, DropOutcome::Accepted);
        assert_eq!(
            target.borrow().events,
            vec!["start", "enter", "over", "over", "exit(complete=true)", "accept?", "drop", "end"]
        );
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn test_rejected_drop_skips_on_drop() {
        let target = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), false);
        let mut controller = controller_with(&target);

        controller.start_drag(app(), DragAction::Copy, Point::new(10.0, 10.0));
        let outcome = controller.drop_at(Point::new(10.0, 10.0));

        assert_eq!(outcome, DropOutcome::Rejected);
        assert!(!outcome.is_accepted());
        assert!(!target.borrow().events.iter().any(|e| e == "drop"));
        assert_eq!(target.borrow().events.last().map(String::as_str), Some("end"));
    }

    #[test]
    fn test_leaving_target_delivers_exit() {
        let target = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), true);
        let mut controller = controller_with(&target);

        controller.start_drag(FolderInfo::new("Games"), DragAction::Move, Point::new(10.0, 10.0));
        controller.move_to(Point::new(10.0, 200.0));
        let outcome = controller.drop_at(Point::new(10.0, 200.0));

        assert_eq!(outcome, DropOutcome::NoTarget);
        assert_eq!(
            target.borrow().events,
            vec!["start", "enter", "exit(complete=false)", "end"]
        );
    }

    #[test]
    fn test_disabled_targets_are_skipped() {
        let target = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), true);
        target.borrow_mut().enabled = false;
        let mut controller = controller_with(&target);

        controller.start_drag(app(), DragAction::Copy, Point::new(10.0, 10.0));
        assert_eq!(controller.drop_at(Point::new(10.0, 10.0)), DropOutcome::NoTarget);
        assert_eq!(target.borrow().events, vec!["start", "end"]);
    }

    #[test]
    fn test_topmost_target_wins() {
        let below = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), true);
        let above = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), false);
        let mut controller = DragController::new();
        controller.add_drop_target(below.clone());
        controller.add_drop_target(above.clone());

        controller.start_drag(app(), DragAction::Copy, Point::new(10.0, 10.0));
        assert_eq!(controller.drop_at(Point::new(10.0, 10.0)), DropOutcome::Rejected);
        assert!(below.borrow().events.is_empty());
    }

    #[test]
    fn test_cancel_exits_current_target() {
        let target = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), true);
        let mut controller = controller_with(&target);

        controller.start_drag(app(), DragAction::Copy, Point::new(10.0, 10.0));
        controller.cancel();

        assert_eq!(
            target.borrow().events,
            vec!["start", "enter", "exit(complete=true)", "end"]
        );
        assert!(!controller.is_dragging());

        // Cancelling again is a no-op.
        controller.cancel();
        assert_eq!(target.borrow().events.len(), 4);
    }

    #[test]
    fn test_drop_without_drag() {
        let mut controller = DragController::new();
        assert_eq!(controller.drop_at(Point::ZERO), DropOutcome::NoTarget);
    }

    #[derive(Clone, Default)]
    struct SpanRecorder(Arc<parking_lot::Mutex<Vec<String>>>);

    struct OperationField<'a>(&'a mut Vec<String>);

    impl tracing::field::Visit for OperationField<'_> {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "operation" {
                self.0.push(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &tracing::field::Field, _value: &dyn std::fmt::Debug) {}
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanRecorder {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            attrs.record(&mut OperationField(&mut self.0.lock()));
        }
    }

    #[test]
    fn test_start_drag_opens_perf_span() {
        use tracing_subscriber::layer::SubscriberExt;

        let recorder = SpanRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let target = Recorder::shared(Rect::new(0.0, 0.0, 100.0, 50.0), true);
        let mut controller = controller_with(&target);

        tracing::subscriber::with_default(subscriber, || {
            controller.start_drag(app(), DragAction::Copy, Point::new(10.0, 10.0));
        });

        assert_eq!(*recorder.0.lock(), vec![span_names::DRAG_START.to_string()]);
        assert_eq!(target.borrow().events, vec!["start", "enter"]);
    }
}
