//! Shared state for the drop targets shown in the launcher's search bar area.
//!
//! The info and delete targets look and behave the same way: a button that
//! appears while a drag is in progress, tints the dragged item while it
//! hovers, and fades its background in and out. [`ButtonDropTarget`] holds
//! that shared state; concrete targets embed it and decide the rest.

use std::time::Duration;

use launchpad_core::{Property, Signal};
use launchpad_render::{Paint, Rect};

use crate::widget::animation::Easing;
use crate::widget::drag_drop::DragObject;

/// Whether a drop target takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Shown, occupying its layout space.
    Visible,
    /// Hidden, with no layout space reserved.
    #[default]
    Collapsed,
}

impl Visibility {
    #[inline]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// The state every button-style drop target carries.
pub struct ButtonDropTarget {
    active: Property<bool>,
    hovering: Property<bool>,
    visibility: Property<Visibility>,
    hit_rect: Rect,
    transition_duration: Duration,
    easing: Easing,
    hover_paint: Paint,

    /// Signal emitted when the target is shown or collapsed.
    pub visibility_changed: Signal<Visibility>,

    /// Signal emitted when hover feedback starts or stops.
    pub hover_changed: Signal<bool>,
}

impl ButtonDropTarget {
    pub fn new(hover_paint: Paint, transition_duration: Duration, easing: Easing) -> Self {
        Self {
            active: Property::new(false),
            hovering: Property::new(false),
            visibility: Property::new(Visibility::Collapsed),
            hit_rect: Rect::ZERO,
            transition_duration,
            easing,
            hover_paint,
            visibility_changed: Signal::new(),
            hover_changed: Signal::new(),
        }
    }

    /// Whether this target takes part in the current drag.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn set_active(&mut self, active: bool) {
        self.active.set(active);
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering.get()
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        if self.visibility.set(visibility) {
            self.visibility_changed.emit(visibility);
        }
    }

    /// Start hover feedback: tint the drag view with the hover paint.
    pub fn begin_hover(&mut self, drag: &mut DragObject) {
        drag.drag_view.set_paint(Some(self.hover_paint));
        self.set_hovering(true);
    }

    /// Stop hover feedback and clear the drag view's tint.
    pub fn end_hover(&mut self, drag: &mut DragObject) {
        drag.drag_view.set_paint(None);
        self.set_hovering(false);
    }

    /// Drop hover state left over from an earlier drag.
    ///
    /// Unlike [`end_hover`](Self::end_hover) this needs no drag object; the
    /// drag view it tinted belongs to a session that is already gone.
    pub fn clear_hover(&mut self) {
        self.set_hovering(false);
    }

    /// Return to the initial state: inactive, not hovering, collapsed.
    pub fn reset(&mut self) {
        self.set_active(false);
        self.set_hovering(false);
        self.set_visibility(Visibility::Collapsed);
    }

    fn set_hovering(&mut self, hovering: bool) {
        if self.hovering.set(hovering) {
            self.hover_changed.emit(hovering);
        }
    }

    /// Whether the drag controller should deliver drags here.
    #[inline]
    pub fn is_drop_enabled(&self) -> bool {
        self.is_active()
    }

    #[inline]
    pub fn hit_rect(&self) -> Rect {
        self.hit_rect
    }

    /// Set the area, in launcher coordinates, that receives drags.
    pub fn set_hit_rect(&mut self, rect: Rect) {
        self.hit_rect = rect;
    }

    #[inline]
    pub fn hover_paint(&self) -> &Paint {
        &self.hover_paint
    }

    #[inline]
    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl std::fmt::Debug for ButtonDropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonDropTarget")
            .field("active", &self.active)
            .field("hovering", &self.hovering)
            .field("visibility", &self.visibility)
            .field("hit_rect", &self.hit_rect)
            .field("transition_duration", &self.transition_duration)
            .finish_non_exhaustive()
    }
}
