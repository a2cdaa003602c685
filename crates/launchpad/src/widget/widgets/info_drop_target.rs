//! The "App info" drop target.
//!
//! Shown only while an application is being dragged. Dropping the
//! application on it opens the system's details screen for that app; the
//! item itself always stays where it came from.

use std::sync::Arc;
use std::time::Instant;

use launchpad_core::logging::{span_names, targets};
use launchpad_core::PerfSpan;
use launchpad_render::{BlendMode, Color, ColorFilter, Paint, Rect};
use launchpad_style::ColorProvider;

use super::button_drop_target::{ButtonDropTarget, Visibility};
use crate::config::DropTargetConfig;
use crate::error::ConfigResult;
use crate::host::HostNavigator;
use crate::item::{DraggedItem, ItemType};
use crate::widget::animation::{AnimationSet, PropertyAnimation};
use crate::widget::drag_drop::{DragAction, DragListener, DragObject, DropTarget};

/// Name of the animated background property.
pub const BACKGROUND_ALPHA: &str = "alpha";

/// Observable state of an [`InfoDropTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTargetState {
    /// No eligible drag in progress. Collapsed.
    Idle,
    /// An application is being dragged; the target is visible.
    Armed,
    /// The application is over the target.
    Hovering,
}

/// Whether dropping `item` here means anything.
///
/// True for applications from the all-apps list, and for workspace items
/// whose declared kind is still "application".
pub fn is_launchable_application(item: &DraggedItem) -> bool {
    matches!(item, DraggedItem::Application(_)) || item.item_type() == ItemType::Application
}

/// Drop target that shows application details instead of taking the item.
pub struct InfoDropTarget {
    base: ButtonDropTarget,
    hover_color: Color,
    /// Current background alpha, 0-255.
    background_alpha: f32,
    animations: AnimationSet,
    navigator: Arc<dyn HostNavigator>,
}

impl InfoDropTarget {
    /// Create the target, resolving its hover tint from `colors`.
    ///
    /// Fails if the configured tint token is missing or not a color.
    pub fn new(
        colors: &dyn ColorProvider,
        config: &DropTargetConfig,
        navigator: Arc<dyn HostNavigator>,
    ) -> ConfigResult<Self> {
        let _span = PerfSpan::new(span_names::DROP_TARGET_INIT);
        config.validate()?;

        let hover_color = colors.color_for(&config.hover_tint_token).map_err(|err| {
            tracing::warn!(
                target: targets::DROP_TARGET,
                token = %config.hover_tint_token,
                error = %err,
                "cannot resolve hover tint"
            );
            err
        })?;

        let hover_paint =
            Paint::new().with_color_filter(ColorFilter::new(hover_color, BlendMode::SourceAtop));
        let base = ButtonDropTarget::new(hover_paint, config.transition_duration(), config.easing);

        tracing::debug!(
            target: targets::DROP_TARGET,
            hover_alpha = hover_color.alpha8(),
            transition_ms = config.transition_duration_ms,
            "info drop target initialized"
        );

        Ok(Self {
            base,
            hover_color,
            background_alpha: 0.0,
            animations: AnimationSet::new(),
            navigator,
        })
    }

    pub fn state(&self) -> DropTargetState {
        match (self.base.is_active(), self.base.is_hovering()) {
            (true, true) => DropTargetState::Hovering,
            (true, false) => DropTargetState::Armed,
            (false, hovering) => {
                debug_assert!(!hovering, "hovering while not armed");
                DropTargetState::Idle
            }
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.base.is_active()
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.base.is_hovering()
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.base.visibility()
    }

    #[inline]
    pub fn hover_color(&self) -> Color {
        self.hover_color
    }

    /// Current background alpha, 0-255.
    pub fn background_alpha(&self) -> u8 {
        self.background_alpha.clamp(0.0, 255.0).round() as u8
    }

    /// The background as drawn now: the hover tint at the current alpha.
    pub fn background_color(&self) -> Color {
        self.hover_color.with_alpha(self.background_alpha.clamp(0.0, 255.0) / 255.0)
    }

    /// Whether a background fade is running.
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// The shared button target state.
    pub fn base(&self) -> &ButtonDropTarget {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ButtonDropTarget {
        &mut self.base
    }

    pub fn set_hit_rect(&mut self, rect: Rect) {
        self.base.set_hit_rect(rect);
    }

    /// Advance the background fade to `now`.
    ///
    /// Returns `true` while an animation is still running.
    pub fn advance_animations(&mut self, now: Instant) -> bool {
        for (property, value) in self.animations.tick(now) {
            if property == BACKGROUND_ALPHA {
                self.background_alpha = value;
            }
        }
        self.is_animating()
    }

    fn fade_background_to(&mut self, alpha: u8) {
        let animation = PropertyAnimation::new(
            self.background_alpha,
            f32::from(alpha),
            self.base.transition_duration(),
            self.base.easing(),
        );
        if self.animations.animate(BACKGROUND_ALPHA, animation).is_some() {
            tracing::trace!(target: targets::DROP_TARGET, to = alpha, "background fade superseded");
        }
    }
}

impl DragListener for InfoDropTarget {
    fn on_drag_start(&mut self, item: &DraggedItem, action: DragAction) {
        // A new session never inherits hover or fade state from the last one.
        self.base.clear_hover();
        self.animations.cancel_all();
        self.background_alpha = 0.0;

        let armed = is_launchable_application(item);
        self.base.set_active(armed);
        self.base.set_visibility(if armed {
            Visibility::Visible
        } else {
            Visibility::Collapsed
        });
        tracing::debug!(
            target: targets::DROP_TARGET,
            armed,
            item_type = ?item.item_type(),
            ?action,
            "drag started"
        );
    }

    fn on_drag_end(&mut self) {
        self.base.reset();
        self.animations.cancel_all();
        self.background_alpha = 0.0;
        tracing::debug!(target: targets::DROP_TARGET, "drag ended");
    }
}

impl DropTarget for InfoDropTarget {
    fn is_drop_enabled(&self) -> bool {
        self.base.is_drop_enabled()
    }

    fn on_drag_enter(&mut self, drag: &mut DragObject) {
        if !self.is_armed() {
            tracing::debug!(target: targets::DROP_TARGET, "drag enter while not armed ignored");
            return;
        }
        self.base.begin_hover(drag);
        self.fade_background_to(self.hover_color.alpha8());
    }

    fn on_drag_exit(&mut self, drag: &mut DragObject) {
        if !self.is_armed() {
            tracing::debug!(target: targets::DROP_TARGET, "drag exit while not armed ignored");
            return;
        }
        self.base.end_hover(drag);
        self.fade_background_to(0);
    }

    fn on_drop(&mut self, _drag: &DragObject) {}

    fn accept_drop(&mut self, drag: &DragObject) -> bool {
        match drag.drag_info.launch_component() {
            Some(component) => {
                tracing::debug!(
                    target: targets::DROP_TARGET,
                    %component,
                    "requesting application details"
                );
                self.navigator.open_application_details(component);
            }
            None => {
                tracing::debug!(
                    target: targets::DROP_TARGET,
                    item_type = ?drag.drag_info.item_type(),
                    "dropped item has no component"
                );
            }
        }
        // The item always goes back to its source.
        false
    }

    fn hit_rect(&self) -> Rect {
        self.base.hit_rect()
    }
}

impl std::fmt::Debug for InfoDropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfoDropTarget")
            .field("base", &self.base)
            .field("hover_color", &self.hover_color)
            .field("background_alpha", &self.background_alpha)
            .field("animations", &self.animations)
            .finish_non_exhaustive()
    }
}
