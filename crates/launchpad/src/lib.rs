//! Launchpad - home-screen launcher drop targets.
//!
//! This is the main crate of the workspace. It re-exports the core, render
//! and style crates and adds the launcher item model, the drag and drop
//! protocol, and the drop target widgets.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::sync::Arc;
//!
//! use launchpad::prelude::*;
//!
//! let navigator = Arc::new(NavigationQueue::new());
//! let config = LauncherConfig::default();
//! let theme = config.theme(Theme::light())?;
//!
//! let info = InfoDropTarget::new(&theme, &config.drop_target, navigator.clone())?;
//! let info = Rc::new(RefCell::new(info));
//! info.borrow_mut().set_hit_rect(Rect::new(0.0, 0.0, 200.0, 48.0));
//!
//! let mut controller = DragController::new();
//! controller.add_drag_listener(info.clone());
//! controller.add_drop_target(info.clone());
//!
//! let maps = ComponentName::new("com.google.android.apps.maps", ".MapsActivity");
//! controller.start_drag(ApplicationInfo::new("Maps", maps.clone()), DragAction::Copy, Point::new(100.0, 600.0));
//! let outcome = controller.drop_at(Point::new(100.0, 20.0));
//!
//! assert_eq!(outcome, DropOutcome::Rejected);
//! assert_eq!(navigator.drain(), vec![NavigationRequest::ApplicationDetails(maps)]);
//! # Ok::<(), launchpad::ConfigurationError>(())
//! ```

pub use launchpad_core::*;

/// Geometry, colors and paints.
pub mod render {
    pub use launchpad_render::*;
}

/// Themes and color tokens.
pub mod style {
    pub use launchpad_style::*;
}

pub mod config;
pub mod error;
pub mod host;
pub mod item;
pub mod widget;

pub use config::{DropTargetConfig, LauncherConfig};
pub use error::{ConfigResult, ConfigurationError};
pub use host::{HostNavigator, NavigationQueue, NavigationRequest};
pub use item::{
    ApplicationInfo, ComponentName, DraggedItem, FolderInfo, Intent, ItemType, ShortcutInfo,
    WidgetInfo,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{DropTargetConfig, LauncherConfig};
    pub use crate::error::ConfigurationError;
    pub use crate::host::{HostNavigator, NavigationQueue, NavigationRequest};
    pub use crate::item::{
        ApplicationInfo, ComponentName, DraggedItem, FolderInfo, Intent, ItemType, ShortcutInfo,
        WidgetInfo,
    };
    pub use crate::widget::animation::Easing;
    pub use crate::widget::{
        DragAction, DragController, DragListener, DragObject, DropOutcome, DropTarget,
        DropTargetState, InfoDropTarget, Visibility,
    };
    pub use launchpad_render::{Color, Point, Rect};
    pub use launchpad_style::{ColorProvider, Theme, tokens};
}
