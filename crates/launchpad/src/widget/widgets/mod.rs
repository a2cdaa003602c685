//! Launcher drop target widgets.

mod button_drop_target;
mod info_drop_target;

pub use button_drop_target::{ButtonDropTarget, Visibility};
pub use info_drop_target::{
    BACKGROUND_ALPHA, DropTargetState, InfoDropTarget, is_launchable_application,
};
