//! Widget layer: the drag and drop protocol, animations, and the drop
//! target widgets built on them.

pub mod animation;
pub mod drag_drop;
pub mod widgets;

pub use drag_drop::{
    DragAction, DragController, DragListener, DragObject, DragState, DragView, DropOutcome,
    DropTarget,
};
pub use widgets::{ButtonDropTarget, DropTargetState, InfoDropTarget, Visibility};
