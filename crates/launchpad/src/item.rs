//! Launcher items that can be dragged around the home screen.
//!
//! The drag payload is a [`DraggedItem`]: one variant per kind of thing a
//! user can pick up. Drop targets inspect it, they never mutate it.

use std::fmt;

/// Declared kind of a launcher item, as stored in the favorites database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// A launchable application.
    Application,
    /// A shortcut to an arbitrary intent.
    Shortcut,
    /// A user folder.
    Folder,
    /// An app widget.
    AppWidget,
}

impl ItemType {
    /// The value used for this type in the favorites database.
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Application => 0,
            Self::Shortcut => 1,
            Self::Folder => 2,
            Self::AppWidget => 4,
        }
    }

    /// Decode a favorites database value.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Application),
            1 => Some(Self::Shortcut),
            2 => Some(Self::Folder),
            4 => Some(Self::AppWidget),
            _ => None,
        }
    }
}

/// Identifies an application component: a package plus a class inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName {
    package: String,
    class: String,
}

impl ComponentName {
    /// Create a component name.
    ///
    /// A class starting with `.` is taken relative to the package.
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        let package = package.into();
        let class = class.into();
        let class = if class.starts_with('.') {
            format!("{package}{class}")
        } else {
            class
        };
        Self { package, class }
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// `package/class`, the unambiguous string form.
    pub fn flatten_to_string(&self) -> String {
        format!("{}/{}", self.package, self.class)
    }

    /// Like [`flatten_to_string`](Self::flatten_to_string), but abbreviates a
    /// class inside the package to `.Class`.
    pub fn flatten_to_short_string(&self) -> String {
        match self.class.strip_prefix(&self.package) {
            Some(rest) if rest.starts_with('.') => format!("{}/{}", self.package, rest),
            _ => self.flatten_to_string(),
        }
    }

    /// Parse a `package/class` string (short form accepted).
    pub fn unflatten_from_string(s: &str) -> Option<Self> {
        let (package, class) = s.split_once('/')?;
        if package.is_empty() || class.is_empty() {
            return None;
        }
        Some(Self::new(package, class))
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flatten_to_short_string())
    }
}

/// A launch request, as stored in a shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    action: Option<String>,
    categories: Vec<String>,
    component: Option<ComponentName>,
    data: Option<String>,
}

impl Intent {
    pub const ACTION_MAIN: &'static str = "android.intent.action.MAIN";
    pub const ACTION_VIEW: &'static str = "android.intent.action.VIEW";
    pub const CATEGORY_LAUNCHER: &'static str = "android.intent.category.LAUNCHER";

    pub fn new() -> Self {
        Self::default()
    }

    /// The intent the launcher uses to start an application's main activity.
    pub fn main_launcher(component: ComponentName) -> Self {
        Self::new()
            .with_action(Self::ACTION_MAIN)
            .with_category(Self::CATEGORY_LAUNCHER)
            .with_component(component)
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_component(mut self, component: ComponentName) -> Self {
        self.component = Some(component);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// The explicit component this intent targets, if any.
    pub fn component(&self) -> Option<&ComponentName> {
        self.component.as_ref()
    }
}

/// An application from the all-apps list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationInfo {
    pub title: String,
    pub component_name: ComponentName,
    pub intent: Intent,
}

impl ApplicationInfo {
    pub fn new(title: impl Into<String>, component_name: ComponentName) -> Self {
        let intent = Intent::main_launcher(component_name.clone());
        Self {
            title: title.into(),
            component_name,
            intent,
        }
    }
}

/// An icon on the workspace or in a folder that launches an intent.
///
/// Shortcuts created from an application keep [`ItemType::Application`] as
/// their declared type, even though they are stored as shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutInfo {
    pub title: String,
    pub intent: Intent,
    pub item_type: ItemType,
}

impl ShortcutInfo {
    /// A plain shortcut to an arbitrary intent.
    pub fn new(title: impl Into<String>, intent: Intent) -> Self {
        Self {
            title: title.into(),
            intent,
            item_type: ItemType::Shortcut,
        }
    }

    /// The workspace icon created when an application is dropped on the home screen.
    pub fn from_application(app: &ApplicationInfo) -> Self {
        Self {
            title: app.title.clone(),
            intent: app.intent.clone(),
            item_type: ItemType::Application,
        }
    }
}

/// An app widget hosted on the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetInfo {
    pub provider: ComponentName,
    pub span_x: u32,
    pub span_y: u32,
}

impl WidgetInfo {
    pub fn new(provider: ComponentName) -> Self {
        Self {
            provider,
            span_x: 1,
            span_y: 1,
        }
    }
}

/// A user folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderInfo {
    pub title: String,
    pub contents: Vec<ShortcutInfo>,
}

impl FolderInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: Vec::new(),
        }
    }
}

/// The payload of a drag session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraggedItem {
    Application(ApplicationInfo),
    Shortcut(ShortcutInfo),
    Widget(WidgetInfo),
    Folder(FolderInfo),
    /// Any other kind of item; only its declared type is known.
    Other { item_type: ItemType },
}

impl DraggedItem {
    /// The declared item kind.
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Application(_) => ItemType::Application,
            Self::Shortcut(shortcut) => shortcut.item_type,
            Self::Widget(_) => ItemType::AppWidget,
            Self::Folder(_) => ItemType::Folder,
            Self::Other { item_type } => *item_type,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Application(app) => Some(&app.title),
            Self::Shortcut(shortcut) => Some(&shortcut.title),
            Self::Folder(folder) => Some(&folder.title),
            Self::Widget(_) | Self::Other { .. } => None,
        }
    }

    /// The launchable component behind this item.
    ///
    /// Applications name it directly; shortcuts resolve it through their
    /// intent. Nothing else resolves to a component.
    pub fn launch_component(&self) -> Option<&ComponentName> {
        match self {
            Self::Application(app) => Some(&app.component_name),
            Self::Shortcut(shortcut) => shortcut.intent.component(),
            Self::Widget(_) | Self::Folder(_) | Self::Other { .. } => None,
        }
    }
}

impl From<ApplicationInfo> for DraggedItem {
    fn from(app: ApplicationInfo) -> Self {
        Self::Application(app)
    }
}

impl From<ShortcutInfo> for DraggedItem {
    fn from(shortcut: ShortcutInfo) -> Self {
        Self::Shortcut(shortcut)
    }
}

impl From<WidgetInfo> for DraggedItem {
    fn from(widget: WidgetInfo) -> Self {
        Self::Widget(widget)
    }
}

impl From<FolderInfo> for DraggedItem {
    fn from(folder: FolderInfo) -> Self {
        Self::Folder(folder)
    }
}
