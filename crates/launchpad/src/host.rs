//! Requests from launcher widgets to the host shell.
//!
//! Widgets never navigate by themselves. They hand a one-shot request to a
//! [`HostNavigator`] and move on: there is no reply, no timeout and no way
//! to cancel a request once it is issued.

use std::collections::VecDeque;

use launchpad_core::logging::targets;
use parking_lot::Mutex;

use crate::item::ComponentName;

/// The host facility that opens system screens on behalf of widgets.
pub trait HostNavigator {
    /// Show the application details screen for `component`.
    fn open_application_details(&self, component: &ComponentName);
}

impl<F> HostNavigator for F
where
    F: Fn(&ComponentName),
{
    fn open_application_details(&self, component: &ComponentName) {
        self(component)
    }
}

/// A request issued by a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    ApplicationDetails(ComponentName),
}

/// A navigator that queues requests for the host event loop to drain.
///
/// Widgets run inside drag callbacks; starting another screen from there
/// would re-enter the host. The queue defers the work to the next turn of
/// the host loop.
#[derive(Debug, Default)]
pub struct NavigationQueue {
    pending: Mutex<VecDeque<NavigationRequest>>,
}

impl NavigationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending request, oldest first.
    pub fn drain(&self) -> Vec<NavigationRequest> {
        self.pending.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl HostNavigator for NavigationQueue {
    fn open_application_details(&self, component: &ComponentName) {
        tracing::debug!(target: targets::HOST, %component, "queueing application details request");
        self.pending
            .lock()
            .push_back(NavigationRequest::ApplicationDetails(component.clone()));
    }
}
