//! Per-request timing context.
//!
//! The timing middleware inserts a [`TimingContext`] into the request
//! extensions before delegating. Inner layers (route resolution, auth) write
//! to it through the shared handle; the middleware reads it back once the
//! response is ready.

use std::sync::Arc;

use parking_lot::Mutex;

/// The handler a request resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewIdentity {
    /// Declaring module, e.g. `module_path!()`.
    pub module: String,
    /// Handler name.
    pub name: String,
}

impl ViewIdentity {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }
}

/// User/session flags. All false when no identity is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity {
    pub is_authenticated: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

#[derive(Debug, Clone)]
pub struct TimingContext {
    inner: Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    start_ns: u64,
    view: Mutex<Option<ViewIdentity>>,
    identity: Mutex<Option<Identity>>,
}

impl TimingContext {
    pub fn start(start_ns: u64) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                start_ns,
                view: Mutex::new(None),
                identity: Mutex::new(None),
            }),
        }
    }

    pub fn start_ns(&self) -> u64 {
        self.inner.start_ns
    }

    /// Record the resolved view. The innermost resolution hook runs last and
    /// wins.
    pub fn record_view(&self, view: ViewIdentity) {
        *self.inner.view.lock() = Some(view);
    }

    pub fn view(&self) -> Option<ViewIdentity> {
        self.inner.view.lock().clone()
    }

    /// Record the identity an inner auth layer established for this request.
    pub fn record_identity(&self, identity: Identity) {
        *self.inner.identity.lock() = Some(identity);
    }

    pub fn identity(&self) -> Option<Identity> {
        *self.inner.identity.lock()
    }
}
