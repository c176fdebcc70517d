//! Pending-request tracker behind the global loading indicator
//!
//! Each request holds a [`LoadingTicket`] for its lifetime. The indicator is
//! shown while any ticket is alive, but is forced off once it has been up
//! for longer than `max_loading` so a stuck request cannot pin it forever.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
struct LoadingState {
    active: HashSet<Uuid>,
    shown_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct LoadingTracker {
    state: Arc<Mutex<LoadingState>>,
    max_loading: Duration,
}

impl LoadingTracker {
    pub fn new(max_loading: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(LoadingState::default())),
            max_loading,
        }
    }

    /// Register a request; the indicator (re)starts its timeout
    pub fn begin(&self, request_id: Uuid) -> LoadingTicket {
        let mut state = self.state.lock();
        state.active.insert(request_id);
        state.shown_at = Some(Instant::now());
        LoadingTicket {
            tracker: self.clone(),
            request_id,
        }
    }

    fn finish(&self, request_id: Uuid) {
        let mut state = self.state.lock();
        state.active.remove(&request_id);
        if state.active.is_empty() {
            state.shown_at = None;
        }
    }

    pub fn pending(&self) -> usize {
        self.state.lock().active.len()
    }

    pub fn is_loading(&self) -> bool {
        let state = self.state.lock();
        match state.shown_at {
            Some(at) => !state.active.is_empty() && at.elapsed() < self.max_loading,
            None => false,
        }
    }

    /// Forget every pending request (window hidden, navigation away)
    pub fn reset(&self) {
        let mut state = self.state.lock();
        if !state.active.is_empty() {
            tracing::debug!(pending = state.active.len(), "Resetting loading state");
        }
        state.active.clear();
        state.shown_at = None;
    }
}

/// Ends its request when dropped
#[derive(Debug)]
pub struct LoadingTicket {
    tracker: LoadingTracker,
    request_id: Uuid,
}

impl LoadingTicket {
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

impl Drop for LoadingTicket {
    fn drop(&mut self) {
        self.tracker.finish(self.request_id);
    }
}
