//! Holder for the active map view with a one-shot "view available" wait.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use coord_common::{CoordinateError, CoordinateResult, MapView, ViewLocator};
use tokio::sync::watch;
use tracing::debug;

type ViewCell = Option<Arc<dyn MapView>>;

/// Owned by the host. The host publishes its view here once it exists.
#[derive(Clone)]
pub struct ViewSlot {
    tx: Arc<watch::Sender<ViewCell>>,
}

impl Default for ViewSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSlot {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Publish (or replace) the active view, waking all waiters.
    pub fn set_view(&self, view: Arc<dyn MapView>) {
        debug!(wkid = %view.wkid(), "Map view published");
        self.tx.send_replace(Some(view));
    }

    /// Remove the active view.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    pub fn current_view(&self) -> ViewCell {
        self.tx.borrow().clone()
    }

    /// A [`ViewLocator`] reading from this slot. It fails once every
    /// `ViewSlot` handle is dropped without a view having been published.
    pub fn watcher(&self) -> ViewWatcher {
        ViewWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl fmt::Debug for ViewSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSlot")
            .field("has_view", &self.tx.borrow().is_some())
            .finish()
    }
}

/// Read side of a [`ViewSlot`].
#[derive(Clone)]
pub struct ViewWatcher {
    rx: watch::Receiver<ViewCell>,
}

#[async_trait]
impl ViewLocator for ViewWatcher {
    fn current_view(&self) -> ViewCell {
        self.rx.borrow().clone()
    }

    async fn locate_view(&self) -> CoordinateResult<Arc<dyn MapView>> {
        let mut rx = self.rx.clone();
        let waited = rx.wait_for(Option::is_some).await;
        let view = match waited {
            Ok(cell) => cell.clone(),
            Err(_) => None,
        };
        view.ok_or_else(|| {
            CoordinateError::ViewUnavailable("view slot closed before a view was set".to_string())
        })
    }
}
