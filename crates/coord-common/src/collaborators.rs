//! Traits for the collaborators the `showCoord` processor hands work to.
//!
//! None of these are implemented here: the host application supplies its
//! map view, projection service, highlighter and user feedback channel.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{CoordinateResult, TransformError};
use crate::point::MapCenterPoint;
use crate::wkid::Wkid;

/// The active map view.
pub trait MapView: Send + Sync {
    /// Reference system the view currently renders in.
    fn wkid(&self) -> Wkid;

    /// Move the view to `center`. The point is already in [`MapView::wkid`].
    fn set_center(&self, center: MapCenterPoint);
}

/// Resolves the active map view, waiting for one if none exists yet.
#[async_trait]
pub trait ViewLocator: Send + Sync {
    /// The view if one is available right now.
    fn current_view(&self) -> Option<Arc<dyn MapView>>;

    /// Wait until a view is available and return it.
    ///
    /// Resolves once per call; fails only if no view can ever appear.
    async fn locate_view(&self) -> CoordinateResult<Arc<dyn MapView>>;
}

/// Reprojects points between reference systems.
#[async_trait]
pub trait CoordinateTransformer: Send + Sync {
    async fn transform(
        &self,
        point: &MapCenterPoint,
        target: Wkid,
    ) -> Result<MapCenterPoint, TransformError>;
}

/// Options forwarded to a [`Highlighter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightOptions {
    /// Symbol descriptor overriding the highlighter's default.
    pub symbol: Option<serde_json::Value>,
    /// How long the marker stays visible.
    pub timeout: Option<Duration>,
}

/// Draws a transient marker on the map. Fire and forget.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, geometry: &MapCenterPoint, options: HighlightOptions);
}

/// User-visible feedback channel. Fire and forget.
pub trait FeedbackLogger: Send + Sync {
    fn error(&self, message: &str);

    fn warn(&self, message: &str);
}
