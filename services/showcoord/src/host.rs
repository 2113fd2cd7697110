//! In-process stand-ins for the map application's collaborators.

use std::sync::{Arc, Mutex};

use coord_common::{FeedbackLogger, HighlightOptions, Highlighter, MapCenterPoint, MapView, Wkid};
use tracing::{error, info, warn};

/// A map view that only remembers its center.
#[derive(Debug)]
pub struct InMemoryView {
    wkid: Wkid,
    center: Mutex<Option<MapCenterPoint>>,
}

impl InMemoryView {
    pub fn new(wkid: Wkid) -> Arc<Self> {
        Arc::new(Self {
            wkid,
            center: Mutex::new(None),
        })
    }

    pub fn center(&self) -> Option<MapCenterPoint> {
        self.center.lock().ok().and_then(|guard| *guard)
    }
}

impl MapView for InMemoryView {
    fn wkid(&self) -> Wkid {
        self.wkid
    }

    fn set_center(&self, center: MapCenterPoint) {
        info!(%center, "View center set");
        if let Ok(mut guard) = self.center.lock() {
            *guard = Some(center);
        }
    }
}

/// Writes highlight requests to the log.
#[derive(Debug, Default)]
pub struct TracingHighlighter;

impl Highlighter for TracingHighlighter {
    fn highlight(&self, geometry: &MapCenterPoint, options: HighlightOptions) {
        info!(
            %geometry,
            timeout_ms = options.timeout.map(|t| t.as_millis() as u64),
            custom_symbol = options.symbol.is_some(),
            "Highlight requested"
        );
    }
}

/// Sends user feedback to the log under its own target.
#[derive(Debug, Default)]
pub struct TracingFeedback;

impl FeedbackLogger for TracingFeedback {
    fn error(&self, message: &str) {
        error!(target: "showcoord::feedback", "{}", message);
    }

    fn warn(&self, message: &str) {
        warn!(target: "showcoord::feedback", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_view_keeps_last_center() {
        let view = InMemoryView::new(Wkid::WGS84);
        assert!(view.center().is_none());

        view.set_center(MapCenterPoint::geographic(1.0, 2.0, Wkid::WGS84));
        view.set_center(MapCenterPoint::geographic(3.0, 4.0, Wkid::WGS84));
        assert_eq!(view.center().unwrap().latitude(), Some(3.0));
    }
}
