//! Recording and scripted collaborators for processor tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coord_common::{
    AxisInterpretation, CoordinateResult, CoordinateTransformer, FeedbackLogger, HighlightOptions,
    Highlighter, MapCenterPoint, MapView, TransformError, ViewLocator, Wkid,
};

/// A map view that records every center it is given.
#[derive(Debug)]
pub struct RecordingView {
    wkid: Wkid,
    centers: Mutex<Vec<MapCenterPoint>>,
}

impl RecordingView {
    pub fn new(wkid: Wkid) -> Arc<Self> {
        Arc::new(Self {
            wkid,
            centers: Mutex::new(Vec::new()),
        })
    }

    pub fn centers(&self) -> Vec<MapCenterPoint> {
        self.centers.lock().unwrap().clone()
    }

    pub fn last_center(&self) -> Option<MapCenterPoint> {
        self.centers.lock().unwrap().last().copied()
    }
}

impl MapView for RecordingView {
    fn wkid(&self) -> Wkid {
        self.wkid
    }

    fn set_center(&self, center: MapCenterPoint) {
        self.centers.lock().unwrap().push(center);
    }
}

/// Locator that always returns the same view and counts lookups.
pub struct FixedViewLocator {
    view: Arc<RecordingView>,
    lookups: AtomicUsize,
}

impl FixedViewLocator {
    pub fn new(view: Arc<RecordingView>) -> Arc<Self> {
        Arc::new(Self {
            view,
            lookups: AtomicUsize::new(0),
        })
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewLocator for FixedViewLocator {
    fn current_view(&self) -> Option<Arc<dyn MapView>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Some(self.view.clone())
    }

    async fn locate_view(&self) -> CoordinateResult<Arc<dyn MapView>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.view.clone())
    }
}

/// Highlighter that records its calls.
#[derive(Debug, Default)]
pub struct RecordingHighlighter {
    calls: Mutex<Vec<(MapCenterPoint, HighlightOptions)>>,
}

impl RecordingHighlighter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<(MapCenterPoint, HighlightOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Highlighter for RecordingHighlighter {
    fn highlight(&self, geometry: &MapCenterPoint, options: HighlightOptions) {
        self.calls.lock().unwrap().push((*geometry, options));
    }
}

/// Feedback logger that records messages by severity.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    errors: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl FeedbackLogger for RecordingLogger {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// Transformer that shifts both axes by a fixed offset and relabels the
/// point with the target WKID.
#[derive(Debug)]
pub struct OffsetTransformer {
    dx: f64,
    dy: f64,
    interpretation: AxisInterpretation,
    calls: AtomicUsize,
}

impl OffsetTransformer {
    pub fn new(dx: f64, dy: f64, interpretation: AxisInterpretation) -> Arc<Self> {
        Arc::new(Self {
            dx,
            dy,
            interpretation,
            calls: AtomicUsize::new(0),
        })
    }

    /// No offset; only the reference system changes.
    pub fn identity() -> Arc<Self> {
        Self::new(0.0, 0.0, AxisInterpretation::Geographic)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoordinateTransformer for OffsetTransformer {
    async fn transform(
        &self,
        point: &MapCenterPoint,
        target: Wkid,
    ) -> Result<MapCenterPoint, TransformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(MapCenterPoint {
            axis0: point.axis0 + self.dx,
            axis1: point.axis1 + self.dy,
            wkid: target,
            interpretation: self.interpretation,
        })
    }
}

/// Transformer that always fails with the given error.
#[derive(Debug)]
pub struct FailingTransformer(pub TransformError);

impl FailingTransformer {
    pub fn provider(message: &str) -> Arc<Self> {
        Arc::new(Self(TransformError::Provider(message.to_string())))
    }
}

#[async_trait]
impl CoordinateTransformer for FailingTransformer {
    async fn transform(
        &self,
        _point: &MapCenterPoint,
        _target: Wkid,
    ) -> Result<MapCenterPoint, TransformError> {
        Err(self.0.clone())
    }
}

/// Transformer whose call never completes.
#[derive(Debug, Default)]
pub struct StalledTransformer;

#[async_trait]
impl CoordinateTransformer for StalledTransformer {
    async fn transform(
        &self,
        _point: &MapCenterPoint,
        _target: Wkid,
    ) -> Result<MapCenterPoint, TransformError> {
        std::future::pending().await
    }
}
