//! The `showCoord` handler: decodes the parameter and moves the map there.

use std::collections::HashMap;
use std::sync::Arc;

use coord_common::{
    CoordinateError, CoordinateResult, CoordinateTransformer, FeedbackLogger, HighlightOptions,
    Highlighter, MapCenterPoint, MapView, TransformError, ViewLocator,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::config::{SharedConfig, UrlCoordinatesConfig};
use crate::metrics;
use crate::pipeline::{decode_center, DecodedCenter};

/// Name of the URL parameter carrying the coordinate tuple.
pub const SHOW_COORD_PARAM: &str = "showCoord";

/// Outcome of a successful decode and apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppliedCenter {
    /// Center as decoded from the parameter.
    pub requested: MapCenterPoint,
    /// Center set on the view, in the view's reference system.
    pub applied: MapCenterPoint,
    pub transformed: bool,
    pub highlighted: bool,
    pub wkid_defaulted: bool,
}

/// Decodes `showCoord` values and applies them to the map view.
pub struct CoordinateParameterProcessor {
    config: SharedConfig,
    view_locator: Arc<dyn ViewLocator>,
    transformer: Arc<dyn CoordinateTransformer>,
    highlighter: Arc<dyn Highlighter>,
    feedback: Arc<dyn FeedbackLogger>,
}

impl CoordinateParameterProcessor {
    pub fn new(
        config: SharedConfig,
        view_locator: Arc<dyn ViewLocator>,
        transformer: Arc<dyn CoordinateTransformer>,
        highlighter: Arc<dyn Highlighter>,
        feedback: Arc<dyn FeedbackLogger>,
    ) -> Self {
        Self {
            config,
            view_locator,
            transformer,
            highlighter,
            feedback,
        }
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Handle the URL parameters of an application start.
    ///
    /// Returns `Ok(None)` when `showCoord` is not among them.
    pub async fn decode_url_parameters(
        &self,
        params: &HashMap<String, String>,
    ) -> CoordinateResult<Option<AppliedCenter>> {
        match params.get(SHOW_COORD_PARAM) {
            Some(raw) => self.decode(raw).await.map(Some),
            None => {
                debug!("No {} parameter present", SHOW_COORD_PARAM);
                Ok(None)
            }
        }
    }

    /// Decode `raw` and apply it to the view.
    pub async fn decode(&self, raw: &str) -> CoordinateResult<AppliedCenter> {
        let config = self.config.snapshot().await;
        let decoded = self.parse_with(raw, &config)?;

        let mut applied = self
            .apply_center(decoded.center, config.highlight_center)
            .await?;
        applied.wkid_defaulted = decoded.wkid_defaulted;
        Ok(applied)
    }

    /// Decode `raw` without touching the map.
    pub async fn parse(&self, raw: &str) -> CoordinateResult<DecodedCenter> {
        let config = self.config.snapshot().await;
        self.parse_with(raw, &config)
    }

    fn parse_with(
        &self,
        raw: &str,
        config: &UrlCoordinatesConfig,
    ) -> CoordinateResult<DecodedCenter> {
        match decode_center(raw, config) {
            Ok(decoded) => {
                if decoded.wkid_defaulted {
                    warn!(
                        default_wkid = %config.default_wkid,
                        "showCoord has no WKID, applying default"
                    );
                    if config.enable_logger_feedback {
                        self.feedback
                            .warn(&config.catalog().missing_wkid_feedback());
                    }
                }
                metrics::record_decode("ok");
                debug!(center = %decoded.center, "Decoded showCoord");
                Ok(decoded)
            }
            Err(e) => {
                metrics::record_decode(e.kind().as_str());
                self.report(config, &e);
                Err(e)
            }
        }
    }

    /// Move the view to `center`, reprojecting when the view uses another
    /// reference system, and optionally highlight it.
    ///
    /// Symbol and timeout of the highlight are read from the configuration
    /// after the view has been acquired.
    #[instrument(skip(self), fields(wkid = %center.wkid))]
    pub async fn apply_center(
        &self,
        center: MapCenterPoint,
        highlight: bool,
    ) -> CoordinateResult<AppliedCenter> {
        match self.apply_inner(center, highlight).await {
            Ok(applied) => {
                metrics::record_apply("ok");
                info!(center = %applied.applied, transformed = applied.transformed, "Map center applied");
                Ok(applied)
            }
            Err(e) => {
                metrics::record_apply(e.kind().as_str());
                let config = self.config.snapshot().await;
                self.report(&config, &e);
                Err(e)
            }
        }
    }

    async fn apply_inner(
        &self,
        center: MapCenterPoint,
        highlight: bool,
    ) -> CoordinateResult<AppliedCenter> {
        let view = self.acquire_view().await?;
        let target = view.wkid();

        let (applied, transformed) = if center.wkid == target {
            (center, false)
        } else {
            (self.reproject(&center, view.as_ref()).await?, true)
        };

        view.set_center(applied);

        if highlight {
            let config = self.config.snapshot().await;
            let options = HighlightOptions {
                symbol: config.highlighter_symbol.clone(),
                timeout: config.highlighter_timeout(),
            };
            self.highlighter.highlight(&applied, options);
        }

        Ok(AppliedCenter {
            requested: center,
            applied,
            transformed,
            highlighted: highlight,
            wkid_defaulted: false,
        })
    }

    async fn acquire_view(&self) -> CoordinateResult<Arc<dyn MapView>> {
        if let Some(view) = self.view_locator.current_view() {
            return Ok(view);
        }

        debug!("Waiting for map view");
        let wait = self.config.snapshot().await.view_timeout();
        match wait {
            Some(limit) => tokio::time::timeout(limit, self.view_locator.locate_view())
                .await
                .map_err(|_| {
                    CoordinateError::ViewUnavailable(format!("no view within {:?}", limit))
                })?,
            None => self.view_locator.locate_view().await,
        }
    }

    async fn reproject(
        &self,
        center: &MapCenterPoint,
        view: &dyn MapView,
    ) -> CoordinateResult<MapCenterPoint> {
        let target = view.wkid();
        debug!(from = %center.wkid, to = %target, "Reprojecting center");

        let limit = self.config.snapshot().await.transform_timeout();
        let call = self.transformer.transform(center, target);
        let result = match limit {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(TransformError::TimedOut(limit))),
            None => call.await,
        };

        match result {
            Ok(point) => {
                metrics::record_transform("ok");
                Ok(point)
            }
            Err(source) => {
                metrics::record_transform("error");
                Err(CoordinateError::TransformFailed {
                    from: center.wkid,
                    to: target,
                    source,
                })
            }
        }
    }

    fn report(&self, config: &UrlCoordinatesConfig, e: &CoordinateError) {
        let kind = e.kind();
        error!(kind = kind.as_str(), error = %e, "showCoord rejected");

        if config.enable_logger_feedback {
            self.feedback.error(&config.catalog().feedback(e));
        }
    }
}
