//! Counter bookkeeping of the showCoord processor.

use std::future::Future;
use std::sync::{Arc, Mutex};

use coord_common::{CoordinateTransformer, MapCenterPoint, Wkid};
use metrics::{
    Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
};
use test_utils::fixtures::inputs;
use test_utils::{
    FailingTransformer, FixedViewLocator, OffsetTransformer, RecordingHighlighter,
    RecordingLogger, RecordingView,
};
use url_coordinates::{CoordinateParameterProcessor, SharedConfig, UrlCoordinatesConfig};

/// Keeps one `name{label=value}` line per counter increment.
#[derive(Clone, Default)]
struct CountingRecorder {
    hits: Arc<Mutex<Vec<String>>>,
}

impl CountingRecorder {
    fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    fn count(&self, line: &str) -> usize {
        self.hits().iter().filter(|hit| hit.as_str() == line).count()
    }

    fn count_prefix(&self, name: &str) -> usize {
        self.hits().iter().filter(|hit| hit.starts_with(name)).count()
    }
}

struct CountingCounter {
    line: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl CounterFn for CountingCounter {
    fn increment(&self, value: u64) {
        let mut hits = self.hits.lock().unwrap();
        for _ in 0..value {
            hits.push(self.line.clone());
        }
    }

    fn absolute(&self, _value: u64) {}
}

impl Recorder for CountingRecorder {
    fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}
    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}
    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        let labels: Vec<String> = key
            .labels()
            .map(|label| format!("{}={}", label.key(), label.value()))
            .collect();
        Counter::from_arc(Arc::new(CountingCounter {
            line: format!("{}{{{}}}", key.name(), labels.join(",")),
            hits: self.hits.clone(),
        }))
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, _key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}

/// Run `future` on a current-thread runtime with `recorder` installed.
fn record<F: Future>(recorder: &CountingRecorder, future: F) -> F::Output {
    metrics::with_local_recorder(recorder, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    })
}

fn processor(view_wkid: Wkid, fail_transform: bool) -> CoordinateParameterProcessor {
    let transformer: Arc<dyn CoordinateTransformer> = if fail_transform {
        FailingTransformer::provider("offline")
    } else {
        OffsetTransformer::identity()
    };
    CoordinateParameterProcessor::new(
        SharedConfig::new(UrlCoordinatesConfig::default()),
        FixedViewLocator::new(RecordingView::new(view_wkid)),
        transformer,
        RecordingHighlighter::new(),
        RecordingLogger::new(),
    )
}

#[test]
fn test_parse_counts_decode_outcome() {
    let recorder = CountingRecorder::default();
    let p = processor(Wkid::WGS84, false);

    record(&recorder, async {
        p.parse(inputs::PLAIN_TRIPLE).await.unwrap();
        p.parse(inputs::WKID_TOO_SHORT).await.unwrap_err();
    });

    assert_eq!(recorder.count("showcoord_decode_total{outcome=ok}"), 1);
    assert_eq!(
        recorder.count("showcoord_decode_total{outcome=wkid_too_short}"),
        1
    );
    assert_eq!(recorder.count_prefix("showcoord_apply_total"), 0);
}

#[test]
fn test_apply_center_counts_apply_only() {
    let recorder = CountingRecorder::default();
    let p = processor(Wkid::WGS84, false);

    record(&recorder, async {
        p.apply_center(MapCenterPoint::geographic(52.0, 7.5, Wkid::WGS84), false)
            .await
            .unwrap();
    });

    assert_eq!(recorder.count("showcoord_apply_total{outcome=ok}"), 1);
    assert_eq!(recorder.count_prefix("showcoord_decode_total"), 0);
}

#[test]
fn test_decode_counts_both_steps() {
    let recorder = CountingRecorder::default();
    let p = processor(Wkid::WGS84, false);

    record(&recorder, async {
        p.decode(inputs::PLAIN_TRIPLE).await.unwrap();
    });

    assert_eq!(recorder.count("showcoord_decode_total{outcome=ok}"), 1);
    assert_eq!(recorder.count("showcoord_apply_total{outcome=ok}"), 1);
}

#[test]
fn test_failed_reprojection_counts_as_apply_error() {
    let recorder = CountingRecorder::default();
    let p = processor(Wkid::ETRS89_UTM33N, true);

    record(&recorder, async {
        p.decode(inputs::PLAIN_TRIPLE).await.unwrap_err();
    });

    assert_eq!(recorder.count("showcoord_decode_total{outcome=ok}"), 1);
    assert_eq!(
        recorder.count("showcoord_apply_total{outcome=transform_failed}"),
        1
    );
    assert_eq!(
        recorder.count("showcoord_transform_total{outcome=error}"),
        1
    );
}
