//! Decoder for the `showCoord` URL parameter.
//!
//! A value such as `52.0,7.5,4326` (or, with verbose input,
//! `(x: 52.0°), (y: 7.5°), WKID: 4326`) is cleaned, split, validated and
//! turned into a [`coord_common::MapCenterPoint`], which is then applied to
//! the host's map view:
//!
//! clean → tokenize → check structure → validate values → build point
//! → locate view → reproject (if needed) → set center + highlight
//!
//! The first failure aborts the decode and leaves the map untouched.

pub mod builder;
pub mod config;
pub mod metrics;
pub mod number;
pub mod parse;
pub mod pipeline;
pub mod processor;
pub mod validate;
pub mod view;

pub use config::{ReferenceSystemEntry, SharedConfig, UrlCoordinatesConfig};
pub use pipeline::{decode_center, DecodedCenter};
pub use processor::{AppliedCenter, CoordinateParameterProcessor, SHOW_COORD_PARAM};
pub use view::{ViewSlot, ViewWatcher};
