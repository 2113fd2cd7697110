//! Common types shared by the `showCoord` handler crates.

pub mod bounds;
pub mod collaborators;
pub mod error;
pub mod i18n;
pub mod point;
pub mod wkid;

pub use bounds::AxisBounds;
pub use collaborators::{
    CoordinateTransformer, FeedbackLogger, HighlightOptions, Highlighter, MapView, ViewLocator,
};
pub use error::{CoordinateError, CoordinateResult, ErrorKind, TransformError};
pub use i18n::{Locale, MessageCatalog, FEEDBACK_PREFIX};
pub use point::{Axis, MapCenterPoint};
pub use wkid::{AxisInterpretation, ReferenceSystemPolicy, ReferenceSystemTable, Wkid};
