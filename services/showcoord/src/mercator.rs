//! Spherical Web Mercator transformer for the CLI host.
//!
//! Only WGS84 (4326) and Web Mercator (3857) are supported; any other pair
//! is reported as unsupported.

use async_trait::async_trait;
use coord_common::{CoordinateTransformer, MapCenterPoint, TransformError, Wkid};
use std::f64::consts::PI;

/// Half the circumference of the Web Mercator sphere in metres.
const ORIGIN_SHIFT: f64 = 20037508.342789244;

/// Latitude limit of the Web Mercator square.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Default, Clone, Copy)]
pub struct MercatorTransformer;

impl MercatorTransformer {
    /// WGS84 latitude/longitude to Web Mercator x/y.
    pub fn wgs84_to_mercator(lat: f64, lon: f64) -> (f64, f64) {
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let x = lon * ORIGIN_SHIFT / 180.0;
        let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
        (x, y * ORIGIN_SHIFT / 180.0)
    }

    /// Web Mercator x/y to WGS84 latitude/longitude.
    pub fn mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
        let lon = (x / ORIGIN_SHIFT) * 180.0;
        let lat = (y / ORIGIN_SHIFT) * 180.0;
        let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
        (lat, lon)
    }
}

#[async_trait]
impl CoordinateTransformer for MercatorTransformer {
    async fn transform(
        &self,
        point: &MapCenterPoint,
        target: Wkid,
    ) -> Result<MapCenterPoint, TransformError> {
        match (point.wkid, target) {
            (from, to) if from == to => Ok(*point),
            (Wkid::WGS84, Wkid::WEB_MERCATOR) => {
                let (x, y) = Self::wgs84_to_mercator(point.axis0, point.axis1);
                Ok(MapCenterPoint::projected(x, y, Wkid::WEB_MERCATOR))
            }
            (Wkid::WEB_MERCATOR, Wkid::WGS84) => {
                let (lat, lon) = Self::mercator_to_wgs84(point.axis0, point.axis1);
                Ok(MapCenterPoint::geographic(lat, lon, Wkid::WGS84))
            }
            (from, to) => Err(TransformError::Unsupported { from, to }),
        }
    }
}
