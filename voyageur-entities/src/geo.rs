use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = i32::MIN;
const RAW_COORD_MAX: RawCoord = i32::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoParseError {
    #[error("invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("invalid longitude degrees: {0}")]
    Longitude(String),
    #[error("malformed coordinates: {0}")]
    Format(String),
}

macro_rules! fixed_point_coord {
    ($(#[$meta:meta])* $name:ident, $deg_max:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name(RawCoord);

        impl $name {
            const DEG_MAX: f64 = $deg_max;
            const DEG_MIN: f64 = -$deg_max;
            const FROM_DEG: f64 =
                (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64) / (Self::DEG_MAX - Self::DEG_MIN);

            pub const fn max() -> Self {
                Self(RAW_COORD_MAX)
            }

            pub const fn min() -> Self {
                Self(RAW_COORD_MIN)
            }

            pub const fn to_raw(self) -> RawCoord {
                self.0
            }

            pub const fn from_raw(raw: RawCoord) -> Self {
                Self(raw)
            }

            pub fn is_valid(self) -> bool {
                self.0 != RAW_COORD_INVALID
            }

            pub fn to_deg(self) -> f64 {
                if self.is_valid() {
                    f64::from(self.0) / Self::FROM_DEG
                } else {
                    f64::NAN
                }
            }

            pub fn to_rad(self) -> f64 {
                self.to_deg().to_radians()
            }

            pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
                let deg = deg.into();
                debug_assert!((Self::DEG_MIN..=Self::DEG_MAX).contains(&deg));
                Self(f64::round(deg * Self::FROM_DEG) as RawCoord)
            }

            pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
                let deg = deg.into();
                (Self::DEG_MIN..=Self::DEG_MAX)
                    .contains(&deg)
                    .then(|| Self::from_deg(deg))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(RAW_COORD_INVALID)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                if self == other {
                    Some(std::cmp::Ordering::Equal)
                } else if self.is_valid() && other.is_valid() {
                    Some(self.0.cmp(&other.0))
                } else {
                    None
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                write!(f, "{}", self.to_deg())
            }
        }
    };
}

fixed_point_coord!(
    /// Latitude as a compact fixed-point number.
    LatCoord,
    90.0
);

fixed_point_coord!(
    /// Longitude as a compact fixed-point number.
    LngCoord,
    180.0
);

/// Compact internal representation of a geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        Some(Self::new(
            LatCoord::try_from_deg(lat)?,
            LngCoord::try_from_deg(lng)?,
        ))
    }

    fn parse_lat_lng_deg(lat: &str, lng: &str) -> Result<Self, GeoParseError> {
        let lat = lat
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| GeoParseError::Latitude(lat.to_owned()))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| GeoParseError::Longitude(lng.to_owned()))?;
        Ok(Self::new(lat, lng))
    }

    /// Great-circle distance on the surface of the earth
    /// (special case of the Vincenty formula).
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }
        let (lat1, lng1) = (p1.lat.to_rad(), p1.lng.to_rad());
        let (lat2, lng2) = (p2.lat.to_rad(), p2.lng.to_rad());
        let dlng = (lng1 - lng2).abs();
        let nom1 = lat2.cos() * dlng.sin();
        let nom2 = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlng.cos();
        Some(Distance::from_meters(
            MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom),
        ))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = GeoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split(',')
            .collect_tuple()
            .ok_or_else(|| GeoParseError::Format(s.to_owned()))?;
        Self::parse_lat_lng_deg(lat, lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

/// Upper bound for the radius of a location bias around the map center.
pub const MAX_BIAS_RADIUS: Distance = Distance::from_meters(50_000.0);

/// The rectangular viewport that is currently visible on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        if !self.is_valid() || !pt.is_valid() {
            return false;
        }
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // crosses the antimeridian
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }

    pub fn center(&self) -> MapPoint {
        let (sw_lat, sw_lng) = self.sw.to_lat_lng_deg();
        let (ne_lat, mut ne_lng) = self.ne.to_lat_lng_deg();
        if ne_lng < sw_lng {
            ne_lng += 360.0;
        }
        let mut lng = (sw_lng + ne_lng) / 2.0;
        if lng > 180.0 {
            lng -= 360.0;
        }
        MapPoint::from_lat_lng_deg((sw_lat + ne_lat) / 2.0, lng)
    }

    /// Radius of the circle around [`MapBbox::center`] that touches the corners,
    /// capped at [`MAX_BIAS_RADIUS`].
    pub fn bias_radius(&self) -> Distance {
        MapPoint::distance(self.center(), self.ne)
            .filter(|d| *d < MAX_BIAS_RADIUS)
            .unwrap_or(MAX_BIAS_RADIUS)
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

impl FromStr for MapBbox {
    type Err = GeoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sw_lat, sw_lng, ne_lat, ne_lng) = s
            .split(',')
            .collect_tuple()
            .ok_or_else(|| GeoParseError::Format(s.to_owned()))?;
        let sw = MapPoint::parse_lat_lng_deg(sw_lat, sw_lng)?;
        let ne = MapPoint::parse_lat_lng_deg(ne_lat, ne_lng)?;
        Ok(MapBbox::new(sw, ne))
    }
}
