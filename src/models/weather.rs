use serde::Deserialize;

use crate::models::error::ProxyError;

pub const DEFAULT_LATITUDE: f64 = 55.7558;
pub const DEFAULT_LONGITUDE: f64 = 37.6173;

/// The fixed set of upstream weather queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Current,
    ForecastH1,
    ForecastH3,
    ForecastH6,
    ForecastH24,
}

impl QueryKind {
    pub const ALL: [QueryKind; 5] = [
        QueryKind::Current,
        QueryKind::ForecastH1,
        QueryKind::ForecastH3,
        QueryKind::ForecastH6,
        QueryKind::ForecastH24,
    ];

    /// Upstream path segment, relative to the provider base URL.
    pub fn upstream_path(self) -> &'static str {
        match self {
            QueryKind::Current => "current/",
            QueryKind::ForecastH1 => "forecast/h1/",
            QueryKind::ForecastH3 => "forecast/h3/",
            QueryKind::ForecastH6 => "forecast/h6/",
            QueryKind::ForecastH24 => "forecast/h24/",
        }
    }

    /// Public route, relative to `/api/weather`.
    pub fn route(self) -> &'static str {
        match self {
            QueryKind::Current => "/bsp_abcd",
            QueryKind::ForecastH1 => "/bsp_efgh",
            QueryKind::ForecastH3 => "/bsp_ijkl",
            QueryKind::ForecastH6 => "/bsp_mnop",
            QueryKind::ForecastH24 => "/bsp_qrst",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QueryKind::Current => "current",
            QueryKind::ForecastH1 => "forecast_h1",
            QueryKind::ForecastH3 => "forecast_h3",
            QueryKind::ForecastH6 => "forecast_h6",
            QueryKind::ForecastH24 => "forecast_h24",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

impl Default for WeatherQuery {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl From<WeatherQuery> for Coordinate {
    fn from(query: WeatherQuery) -> Self {
        Coordinate {
            latitude: query.latitude,
            longitude: query.longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// NaN and infinities fall outside both ranges.
    pub fn validate(self) -> Result<Self, ProxyError> {
        if (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude) {
            Ok(self)
        } else {
            Err(ProxyError::Validation)
        }
    }
}

/// A fully formed upstream URL. `f64`'s `Display` always uses `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
}

impl UpstreamRequest {
    pub fn new(base_url: &str, kind: QueryKind, coordinate: &Coordinate) -> Self {
        Self {
            url: format!(
                "{}/{}?latitude={}&longitude={}",
                base_url.trim_end_matches('/'),
                kind.upstream_path(),
                coordinate.latitude,
                coordinate.longitude
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::DEFAULT_BASE_URL;

    #[test]
    fn test_default_current_url() {
        let coordinate: Coordinate = WeatherQuery::default().into();
        let request = UpstreamRequest::new(DEFAULT_BASE_URL, QueryKind::Current, &coordinate);

        assert_eq!(
            request.url,
            "https://api.gismeteo.net/v3/weather/current/?latitude=55.7558&longitude=37.6173"
        );
    }

    #[test]
    fn test_forecast_paths() {
        let coordinate = Coordinate::new(-33.8688, 151.2093);
        let urls: Vec<String> = QueryKind::ALL
            .iter()
            .map(|kind| UpstreamRequest::new("http://upstream/v3/weather/", *kind, &coordinate).url)
            .collect();

        assert_eq!(
            urls,
            vec![
                "http://upstream/v3/weather/current/?latitude=-33.8688&longitude=151.2093",
                "http://upstream/v3/weather/forecast/h1/?latitude=-33.8688&longitude=151.2093",
                "http://upstream/v3/weather/forecast/h3/?latitude=-33.8688&longitude=151.2093",
                "http://upstream/v3/weather/forecast/h6/?latitude=-33.8688&longitude=151.2093",
                "http://upstream/v3/weather/forecast/h24/?latitude=-33.8688&longitude=151.2093",
            ]
        );
    }

    #[test]
    fn test_decimal_point_formatting() {
        let request = UpstreamRequest::new(
            DEFAULT_BASE_URL,
            QueryKind::ForecastH24,
            &Coordinate::new(0.5, -0.25),
        );
        assert!(request.url.ends_with("?latitude=0.5&longitude=-0.25"));
        assert!(!request.url.contains(','));
    }

    #[test]
    fn test_boundaries_are_valid() {
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0), (89.9999, -179.9999)] {
            assert!(Coordinate::new(lat, lon).validate().is_ok(), "{lat},{lon}");
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        for (lat, lon) in [
            (90.0001, 0.0),
            (-91.0, 0.0),
            (0.0, 180.5),
            (0.0, -181.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            let err = Coordinate::new(lat, lon).validate().unwrap_err();
            assert!(matches!(err, ProxyError::Validation), "{lat},{lon}");
        }
    }

    #[test]
    fn test_routes_are_distinct() {
        let mut routes: Vec<&str> = QueryKind::ALL.iter().map(|k| k.route()).collect();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), QueryKind::ALL.len());
    }
}
