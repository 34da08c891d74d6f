use std::future::Future;

use chrono::{DateTime, TimeZone, Utc};
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::{build_client, decode, error::ServiceError};
use crate::config::WeatherConfig;

const ICON_URL: &str = "https://openweathermap.org/img/wn";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Weather {
    pub name: String,
    pub sys: Sys,
    pub main: Readings,
    pub wind: Wind,
    #[serde(default)]
    pub visibility: Option<u32>,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Readings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Condition {
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Weather {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    pub fn icon_url(&self) -> Option<String> {
        self.condition()
            .and_then(|c| c.icon.as_ref())
            .map(|icon| format!("{}/{}@4x.png", ICON_URL, icon))
    }

    pub fn visibility_km(&self) -> Option<f64> {
        self.visibility.map(|meters| f64::from(meters) / 1000.0)
    }

    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.sys.sunrise.and_then(|s| Utc.timestamp_opt(s, 0).single())
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        self.sys.sunset.and_then(|s| Utc.timestamp_opt(s, 0).single())
    }
}

/// Current weather lookup for a single city.
#[derive(Clone)]
pub struct WeatherService {
    client: reqwest::Client,
    url: String,
    api_key: String,
    units: String,
}

impl WeatherService {
    pub fn new(config: &WeatherConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(config.timeout_millis)?,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
        })
    }

    fn request_url(&self, city: &str) -> Result<Url, ServiceError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ServiceError::InvalidQuery("city is empty".to_string()));
        }
        let url = Url::parse_with_params(
            &self.url,
            &[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Builds the request for `city`; nothing is sent until the future is polled.
    pub fn fetch(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Weather, ServiceError>> + Send + 'static {
        let url = self.request_url(city);
        lookup(self.client.clone(), url, city.trim().to_string())
    }
}

async fn lookup(
    client: reqwest::Client,
    url: Result<Url, ServiceError>,
    city: String,
) -> Result<Weather, ServiceError> {
    let url = url?;
    debug!(city = city.as_str(), "requesting weather");
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        warn!(
            city = city.as_str(),
            status = response.status().as_u16(),
            "weather lookup failed"
        );
        return Err(ServiceError::CityNotFound(city));
    }
    decode(response).await
}
