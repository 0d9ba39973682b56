//! Remote holiday lookup against the AbstractAPI holidays service.
//!
//! One request per queried date:
//!
//! ```text
//! GET {base}/v1/?api_key={key}&country=EC&year=2021&month=04&day=02
//! ```
//!
//! The service answers with a JSON array of the holidays on that date, `[]`
//! when there are none.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use picoplaca_engine::{EngineError, HolidaySource};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::{validate_country, LookupConfig, ENV_API_KEY, KNOWN_FALSE_POSITIVES};
use crate::error::Result;
use crate::http::{create_client, get_text};

/// One holiday as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiHoliday {
    pub name: String,
    #[serde(default)]
    pub name_local: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub date: String,
}

impl ApiHoliday {
    /// Whether the provider lists this day although it is not a public holiday.
    #[must_use]
    pub fn is_known_false_positive(&self) -> bool {
        KNOWN_FALSE_POSITIVES
            .iter()
            .any(|name| self.name == *name || self.name_local == *name)
    }
}

/// Whether a provider response names at least one real public holiday.
pub fn parse_holiday_response(body: &str) -> std::result::Result<bool, EngineError> {
    let holidays: Vec<ApiHoliday> = serde_json::from_str(body)
        .map_err(|e| EngineError::RemoteLookup(format!("unexpected response body: {e}")))?;

    let (ignored, kept): (Vec<_>, Vec<_>) = holidays
        .into_iter()
        .partition(ApiHoliday::is_known_false_positive);
    for holiday in &ignored {
        tracing::debug!(name = %holiday.name, "Ignoring known false positive");
    }
    Ok(!kept.is_empty())
}

/// Holiday source backed by the AbstractAPI holidays service.
pub struct AbstractApiHolidays {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    country: String,
}

impl fmt::Debug for AbstractApiHolidays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractApiHolidays")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("country", &self.country)
            .finish()
    }
}

impl AbstractApiHolidays {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        validate_country(&config.country)?;
        Ok(Self {
            client: create_client(config.timeout_secs)?,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/v1/", config.api_base_url.trim_end_matches('/')),
            country: config.country.clone(),
        })
    }

    fn lookup_url(&self, api_key: &str, date: NaiveDate) -> std::result::Result<Url, EngineError> {
        Url::parse_with_params(
            &self.endpoint,
            [
                ("api_key", api_key.to_string()),
                ("country", self.country.clone()),
                ("year", date.year().to_string()),
                ("month", format!("{:02}", date.month())),
                ("day", format!("{:02}", date.day())),
            ],
        )
        .map_err(|e| EngineError::RemoteLookup(format!("invalid provider URL: {e}")))
    }
}

impl HolidaySource for AbstractApiHolidays {
    fn name(&self) -> &str {
        "abstractapi"
    }

    fn source_type(&self) -> &str {
        "remote"
    }

    fn is_holiday(&self, date: NaiveDate) -> std::result::Result<bool, EngineError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(EngineError::RemoteAuth(format!(
                "missing API key, set it in the {ENV_API_KEY} environment variable"
            )));
        };

        let url = self.lookup_url(api_key, date)?;
        let (status, body) = get_text(&self.client, url)
            .map_err(|e| EngineError::RemoteLookup(e.to_string()))?;

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!(status = %status, "Holiday provider rejected the API key");
                Err(EngineError::RemoteAuth(format!(
                    "provider answered {status}, check the {ENV_API_KEY} environment variable"
                )))
            }
            status if !status.is_success() => {
                tracing::warn!(status = %status, "Holiday provider error");
                Err(EngineError::RemoteLookup(format!("provider answered {status}")))
            }
            _ => {
                let holiday = parse_holiday_response(&body)?;
                tracing::debug!(%date, holiday, "Remote holiday lookup");
                Ok(holiday)
            }
        }
    }
}
