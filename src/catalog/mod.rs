//! Remote skill catalog client.
//!
//! The catalog is a static JSON resource: a flat list of skill records,
//! grouped client-side by employee to populate per-member option lists.
//! It is read-only reference data; local skill creation is never written
//! back to it.

use std::collections::HashMap;
use std::time::Duration;

use itertools::Itertools;
use tracing::info;

use crate::config::CatalogConfig;
use crate::core::skill::SkillRecord;
use crate::error::{Result, TgError};

#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl CatalogClient {
    /// Build a client from config, with an optional URL override.
    pub fn from_config(config: &CatalogConfig, url_override: Option<&str>) -> Result<Self> {
        let url = url_override
            .map(str::to_string)
            .or_else(|| {
                if config.url.is_empty() {
                    None
                } else {
                    Some(config.url.clone())
                }
            })
            .ok_or_else(|| TgError::MissingConfig("catalog.url".to_string()))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full catalog.
    pub fn fetch(&self) -> Result<Vec<SkillRecord>> {
        info!(url = %self.url, "fetching skill catalog");

        let response = self
            .http
            .get(&self.url)
            .send()
            .map_err(|err| TgError::CatalogUnavailable(format!("{}: {err}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TgError::CatalogUnavailable(format!(
                "{}: HTTP {status}",
                self.url
            )));
        }

        response
            .json::<Vec<SkillRecord>>()
            .map_err(|err| TgError::CatalogDecode(format!("{}: {err}", self.url)))
    }
}

/// Group catalog records by employee id, preserving per-employee order.
#[must_use]
pub fn group_by_employee(records: Vec<SkillRecord>) -> HashMap<String, Vec<SkillRecord>> {
    records
        .into_iter()
        .into_group_map_by(|record| record.employee_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_config(url: &str) -> CatalogConfig {
        CatalogConfig {
            url: url.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn fetch_decodes_skill_records() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/skills.json");
            then.status(200).json_body(serde_json::json!([
                { "id": 1, "employeeId": "101", "expertise": "Go", "experience": "2 years" },
                { "id": 2, "employeeId": "101", "expertise": "Rust", "experience": "1 year" },
                { "id": 3, "employeeId": "102", "expertise": "Frontend", "experience": "3 years" }
            ]));
        });

        let client =
            CatalogClient::from_config(&test_config(&server.url("/skills.json")), None).unwrap();
        let records = client.fetch().unwrap();
        mock.assert();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "1");

        let grouped = group_by_employee(records);
        assert_eq!(grouped["101"].len(), 2);
        assert_eq!(grouped["102"].len(), 1);
    }

    #[test]
    fn http_error_is_catalog_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/skills.json");
            then.status(500);
        });

        let client =
            CatalogClient::from_config(&test_config(&server.url("/skills.json")), None).unwrap();
        let err = client.fetch().unwrap_err();
        assert!(matches!(err, TgError::CatalogUnavailable(_)));
    }

    #[test]
    fn bad_payload_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/skills.json");
            then.status(200).json_body(serde_json::json!({"not": "a list"}));
        });

        let client =
            CatalogClient::from_config(&test_config(&server.url("/skills.json")), None).unwrap();
        let err = client.fetch().unwrap_err();
        assert!(matches!(err, TgError::CatalogDecode(_)));
    }

    #[test]
    fn missing_url_is_config_error() {
        let err = CatalogClient::from_config(&test_config(""), None).unwrap_err();
        assert!(matches!(err, TgError::MissingConfig(_)));
    }

    #[test]
    fn override_url_wins() {
        let client =
            CatalogClient::from_config(&test_config("http://a.example/one"), Some("http://b.example/two"))
                .unwrap();
        assert_eq!(client.url(), "http://b.example/two");
    }
}
