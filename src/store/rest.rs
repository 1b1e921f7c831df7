use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::error::StoreError;

use super::SettingsStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_TABLE: &str = "app_settings";

#[derive(Debug, Deserialize)]
struct SettingRow {
    value: Value,
}

/// Settings table exposed through a PostgREST-style hosted API.
pub(crate) struct RestSettingsStore {
    base_url: String,
    api_key: String,
    table: String,
    agent: ureq::Agent,
}

impl RestSettingsStore {
    pub(crate) fn new(base_url: &str, api_key: &str, table: Option<&str>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.unwrap_or(DEFAULT_TABLE).to_string(),
            agent,
        }
    }

    fn read_url(&self, key: &str) -> String {
        format!(
            "{}/rest/v1/{}?key=eq.{}&select=value",
            self.base_url, self.table, key
        )
    }

    fn write_url(&self) -> String {
        format!("{}/rest/v1/{}?on_conflict=key", self.base_url, self.table)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl SettingsStore for RestSettingsStore {
    fn name(&self) -> &'static str {
        "rest"
    }

    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut response = self
            .agent
            .get(&self.read_url(key))
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .header("Accept", "application/json")
            .call()?;
        let rows: Vec<SettingRow> = response.body_mut().read_json()?;
        Ok(rows.into_iter().next().map(|row| row.value))
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let body = json!([{
            "key": key,
            "value": value,
            "updated_at": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }]);
        self.agent
            .post(&self.write_url())
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .send_json(&body)?;
        Ok(())
    }
}
