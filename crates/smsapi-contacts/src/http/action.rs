/*
[INPUT]:  Named parameter assignments from typed operation builders
[OUTPUT]: One authenticated HTTP request per action, decoded response
[POS]:    HTTP layer - shared parameter bag and request execution
[UPDATE]: When changing parameter encoding or execution flow
*/

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::http::{ApiStyle, Result, SmsapiClient, SmsapiError};

/// Ordered parameter bag shared by all actions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter; `null` removes it
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        match value.into() {
            Value::Null => {
                self.values.remove(&key);
            }
            value => {
                self.values.insert(key, value);
            }
        }
    }

    /// Current value of a parameter
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge every field of a serializable struct or map
    pub fn extend_from<S: Serialize + ?Sized>(&mut self, source: &S) -> Result<()> {
        match serde_json::to_value(source)? {
            Value::Object(map) => {
                for (key, value) in map {
                    if !value.is_null() {
                        self.values.insert(key, value);
                    }
                }
                Ok(())
            }
            other => Err(SmsapiError::InvalidParams(format!(
                "expected an object of parameters, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Flatten into key/value pairs for query or form encoding
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), encode_value(value)))
            .collect()
    }
}

fn encode_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => (if *flag { "1" } else { "0" }).to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(encode_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A single API operation: endpoint, method and accumulated parameters
#[derive(Debug, Clone)]
pub struct Action<'a> {
    client: &'a SmsapiClient,
    method: Method,
    segments: Vec<String>,
    style: ApiStyle,
    params: Params,
}

impl<'a> Action<'a> {
    /// Action against a REST resource addressed by path segments
    pub(crate) fn rest<I, S>(client: &'a SmsapiClient, method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client,
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            style: ApiStyle::Rest,
            params: Params::new(),
        }
    }

    /// Action against a `*.do` endpoint (always POST, JSON output)
    pub(crate) fn legacy(client: &'a SmsapiClient, endpoint: &str) -> Self {
        let mut action = Self {
            client,
            method: Method::POST,
            segments: vec![endpoint.to_string()],
            style: ApiStyle::Legacy,
            params: Params::new(),
        };
        action.params.set("format", "json");
        action
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path relative to the server URL
    pub fn endpoint(&self) -> String {
        self.segments.join("/")
    }

    pub fn style(&self) -> ApiStyle {
        self.style
    }

    /// Set a named parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.set(key, value);
        self
    }

    pub(crate) fn set_param(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.set(key, value);
    }

    /// Assign many parameters from a serializable struct or map
    pub fn params<S: Serialize + ?Sized>(mut self, source: &S) -> Result<Self> {
        self.params.extend_from(source)?;
        Ok(self)
    }

    /// Read back a parameter
    pub fn get_param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Read back a string parameter
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    pub fn all_params(&self) -> &Params {
        &self.params
    }

    fn into_request(self) -> Result<(&'a SmsapiClient, reqwest::RequestBuilder)> {
        debug!(
            method = %self.method,
            endpoint = %self.endpoint(),
            param_count = self.params.len(),
            "executing action"
        );
        let builder = self.client.build_request(
            self.method,
            &self.segments,
            self.style,
            self.params.to_pairs(),
        )?;
        Ok((self.client, builder))
    }

    /// Execute and decode the JSON response
    pub async fn execute_json<T: DeserializeOwned>(self) -> Result<T> {
        let style = self.style;
        let (client, builder) = self.into_request()?;
        client.send_json(builder, style).await
    }

    /// Execute and decode the JSON response; an empty body yields `None`
    pub async fn execute_optional_json<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let style = self.style;
        let (client, builder) = self.into_request()?;
        client.send_optional_json(builder, style).await
    }

    /// Execute and discard the response body
    pub async fn execute_empty(self) -> Result<()> {
        let style = self.style;
        let (client, builder) = self.into_request()?;
        client.send_empty(builder, style).await
    }
}
