//! REST calls against the hosted data and auth APIs.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};

use crate::{domain::room::Room, infra::config::SupabaseConfig, usecases::contracts::StoreError};

use super::{
    auth::UserPayload,
    wire::{MessageRow, NewMessageRow},
};

pub(crate) fn messages_endpoint(config: &SupabaseConfig) -> String {
    format!("{}/rest/v1/messages", config.url.trim_end_matches('/'))
}

pub(crate) fn user_endpoint(config: &SupabaseConfig) -> String {
    format!("{}/auth/v1/user", config.url.trim_end_matches('/'))
}

/// Requests authenticate with the anon key, plus the user's access token as
/// bearer when one is configured.
fn authorize(request: RequestBuilder, config: &SupabaseConfig) -> RequestBuilder {
    let bearer = config
        .access_token
        .as_deref()
        .unwrap_or(config.anon_key.as_str());
    request
        .header("apikey", &config.anon_key)
        .bearer_auth(bearer)
}

pub(crate) fn map_status(status: StatusCode) -> StoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Unauthorized,
        _ => StoreError::Unavailable,
    }
}

/// Most recent rows for a room, in the store's descending native order.
pub(crate) async fn fetch_recent(
    http: &Client,
    config: &SupabaseConfig,
    room: Room,
    limit: usize,
) -> Result<Vec<MessageRow>, StoreError> {
    let request = http.get(messages_endpoint(config)).query(&[
        ("select", "*".to_owned()),
        ("room", format!("eq.{}", room.key())),
        ("order", "created_at.desc".to_owned()),
        ("limit", limit.to_string()),
    ]);

    read_rows(authorize(request, config)).await
}

/// Rows created after `watermark`, oldest first; every row of the room when
/// no watermark is known yet.
pub(crate) async fn fetch_after(
    http: &Client,
    config: &SupabaseConfig,
    room: Room,
    watermark: Option<DateTime<Utc>>,
) -> Result<Vec<MessageRow>, StoreError> {
    let mut query = vec![
        ("select", "*".to_owned()),
        ("room", format!("eq.{}", room.key())),
        ("order", "created_at.asc".to_owned()),
    ];
    if let Some(watermark) = watermark {
        query.push((
            "created_at",
            format!(
                "gt.{}",
                watermark.to_rfc3339_opts(SecondsFormat::Micros, true)
            ),
        ));
    }
    let request = http.get(messages_endpoint(config)).query(&query);

    read_rows(authorize(request, config)).await
}

pub(crate) async fn insert_message(
    http: &Client,
    config: &SupabaseConfig,
    row: NewMessageRow,
) -> Result<(), StoreError> {
    let request = http
        .post(messages_endpoint(config))
        .header("Prefer", "return=minimal")
        .json(&row);

    let response = authorize(request, config)
        .send()
        .await
        .map_err(|_| StoreError::Unavailable)?;

    let status = response.status();
    if !status.is_success() {
        return Err(map_status(status));
    }
    Ok(())
}

pub(crate) async fn fetch_user(
    http: &Client,
    config: &SupabaseConfig,
) -> Result<UserPayload, StoreError> {
    let response = authorize(http.get(user_endpoint(config)), config)
        .send()
        .await
        .map_err(|_| StoreError::Unavailable)?;

    let status = response.status();
    if !status.is_success() {
        return Err(map_status(status));
    }

    response.json().await.map_err(|_| StoreError::InvalidData)
}

async fn read_rows(request: RequestBuilder) -> Result<Vec<MessageRow>, StoreError> {
    let response = request.send().await.map_err(|_| StoreError::Unavailable)?;

    let status = response.status();
    if !status.is_success() {
        return Err(map_status(status));
    }

    response.json().await.map_err(|_| StoreError::InvalidData)
}
