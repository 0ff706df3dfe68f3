//! Reqwest-backed GraphQL record-store adapter.
//!
//! This adapter owns transport details only: operation documents, auth
//! headers, timeout and HTTP error mapping, and envelope decoding into
//! domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{
    CreateRestaurantDataDto, CreateRestaurantVariablesDto, DeleteRestaurantDataDto,
    DeleteRestaurantInputDto, DeleteRestaurantVariablesDto, GraphQlRequestDto, GraphQlResponseDto,
    ListRestaurantsDataDto,
};
use crate::domain::draft::CreateRecordInput;
use crate::domain::ports::{RecordStore, RecordStoreError};
use crate::domain::record::{Record, RecordId};
use crate::outbound::http::status_message;
use crate::outbound::token::AccessTokenFile;

const LIST_RESTAURANTS: &str = "\
query ListRestaurants {
  listRestaurants {
    items {
      id
      name
      description
      owner
    }
    nextToken
  }
}";

const CREATE_RESTAURANT: &str = "\
mutation CreateRestaurant($input: CreateRestaurantInput!) {
  createRestaurant(input: $input) {
    id
    name
    description
    owner
  }
}";

const DELETE_RESTAURANT: &str = "\
mutation DeleteRestaurant($input: DeleteRestaurantInput!) {
  deleteRestaurant(input: $input) {
    id
  }
}";

/// Record-store adapter performing GraphQL-over-HTTP POSTs to one endpoint.
pub struct GraphQlHttpStore {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    token_file: AccessTokenFile,
}

impl GraphQlHttpStore {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: Option<String>,
        token_file: AccessTokenFile,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            token_file,
        })
    }

    /// Current bearer token, when one is readable.
    ///
    /// Requests go out without bearer auth when the token is missing; the
    /// store may still accept them on the api key alone.
    fn bearer_token(&self) -> Option<Zeroizing<String>> {
        match self.token_file.read() {
            Ok(token) => token,
            Err(err) => {
                debug!(error = %err, "access token unreadable; sending request without bearer auth");
                None
            }
        }
    }

    async fn execute<V, T>(
        &self,
        query: &'static str,
        variables: Option<V>,
    ) -> Result<T, RecordStoreError>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&GraphQlRequestDto { query, variables });
        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key.as_str());
        }
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_envelope(body.as_ref())
    }
}

#[async_trait]
impl RecordStore for GraphQlHttpStore {
    async fn list_records(&self) -> Result<Vec<Record>, RecordStoreError> {
        let data: ListRestaurantsDataDto = self.execute(LIST_RESTAURANTS, None::<()>).await?;
        let connection = data
            .list_restaurants
            .ok_or_else(|| RecordStoreError::decode("listRestaurants missing from response"))?;

        if connection.next_token.is_some() {
            debug!("listing is truncated; further pages are never fetched");
        }
        Ok(connection.items)
    }

    async fn create_record(&self, input: &CreateRecordInput) -> Result<Record, RecordStoreError> {
        let variables = CreateRestaurantVariablesDto::from(input);
        let data: CreateRestaurantDataDto =
            self.execute(CREATE_RESTAURANT, Some(variables)).await?;
        data.create_restaurant
            .ok_or_else(|| RecordStoreError::decode("createRestaurant missing from response"))
    }

    async fn delete_record(&self, id: &RecordId) -> Result<RecordId, RecordStoreError> {
        let variables = DeleteRestaurantVariablesDto {
            input: DeleteRestaurantInputDto { id: id.as_ref() },
        };
        let data: DeleteRestaurantDataDto =
            self.execute(DELETE_RESTAURANT, Some(variables)).await?;
        let deleted = data
            .delete_restaurant
            .ok_or_else(|| RecordStoreError::decode("deleteRestaurant missing from response"))?;
        RecordId::new(deleted.id)
            .map_err(|err| RecordStoreError::decode(format!("invalid deleted record id: {err}")))
    }
}

fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, RecordStoreError> {
    let envelope: GraphQlResponseDto<T> = serde_json::from_slice(body).map_err(|error| {
        RecordStoreError::decode(format!("invalid GraphQL response payload: {error}"))
    })?;

    if let Some(errors) = envelope.errors {
        let meaningful = match &errors {
            Value::Null => false,
            Value::Array(list) => !list.is_empty(),
            _ => true,
        };
        if meaningful {
            return Err(RecordStoreError::rejected(errors));
        }
    }

    envelope
        .data
        .ok_or_else(|| RecordStoreError::decode("GraphQL response carried no data"))
}

fn map_transport_error(error: reqwest::Error) -> RecordStoreError {
    if error.is_timeout() {
        RecordStoreError::timeout(error.to_string())
    } else {
        RecordStoreError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecordStoreError {
    let message = status_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RecordStoreError::denied(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RecordStoreError::timeout(message)
        }
        _ if status.is_client_error() => RecordStoreError::invalid_request(message),
        _ => RecordStoreError::transport(message),
    }
}
