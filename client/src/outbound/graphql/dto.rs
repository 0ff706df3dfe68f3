//! DTOs for the GraphQL record-store wire format.
//!
//! The adapter serialises requests from these transport DTOs and decodes
//! responses into them first; record payloads map into the domain through
//! `Record`'s own validating deserialisation.

use serde::{Deserialize, Serialize};

use crate::domain::draft::CreateRecordInput;
use crate::domain::record::Record;

/// One GraphQL-over-HTTP request: the operation document plus variables.
#[derive(Debug, Serialize)]
pub(super) struct GraphQlRequestDto<'a, V> {
    pub(super) query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) variables: Option<V>,
}

/// Top-level GraphQL response envelope.
///
/// `errors` stays raw JSON so rejections reach the logs verbatim.
#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponseDto<T> {
    pub(super) data: Option<T>,
    #[serde(default)]
    pub(super) errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListRestaurantsDataDto {
    pub(super) list_restaurants: Option<ListRestaurantsConnectionDto>,
}

/// Single page of the listing.
///
/// `next_token` is decoded so a paginating server parses cleanly, then
/// deliberately dropped: the board only ever shows the first page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListRestaurantsConnectionDto {
    #[serde(default)]
    pub(super) items: Vec<Record>,
    pub(super) next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateRestaurantDataDto {
    pub(super) create_restaurant: Option<Record>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DeleteRestaurantDataDto {
    pub(super) delete_restaurant: Option<DeletedRecordDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeletedRecordDto {
    pub(super) id: String,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateRestaurantVariablesDto<'a> {
    pub(super) input: CreateRestaurantInputDto<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateRestaurantInputDto<'a> {
    pub(super) name: &'a str,
    pub(super) description: &'a str,
    pub(super) owner: &'a str,
}

impl<'a> From<&'a CreateRecordInput> for CreateRestaurantVariablesDto<'a> {
    fn from(value: &'a CreateRecordInput) -> Self {
        Self {
            input: CreateRestaurantInputDto {
                name: value.name().as_ref(),
                description: value.description().as_ref(),
                owner: value.owner().as_ref(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DeleteRestaurantVariablesDto<'a> {
    pub(super) input: DeleteRestaurantInputDto<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct DeleteRestaurantInputDto<'a> {
    pub(super) id: &'a str,
}
