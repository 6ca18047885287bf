//! The generic gateway to one REST collection.
//!
//! [`ResourceGateway`] is the contract the screen controllers program
//! against; [`RestResource`] is its one production implementation, driving
//! the collection's endpoints through [`Api`]. Tests substitute in-memory
//! gateways to exercise screens without a network.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use collegiate_core::{Page, PageRequest};
use collegiate_models::Resource;

use crate::error::ApiError;
use crate::http::Api;

/// Operations every REST collection supports.
///
/// Each call is one network round trip with no client-side caching. `get`
/// and `list` are idempotent; `create` is not (there is no dedup key);
/// `update` and `delete` are idempotent at the resource but unguarded
/// against concurrent writers.
#[async_trait]
pub trait ResourceGateway<R: Resource>: Send + Sync {
    /// Fetch the whole collection.
    async fn list(&self) -> Result<Vec<R::Entity>, ApiError>;

    /// Fetch one page of the collection.
    async fn list_paginated(&self, request: &PageRequest) -> Result<Page<R::Entity>, ApiError>;

    /// Fetch one entity by id.
    async fn get(&self, id: R::Id) -> Result<R::Entity, ApiError>;

    /// Create an entity. The result carries the server-assigned identity.
    async fn create(&self, draft: &R::Draft) -> Result<R::Entity, ApiError>;

    /// Fully replace an entity. Every draft field is sent.
    async fn update(&self, id: R::Id, draft: &R::Draft) -> Result<R::Entity, ApiError>;

    /// Delete an entity.
    async fn delete(&self, id: R::Id) -> Result<(), ApiError>;
}

/// REST implementation of [`ResourceGateway`] for a [`Resource`].
pub struct RestResource<R: Resource> {
    api: Api,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> RestResource<R> {
    #[must_use]
    pub fn new(api: Api) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    fn entity_path(id: R::Id) -> String {
        format!("{}/{}", R::BASE_PATH, id)
    }
}

#[async_trait]
impl<R> ResourceGateway<R> for RestResource<R>
where
    R: Resource,
    R::Entity: DeserializeOwned,
    R::Draft: Serialize,
{
    async fn list(&self) -> Result<Vec<R::Entity>, ApiError> {
        self.api.get_json(R::BASE_PATH).await
    }

    async fn list_paginated(&self, request: &PageRequest) -> Result<Page<R::Entity>, ApiError> {
        let path = format!("{}/paginated", R::BASE_PATH);
        self.api
            .get_json_with_query(&path, &request.query_pairs())
            .await
    }

    async fn get(&self, id: R::Id) -> Result<R::Entity, ApiError> {
        self.api.get_json(&Self::entity_path(id)).await
    }

    async fn create(&self, draft: &R::Draft) -> Result<R::Entity, ApiError> {
        self.api.post_json(R::BASE_PATH, draft).await
    }

    async fn update(&self, id: R::Id, draft: &R::Draft) -> Result<R::Entity, ApiError> {
        self.api.put_json(&Self::entity_path(id), draft).await
    }

    async fn delete(&self, id: R::Id) -> Result<(), ApiError> {
        self.api.delete_unit(&Self::entity_path(id)).await
    }
}
