//! User data service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::{DiscoveryError, DiscoveryResult};
use crate::transport::ApiRequest;
use crate::types::user_data::DeleteUserDataOptions;

/// User data service trait for testability.
#[async_trait]
pub trait UserDataService: Send + Sync {
    /// Deletes all data labelled with a customer identifier.
    async fn delete_user_data(
        &self,
        options: DeleteUserDataOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;
}

/// Implementation of the user data service.
pub struct UserDataServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl UserDataServiceImpl {
    /// Creates a new user data service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl UserDataService for UserDataServiceImpl {
    #[instrument(skip(self, options))]
    async fn delete_user_data(
        &self,
        options: DeleteUserDataOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        if options.customer_id.is_empty() {
            return Err(DiscoveryError::validation(
                "customer_id",
                "Customer identifier cannot be empty",
            ));
        }

        let request = ApiRequest::delete("/v1/user_data", &[])?
            .query("customer_id", &options.customer_id)
            .headers(&options.headers);

        self.dispatcher.execute_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockResponse;
    use crate::services::test_support::{dispatcher, path_of};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_delete_user_data() {
        let (dispatcher, transport) = dispatcher();
        transport.enqueue_response(MockResponse::empty(200));
        let service = UserDataServiceImpl::new(dispatcher);

        service
            .delete_user_data(DeleteUserDataOptions::new("customer-1"))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(path_of(&request), "/v1/user_data");
        assert_eq!(request.query_param("customer_id").as_deref(), Some("customer-1"));
    }

    #[tokio::test]
    async fn test_empty_customer_id_is_rejected() {
        let (dispatcher, transport) = dispatcher();
        let service = UserDataServiceImpl::new(dispatcher);

        let err = service
            .delete_user_data(DeleteUserDataOptions::new(""))
            .await
            .unwrap_err();

        assert!(matches!(err, DiscoveryError::Validation { .. }));
        assert_eq!(transport.request_count(), 0);
    }
}
