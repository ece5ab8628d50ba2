//! Training data service.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::client::{DetailedResponse, Dispatcher};
use crate::errors::DiscoveryResult;
use crate::transport::ApiRequest;
use crate::types::collections::CollectionOptions;
use crate::types::training::{
    AddTrainingDataOptions, CreateTrainingExampleOptions, TrainingDataSet, TrainingExample,
    TrainingExampleList, TrainingExampleOptions, TrainingQuery, TrainingQueryOptions,
    UpdateTrainingExampleOptions,
};

const TRAINING_DATA_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/training_data";
const TRAINING_QUERY_PATH: &str =
    "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}";
const EXAMPLES_PATH: &str = "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}/examples";
const EXAMPLE_PATH: &str = "/v1/environments/{environment_id}/collections/{collection_id}/training_data/{query_id}/examples/{example_id}";

/// Training data service trait for testability.
#[async_trait]
pub trait TrainingService: Send + Sync {
    /// Lists the training data of a collection.
    async fn list_training_data(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingDataSet>>;

    /// Adds a training query.
    async fn add_training_data(
        &self,
        options: AddTrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>>;

    /// Deletes all training data of a collection.
    async fn delete_all_training_data(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;

    /// Gets a training query.
    async fn get_training_data(
        &self,
        options: TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>>;

    /// Deletes a training query and its examples.
    async fn delete_training_data(
        &self,
        options: TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;

    /// Lists the examples of a training query.
    async fn list_training_examples(
        &self,
        options: TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExampleList>>;

    /// Adds an example to a training query.
    async fn create_training_example(
        &self,
        options: CreateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>>;

    /// Deletes an example.
    async fn delete_training_example(
        &self,
        options: TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<()>>;

    /// Updates the label of an example.
    async fn update_training_example(
        &self,
        options: UpdateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>>;

    /// Gets an example.
    async fn get_training_example(
        &self,
        options: TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>>;
}

/// Implementation of the training data service.
pub struct TrainingServiceImpl {
    dispatcher: Arc<Dispatcher>,
}

impl TrainingServiceImpl {
    /// Creates a new training data service.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

fn query_request(
    build: fn(&str, &[(&str, &str)]) -> DiscoveryResult<ApiRequest>,
    template: &str,
    options: &TrainingQueryOptions,
) -> DiscoveryResult<ApiRequest> {
    Ok(build(
        template,
        &[
            ("environment_id", options.environment_id.as_str()),
            ("collection_id", options.collection_id.as_str()),
            ("query_id", options.query_id.as_str()),
        ],
    )?
    .headers(&options.headers))
}

fn example_request(
    build: fn(&str, &[(&str, &str)]) -> DiscoveryResult<ApiRequest>,
    options: &TrainingExampleOptions,
) -> DiscoveryResult<ApiRequest> {
    Ok(build(
        EXAMPLE_PATH,
        &[
            ("environment_id", options.environment_id.as_str()),
            ("collection_id", options.collection_id.as_str()),
            ("query_id", options.query_id.as_str()),
            ("example_id", options.example_id.as_str()),
        ],
    )?
    .headers(&options.headers))
}

#[async_trait]
impl TrainingService for TrainingServiceImpl {
    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn list_training_data(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingDataSet>> {
        let request = ApiRequest::get(
            TRAINING_DATA_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn add_training_data(
        &self,
        options: AddTrainingDataOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>> {
        let request = ApiRequest::post(
            TRAINING_DATA_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(environment_id = %options.environment_id, collection_id = %options.collection_id)
    )]
    async fn delete_all_training_data(
        &self,
        options: CollectionOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = ApiRequest::delete(
            TRAINING_DATA_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
            ],
        )?
        .headers(&options.headers);

        self.dispatcher.execute_empty(request).await
    }

    #[instrument(skip(self, options), fields(query_id = %options.query_id))]
    async fn get_training_data(
        &self,
        options: TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingQuery>> {
        let request = query_request(ApiRequest::get, TRAINING_QUERY_PATH, &options)?;
        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(query_id = %options.query_id))]
    async fn delete_training_data(
        &self,
        options: TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = query_request(ApiRequest::delete, TRAINING_QUERY_PATH, &options)?;
        self.dispatcher.execute_empty(request).await
    }

    #[instrument(skip(self, options), fields(query_id = %options.query_id))]
    async fn list_training_examples(
        &self,
        options: TrainingQueryOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExampleList>> {
        let request = query_request(ApiRequest::get, EXAMPLES_PATH, &options)?;
        self.dispatcher.execute(request).await
    }

    #[instrument(skip(self, options), fields(query_id = %options.query_id))]
    async fn create_training_example(
        &self,
        options: CreateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>> {
        let request = ApiRequest::post(
            EXAMPLES_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
                ("query_id", options.query_id.as_str()),
            ],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(query_id = %options.query_id, example_id = %options.example_id)
    )]
    async fn delete_training_example(
        &self,
        options: TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<()>> {
        let request = example_request(ApiRequest::delete, &options)?;
        self.dispatcher.execute_empty(request).await
    }

    #[instrument(
        skip(self, options),
        fields(query_id = %options.query_id, example_id = %options.example_id)
    )]
    async fn update_training_example(
        &self,
        options: UpdateTrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>> {
        let request = ApiRequest::put(
            EXAMPLE_PATH,
            &[
                ("environment_id", options.environment_id.as_str()),
                ("collection_id", options.collection_id.as_str()),
                ("query_id", options.query_id.as_str()),
                ("example_id", options.example_id.as_str()),
            ],
        )?
        .json(&options)?
        .headers(&options.headers);

        self.dispatcher.execute(request).await
    }

    #[instrument(
        skip(self, options),
        fields(query_id = %options.query_id, example_id = %options.example_id)
    )]
    async fn get_training_example(
        &self,
        options: TrainingExampleOptions,
    ) -> DiscoveryResult<DetailedResponse<TrainingExample>> {
        let request = example_request(ApiRequest::get, &options)?;
        self.dispatcher.execute(request).await
    }
}
