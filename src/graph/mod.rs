pub mod dto;
pub mod query;

use std::env;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::AppError;
use crate::models::Course;

#[derive(Clone, Debug)]
pub struct GraphqlConfig {
    pub endpoint: String,
    pub anon_key: String,
    pub api_key: String,
}

impl GraphqlConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let endpoint = env::var("SS_GRAPHQL")
            .map_err(|_| AppError::Config("SS_GRAPHQL is not set".to_string()))?;
        let anon_key = env::var("SS_ANON_KEY")
            .map_err(|_| AppError::Config("SS_ANON_KEY is not set".to_string()))?;
        let api_key = env::var("SS_API_KEY")
            .map_err(|_| AppError::Config("SS_API_KEY is not set".to_string()))?;

        Ok(Self {
            endpoint,
            anon_key,
            api_key,
        })
    }
}

/// Filter accepted by the collection fetch.
///
/// The upstream query is not filtered by it yet; it is carried through so callers
/// keep a stable interface.
#[derive(Clone, Debug, Default)]
pub struct CourseFilter {
    pub tag: Option<String>,
}

#[async_trait]
pub trait CourseSource: Send + Sync {
    /// `Ok(None)` when no course has this id.
    async fn fetch_course(&self, id: i64) -> Result<Option<Course>, AppError>;
    async fn fetch_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError>;
}

pub struct GraphqlHttpClient {
    client: Client,
    config: GraphqlConfig,
}

impl GraphqlHttpClient {
    pub fn new(config: GraphqlConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    /// Sends one query and decodes the envelope. Both fetch paths go through here so
    /// they share status checking and error reporting.
    async fn execute(&self, request: &dto::GraphqlRequest) -> Result<Vec<Course>, AppError> {
        let response = self.client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("apikey", &self.config.anon_key)
            .header("ss-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send GraphQL request: {}", e);
                AppError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read GraphQL response: {}", e);
            AppError::Transport(e)
        })?;

        if !status.is_success() {
            tracing::error!("GraphQL endpoint returned {}", status);
            return Err(AppError::UpstreamStatus { status, body });
        }

        let envelope = serde_json::from_str::<dto::GraphqlResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse GraphQL response: {}", e);
            AppError::Decode(e)
        })?;

        unwrap_envelope(envelope)
    }
}

fn unwrap_envelope(envelope: dto::GraphqlResponse) -> Result<Vec<Course>, AppError> {
    let messages = envelope
        .errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    match envelope.data {
        Some(data) => {
            if !messages.is_empty() {
                tracing::warn!("GraphQL response carried errors alongside data: {}", messages);
            }
            Ok(data
                .courses_collection
                .unwrap_or_default()
                .edges
                .into_iter()
                .map(|edge| edge.node)
                .collect())
        }
        None if !messages.is_empty() => Err(AppError::Graphql(messages)),
        None => Ok(Vec::new()),
    }
}

#[async_trait]
impl CourseSource for GraphqlHttpClient {
    async fn fetch_course(&self, id: i64) -> Result<Option<Course>, AppError> {
        let request = dto::GraphqlRequest {
            query: query::COURSE_BY_ID_QUERY,
            variables: Some(dto::CourseVariables { id }),
        };

        Ok(self.execute(&request).await?.into_iter().next())
    }

    async fn fetch_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        if let Some(tag) = &filter.tag {
            tracing::debug!("tag filter {:?} is not applied to the upstream query", tag);
        }

        let request = dto::GraphqlRequest {
            query: query::COURSES_QUERY,
            variables: None,
        };

        let courses = self.execute(&request).await?;
        tracing::debug!("Fetched {} courses", courses.len());
        Ok(courses)
    }
}

pub struct NoopCourseSource;

#[async_trait]
impl CourseSource for NoopCourseSource {
    async fn fetch_course(&self, _id: i64) -> Result<Option<Course>, AppError> {
        Ok(None)
    }

    async fn fetch_courses(&self, _filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        Ok(Vec::new())
    }
}
