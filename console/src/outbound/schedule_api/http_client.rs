//! Reqwest-backed schedule server adapter.
//!
//! This adapter owns transport details only: endpoint paths, JSON request
//! bodies, timeout and HTTP status mapping, and decoding into domain records.
//! Every endpoint is a JSON `POST` sharing one cookie-carrying session.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{
    BoardIdBody, BoardInfoResponseDto, BoardWriteBody, EmptyBody, MemberListDto, ProjectIdBody,
    ProjectListDto, UserAllListDto,
};
use crate::config::ConsoleSettings;
use crate::domain::ports::{
    BoardCommand, BoardCommandError, BoardQuery, BoardQueryError, ProjectMembersQuery,
    ProjectMembersQueryError, UniverseSource, UniverseSourceError,
};
use crate::domain::{
    BoardDetail, BoardId, BoardSubmission, Member, ProjectId, ProjectMembers, UniverseScope,
};

const USER_ALL_PATH: &str = "board/alluser";
const BOARD_INFO_PATH: &str = "board/info";
const BOARD_INSERT_PATH: &str = "board/insert";
const BOARD_UPDATE_PATH: &str = "board/update";
const PROJECT_LIST_PATH: &str = "issue/projectList";
const PROJECT_MEMBER_LIST_PATH: &str = "issue/memberList";

/// Errors raised while building a [`ScheduleApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ScheduleApiClientError {
    /// The configured base URL is not a valid URL.
    #[error("invalid schedule api base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Schedule server adapter implementing the console's driven ports.
pub struct ScheduleApiClient {
    client: Client,
    base_url: Url,
}

impl ScheduleApiClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// `base_url` should end with a slash; endpoint paths are joined onto it.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Build an adapter from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleApiClientError`] for malformed base URLs or when the
    /// reqwest client cannot be constructed.
    pub fn from_settings(settings: &ConsoleSettings) -> Result<Self, ScheduleApiClientError> {
        let base_url = settings.api_base_url()?;
        Ok(Self::new(base_url, settings.request_timeout())?)
    }

    async fn post_bytes<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, ApiFailure>
    where
        B: Serialize + Sync + ?Sized,
    {
        let endpoint = endpoint(&self.base_url, path)?;
        let response = self
            .client
            .post(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let failure = map_status_error(status, bytes.as_ref());
            debug!(path, status = status.as_u16(), "schedule api call failed");
            return Err(failure);
        }
        Ok(bytes.to_vec())
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiFailure>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.post_bytes(path, body).await?;
        decode(&bytes)
    }

    async fn fetch_project_members(&self, project_id: ProjectId) -> Result<Vec<Member>, ApiFailure> {
        let body = ProjectIdBody {
            project_id: project_id.get(),
        };
        let decoded: MemberListDto = self.post_json(PROJECT_MEMBER_LIST_PATH, &body).await?;
        Ok(decoded.into_members())
    }
}

#[async_trait]
impl UniverseSource for ScheduleApiClient {
    async fn load_universe(&self, scope: &UniverseScope) -> Result<Vec<Member>, UniverseSourceError> {
        match scope {
            UniverseScope::Global => {
                let decoded: UserAllListDto = self.post_json(USER_ALL_PATH, &EmptyBody {}).await?;
                Ok(decoded.user_all_list)
            }
            UniverseScope::Project(project_id) => Ok(self.fetch_project_members(*project_id).await?),
        }
    }
}

#[async_trait]
impl BoardQuery for ScheduleApiClient {
    async fn fetch_board(&self, board_id: BoardId) -> Result<BoardDetail, BoardQueryError> {
        let body = BoardIdBody {
            board_id: board_id.get(),
        };
        let decoded: BoardInfoResponseDto = self
            .post_json(BOARD_INFO_PATH, &body)
            .await
            .map_err(|failure| match failure.kind {
                FailureKind::NotFound => BoardQueryError::not_found(board_id),
                _ => BoardQueryError::from(failure),
            })?;
        decoded
            .into_domain_board(board_id)
            .map_err(BoardQueryError::decode)
    }
}

#[async_trait]
impl BoardCommand for ScheduleApiClient {
    async fn create_board(&self, submission: &BoardSubmission) -> Result<(), BoardCommandError> {
        self.post_bytes(BOARD_INSERT_PATH, &BoardWriteBody::from(submission))
            .await?;
        Ok(())
    }

    async fn update_board(&self, submission: &BoardSubmission) -> Result<(), BoardCommandError> {
        if submission.board_id.is_none() {
            return Err(BoardCommandError::rejected("update requires a board id"));
        }
        self.post_bytes(BOARD_UPDATE_PATH, &BoardWriteBody::from(submission))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectMembersQuery for ScheduleApiClient {
    async fn list_projects_with_members(
        &self,
    ) -> Result<Vec<ProjectMembers>, ProjectMembersQueryError> {
        let decoded: ProjectListDto = self.post_json(PROJECT_LIST_PATH, &EmptyBody {}).await?;
        decoded
            .into_domain_projects()
            .map_err(ProjectMembersQueryError::decode)
    }

    async fn list_project_members(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<Member>, ProjectMembersQueryError> {
        Ok(self.fetch_project_members(project_id).await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    Transport,
    Timeout,
    Unauthorized,
    NotFound,
    Rejected,
    Decode,
}

/// Transport-level failure shared by every endpoint before it is mapped
/// into the calling port's error.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ApiFailure {
    kind: FailureKind,
    message: String,
}

impl ApiFailure {
    fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ApiFailure> for UniverseSourceError {
    fn from(value: ApiFailure) -> Self {
        match value.kind {
            FailureKind::Transport => Self::transport(value.message),
            FailureKind::Timeout => Self::timeout(value.message),
            FailureKind::Unauthorized => Self::unauthorized(value.message),
            FailureKind::NotFound | FailureKind::Rejected => Self::rejected(value.message),
            FailureKind::Decode => Self::decode(value.message),
        }
    }
}

impl From<ApiFailure> for BoardQueryError {
    fn from(value: ApiFailure) -> Self {
        match value.kind {
            FailureKind::Transport => Self::transport(value.message),
            FailureKind::Timeout => Self::timeout(value.message),
            FailureKind::Unauthorized => Self::unauthorized(value.message),
            FailureKind::NotFound | FailureKind::Rejected => Self::rejected(value.message),
            FailureKind::Decode => Self::decode(value.message),
        }
    }
}

impl From<ApiFailure> for BoardCommandError {
    fn from(value: ApiFailure) -> Self {
        match value.kind {
            FailureKind::Transport | FailureKind::Decode => Self::transport(value.message),
            FailureKind::Timeout => Self::timeout(value.message),
            FailureKind::Unauthorized => Self::unauthorized(value.message),
            FailureKind::NotFound | FailureKind::Rejected => Self::rejected(value.message),
        }
    }
}

impl From<ApiFailure> for ProjectMembersQueryError {
    fn from(value: ApiFailure) -> Self {
        match value.kind {
            FailureKind::Transport => Self::transport(value.message),
            FailureKind::Timeout => Self::timeout(value.message),
            FailureKind::Unauthorized => Self::unauthorized(value.message),
            FailureKind::NotFound | FailureKind::Rejected => Self::rejected(value.message),
            FailureKind::Decode => Self::decode(value.message),
        }
    }
}

fn endpoint(base_url: &Url, path: &str) -> Result<Url, ApiFailure> {
    base_url.join(path).map_err(|error| {
        ApiFailure::new(FailureKind::Rejected, format!("invalid endpoint {path}: {error}"))
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiFailure> {
    serde_json::from_slice(body).map_err(|error| {
        ApiFailure::new(
            FailureKind::Decode,
            format!("invalid JSON payload: {error}; body: {}", body_preview(body)),
        )
    })
}

fn map_transport_error(error: reqwest::Error) -> ApiFailure {
    if error.is_timeout() {
        ApiFailure::new(FailureKind::Timeout, error.to_string())
    } else {
        ApiFailure::new(FailureKind::Transport, error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiFailure {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FailureKind::Unauthorized,
        StatusCode::NOT_FOUND => FailureKind::NotFound,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => FailureKind::Timeout,
        _ if status.is_client_error() => FailureKind::Rejected,
        _ => FailureKind::Transport,
    };
    ApiFailure::new(kind, message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
