//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request, State,
    },
    http::{request::Parts, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use guildhall_domain::{Character, CharacterId, Quest, QuestCompleted};
use guildhall_shared::{
    AcceptQuestRequest, CharacterState, CompletionSummary, Confirmation, CreateCharacterRequest,
    ErrorBody, ErrorCode, QuestState,
};

use crate::app::App;
use crate::use_cases::characters::{AcceptQuestInput, CharacterError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/characters", post(create_character))
        .route("/api/characters/by-name/{name}", get(find_character_by_name))
        .route("/api/characters/{id}", get(get_character))
        .route(
            "/api/characters/{id}/quests",
            get(list_quests).post(accept_quest),
        )
        .route("/api/characters/{id}/quests/complete", post(complete_quest))
        .fallback(unknown_route)
}

async fn health() -> &'static str {
    "OK"
}

async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

async fn create_character(
    State(app): State<Arc<App>>,
    ApiJson(request): ApiJson<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<CharacterState>), ApiError> {
    let character = app
        .use_cases
        .characters
        .create
        .execute(&request.name, &request.class)
        .await?;

    Ok((StatusCode::CREATED, Json(character_state(&character))))
}

async fn get_character(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CharacterState>, ApiError> {
    let character = app
        .use_cases
        .characters
        .ops
        .get(CharacterId::from_i64(id))
        .await?;

    Ok(Json(character_state(&character)))
}

async fn find_character_by_name(
    State(app): State<Arc<App>>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<CharacterState>, ApiError> {
    let character = app.use_cases.characters.ops.find_by_name(&name).await?;
    Ok(Json(character_state(&character)))
}

async fn list_quests(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<QuestState>>, ApiError> {
    let quests = app
        .use_cases
        .characters
        .ops
        .list_quests(CharacterId::from_i64(id))
        .await?;

    Ok(Json(quests.iter().map(quest_state).collect()))
}

async fn accept_quest(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(request): ApiJson<AcceptQuestRequest>,
) -> Result<(StatusCode, Json<Confirmation>), ApiError> {
    let experience_reward = request.reward_or_default();
    let result = app
        .use_cases
        .characters
        .accept_quest
        .execute(
            CharacterId::from_i64(id),
            AcceptQuestInput {
                name: request.name,
                description: request.description,
                experience_reward,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Confirmation {
            message: result.message(),
        }),
    ))
}

async fn complete_quest(
    State(app): State<Arc<App>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CompletionSummary>, ApiError> {
    let completed = app
        .use_cases
        .characters
        .complete_quest
        .execute(CharacterId::from_i64(id))
        .await?;

    Ok(Json(completion_summary(&completed)))
}

// =============================================================================
// Extractors
// =============================================================================

/// `Path` whose rejection is reported as an [`ErrorBody`].
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Rejected(rejection.status(), rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `Json` body whose rejection is reported as an [`ErrorBody`].
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected(rejection.status(), rejection.body_text()))?;
        Ok(Self(value))
    }
}

// =============================================================================
// Wire conversions
// =============================================================================

fn character_state(character: &Character) -> CharacterState {
    CharacterState {
        id: character.id().as_i64(),
        name: character.name().to_string(),
        class: character.class().as_str().to_string(),
        level: character.level(),
        experience: character.experience(),
        quests: character.quests().iter().map(quest_state).collect(),
    }
}

fn quest_state(quest: &Quest) -> QuestState {
    QuestState {
        name: quest.name().to_string(),
        description: quest.description().to_string(),
        experience_reward: quest.experience_reward(),
        status: quest.status().as_str().to_string(),
    }
}

fn completion_summary(completed: &QuestCompleted) -> CompletionSummary {
    CompletionSummary {
        message: completed.message(),
        quest_name: completed.quest.name().to_string(),
        experience_gained: completed.experience_gained,
        levels_gained: completed.levels_gained,
        level: completed.new_level,
        experience: completed.new_experience,
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    EmptyState(String),
    /// A path or body the extractors could not parse, with axum's status.
    Rejected(StatusCode, String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(ErrorCode::NotFound, msg),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(ErrorCode::Validation, msg),
            ),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorBody::new(ErrorCode::Conflict, msg),
            ),
            ApiError::EmptyState(msg) => (
                StatusCode::CONFLICT,
                ErrorBody::new(ErrorCode::EmptyState, msg),
            ),
            ApiError::Rejected(status, msg) => (status, ErrorBody::new(ErrorCode::Validation, msg)),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(ErrorCode::Internal, "Internal error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<CharacterError> for ApiError {
    fn from(e: CharacterError) -> Self {
        match e {
            CharacterError::NotFound(key) => ApiError::NotFound(format!("Character not found: {key}")),
            CharacterError::Validation(msg) => ApiError::BadRequest(msg),
            CharacterError::Conflict(msg) => ApiError::Conflict(msg),
            CharacterError::EmptyState(msg) => ApiError::EmptyState(msg),
            CharacterError::Repo(err) => ApiError::Internal(err.to_string()),
        }
    }
}
