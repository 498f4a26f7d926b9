//! Axum route handlers for the Analysis API.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        multipart::MultipartRejection,
        Multipart, Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::fit_scoring::{RoleMatch, ScoreBand};
use crate::analysis::learning_plan::LearningPlan;
use crate::analysis::profile::parse_resume;
use crate::analysis::report::{render_report, report_file_name};
use crate::analysis::roadmap::render_roadmap;
use crate::analysis::store::Analysis;
use crate::catalog::Role;
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the resume file.
const UPLOAD_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchesQuery {
    /// Only return the best `top` matches.
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub skills: Vec<String>, // sorted
    pub skill_count: usize,
}

#[derive(Debug, Serialize)]
pub struct RankedMatch<'a> {
    pub rank: usize, // 1-based
    #[serde(flatten)]
    pub role_match: &'a RoleMatch,
    pub match_band: ScoreBand,
    pub combined_band: ScoreBand,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse<'a> {
    pub analysis_id: Uuid,
    pub file_name: &'a str,
    pub created_at: DateTime<Utc>,
    pub profile: ProfileSummary,
    pub matches: Vec<RankedMatch<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse<'a> {
    pub analysis_id: Uuid,
    pub role_name: &'a str,
    pub description: &'a str,
    pub known_skills: &'a [String],
    pub missing_skills: &'a [String],
    pub plan: LearningPlan,
    pub career_path: &'a [String],
    pub roadmap: String,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<Role>,
}

fn analysis_response(analysis: &Analysis, top: Option<usize>) -> AnalysisResponse<'_> {
    let limit = top.unwrap_or(analysis.matches.len());
    AnalysisResponse {
        analysis_id: analysis.id,
        file_name: &analysis.file_name,
        created_at: analysis.created_at,
        profile: ProfileSummary {
            skills: analysis.skills.iter().cloned().collect(),
            skill_count: analysis.skills.len(),
        },
        matches: analysis
            .matches
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, role_match)| RankedMatch {
                rank: i + 1,
                role_match,
                match_band: ScoreBand::for_score(role_match.match_score),
                combined_band: ScoreBand::for_score(role_match.combined_score),
            })
            .collect(),
    }
}

async fn find_analysis(state: &AppState, id: Uuid) -> Result<std::sync::Arc<Analysis>, AppError> {
    state
        .analyses
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

fn find_match<'a>(analysis: &'a Analysis, role_name: &str) -> Result<&'a RoleMatch, AppError> {
    analysis
        .role_match(role_name)
        .ok_or_else(|| AppError::NotFound(format!("Role '{role_name}' not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
///
/// The catalog in catalog order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.catalog.roles.clone(),
    })
}

/// POST /api/v1/analyses
///
/// Multipart upload (field `resume`, PDF or TXT). Extracts skills, ranks every
/// role and stores the result under a fresh id. Nothing is stored on failure.
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    query: Result<Query<MatchesQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let mut multipart = multipart?;
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Upload is missing a file name".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) = upload.ok_or_else(|| {
        AppError::Validation(format!("Multipart field '{UPLOAD_FIELD}' is required"))
    })?;

    let profile = parse_resume(
        &file_name,
        data,
        state.text_extractor.as_ref(),
        &state.skill_extractor,
    )
    .await?;

    let matches = state.fit_scorer.score(&profile.skills, &state.catalog);
    let analysis = state
        .analyses
        .insert(Analysis::new(file_name, profile, matches))
        .await;

    let held = state.analyses.len().await;
    info!(
        "Analysis {} created: {} skills, top role {:?}, {held} analyses held",
        analysis.id,
        analysis.skills.len(),
        analysis.matches.first().map(|m| m.role_name.as_str()),
    );

    let body = serde_json::to_value(analysis_response(&analysis, query.top))
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<MatchesQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path(id) = path?;
    let Query(query) = query?;
    let analysis = find_analysis(&state, id).await?;
    let body = serde_json::to_value(analysis_response(&analysis, query.top))
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(body))
}

/// DELETE /api/v1/analyses/:id
///
/// Discards an analysis, e.g. when the user starts over with a new upload.
pub async fn handle_delete_analysis(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    if state.analyses.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Analysis {id} not found")))
    }
}

/// GET /api/v1/analyses/:id/roles/:role/learning-plan
///
/// Skills analysis, learning plan with totals, and the career roadmap for one role.
pub async fn handle_learning_plan(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, String)>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path((id, role_name)) = path?;
    let analysis = find_analysis(&state, id).await?;
    let role_match = find_match(&analysis, &role_name)?;

    let response = LearningPathResponse {
        analysis_id: analysis.id,
        role_name: &role_match.role_name,
        description: &role_match.description,
        known_skills: &role_match.known_skills,
        missing_skills: &role_match.missing_skills,
        plan: LearningPlan::for_match(role_match),
        career_path: &role_match.career_path,
        roadmap: render_roadmap(&role_match.career_path),
    };

    let body = serde_json::to_value(response).map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(body))
}

/// GET /api/v1/analyses/:id/roles/:role/report
///
/// Plain-text report as a file download.
pub async fn handle_report(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, String)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, role_name)) = path?;
    let analysis = find_analysis(&state, id).await?;
    let role_match = find_match(&analysis, &role_name)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        report_file_name(&role_match.role_name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_report(role_match),
    ))
}
