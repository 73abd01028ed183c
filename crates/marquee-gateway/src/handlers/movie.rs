use crate::error::Result;
use crate::model::{MovieRequest, MovieResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::MovieId;

pub async fn list_movies_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>> {
    let movies = state.catalog().list().await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

pub async fn get_movie_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<MovieId>, PathRejection>,
) -> Result<Json<MovieResponse>> {
    let Path(id) = id?;
    let movie = state.catalog().get(id).await?;
    Ok(Json(movie.into()))
}

pub async fn create_movie_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<MovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>)> {
    let Json(request) = request?;
    let movie = state.catalog().add(request.into()).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

pub async fn update_movie_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<MovieId>, PathRejection>,
    request: std::result::Result<Json<MovieRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>> {
    let Path(id) = id?;
    let Json(request) = request?;
    let movie = state.catalog().update(id, request.into()).await?;
    Ok(Json(movie.into()))
}

pub async fn delete_movie_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<MovieId>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    state.catalog().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
