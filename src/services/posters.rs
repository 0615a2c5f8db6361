use crate::domain::types::{Categoria, PosterId, SubcategoryId};
use crate::dto::SuccessDto;
use crate::dto::posters::PosterDto;
use crate::forms::posters::{AddPosterFormPayload, DeletePosterFormPayload, UpdatePosterFormPayload};
use crate::repository::{
    CredentialReader, CredentialWriter, PosterListQuery, PosterReader, PosterWriter,
};

use super::auth::AdminGate;
use super::errors::write_error;
use super::ServiceResult;

/// Size of the latest-posters list when the caller gives no usable limit.
pub const DEFAULT_LATEST_LIMIT: usize = 10;

fn list<R>(query: PosterListQuery, repo: &R) -> Vec<PosterDto>
where
    R: PosterReader,
{
    match repo.list_posters(query) {
        Ok(posters) => posters.into_iter().map(PosterDto::from).collect(),
        Err(e) => {
            log::error!("Failed to list posters: {e}");
            Vec::new()
        }
    }
}

pub fn show_posters<R>(repo: &R) -> Vec<PosterDto>
where
    R: PosterReader,
{
    list(PosterListQuery::default(), repo)
}

/// Unknown category codes yield an empty list.
pub fn show_posters_by_category<R>(categoria: &str, repo: &R) -> Vec<PosterDto>
where
    R: PosterReader,
{
    match Categoria::try_from(categoria) {
        Ok(categoria) => list(PosterListQuery::default().categoria(categoria), repo),
        Err(_) => Vec::new(),
    }
}

pub fn show_posters_by_subcategory<R>(subcategoria_id: i32, repo: &R) -> Vec<PosterDto>
where
    R: PosterReader,
{
    match SubcategoryId::new(subcategoria_id) {
        Ok(id) => list(PosterListQuery::default().subcategory(id), repo),
        Err(_) => Vec::new(),
    }
}

/// Newest posters, `limit` of them. `None` and `0` fall back to
/// [`DEFAULT_LATEST_LIMIT`].
pub fn show_latest_posters<R>(limit: Option<usize>, repo: &R) -> Vec<PosterDto>
where
    R: PosterReader,
{
    let limit = match limit {
        Some(limit) if limit > 0 => limit,
        _ => DEFAULT_LATEST_LIMIT,
    };
    list(PosterListQuery::default().limit(limit), repo)
}

pub fn show_poster<R>(id: i32, repo: &R) -> Option<PosterDto>
where
    R: PosterReader,
{
    let id = PosterId::new(id).ok()?;
    match repo.get_poster_by_id(id) {
        Ok(poster) => poster.map(PosterDto::from),
        Err(e) => {
            log::error!("Failed to get poster: {e}");
            None
        }
    }
}

/// Create a poster. The referenced subcategory must exist.
pub fn add_poster<R>(payload: AddPosterFormPayload, repo: &R) -> ServiceResult<PosterDto>
where
    R: CredentialReader + CredentialWriter + PosterWriter,
{
    AdminGate::new(repo).authorize_create(&payload.password)?;

    repo.create_poster(&payload.poster)
        .map(PosterDto::from)
        .map_err(|e| write_error("create poster", e))
}

pub fn update_poster<R>(
    payload: UpdatePosterFormPayload,
    repo: &R,
) -> ServiceResult<Option<PosterDto>>
where
    R: CredentialReader + PosterWriter,
{
    AdminGate::new(repo).authorize_existing(&payload.password)?;

    repo.update_poster(payload.poster_id, &payload.update)
        .map(|updated| updated.map(PosterDto::from))
        .map_err(|e| write_error("update poster", e))
}

pub fn delete_poster<R>(payload: DeletePosterFormPayload, repo: &R) -> ServiceResult<SuccessDto>
where
    R: CredentialReader + PosterWriter,
{
    AdminGate::new(repo).authorize_existing(&payload.password)?;

    repo.delete_poster(payload.poster_id)
        .map(SuccessDto::from)
        .map_err(|e| write_error("delete poster", e))
}
