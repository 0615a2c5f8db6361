use crate::dto::posters::PosterDto;
use crate::forms::search::SearchFormPayload;
use crate::repository::{PosterReader, SubcategoryReader};

/// Maximum number of posters returned by a full search.
pub const SEARCH_LIMIT: usize = 20;
/// Maximum number of suggestions returned overall.
pub const SUGGESTION_LIMIT: usize = 10;
const POSTER_SUGGESTIONS: usize = 10;
const SUBCATEGORY_SUGGESTIONS: usize = 5;

/// Posters whose title contains the query, newest first.
pub fn search_posters<R>(payload: SearchFormPayload, repo: &R) -> Vec<PosterDto>
where
    R: PosterReader,
{
    match repo.search_posters(&payload.query, SEARCH_LIMIT) {
        Ok(posters) => posters.into_iter().map(PosterDto::from).collect(),
        Err(e) => {
            log::error!("Failed to search posters: {e}");
            Vec::new()
        }
    }
}

/// Poster titles then subcategory names starting with the query, without
/// duplicates.
pub fn suggestions<R>(payload: SearchFormPayload, repo: &R) -> Vec<String>
where
    R: PosterReader + SubcategoryReader,
{
    let titles = match repo.suggest_poster_titles(&payload.query, POSTER_SUGGESTIONS) {
        Ok(titles) => titles,
        Err(e) => {
            log::error!("Failed to suggest poster titles: {e}");
            return Vec::new();
        }
    };
    let names = match repo.suggest_subcategory_names(&payload.query, SUBCATEGORY_SUGGESTIONS) {
        Ok(names) => names,
        Err(e) => {
            log::error!("Failed to suggest subcategory names: {e}");
            return Vec::new();
        }
    };

    let mut suggestions: Vec<String> = Vec::with_capacity(SUGGESTION_LIMIT);
    let candidates = titles
        .into_iter()
        .map(String::from)
        .chain(names.into_iter().map(String::from));
    for candidate in candidates {
        if !suggestions.contains(&candidate) {
            suggestions.push(candidate);
        }
    }
    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}
