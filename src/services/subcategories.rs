use crate::domain::types::{Categoria, SubcategoryId};
use crate::dto::SuccessDto;
use crate::dto::subcategories::SubcategoryDto;
use crate::forms::subcategories::{
    AddSubcategoryFormPayload, DeleteSubcategoryFormPayload, UpdateSubcategoryFormPayload,
};
use crate::repository::{
    CredentialReader, CredentialWriter, SubcategoryListQuery, SubcategoryReader, SubcategoryWriter,
};

use super::auth::AdminGate;
use super::errors::write_error;
use super::ServiceResult;

fn list<R>(query: SubcategoryListQuery, repo: &R) -> Vec<SubcategoryDto>
where
    R: SubcategoryReader,
{
    match repo.list_subcategories(query) {
        Ok(subcategories) => subcategories.into_iter().map(SubcategoryDto::from).collect(),
        Err(e) => {
            log::error!("Failed to list subcategories: {e}");
            Vec::new()
        }
    }
}

/// Every subcategory, newest first.
pub fn show_subcategories<R>(repo: &R) -> Vec<SubcategoryDto>
where
    R: SubcategoryReader,
{
    list(SubcategoryListQuery::default(), repo)
}

/// Subcategories of one category, newest first. An unknown category code
/// yields an empty list.
pub fn show_subcategories_by_category<R>(categoria: &str, repo: &R) -> Vec<SubcategoryDto>
where
    R: SubcategoryReader,
{
    match Categoria::try_from(categoria) {
        Ok(categoria) => list(SubcategoryListQuery::default().categoria(categoria), repo),
        Err(_) => Vec::new(),
    }
}

pub fn show_subcategory<R>(id: i32, repo: &R) -> Option<SubcategoryDto>
where
    R: SubcategoryReader,
{
    let id = SubcategoryId::new(id).ok()?;
    match repo.get_subcategory_by_id(id) {
        Ok(subcategory) => subcategory.map(SubcategoryDto::from),
        Err(e) => {
            log::error!("Failed to get subcategory: {e}");
            None
        }
    }
}

pub fn add_subcategory<R>(
    payload: AddSubcategoryFormPayload,
    repo: &R,
) -> ServiceResult<SubcategoryDto>
where
    R: CredentialReader + CredentialWriter + SubcategoryWriter,
{
    AdminGate::new(repo).authorize_create(&payload.password)?;

    repo.create_subcategory(&payload.subcategory)
        .map(SubcategoryDto::from)
        .map_err(|e| write_error("create subcategory", e))
}

/// `None` when the subcategory does not exist.
pub fn update_subcategory<R>(
    payload: UpdateSubcategoryFormPayload,
    repo: &R,
) -> ServiceResult<Option<SubcategoryDto>>
where
    R: CredentialReader + SubcategoryWriter,
{
    AdminGate::new(repo).authorize_existing(&payload.password)?;

    repo.update_subcategory(payload.subcategory_id, &payload.update)
        .map(|updated| updated.map(SubcategoryDto::from))
        .map_err(|e| write_error("update subcategory", e))
}

/// Delete a subcategory together with all of its posters.
pub fn delete_subcategory<R>(
    payload: DeleteSubcategoryFormPayload,
    repo: &R,
) -> ServiceResult<SuccessDto>
where
    R: CredentialReader + SubcategoryWriter,
{
    AdminGate::new(repo).authorize_existing(&payload.password)?;

    repo.delete_subcategory(payload.subcategory_id)
        .map(SuccessDto::from)
        .map_err(|e| write_error("delete subcategory", e))
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::domain::poster::Poster;
    use crate::domain::subcategory::{NewSubcategory, Subcategory, SubcategoryUpdate};
    use crate::domain::types::{
        ImageUrl, PasswordHash, PosterId, PosterPrice, PosterTitle, SubcategoryName,
    };
    use crate::password::ClearTextPassword;
    use crate::repository::PosterReader;
    use crate::repository::PosterListQuery;
    use crate::repository::test::TestRepository;
    use crate::services::ServiceError;

    fn sample_subcategory(id: i32, nombre: &str, categoria: Categoria, secs: i64) -> Subcategory {
        let ts = DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
        Subcategory {
            id: SubcategoryId::new(id).unwrap(),
            nombre: SubcategoryName::new(nombre).unwrap(),
            imagen_url: ImageUrl::new("https://example.com/s.jpg").unwrap(),
            categoria,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn sample_poster(id: i32, subcategoria_id: i32) -> Poster {
        let ts = DateTime::from_timestamp(100 + i64::from(id), 0)
            .unwrap()
            .naive_utc();
        Poster {
            id: PosterId::new(id).unwrap(),
            titulo: PosterTitle::new(format!("Poster {id}")).unwrap(),
            imagen_url: ImageUrl::new("https://example.com/p.jpg").unwrap(),
            precio: PosterPrice::new(1500).unwrap(),
            categoria: Categoria::Deportes,
            subcategoria_id: SubcategoryId::new(subcategoria_id).unwrap(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn admin_hash() -> PasswordHash {
        ClearTextPassword::new("abc123".into()).hash().unwrap()
    }

    fn password(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string())
    }

    #[test]
    fn lists_newest_first_and_is_repeatable() {
        let repo = TestRepository::new(
            vec![
                sample_subcategory(1, "Fútbol", Categoria::Deportes, 10),
                sample_subcategory(2, "Rock", Categoria::MusicaArtistas, 20),
            ],
            vec![],
        );

        let first = show_subcategories(&repo);
        assert_eq!(first.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(first, show_subcategories(&repo));
    }

    #[test]
    fn filters_by_category_and_ignores_unknown_codes() {
        let repo = TestRepository::new(
            vec![
                sample_subcategory(1, "Fútbol", Categoria::Deportes, 10),
                sample_subcategory(2, "Rock", Categoria::MusicaArtistas, 20),
            ],
            vec![],
        );

        let deportes = show_subcategories_by_category("deportes", &repo);
        assert_eq!(deportes.len(), 1);
        assert_eq!(deportes[0].nombre, "Fútbol");
        assert!(show_subcategories_by_category("Bandas", &repo).is_empty());
    }

    #[test]
    fn reads_degrade_on_storage_fault() {
        let repo = TestRepository::new(
            vec![sample_subcategory(1, "Fútbol", Categoria::Deportes, 10)],
            vec![],
        );
        repo.fail_storage();

        assert!(show_subcategories(&repo).is_empty());
        assert!(show_subcategory(1, &repo).is_none());
    }

    #[test]
    fn create_bootstraps_then_rejects_other_password() {
        let repo = TestRepository::default();
        let new = NewSubcategory {
            nombre: SubcategoryName::new("Rock").unwrap(),
            imagen_url: ImageUrl::new("https://example.com/rock.jpg").unwrap(),
            categoria: Categoria::MusicaArtistas,
        };

        let created = add_subcategory(
            AddSubcategoryFormPayload {
                subcategory: new.clone(),
                password: password("p1"),
            },
            &repo,
        )
        .unwrap();
        assert_eq!(created.nombre, "Rock");
        assert_eq!(created.categoria, "musica-artistas");

        let err = add_subcategory(
            AddSubcategoryFormPayload {
                subcategory: new,
                password: password("p2"),
            },
            &repo,
        )
        .unwrap_err();
        assert_eq!(err, ServiceError::IncorrectPassword);
        assert_eq!(show_subcategories(&repo).len(), 1);
    }

    #[test]
    fn update_requires_configured_password() {
        let repo = TestRepository::new(
            vec![sample_subcategory(1, "Rock", Categoria::MusicaArtistas, 10)],
            vec![],
        );

        let err = update_subcategory(
            UpdateSubcategoryFormPayload {
                subcategory_id: SubcategoryId::new(1).unwrap(),
                update: SubcategoryUpdate {
                    nombre: Some(SubcategoryName::new("Metal").unwrap()),
                    ..Default::default()
                },
                password: password("abc123"),
            },
            &repo,
        )
        .unwrap_err();

        assert_eq!(err, ServiceError::PasswordNotConfigured);
        assert!(repo.stored_hash().is_none());
        assert_eq!(show_subcategory(1, &repo).unwrap().nombre, "Rock");
    }

    #[test]
    fn update_of_missing_subcategory_returns_none() {
        let repo = TestRepository::default().with_password_hash(admin_hash());

        let result = update_subcategory(
            UpdateSubcategoryFormPayload {
                subcategory_id: SubcategoryId::new(42).unwrap(),
                update: SubcategoryUpdate::default(),
                password: password("abc123"),
            },
            &repo,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn delete_cascades_to_posters() {
        let repo = TestRepository::new(
            vec![
                sample_subcategory(1, "Fútbol", Categoria::Deportes, 10),
                sample_subcategory(2, "Tenis", Categoria::Deportes, 20),
            ],
            vec![sample_poster(3, 1), sample_poster(4, 1), sample_poster(5, 2)],
        )
        .with_password_hash(admin_hash());

        let result = delete_subcategory(
            DeleteSubcategoryFormPayload {
                subcategory_id: SubcategoryId::new(1).unwrap(),
                password: password("abc123"),
            },
            &repo,
        )
        .unwrap();

        assert!(result.success);
        assert!(show_subcategory(1, &repo).is_none());
        let remaining = repo
            .list_posters(PosterListQuery::default().subcategory(SubcategoryId::new(1).unwrap()))
            .unwrap();
        assert!(remaining.is_empty());
        assert_eq!(repo.poster_count(), 1);
    }

    #[test]
    fn delete_with_wrong_password_keeps_data() {
        let repo = TestRepository::new(
            vec![sample_subcategory(1, "Fútbol", Categoria::Deportes, 10)],
            vec![sample_poster(2, 1)],
        )
        .with_password_hash(admin_hash());

        let err = delete_subcategory(
            DeleteSubcategoryFormPayload {
                subcategory_id: SubcategoryId::new(1).unwrap(),
                password: password("wrong"),
            },
            &repo,
        )
        .unwrap_err();

        assert_eq!(err, ServiceError::IncorrectPassword);
        assert!(show_subcategory(1, &repo).is_some());
        assert_eq!(repo.poster_count(), 1);
    }

    #[test]
    fn write_fault_is_internal() {
        let repo = TestRepository::default().with_password_hash(admin_hash());
        repo.fail_storage();

        let err = delete_subcategory(
            DeleteSubcategoryFormPayload {
                subcategory_id: SubcategoryId::new(1).unwrap(),
                password: password("abc123"),
            },
            &repo,
        )
        .unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }
}
