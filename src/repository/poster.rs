use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::lower_unicode;
use crate::domain::poster::{NewPoster, Poster, PosterUpdate};
use crate::domain::types::{PosterId, PosterTitle, SubcategoryId};
use crate::models::poster::{NewPoster as DbNewPoster, Poster as DbPoster, PosterChangeset};
use crate::repository::{
    DieselRepository, PosterListQuery, PosterReader, PosterWriter, RepositoryError,
    RepositoryResult, escape_like, to_sql_limit,
};

fn ensure_subcategory_exists(
    conn: &mut SqliteConnection,
    subcategoria_id: SubcategoryId,
) -> RepositoryResult<()> {
    use crate::schema::subcategories;

    let exists = diesel::select(diesel::dsl::exists(
        subcategories::table.find(subcategoria_id.get()),
    ))
    .get_result::<bool>(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::Validation(format!(
            "subcategory {subcategoria_id} does not exist"
        )))
    }
}

impl PosterReader for DieselRepository {
    fn list_posters(&self, query: PosterListQuery) -> RepositoryResult<Vec<Poster>> {
        use crate::schema::posters;

        let mut conn = self.conn()?;

        let mut items = posters::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(categoria) = query.categoria {
            items = items.filter(posters::categoria.eq(categoria.as_str()));
        }

        if let Some(subcategoria_id) = query.subcategoria_id {
            items = items.filter(posters::subcategoria_id.eq(subcategoria_id.get()));
        }

        items = items.order((posters::created_at.desc(), posters::id.desc()));

        if let Some(limit) = query.limit {
            items = items.limit(to_sql_limit(limit));
        }

        let items = items
            .load::<DbPoster>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Poster>, _>>()?;

        Ok(items)
    }

    fn get_poster_by_id(&self, id: PosterId) -> RepositoryResult<Option<Poster>> {
        use crate::schema::posters;

        let mut conn = self.conn()?;

        let poster = posters::table
            .find(id.get())
            .first::<DbPoster>(&mut conn)
            .optional()?;

        Ok(poster.map(TryInto::try_into).transpose()?)
    }

    fn search_posters(&self, query: &str, limit: usize) -> RepositoryResult<Vec<Poster>> {
        use crate::schema::posters;

        let mut conn = self.conn()?;
        let pattern = format!("%{}%", escape_like(&query.to_lowercase()));

        let items = posters::table
            .filter(lower_unicode(posters::titulo).like(pattern).escape('\\'))
            .order((posters::created_at.desc(), posters::id.desc()))
            .limit(to_sql_limit(limit))
            .load::<DbPoster>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Poster>, _>>()?;

        Ok(items)
    }

    fn suggest_poster_titles(
        &self,
        prefix: &str,
        limit: usize,
    ) -> RepositoryResult<Vec<PosterTitle>> {
        use crate::schema::posters;

        let mut conn = self.conn()?;
        let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));

        let titles = posters::table
            .filter(lower_unicode(posters::titulo).like(pattern).escape('\\'))
            .order(posters::id.asc())
            .limit(to_sql_limit(limit))
            .select(posters::titulo)
            .load::<String>(&mut conn)?
            .into_iter()
            .map(PosterTitle::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(titles)
    }
}

impl PosterWriter for DieselRepository {
    fn create_poster(&self, poster: &NewPoster) -> RepositoryResult<Poster> {
        use crate::schema::posters;

        let mut conn = self.conn()?;
        let row = DbNewPoster::stamped(poster, Utc::now().naive_utc());

        let created = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            ensure_subcategory_exists(conn, poster.subcategoria_id)?;

            let created = diesel::insert_into(posters::table)
                .values(&row)
                .get_result::<DbPoster>(conn)?;
            Ok(created)
        })?;

        Ok(created.try_into()?)
    }

    fn update_poster(
        &self,
        id: PosterId,
        update: &PosterUpdate,
    ) -> RepositoryResult<Option<Poster>> {
        use crate::schema::posters;

        let mut conn = self.conn()?;
        let changeset = PosterChangeset::stamped(update, Utc::now().naive_utc());

        let updated = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            if let Some(subcategoria_id) = update.subcategoria_id {
                ensure_subcategory_exists(conn, subcategoria_id)?;
            }

            let updated = diesel::update(posters::table.find(id.get()))
                .set(&changeset)
                .get_result::<DbPoster>(conn)
                .optional()?;
            Ok(updated)
        })?;

        Ok(updated.map(TryInto::try_into).transpose()?)
    }

    fn delete_poster(&self, id: PosterId) -> RepositoryResult<bool> {
        use crate::schema::posters;

        let mut conn = self.conn()?;

        let removed = diesel::delete(posters::table.find(id.get())).execute(&mut conn)?;

        Ok(removed > 0)
    }
}
