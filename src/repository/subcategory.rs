use chrono::Utc;
use diesel::prelude::*;

use crate::db::lower_unicode;
use crate::domain::subcategory::{NewSubcategory, Subcategory, SubcategoryUpdate};
use crate::domain::types::{SubcategoryId, SubcategoryName};
use crate::models::subcategory::{
    NewSubcategory as DbNewSubcategory, Subcategory as DbSubcategory, SubcategoryChangeset,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, SubcategoryListQuery, SubcategoryReader,
    SubcategoryWriter, escape_like, to_sql_limit,
};

impl SubcategoryReader for DieselRepository {
    fn list_subcategories(
        &self,
        query: SubcategoryListQuery,
    ) -> RepositoryResult<Vec<Subcategory>> {
        use crate::schema::subcategories;

        let mut conn = self.conn()?;

        let mut items = subcategories::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(categoria) = query.categoria {
            items = items.filter(subcategories::categoria.eq(categoria.as_str()));
        }

        let items = items
            .order((subcategories::created_at.desc(), subcategories::id.desc()))
            .load::<DbSubcategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Subcategory>, _>>()?;

        Ok(items)
    }

    fn get_subcategory_by_id(&self, id: SubcategoryId) -> RepositoryResult<Option<Subcategory>> {
        use crate::schema::subcategories;

        let mut conn = self.conn()?;

        let subcategory = subcategories::table
            .find(id.get())
            .first::<DbSubcategory>(&mut conn)
            .optional()?;

        Ok(subcategory.map(TryInto::try_into).transpose()?)
    }

    fn suggest_subcategory_names(
        &self,
        prefix: &str,
        limit: usize,
    ) -> RepositoryResult<Vec<SubcategoryName>> {
        use crate::schema::subcategories;

        let mut conn = self.conn()?;
        let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));

        let names = subcategories::table
            .filter(lower_unicode(subcategories::nombre).like(pattern).escape('\\'))
            .order(subcategories::id.asc())
            .limit(to_sql_limit(limit))
            .select(subcategories::nombre)
            .load::<String>(&mut conn)?
            .into_iter()
            .map(SubcategoryName::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(names)
    }
}

impl SubcategoryWriter for DieselRepository {
    fn create_subcategory(&self, subcategory: &NewSubcategory) -> RepositoryResult<Subcategory> {
        use crate::schema::subcategories;

        let mut conn = self.conn()?;
        let row = DbNewSubcategory::stamped(subcategory, Utc::now().naive_utc());

        let created = diesel::insert_into(subcategories::table)
            .values(&row)
            .get_result::<DbSubcategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_subcategory(
        &self,
        id: SubcategoryId,
        update: &SubcategoryUpdate,
    ) -> RepositoryResult<Option<Subcategory>> {
        use crate::schema::subcategories;

        let mut conn = self.conn()?;
        let changeset = SubcategoryChangeset::stamped(update, Utc::now().naive_utc());

        let updated = diesel::update(subcategories::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbSubcategory>(&mut conn)
            .optional()?;

        Ok(updated.map(TryInto::try_into).transpose()?)
    }

    fn delete_subcategory(&self, id: SubcategoryId) -> RepositoryResult<bool> {
        use crate::schema::{posters, subcategories};

        let mut conn = self.conn()?;

        // Posters go first so the foreign key never dangles.
        let removed = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(posters::table.filter(posters::subcategoria_id.eq(id.get())))
                .execute(conn)?;

            let removed = diesel::delete(subcategories::table.find(id.get())).execute(conn)?;
            Ok(removed)
        })?;

        Ok(removed > 0)
    }
}
