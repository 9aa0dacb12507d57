//! Tutorial repository: CRUD plus exact-match filters.

use tut_core::entities::{NewTutorial, Tutorial};

use crate::error::DatabaseError;
use crate::helpers::{bool_value, get_bool};
use crate::service::TutorialService;
use crate::updates::tutorial::TutorialUpdate;

const SELECT_TUTORIAL: &str =
    "SELECT id, title, tutorial_url, description, published FROM tutorials";

fn row_to_tutorial(row: &libsql::Row) -> Result<Tutorial, DatabaseError> {
    Ok(Tutorial {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        tutorial_url: row.get::<String>(2)?,
        description: row.get::<String>(3)?,
        published: get_bool(row, 4)?,
    })
}

/// Exact-match predicate over tutorial columns.
///
/// Every `Some` field adds an `AND column = value` clause. An empty filter
/// matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialFilter {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub tutorial_url: Option<String>,
    pub description: Option<String>,
    pub published: Option<bool>,
    /// Caps `filter_tutorials`; ignored by `tutorial_exists` and `count_tutorials`.
    pub limit: Option<u32>,
}

impl TutorialFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn tutorial_url(mut self, tutorial_url: impl Into<String>) -> Self {
        self.tutorial_url = Some(tutorial_url.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the `WHERE` clause (with leading space, or empty) and its params.
    fn where_clause(&self) -> (String, Vec<libsql::Value>) {
        let mut clauses: Vec<String> = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(id) = self.id {
            params.push(libsql::Value::Integer(id));
            clauses.push(format!("id = ?{}", params.len()));
        }
        if let Some(ref title) = self.title {
            params.push(libsql::Value::Text(title.clone()));
            clauses.push(format!("title = ?{}", params.len()));
        }
        if let Some(ref url) = self.tutorial_url {
            params.push(libsql::Value::Text(url.clone()));
            clauses.push(format!("tutorial_url = ?{}", params.len()));
        }
        if let Some(ref description) = self.description {
            params.push(libsql::Value::Text(description.clone()));
            clauses.push(format!("description = ?{}", params.len()));
        }
        if let Some(published) = self.published {
            params.push(bool_value(published));
            clauses.push(format!("published = ?{}", params.len()));
        }

        if clauses.is_empty() {
            (String::new(), params)
        } else {
            (format!(" WHERE {}", clauses.join(" AND ")), params)
        }
    }
}

impl TutorialService {
    /// Store a new tutorial and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_tutorial(&self, new: &NewTutorial) -> Result<Tutorial, DatabaseError> {
        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO tutorials (title, tutorial_url, description, published)
             VALUES (?1, ?2, ?3, ?4)",
            libsql::params![
                new.title.as_str(),
                new.tutorial_url.as_str(),
                new.description.as_str(),
                i64::from(new.published)
            ],
        )
        .await?;
        let id = conn.last_insert_rowid();

        tracing::debug!(id, title = %new.title, "created tutorial");
        Ok(Tutorial::from_new(id, new.clone()))
    }

    /// Get a tutorial by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no tutorial has this id.
    pub async fn get_tutorial(&self, id: i64) -> Result<Tutorial, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("{SELECT_TUTORIAL} WHERE id = ?1"), libsql::params![id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound { id })?;
        row_to_tutorial(&row)
    }

    /// Write every field of a caller-held tutorial back to storage.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the tutorial was deleted in the
    /// meantime, or `DatabaseError` if the UPDATE fails.
    pub async fn save_tutorial(&self, tutorial: &Tutorial) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tutorials
                 SET title = ?1, tutorial_url = ?2, description = ?3, published = ?4
                 WHERE id = ?5",
                libsql::params![
                    tutorial.title.as_str(),
                    tutorial.tutorial_url.as_str(),
                    tutorial.description.as_str(),
                    i64::from(tutorial.published),
                    tutorial.id
                ],
            )
            .await?;

        if affected == 0 {
            return Err(DatabaseError::NotFound { id: tutorial.id });
        }
        tracing::debug!(id = tutorial.id, "saved tutorial");
        Ok(())
    }

    /// Update a tutorial with dynamic SET clauses.
    ///
    /// An empty update changes nothing but still checks that the tutorial exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no tutorial has this id.
    pub async fn update_tutorial(
        &self,
        id: i64,
        update: TutorialUpdate,
    ) -> Result<Tutorial, DatabaseError> {
        if update.is_empty() {
            return self.get_tutorial(id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref title) = update.title {
            params.push(libsql::Value::Text(title.clone()));
            sets.push(format!("title = ?{idx}"));
            idx += 1;
        }
        if let Some(ref url) = update.tutorial_url {
            params.push(libsql::Value::Text(url.clone()));
            sets.push(format!("tutorial_url = ?{idx}"));
            idx += 1;
        }
        if let Some(ref description) = update.description {
            params.push(libsql::Value::Text(description.clone()));
            sets.push(format!("description = ?{idx}"));
            idx += 1;
        }
        if let Some(published) = update.published {
            params.push(bool_value(published));
            sets.push(format!("published = ?{idx}"));
            idx += 1;
        }

        params.push(libsql::Value::Integer(id));
        let sql = format!(
            "UPDATE tutorials SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );

        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { id });
        }

        tracing::debug!(id, changes = ?update, "updated tutorial");
        self.get_tutorial(id).await
    }

    /// Reload a caller-held tutorial from storage, discarding unsaved changes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the tutorial no longer exists.
    pub async fn refresh_tutorial(&self, tutorial: &mut Tutorial) -> Result<(), DatabaseError> {
        *tutorial = self.get_tutorial(tutorial.id).await?;
        Ok(())
    }

    /// Delete a tutorial. Its id is never handed out again.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no tutorial has this id.
    pub async fn delete_tutorial(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM tutorials WHERE id = ?1", libsql::params![id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { id });
        }
        tracing::debug!(id, "deleted tutorial");
        Ok(())
    }

    /// Tutorials matching the filter, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn filter_tutorials(
        &self,
        filter: &TutorialFilter,
    ) -> Result<Vec<Tutorial>, DatabaseError> {
        let (where_sql, params) = filter.where_clause();
        let limit_sql = filter
            .limit
            .map(|limit| format!(" LIMIT {limit}"))
            .unwrap_or_default();
        let sql = format!("{SELECT_TUTORIAL}{where_sql} ORDER BY id{limit_sql}");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut tutorials = Vec::new();
        while let Some(row) = rows.next().await? {
            tutorials.push(row_to_tutorial(&row)?);
        }
        Ok(tutorials)
    }

    /// Whether at least one tutorial matches the filter.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn tutorial_exists(&self, filter: &TutorialFilter) -> Result<bool, DatabaseError> {
        let (where_sql, params) = filter.where_clause();
        let sql = format!("SELECT EXISTS(SELECT 1 FROM tutorials{where_sql})");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)? != 0)
    }

    /// Number of tutorials matching the filter.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_tutorials(&self, filter: &TutorialFilter) -> Result<u64, DatabaseError> {
        let (where_sql, params) = filter.where_clause();
        let sql = format!("SELECT COUNT(*) FROM tutorials{where_sql}");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative row count {count}")))
    }

    /// The lowest-id tutorial matching the filter, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn first_tutorial(
        &self,
        filter: &TutorialFilter,
    ) -> Result<Option<Tutorial>, DatabaseError> {
        let filter = filter.clone().limit(1);
        Ok(self.filter_tutorials(&filter).await?.into_iter().next())
    }

    /// The first `limit` tutorials by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tutorials(&self, limit: u32) -> Result<Vec<Tutorial>, DatabaseError> {
        self.filter_tutorials(&TutorialFilter::new().limit(limit))
            .await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::{another_tutorial, new_tutorial, pytest_tutorial, service};
    use crate::updates::tutorial::TutorialUpdateBuilder;

    #[rstest]
    #[tokio::test]
    async fn create_tutorial_roundtrip(#[future(awt)] service: TutorialService) {
        let created = new_tutorial(&service).await;

        assert!(created.id > 0);
        assert_eq!(created.title, "Pytest");
        assert!(created.published);

        let fetched = service.get_tutorial(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[rstest]
    #[tokio::test]
    async fn created_ids_are_distinct(#[future(awt)] service: TutorialService) {
        let first = new_tutorial(&service).await;
        let second = another_tutorial(&service).await;
        assert_ne!(first.id, second.id);
    }

    #[rstest]
    #[tokio::test]
    async fn get_missing_tutorial_is_not_found(#[future(awt)] service: TutorialService) {
        let err = service.get_tutorial(42).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { id: 42 }));
    }

    #[rstest]
    #[tokio::test]
    async fn unsaved_changes_are_invisible(#[future(awt)] service: TutorialService) {
        let mut tutorial = new_tutorial(&service).await;
        tutorial.title = "Pytest-Django".into();

        let renamed = TutorialFilter::new().title("Pytest-Django");
        assert!(!service.tutorial_exists(&renamed).await.unwrap());

        service.save_tutorial(&tutorial).await.unwrap();
        assert!(service.tutorial_exists(&renamed).await.unwrap());
        assert!(
            !service
                .tutorial_exists(&TutorialFilter::new().title("Pytest"))
                .await
                .unwrap()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn save_deleted_tutorial_fails(#[future(awt)] service: TutorialService) {
        let tutorial = new_tutorial(&service).await;
        service.delete_tutorial(tutorial.id).await.unwrap();

        let err = service.save_tutorial(&tutorial).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { id } if id == tutorial.id));
    }

    #[rstest]
    #[tokio::test]
    async fn refresh_discards_local_changes(#[future(awt)] service: TutorialService) {
        let stored = new_tutorial(&service).await;
        let mut local = stored.clone();
        local.published = false;
        local.description = "scratch".into();

        service.refresh_tutorial(&mut local).await.unwrap();
        assert_eq!(local, stored);
    }

    #[rstest]
    #[tokio::test]
    async fn update_tutorial_partial(#[future(awt)] service: TutorialService) {
        let tutorial = new_tutorial(&service).await;

        let update = TutorialUpdateBuilder::new().published(false).build();
        let updated = service.update_tutorial(tutorial.id, update).await.unwrap();

        assert!(!updated.published);
        assert_eq!(updated.title, tutorial.title);
        assert_eq!(updated.tutorial_url, tutorial.tutorial_url);
        assert_eq!(updated.description, tutorial.description);
    }

    #[rstest]
    #[tokio::test]
    async fn update_tutorial_all_fields(#[future(awt)] service: TutorialService) {
        let tutorial = new_tutorial(&service).await;

        let update = TutorialUpdateBuilder::new()
            .title("Pytest-Django")
            .tutorial_url("https://example.com/pytest-django")
            .description("Updated")
            .published(false)
            .build();
        let updated = service.update_tutorial(tutorial.id, update).await.unwrap();

        assert_eq!(
            updated,
            Tutorial {
                id: tutorial.id,
                title: "Pytest-Django".into(),
                tutorial_url: "https://example.com/pytest-django".into(),
                description: "Updated".into(),
                published: false,
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn empty_update_returns_current(#[future(awt)] service: TutorialService) {
        let tutorial = new_tutorial(&service).await;
        let same = service
            .update_tutorial(tutorial.id, TutorialUpdate::default())
            .await
            .unwrap();
        assert_eq!(same, tutorial);
    }

    #[rstest]
    #[tokio::test]
    async fn update_missing_tutorial_is_not_found(#[future(awt)] service: TutorialService) {
        let update = TutorialUpdateBuilder::new().title("x").build();
        let err = service.update_tutorial(9, update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { id: 9 }));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_twice_is_not_found(#[future(awt)] service: TutorialService) {
        let tutorial = new_tutorial(&service).await;
        service.delete_tutorial(tutorial.id).await.unwrap();

        let err = service.delete_tutorial(tutorial.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
        assert!(
            !service
                .tutorial_exists(&TutorialFilter::new().id(tutorial.id))
                .await
                .unwrap()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_ids_are_not_reused(#[future(awt)] service: TutorialService) {
        let first = new_tutorial(&service).await;
        service.delete_tutorial(first.id).await.unwrap();

        let second = another_tutorial(&service).await;
        assert!(second.id > first.id);
    }

    #[rstest]
    #[case::by_title(TutorialFilter::new().title("Pytest"), 1)]
    #[case::by_published(TutorialFilter::new().published(true), 2)]
    #[case::by_unpublished(TutorialFilter::new().published(false), 1)]
    #[case::by_url(TutorialFilter::new().tutorial_url("https://example.com/draft"), 1)]
    #[case::combined(TutorialFilter::new().title("More-Pytest").published(true), 1)]
    #[case::combined_miss(TutorialFilter::new().title("More-Pytest").published(false), 0)]
    #[case::title_is_exact(TutorialFilter::new().title("pytest"), 0)]
    #[case::everything(TutorialFilter::new(), 3)]
    #[tokio::test]
    async fn filter_counts(
        #[future(awt)] service: TutorialService,
        #[case] filter: TutorialFilter,
        #[case] expected: u64,
    ) {
        let svc = service;
        new_tutorial(&svc).await;
        another_tutorial(&svc).await;
        svc.create_tutorial(&NewTutorial::new(
            "Draft",
            "https://example.com/draft",
            "Not ready",
        ))
        .await
        .unwrap();

        assert_eq!(svc.count_tutorials(&filter).await.unwrap(), expected);
        assert_eq!(svc.tutorial_exists(&filter).await.unwrap(), expected > 0);
        assert_eq!(
            svc.filter_tutorials(&filter).await.unwrap().len() as u64,
            expected
        );
    }

    #[rstest]
    #[tokio::test]
    async fn filter_with_no_match_is_empty(#[future(awt)] service: TutorialService) {
        new_tutorial(&service).await;
        let filter = TutorialFilter::new().title("Nope");

        assert!(!service.tutorial_exists(&filter).await.unwrap());
        assert_eq!(service.count_tutorials(&filter).await.unwrap(), 0);
        assert!(service.filter_tutorials(&filter).await.unwrap().is_empty());
        assert!(service.first_tutorial(&filter).await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn filter_orders_by_id_and_limits(#[future(awt)] service: TutorialService) {
        for title in ["a", "b", "c", "d"] {
            service
                .create_tutorial(&pytest_tutorial(title))
                .await
                .unwrap();
        }

        let listed = service.list_tutorials(2).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);

        let limited = TutorialFilter::new().published(true).limit(3);
        assert_eq!(service.filter_tutorials(&limited).await.unwrap().len(), 3);
        assert_eq!(service.count_tutorials(&limited).await.unwrap(), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn first_tutorial_picks_lowest_id(#[future(awt)] service: TutorialService) {
        let first = new_tutorial(&service).await;
        another_tutorial(&service).await;

        let found = service
            .first_tutorial(&TutorialFilter::new().published(true))
            .await
            .unwrap();
        assert_eq!(found, Some(first));
    }

    #[test]
    fn empty_filter_has_no_where_clause() {
        let (sql, params) = TutorialFilter::new().where_clause();
        assert!(sql.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn where_clause_numbers_params_in_order() {
        let (sql, params) = TutorialFilter::new()
            .id(3)
            .title("Pytest")
            .published(true)
            .where_clause();
        assert_eq!(sql, " WHERE id = ?1 AND title = ?2 AND published = ?3");
        assert_eq!(params.len(), 3);
    }
}
