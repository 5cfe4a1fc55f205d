//! Test environment setup: in-memory database and session.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ActiveValue, ConnectionTrait, Database,
    DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            session,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Insert an anonymous user row.
    pub async fn insert_user(&mut self) -> Result<entity::podium_user::Model, TestError> {
        let user = entity::podium_user::ActiveModel {
            subject: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.state.db).await?)
    }

    /// Insert a user row tied to a token subject.
    pub async fn insert_user_with_subject(
        &mut self,
        subject: &str,
    ) -> Result<entity::podium_user::Model, TestError> {
        let user = entity::podium_user::ActiveModel {
            subject: ActiveValue::Set(Some(subject.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.state.db).await?)
    }

    /// Insert a champion row with the default category and no image.
    pub async fn insert_champion(
        &mut self,
        tournament: &str,
        date: &str,
        winner: &str,
        created_by: i32,
    ) -> Result<entity::champion::Model, TestError> {
        let now = Utc::now().naive_utc();

        let champion = entity::champion::ActiveModel {
            tournament: ActiveValue::Set(tournament.to_string()),
            date: ActiveValue::Set(date.to_string()),
            winner: ActiveValue::Set(winner.to_string()),
            category: ActiveValue::Set("Super 500".to_string()),
            image: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(created_by),
            ..Default::default()
        };

        Ok(champion.insert(&self.state.db).await?)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
