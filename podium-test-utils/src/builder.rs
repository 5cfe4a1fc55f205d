//! Declarative test builder.
//!
//! Configuration methods chain together and everything queued executes during
//! the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_core_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_core_tables: false,
        }
    }

    /// Add the core domain tables to the test database: PodiumUser and
    /// Champion, in foreign key order.
    pub fn with_core_tables(mut self) -> Self {
        self.include_core_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be
    /// executed during `build()`. Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test setup by creating all configured tables.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();

        if self.include_core_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PodiumUser),
                schema.create_table_from_entity(entity::prelude::Champion),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
