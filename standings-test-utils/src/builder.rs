//! Declarative test builder.
//!
//! The builder pattern allows chaining configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_standings_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_standings_tables: false,
        }
    }

    /// Add every table used by the standings engine to the test database.
    ///
    /// Creates Tournament, Team, TeamPlayer, Phase, TournamentMatch, Goal, TournamentTeam
    /// and TeamPhaseStats, parents first.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_standings_tables(mut self) -> Self {
        self.include_standings_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use standings_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), standings_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Tournament)
    ///     .with_table(Team)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context by creating all configured tables.
    ///
    /// Standings tables are created before custom tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_standings_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Tournament),
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::TeamPlayer),
                schema.create_table_from_entity(entity::prelude::Phase),
                schema.create_table_from_entity(entity::prelude::TournamentMatch),
                schema.create_table_from_entity(entity::prelude::Goal),
                schema.create_table_from_entity(entity::prelude::TournamentTeam),
                schema.create_table_from_entity(entity::prelude::TeamPhaseStats),
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
