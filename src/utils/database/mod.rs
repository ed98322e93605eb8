use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

impl DatabaseConnection {
    /// Opens the pool and brings the schema up to date before anything else
    /// touches it. Startup aborts if either step fails.
    pub async fn connect(url: &str, max_connections: u32) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .unwrap_or_else(|err| {
                tracing::error!("Could not reach postgres: {}", err);
                panic!("database unavailable");
            });

        if let Err(err) = sqlx::migrate!().run(&pool).await {
            tracing::error!("Schema migration failed: {}", err);
            panic!("pending migrations could not be applied");
        }

        Self { pool }
    }
}
