/**
 * Server Configuration
 *
 * Loads server configuration from environment variables, with sensible
 * defaults for local development.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup. A
 * missing database leaves persistence-backed endpoints answering 503 while
 * the rest of the server keeps running.
 */
use sqlx::PgPool;

/// Database configuration result
///
/// Contains the connection pool if successfully configured, or `None` if
/// the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Persistence will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Persistence will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - schema might not be up to date");
        }
    }

    Some(pool)
}

/// Frontend origin allowed by CORS, with credentialed requests enabled.
///
/// Defaults to the local development frontend.
pub fn frontend_origin() -> String {
    std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string())
}

/// TCP port the server binds
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        // SERVER_PORT is not set in the test environment
        if std::env::var("SERVER_PORT").is_err() {
            assert_eq!(server_port(), 3000);
        }
    }

    #[test]
    fn test_default_frontend_origin() {
        if std::env::var("FRONTEND_ORIGIN").is_err() {
            assert_eq!(frontend_origin(), "http://localhost:5173");
        }
    }
}
