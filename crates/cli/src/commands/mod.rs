//! CLI command implementations.

pub mod migrate;
pub mod seed;

/// Resolve the database connection string from the environment.
///
/// `STOREFRONT_DATABASE_URL` wins; `DATABASE_URL` is the fallback, matching
/// the storefront binary.
pub(crate) fn database_url() -> Result<String, MissingEnvVar> {
    dotenvy::dotenv().ok();

    std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MissingEnvVar("STOREFRONT_DATABASE_URL"))
}

/// A required environment variable was not set.
#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVar(pub &'static str);
