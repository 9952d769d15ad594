use poem::middleware::Cors;
use std::env;

const DEV_ORIGINS: &str = "http://localhost:5173,http://localhost:1420,http://localhost:8080";

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: the local dev servers)
///
/// The `x-user-id` header must be allowed or browsers drop the caller identity.
pub fn init_cors() -> Cors {
    let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEV_ORIGINS.to_string());

    Cors::new()
        .allow_origins(parse_origins(&raw))
        .allow_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])
        .allow_headers(vec!["content-type", "x-user-id"])
        .allow_credentials(true)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
