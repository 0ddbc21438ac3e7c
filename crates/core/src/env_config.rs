//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn env_or(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => v,
        _ => default.to_owned(),
    }
}

/// Build the PostgreSQL connection URL from the process environment.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from
/// `DB_USER`, `DB_PWD`, `DB_HOST`, `DB_PORT` and `DB_DATABASE`.
pub fn database_url_from_env() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        if !url.is_empty() {
            return url;
        }
    }
    let user = env_or("DB_USER", "postgres");
    let password = env_or("DB_PWD", "");
    let host = env_or("DB_HOST", "localhost");
    let port: u16 = env_parse_with_default("DB_PORT", 5432);
    let database = env_or("DB_DATABASE", "mountains");
    if password.is_empty() {
        format!("postgres://{user}@{host}:{port}/{database}")
    } else {
        format!("postgres://{user}:{password}@{host}:{port}/{database}")
    }
}
