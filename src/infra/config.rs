//! Centralized configuration (environment variables + defaults).

/// Database URL must be provided (no default) for safety. `None` lets the
/// server fall back to the in-memory store when [`allow_memory_store`] is on.
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Address the HTTP server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string())
}

/// Optional mount prefix for the whole route table (e.g. `/api/v1`). Routes
/// resolve identically under the prefix; empty means mount at the root.
pub fn api_base_path() -> String {
    std::env::var("API_BASE_PATH").unwrap_or_default()
}

/// Whether the startup fixture loader runs (default: yes).
pub fn seed_sample_data() -> bool {
    std::env::var("SEED_SAMPLE_DATA").map_or(true, |v| v != "false")
}

/// Opt-in to running without Postgres, against the in-memory store.
pub fn allow_memory_store() -> bool {
    std::env::var("ALLOW_MEMORY_STORE").unwrap_or_default() == "true"
}
