//! Test fixtures and constants.

use secretdump::core::service::MemorySecretService;

/// Project used across tests.
pub const PROJECT: &str = "demo";

/// The two-secret project, in listing order.
pub const DEMO_SECRETS: &[(&str, &str)] = &[("DB-HOST", "10.0.0.1"), ("API-KEY", "abc123")];

/// Secrets with labels for filter tests: `(name, value, env label)`.
pub const LABELED_SECRETS: &[(&str, &str, &str)] = &[
    ("db-password", "hunter2", "stage"),
    ("jwt-secret", "super-secret-jwt-token", "prod"),
    ("redis-url", "redis://localhost:6379", "stage"),
];

/// Values that stress the output formats.
pub const AWKWARD_SECRETS: &[(&str, &str)] = &[
    ("with-space", "hello world"),
    ("with-equals", "a=b=c"),
    ("with-hash", "p@ssw0rd!#$%"),
    ("with-double-quote", "say \"hi\""),
    ("unicode", "héllo wörld ✓"),
    ("empty", ""),
];

/// Service holding [`DEMO_SECRETS`] in project [`PROJECT`].
pub fn demo_service() -> MemorySecretService {
    service_with(DEMO_SECRETS)
}

/// Service holding `secrets` in project [`PROJECT`].
pub fn service_with(secrets: &[(&str, &str)]) -> MemorySecretService {
    secrets
        .iter()
        .fold(MemorySecretService::new(PROJECT), |service, (name, value)| {
            service.with_secret(name, value)
        })
}

/// Service holding [`LABELED_SECRETS`] labeled `env=<label>`.
pub fn labeled_service() -> MemorySecretService {
    LABELED_SECRETS
        .iter()
        .fold(MemorySecretService::new(PROJECT), |service, (name, value, env)| {
            service.with_labeled_secret(name, value.as_bytes(), &[("env", *env)])
        })
}
