// Configuration infra layer.
// - `env_source.rs` resolves keys from the process environment and `.env`.

#[path = "env_source.rs"]
pub mod env_source;
