// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "projects/mod.rs"]
pub mod projects;
