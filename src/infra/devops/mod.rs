// Azure DevOps infra layer.
// - `devops_client.rs` talks to the Azure DevOps HTTP API.

#[path = "devops_client.rs"]
pub mod devops_client;
