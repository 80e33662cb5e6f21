use tasklist_core::HttpTaskRepository;
use tasklist_core::config::Config;

const EMBEDDED_CONFIG: &str =
  include_str!("../tasklist.toml");

/// Everything the app needs to talk to
/// the task API.
#[derive(Debug, Clone)]
pub struct Backend {
  pub config: Config,
  pub repo:   HttpTaskRepository
}

pub fn connect() -> Result<Backend, String> {
  let config =
    Config::from_toml_str(EMBEDDED_CONFIG)
      .map_err(|e| {
        format!("invalid config: {e:#}")
      })?;
  let repo = HttpTaskRepository::new(
    &config.api.base_url
  )
  .map_err(|e| {
    format!(
      "failed to create API client: \
       {e:#}"
    )
  })?;

  tracing::info!(
    url = %repo.collection_url(),
    "task API configured"
  );
  Ok(Backend { config, repo })
}
