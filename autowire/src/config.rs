use serde::Deserialize;

/// Tunables for a [`Container`](crate::Container).
///
/// Deserializable so it can live inside an application's own configuration file.
/// Unknown fields are rejected.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContainerConfig {
  /// How many nested constructions a single resolution may go through before
  /// failing with [`Error::DepthExceeded`](crate::Error::DepthExceeded).
  #[serde(default = "default_max_depth")]
  pub max_depth: usize,
}

fn default_max_depth() -> usize {
  128
}

impl Default for ContainerConfig {
  fn default() -> Self {
    Self {
      max_depth: default_max_depth(),
    }
  }
}
