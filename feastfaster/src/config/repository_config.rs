use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RepositoryConfig {
    /// JSON station document with stations and reservations
    #[serde(default)]
    pub stations_file: Option<String>,
}
