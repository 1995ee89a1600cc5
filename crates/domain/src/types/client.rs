//! Client records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::utils::timestamps::deserialize_lenient;

/// A customer of the business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_lenient", skip_serializing)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Resource for Client {
    const COLLECTION_PATH: &'static str = "/api/clients";
    const LABEL: &'static str = "client";

    fn id(&self) -> &str {
        &self.id
    }
}
