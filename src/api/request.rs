//! Request types for the roster engine API.
//!
//! This module defines the JSON request structures for the
//! `/presence/resolve` and `/shifts/expand` endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Person, PersonalRotation, PresenceOverride};

/// Request body for the `/presence/resolve` endpoint.
///
/// Date fields arrive as strings and are validated against the canonical
/// `YYYY-MM-DD` form by the handler, so malformed dates surface as engine
/// errors rather than opaque deserialization failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// The people to resolve presence for.
    pub people: Vec<PersonRequest>,
    /// First date of the resolution window, canonical `YYYY-MM-DD`.
    pub start_date: String,
    /// Window length in days. Defaults to 30.
    #[serde(default)]
    pub days: Option<u32>,
}

/// Person information in a resolve request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRequest {
    /// Unique identifier for the person.
    pub id: String,
    /// The team the person belongs to, if any.
    #[serde(default)]
    pub team_id: Option<String>,
    /// Manual overrides, keyed by canonical `YYYY-MM-DD` date key.
    #[serde(default)]
    pub overrides: HashMap<String, PresenceOverride>,
    /// The person's own rotation, if one is defined.
    #[serde(default)]
    pub personal_rotation: Option<PersonalRotation>,
}

impl From<PersonRequest> for Person {
    fn from(request: PersonRequest) -> Self {
        Person {
            id: request.id,
            team_id: request.team_id,
            overrides: request.overrides,
            personal_rotation: request.personal_rotation,
        }
    }
}

/// Request body for the `/shifts/expand` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandRequest {
    /// The configured task template to expand.
    pub task_id: String,
    /// First date of the generation horizon, canonical `YYYY-MM-DD`.
    pub horizon_start: String,
    /// Horizon length in days. Defaults to 30.
    #[serde(default)]
    pub horizon_days: Option<u32>,
}
