//! DTOs for resource inspection and cleanup.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::entities::{MatchStatus, RegisteredResource};

/// Confirmation message returned by bulk cleanup.
pub const DELETE_DYNAMIC_MESSAGE: &str = "Deleted all dynamically created resources";

/// Full view of a single resource, including both tokens.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RptTokenResponse {
    pub resource_id: String,
    pub rpt_token: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub match_status: MatchStatus,
    pub resource_scopes: BTreeSet<String>,
    pub pat_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegisteredResource> for RptTokenResponse {
    fn from(r: RegisteredResource) -> Self {
        Self {
            resource_id: r.resource_id,
            rpt_token: r.rpt,
            name: r.name,
            description: r.description,
            match_status: r.match_status,
            resource_scopes: r.resource_scopes,
            pat_token: r.pat,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Resource entry in the list response. Carries the friendly name instead
/// of the PAT.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItem {
    pub resource_id: String,
    pub rpt_token: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub match_status: MatchStatus,
    pub resource_scopes: BTreeSet<String>,
    pub friendly_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegisteredResource> for ResourceItem {
    fn from(r: RegisteredResource) -> Self {
        Self {
            resource_id: r.resource_id,
            rpt_token: r.rpt,
            name: r.name,
            description: r.description,
            match_status: r.match_status,
            resource_scopes: r.resource_scopes,
            friendly_name: r.friendly_name,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Response containing every stored resource.
#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub count: usize,
    pub resources: Vec<ResourceItem>,
}

impl From<Vec<RegisteredResource>> for ResourceListResponse {
    fn from(resources: Vec<RegisteredResource>) -> Self {
        let resources: Vec<ResourceItem> = resources.into_iter().map(ResourceItem::from).collect();
        Self {
            count: resources.len(),
            resources,
        }
    }
}

/// Response for bulk cleanup of dynamic resources.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResourcesResponse {
    pub deleted_count: u64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_resource() -> RegisteredResource {
        let created_at = DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        RegisteredResource {
            resource_id: "res-42".to_string(),
            name: "Workplace Pension".to_string(),
            description: None,
            match_status: MatchStatus::MatchPossible,
            resource_scopes: BTreeSet::from(["value".to_string(), "owner".to_string()]),
            rpt: None,
            pat: Some("pat-42".to_string()),
            friendly_name: Some("Seeded".to_string()),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_rpt_token_response_field_names() {
        let json = serde_json::to_value(RptTokenResponse::from(create_test_resource())).unwrap();

        assert_eq!(
            json,
            json!({
                "resourceId": "res-42",
                "rptToken": null,
                "name": "Workplace Pension",
                "description": null,
                "matchStatus": "match-possible",
                "resourceScopes": ["owner", "value"],
                "patToken": "pat-42",
                "createdAt": "2025-03-01T10:00:00Z",
                "updatedAt": "2025-03-01T10:00:00Z",
            })
        );
    }

    #[test]
    fn test_resource_item_has_friendly_name_not_pat() {
        let json = serde_json::to_value(ResourceItem::from(create_test_resource())).unwrap();

        assert_eq!(json["friendlyName"], "Seeded");
        assert!(json.get("patToken").is_none());
    }

    #[test]
    fn test_list_response_count_matches_items() {
        let response = ResourceListResponse::from(vec![create_test_resource()]);
        assert_eq!(response.count, response.resources.len());

        let empty = serde_json::to_value(ResourceListResponse::from(Vec::new())).unwrap();
        assert_eq!(empty, json!({"count": 0, "resources": []}));
    }

    #[test]
    fn test_delete_response_field_names() {
        let json = serde_json::to_value(DeleteResourcesResponse {
            deleted_count: 3,
            message: DELETE_DYNAMIC_MESSAGE.to_string(),
        })
        .unwrap();

        assert_eq!(json["deletedCount"], 3);
        assert_eq!(json["message"], DELETE_DYNAMIC_MESSAGE);
    }
}
