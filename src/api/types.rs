//! Request and response bodies of the Product 360 endpoints.

use serde::{Deserialize, Serialize};

pub const ENTITY_TYPE: &str = "p360.item";
pub const SESSION_HEADER: &str = "IDS-SESSION-ID";

#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_info: UserInfo,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub session_id: String,
    #[serde(default)]
    pub org_name: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub entity_type: String,
    pub page_size: u32,
    pub records_to_return: u32,
    pub record_offset: u32,
    pub search: String,
    pub filters: SearchFilters,
}

#[derive(Serialize, Debug, Clone)]
pub struct SearchFilters {
    pub filter: Vec<SearchFilter>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub comparator: String,
    pub field_name: String,
    pub field_value: String,
}

impl SearchRequest {
    /// Every item with a selling price above zero.
    pub fn priced_items(page_size: u32, records_to_return: u32) -> Self {
        Self {
            entity_type: ENTITY_TYPE.to_string(),
            page_size,
            records_to_return,
            record_offset: 0,
            search: "*".to_string(),
            filters: SearchFilters {
                filter: vec![SearchFilter {
                    comparator: "GREATER_THAN".to_string(),
                    field_name: "p360item.sellingPrice.sellingPriceAmount".to_string(),
                    field_value: "0".to_string(),
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_wire_format() {
        let body = serde_json::to_value(SearchRequest::priced_items(200, 1000)).unwrap();
        assert_eq!(
            body,
            json!({
                "entityType": "p360.item",
                "pageSize": 200,
                "recordsToReturn": 1000,
                "recordOffset": 0,
                "search": "*",
                "filters": {
                    "filter": [{
                        "comparator": "GREATER_THAN",
                        "fieldName": "p360item.sellingPrice.sellingPriceAmount",
                        "fieldValue": "0"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_login_response_parses() {
        let response: LoginResponse = serde_json::from_value(json!({
            "userInfo": {"sessionId": "abc123", "orgName": "Triade LLC", "name": "ana"}
        }))
        .unwrap();
        assert_eq!(response.user_info.session_id, "abc123");
        assert_eq!(response.user_info.org_name, "Triade LLC");
    }
}
