use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub points: i64,
    pub access_level: i32,
    pub subscribed: bool,
    pub created_at: DateTime<Utc>,
}

/// Raw body of `POST /api/hr`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrAccountInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHrAccount {
    pub name: String,
    pub email: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HrLookupQuery {
    pub email: Option<String>,
}
