//! Member resource payloads

use serde::{Deserialize, Serialize};

/// A managed member profile.
///
/// `body_data` holds a BodyProfile V2 JSON document (see
/// [`crate::types::body_profile`]); `style_tags` is a comma-separated tag
/// list (see [`crate::types::style_tags`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub body_data: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub style_tags: Option<String>,
}

/// Request body for `POST /api/members`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_tags: Option<String>,
}

/// Request body for `PUT /api/members/{id}`; omitted fields are untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_tags: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_deserializes_with_null_photo() {
        let json = r#"{"id":1,"name":"Ari","bodyData":"{}","photoUrl":null,"styleTags":"y2k_retro"}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.id, 1);
        assert!(member.photo_url.is_none());
        assert_eq!(member.style_tags.as_deref(), Some("y2k_retro"));
    }

    #[test]
    fn update_request_skips_absent_fields() {
        let body = UpdateMemberRequest { name: Some("Mina".into()), ..Default::default() };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"name":"Mina"}"#);
    }
}
