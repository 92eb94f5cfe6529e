use serde::Serialize;

/// Envelope returned by every endpoint on success. The error half of the
/// contract is produced by `ApiError`'s `IntoResponse` impl.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success with no payload, e.g. after a delete.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_envelope_carries_data() {
        let body = ApiResponse::ok("Users fetched successfully", json!({ "count": 2 }));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["message"], json!("Users fetched successfully"));
        assert_eq!(value["data"]["count"], json!(2));
    }

    #[test]
    fn message_envelope_omits_data_key() {
        let body = ApiResponse::message("Post deleted successfully");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], json!(true));
        assert!(value.get("data").is_none());
    }
}
