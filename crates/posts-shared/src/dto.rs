//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Form body accepted by `POST /posts` and `PUT /posts/{id}`.
///
/// Every field is optional at the decoding stage so the server can decide
/// whether a missing field is an error (it is for `title` and `date`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub body: Option<String>,
    pub date: Option<String>,
}

impl PostForm {
    /// Names of the required fields absent from the form.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        missing
    }
}

/// Public representation of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub title: String,
    pub body: String,
    pub date: String,
}

/// Response to a successful create, which also reveals the generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPostResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let form = PostForm {
            body: Some("qwert".to_string()),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), vec!["title", "date"]);

        let form = PostForm {
            title: Some(String::new()),
            body: None,
            date: Some("01.01.2020".to_string()),
        };
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn test_created_response_is_flat() {
        let response = CreatedPostResponse {
            post: PostResponse {
                title: "Title1".to_string(),
                body: "qwdfwbeeta".to_string(),
                date: "01.01.2020".to_string(),
            },
            uuid: "123".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Title1",
                "body": "qwdfwbeeta",
                "date": "01.01.2020",
                "uuid": "123",
            })
        );
    }
}
