use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a titled text with a publish date.
///
/// `uuid` is assigned once in [`Post::new`] and never changes afterwards.
/// `pub_date` is kept exactly as submitted; no calendar parsing happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub uuid: String,
    pub title: String,
    pub body: String,
    pub pub_date: String,
}

impl Post {
    /// Create a new post with a freshly generated identifier.
    pub fn new(title: String, body: String, pub_date: String) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            title,
            body,
            pub_date,
        }
    }

    /// Overwrite the editable fields, keeping the identifier.
    pub fn update(&mut self, title: String, body: String, pub_date: String) {
        self.title = title;
        self.body = body;
        self.pub_date = pub_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_uuid() {
        let post = Post::new(
            "Title1".to_string(),
            "qwdfwbeeta".to_string(),
            "01.01.2020".to_string(),
        );

        assert!(Uuid::parse_str(&post.uuid).is_ok());
        assert_eq!(post.title, "Title1");
        assert_eq!(post.pub_date, "01.01.2020");
    }

    #[test]
    fn test_new_posts_get_distinct_ids() {
        let a = Post::new("a".into(), String::new(), "01.01.2020".into());
        let b = Post::new("a".into(), String::new(), "01.01.2020".into());
        assert_ne!(a.uuid, b.uuid);
    }

    #[test]
    fn test_update_keeps_uuid() {
        let mut post = Post::new("Title1".into(), String::new(), "01.01.2020".into());
        let uuid = post.uuid.clone();

        post.update("Title2".into(), "qwert".into(), "01.01.2021".into());

        assert_eq!(post.uuid, uuid);
        assert_eq!(post.title, "Title2");
        assert_eq!(post.body, "qwert");
        assert_eq!(post.pub_date, "01.01.2021");
    }
}
