use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// A resource together with its navigational links.
///
/// The resource's own fields are inlined, so a `Linked<Blog>` serializes as
/// `{"title": .., "description": .., "links": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub resource: T,
    pub links: Vec<Link>,
}

impl<T> Linked<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

/// URL of the `GET /blogs/{title}` resource for `title`, rooted at `base_url`.
///
/// `title` is percent-encoded as a single path segment.
pub fn self_link(base_url: &str, title: &str) -> String {
    format!(
        "{}/blogs/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::Blog;

    #[test]
    fn self_link_points_at_the_retrieval_endpoint() {
        assert_eq!(
            self_link("http://localhost:8080", "my-blog"),
            "http://localhost:8080/blogs/my-blog"
        );
        assert_eq!(
            self_link("https://blogs.example.com/", "my-blog"),
            "https://blogs.example.com/blogs/my-blog"
        );
    }

    #[test]
    fn self_link_escapes_the_title() {
        assert_eq!(
            self_link("http://localhost", "Bits 'n Bytes"),
            "http://localhost/blogs/Bits%20%27n%20Bytes"
        );
        assert_eq!(
            self_link("http://localhost", "a/b?c#d"),
            "http://localhost/blogs/a%2Fb%3Fc%23d"
        );
        assert_eq!(self_link("http://localhost", ""), "http://localhost/blogs/");
    }

    #[test]
    fn linked_resource_is_flattened() {
        let linked = Linked::new(Blog::placeholder("my-blog"))
            .with_link(Link::new("self", "http://localhost/blogs/my-blog"));
        assert_eq!(
            serde_json::to_value(&linked).unwrap(),
            serde_json::json!({
                "title": "my-blog",
                "description": "No description",
                "links": [{"rel": "self", "href": "http://localhost/blogs/my-blog"}]
            })
        );
    }
}
