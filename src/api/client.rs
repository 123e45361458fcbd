use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;

use super::{ApiError, NewPost, Post, PostPage, PostsApi};

#[derive(Clone, Debug)]
pub struct HttpPostsApi {
    http: HttpClient,
    // always ends with '/', so `join` appends instead of replacing the last segment
    base: Url,
}

impl HttpPostsApi {
    pub fn new(cfg: &ClientConfig) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(ApiError::from_reqwest)?;
        let base = Url::parse(&format!("{}/", cfg.base_url.trim_end_matches('/')))?;
        Ok(Self { http, base })
    }

    fn posts_url(&self) -> Result<Url, ApiError> {
        Ok(self.base.join("posts")?)
    }

    fn post_url(&self, id: i64) -> Result<Url, ApiError> {
        Ok(self.base.join(&format!("posts/{id}"))?)
    }

    fn list_url(&self, page: u32, search: &str) -> Result<Url, ApiError> {
        let mut url = self.posts_url()?;
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("page", &page.to_string());
            if !search.is_empty() {
                q.append_pair("search", search);
            }
        }
        Ok(url)
    }
}

/// Non-2xx becomes [`ApiError::Status`] carrying the body text.
async fn read_body(response: Response) -> Result<Bytes, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(ApiError::from_reqwest)?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }
    Ok(bytes)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

#[async_trait(?Send)]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self, page: u32, search: &str) -> Result<PostPage, ApiError> {
        let url = self.list_url(page, search)?;
        let response = self.http.get(url).send().await.map_err(ApiError::from_reqwest)?;
        decode(&read_body(response).await?)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        let url = self.posts_url()?;
        let response = self
            .http
            .post(url)
            .json(post)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        decode(&read_body(response).await?)
    }

    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let url = self.post_url(id)?;
        let response = self.http.delete(url).send().await.map_err(ApiError::from_reqwest)?;
        read_body(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HttpPostsApi {
        let cfg = ClientConfig { base_url: format!("{}/api", server.uri()), ..ClientConfig::default() };
        HttpPostsApi::new(&cfg).unwrap()
    }

    #[test]
    fn list_url_omits_empty_search() {
        let api = HttpPostsApi::new(&ClientConfig::default()).unwrap();
        assert_eq!(api.list_url(3, "").unwrap().as_str(), "http://localhost:8080/api/posts?page=3");
        assert_eq!(
            api.list_url(1, "rust async").unwrap().as_str(),
            "http://localhost:8080/api/posts?page=1&search=rust+async"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let cfg = ClientConfig { base_url: "http://blog.test/api/".into(), ..ClientConfig::default() };
        let api = HttpPostsApi::new(&cfg).unwrap();
        assert_eq!(api.post_url(9).unwrap().as_str(), "http://blog.test/api/posts/9");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let cfg = ClientConfig { base_url: "not a url".into(), ..ClientConfig::default() };
        assert!(matches!(HttpPostsApi::new(&cfg), Err(ApiError::Url(_))));
    }

    #[tokio::test]
    async fn list_posts_sends_page_and_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .and(query_param("page", "2"))
            .and(query_param("search", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "posts": [{"id": 4, "title": "Borrowing", "content": "..."}],
                "hasMore": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = api_for(&server).list_posts(2, "rust").await.unwrap();
        assert!(page.has_more);
        assert_eq!(page.posts[0].id, 4);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = api_for(&server).list_posts(1, "").await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(format!("{err}"), "api error 500 Internal Server Error: boom");
    }

    #[tokio::test]
    async fn malformed_listing_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).list_posts(1, "").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn create_post_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/posts"))
            .and(body_json(json!({"title": "New", "content": "Body"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11, "title": "New", "content": "Body"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let post = api_for(&server)
            .create_post(&NewPost { title: "New".into(), content: "Body".into() })
            .await
            .unwrap();
        assert_eq!(post.id, 11);
    }

    #[tokio::test]
    async fn delete_post_targets_the_record() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/posts/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server).delete_post(7).await.unwrap();
    }

    #[tokio::test]
    async fn delete_of_missing_post_fails() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/posts/8"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = api_for(&server).delete_post(8).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
