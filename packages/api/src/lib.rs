//! # API crate — REST client for the student backend
//!
//! [`StudentClient`] is the HTTP implementation of [`store::StudentBackend`].
//! It speaks JSON to the collection endpoint configured in
//! [`store::config::ApiConfig`]:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list_students` | `GET {collection}` → `[StudentRecord]` |
//! | `add_student` | `POST {collection}` with a [`store::NewStudent`] body |
//! | `delete_student` | `DELETE {collection}/{id}` |
//!
//! Non-2xx responses are decoded into [`store::ErrorPayload`] when the body
//! matches the contract and into [`store::BackendError::Malformed`] otherwise.
//! Requests that never get a response become [`store::BackendError::Transport`].

use reqwest::{Client, Response};
use store::config::ApiConfig;
use store::{BackendError, NewStudent, StudentBackend, StudentRecord};

/// HTTP client for the student REST endpoints.
#[derive(Clone, Debug)]
pub struct StudentClient {
    http: Client,
    collection_url: String,
}

impl StudentClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use an existing `reqwest::Client` (shared connection pool, custom headers).
    pub fn with_client(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            collection_url: config.collection_url(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub fn student_url(&self, id: i64) -> String {
        format!("{}/{id}", self.collection_url)
    }
}

fn transport(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.to_string())
}

/// Pass 2xx responses through; turn anything else into a [`BackendError`].
async fn check(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.map_err(transport)?;
    Err(BackendError::from_response(status.as_u16(), &body))
}

impl StudentBackend for StudentClient {
    async fn list_students(&self) -> Result<Vec<StudentRecord>, BackendError> {
        tracing::debug!("GET {}", self.collection_url);
        let response = self
            .http
            .get(&self.collection_url)
            .send()
            .await
            .map_err(transport)?;
        check(response)
            .await?
            .json::<Vec<StudentRecord>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn add_student(&self, student: &NewStudent) -> Result<(), BackendError> {
        tracing::debug!("POST {}", self.collection_url);
        let response = self
            .http
            .post(&self.collection_url)
            .json(student)
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        Ok(())
    }

    async fn delete_student(&self, id: i64) -> Result<(), BackendError> {
        let url = self.student_url(id);
        tracing::debug!("DELETE {url}");
        let response = self.http.delete(&url).send().await.map_err(transport)?;
        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = StudentClient::new(&ApiConfig {
            base_url: "http://localhost:8080/".into(),
            students_path: "api/v1/students".into(),
        });
        assert_eq!(client.collection_url(), "http://localhost:8080/api/v1/students");
        assert_eq!(client.student_url(12), "http://localhost:8080/api/v1/students/12");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = StudentClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            students_path: "/api/v1/students".into(),
        });
        let err = client.list_students().await.unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)));
        assert_eq!(err.payload().error, "Network Error");
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_transport_error() {
        let client = StudentClient::new(&ApiConfig {
            base_url: "not a url".into(),
            students_path: "/students".into(),
        });
        let err = client.delete_student(1).await.unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)));
    }
}
