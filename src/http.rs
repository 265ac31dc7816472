//! HTTP transport for the CMCI REST interface.
//!
//! Each call is one stateless request/response round trip: build the URL from
//! the session and resource path, send with basic authentication, parse the
//! XML reply into the response envelope, and fail with the fixed request-error
//! message on any transport, HTTP, CMCI-code, or parse failure. There are no
//! retries and no state shared across calls beyond the session itself.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::error::{CmciError, sanitize_failure_body};
use crate::request::Element;
use crate::response::CmciResponse;
use crate::session::CmciSession;

/// HTTP client bound to one CMCI server session.
pub struct CmciClient {
    http: reqwest::Client,
    session: CmciSession,
}

impl CmciClient {
    /// Builds a client for the given session. TLS certificate verification is
    /// disabled when the session's reject-unauthorized flag is off.
    pub fn new(session: CmciSession) -> Result<Self, CmciError> {
        let mut builder = reqwest::Client::builder();
        if !session.reject_unauthorized {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().map_err(|e| CmciError::Client {
            details: e.to_string(),
        })?;
        Ok(Self { http, session })
    }

    /// The session this client was built from.
    pub fn session(&self) -> &CmciSession {
        &self.session
    }

    /// Issues a GET for the given resource path.
    pub async fn get(&self, resource_path: &str) -> Result<CmciResponse, CmciError> {
        self.execute(Method::GET, resource_path, None).await
    }

    /// Issues a POST with an XML body.
    pub async fn post(
        &self,
        resource_path: &str,
        body: &Element,
    ) -> Result<CmciResponse, CmciError> {
        self.execute(Method::POST, resource_path, Some(body)).await
    }

    /// Issues a PUT with an XML body.
    pub async fn put(
        &self,
        resource_path: &str,
        body: &Element,
    ) -> Result<CmciResponse, CmciError> {
        self.execute(Method::PUT, resource_path, Some(body)).await
    }

    /// Issues a DELETE, with an XML body when one is supplied.
    pub async fn delete(
        &self,
        resource_path: &str,
        body: Option<&Element>,
    ) -> Result<CmciResponse, CmciError> {
        self.execute(Method::DELETE, resource_path, body).await
    }

    async fn execute(
        &self,
        method: Method,
        resource_path: &str,
        body: Option<&Element>,
    ) -> Result<CmciResponse, CmciError> {
        let url = format!("{}{}", self.session.origin(), resource_path);
        debug!(%method, path = resource_path, "issuing CMCI request");

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&self.session.user, Some(&self.session.password));
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/xml")
                .body(body.to_xml());
        }

        let response = request
            .send()
            .await
            .map_err(|e| CmciError::request(e.to_string()))?;
        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| CmciError::request(e.to_string()))?;
        debug!(status = status.as_u16(), "received CMCI response");

        if !status.is_success() {
            let details = sanitize_failure_body(&body_text);
            let details = if details.is_empty() {
                status.to_string()
            } else {
                details
            };
            return Err(CmciError::request(format!(
                "HTTP {} - {}",
                status.as_u16(),
                details
            )));
        }

        CmciResponse::from_xml(&body_text)?.expect_success()
    }
}
