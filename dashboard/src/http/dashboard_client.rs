use std::sync::Arc;

use reqwest::Response;
use reqwest_middleware::{ClientWithMiddleware as Client, RequestBuilder};

use token_source::TokenSource;

use crate::http::error::{Error, ErrorResponse, ErrorWrapper};
use crate::http::request::DashboardRequest;

pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/userinfo.email"];

const USER_AGENT: &str = "perf-dashboard-rust";

/// Sends any `DashboardRequest` to the dashboard host.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    ts: Option<Arc<dyn TokenSource>>,
    endpoint: String,
    http: Client,
    debug: bool,
}

impl DashboardClient {
    pub(crate) fn new(ts: Option<Arc<dyn TokenSource>>, endpoint: &str, http: Client, debug: bool) -> Self {
        Self {
            ts,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http,
            debug,
        }
    }

    pub(crate) fn url(&self, target: &str) -> String {
        format!("{}/{}", self.endpoint, target.trim_start_matches('/'))
    }

    pub(crate) fn build<Q: DashboardRequest + ?Sized>(&self, request: &Q) -> RequestBuilder {
        let url = self.url(request.target());
        tracing::debug!("{} {}", request.method(), url);
        let builder = self.http.request(request.method().into(), url);
        match request.body() {
            Some(body) => builder.multipart(body.to_multipart()),
            None => builder,
        }
    }

    async fn with_headers(&self, builder: RequestBuilder) -> Result<RequestBuilder, Error> {
        let builder = builder.header(reqwest::header::USER_AGENT, USER_AGENT);
        match &self.ts {
            Some(ts) => {
                let token = ts.token().await.map_err(Error::TokenSource)?;
                Ok(builder.header(reqwest::header::AUTHORIZATION, token))
            }
            None => {
                tracing::trace!("Use anonymous access due to lack of token");
                Ok(builder)
            }
        }
    }

    pub async fn send<T, Q>(&self, request: &Q) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
        Q: DashboardRequest + ?Sized,
    {
        let builder = self.with_headers(self.build(request)).await?;
        let response = builder.send().await?;
        let response = Self::check_response_status(response).await?;
        if self.debug {
            let text = response.text().await?;
            tracing::info!("{}", text);
            Ok(serde_json::from_str(text.as_str())?)
        } else {
            Ok(response.json().await?)
        }
    }

    /// Checks whether an HTTP response is successful and returns it, or returns an error.
    async fn check_response_status(response: Response) -> Result<Response, Error> {
        let error = match response.error_for_status_ref() {
            Ok(_) => return Ok(response),
            Err(error) => error,
        };
        let code = response.status().as_u16();

        // try to extract the dashboard error message, falling back to the status error if it can not be parsed.
        Err(response
            .json::<ErrorWrapper>()
            .await
            .map(|wrapper| {
                Error::Response(ErrorResponse {
                    code,
                    message: wrapper.error,
                })
            })
            .unwrap_or(Error::HttpClient(error)))
    }
}
