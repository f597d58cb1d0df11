use std::sync::Arc;

use serde::Serialize;

use crate::http::dashboard_client::DashboardClient;
use crate::http::error::Error;
use crate::http::report::template::{self, ReportTemplateOptions};

#[derive(Debug, Clone)]
pub struct DashboardReportClient {
    inner: Arc<DashboardClient>,
}

impl DashboardReportClient {
    pub fn new(inner: Arc<DashboardClient>) -> Self {
        Self { inner }
    }

    /// Creates a report template, or updates the one named by `options.id`.
    ///
    /// The response body is returned as-is.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_template<R: Serialize>(
        &self,
        options: &ReportTemplateOptions<R>,
    ) -> Result<serde_json::Value, Error> {
        let request = template::build(options)?;
        self.inner.send(&request).await
    }
}
