#![allow(clippy::result_large_err)]
//! # perf-dashboard
//!
//! Client library for the performance dashboard report API.
//!
//! ## Quick Start
//!
//! ### CreateClient
//!
//! The default configuration talks to the public dashboard without credentials.
//!
//! ```rust
//! use perf_dashboard::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let client = Client::new(ClientConfig::default());
//! }
//! ```
//!
//! With the `auth` feature the client can pick up Google credentials from
//! `GOOGLE_APPLICATION_CREDENTIALS` or the metadata server.
//!
//! ```rust
//! use perf_dashboard::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config);
//! }
//! ```
//!
//! ### Save a report template
//!
//! ```rust
//! use perf_dashboard::client::Client;
//! use perf_dashboard::http::report::template::ReportTemplateOptions;
//!
//! async fn run(client: &Client) {
//!     let options = ReportTemplateOptions {
//!         url: "/metric".to_string(),
//!         statistics: vec!["avg".to_string()],
//!         rows: serde_json::json!([{"label": "r1"}]),
//!         name: "My Report".to_string(),
//!         owners: vec!["me@example.com".to_string()],
//!         id: None,
//!     };
//!     let result = client.report().update_template(&options).await;
//! }
//! ```
//!
//! ### Build the request only
//!
//! Request construction is pure and can be used without a client.
//!
//! ```rust
//! use perf_dashboard::http::report::template::{self, ReportTemplateOptions};
//! use perf_dashboard::http::request::DashboardRequest;
//!
//! fn run(options: &ReportTemplateOptions) {
//!     let request = template::build(options).unwrap();
//!     assert_eq!(request.target(), "/api/report/template");
//! }
//! ```

pub mod client;
pub mod http;
