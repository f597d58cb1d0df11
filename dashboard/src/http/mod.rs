pub mod dashboard_client;
pub mod dashboard_report_client;
pub mod error;
pub mod form;
pub mod report;
pub mod request;
