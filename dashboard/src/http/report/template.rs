use serde::Serialize;

use crate::http::error::Error;
use crate::http::form::FormBody;
use crate::http::request::{Method, OutgoingRequest};

/// Path of the report template endpoint.
pub const URL: &str = "/api/report/template";

/// Options for creating or updating a report template.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct ReportTemplateOptions<R = serde_json::Value> {
    /// The resource the report aggregates over.
    pub url: String,
    /// Statistics to include, e.g. `avg` or `std`.
    pub statistics: Vec<String>,
    /// Row groupings. Passed to the server as-is.
    pub rows: R,
    /// Human readable template name.
    pub name: String,
    /// Owner e-mail addresses.
    pub owners: Vec<String>,
    /// Identifier of the template to update. `None` creates a new template.
    pub id: Option<String>,
}

/// JSON payload of the `template` form field.
#[derive(serde::Serialize)]
struct ReportTemplate<'a, R> {
    url: &'a str,
    statistics: &'a [String],
    rows: &'a R,
}

pub fn build<R: Serialize>(options: &ReportTemplateOptions<R>) -> Result<OutgoingRequest, Error> {
    let template = serde_json::to_string(&ReportTemplate {
        url: &options.url,
        statistics: &options.statistics,
        rows: &options.rows,
    })?;

    let mut body = FormBody::new();
    body.set("template", template)
        .set("name", options.name.as_str())
        .set("owners", options.owners.join(","))
        .set("id", options.id.as_deref().unwrap_or_default());

    tracing::debug!("report template request name={} id={:?}", options.name, options.id);
    Ok(OutgoingRequest {
        method: Method::Post,
        target: URL.to_string(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::{json, Value};

    use crate::http::error::Error;
    use crate::http::report::template::{build, ReportTemplateOptions, URL};
    use crate::http::request::{DashboardRequest, Method};

    fn options(owners: &[&str]) -> ReportTemplateOptions {
        ReportTemplateOptions {
            url: "/metric".to_string(),
            statistics: vec!["avg".to_string()],
            rows: json!([{"label": "r1"}]),
            name: "My Report".to_string(),
            owners: owners.iter().map(|v| v.to_string()).collect(),
            id: Some("42".to_string()),
        }
    }

    #[test]
    fn test_build() {
        let request = build(&options(&["me@x.com"])).unwrap();
        let body = request.body().unwrap();
        assert_eq!(
            body.get("template"),
            Some(r#"{"url":"/metric","statistics":["avg"],"rows":[{"label":"r1"}]}"#)
        );
        assert_eq!(body.get("name"), Some("My Report"));
        assert_eq!(body.get("owners"), Some("me@x.com"));
        assert_eq!(body.get("id"), Some("42"));
    }

    #[test]
    fn test_fields() {
        let request = build(&options(&["me@x.com"])).unwrap();
        assert_eq!(
            request.body.names().collect::<Vec<_>>(),
            vec!["template", "name", "owners", "id"]
        );
    }

    #[test]
    fn test_routing() {
        let mut opts = options(&[]);
        opts.id = None;
        opts.url = "/other".to_string();
        let request = build(&opts).unwrap();
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.target(), URL);
        assert_eq!(request.target(), "/api/report/template");
    }

    #[test]
    fn test_template_json() {
        let mut opts = options(&["me@x.com"]);
        opts.statistics = vec!["std".to_string(), "avg".to_string(), "count".to_string()];
        opts.rows = json!([{"label": "r1", "testSuites": ["s1"]}, {"label": "r2"}]);
        let request = build(&opts).unwrap();
        let template: Value = serde_json::from_str(request.body.get("template").unwrap()).unwrap();
        assert_eq!(
            template,
            json!({
                "url": "/metric",
                "statistics": ["std", "avg", "count"],
                "rows": [{"label": "r1", "testSuites": ["s1"]}, {"label": "r2"}],
            })
        );
        assert_eq!(template.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_owners() {
        let owners = |v: &[&str]| build(&options(v)).unwrap().body.get("owners").unwrap().to_string();
        assert_eq!(owners(&["a@x.com", "b@x.com"]), "a@x.com,b@x.com");
        assert_eq!(owners(&[]), "");
        assert_eq!(owners(&["solo@x.com"]), "solo@x.com");
    }

    #[test]
    fn test_new_template() {
        let mut opts = options(&["me@x.com"]);
        opts.id = None;
        let request = build(&opts).unwrap();
        assert_eq!(request.body.get("id"), Some(""));
        assert_eq!(request.body.len(), 4);
    }

    #[test]
    fn test_idempotent() {
        let first = build(&options(&["a@x.com", "b@x.com"])).unwrap();
        let second = build(&options(&["a@x.com", "b@x.com"])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_typed_rows() {
        #[derive(serde::Serialize)]
        struct Row {
            label: String,
            bots: Vec<String>,
        }
        let opts = ReportTemplateOptions {
            url: "/metric".to_string(),
            statistics: vec![],
            rows: vec![Row {
                label: "r1".to_string(),
                bots: vec!["master:bot".to_string()],
            }],
            name: "Typed".to_string(),
            owners: vec![],
            id: None,
        };
        let request = build(&opts).unwrap();
        assert_eq!(
            request.body.get("template"),
            Some(r#"{"url":"/metric","statistics":[],"rows":[{"label":"r1","bots":["master:bot"]}]}"#)
        );
    }

    #[test]
    fn test_rows_not_representable() {
        let mut rows = BTreeMap::new();
        rows.insert((1, 2), "r1".to_string());
        let opts = ReportTemplateOptions {
            url: "/metric".to_string(),
            statistics: vec!["avg".to_string()],
            rows,
            name: "Broken".to_string(),
            owners: vec!["me@x.com".to_string()],
            id: None,
        };
        match build(&opts) {
            Err(Error::Serialization(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
