use std::fmt;

use crate::http::form::FormBody;

/// HTTP methods used by the dashboard API.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Method {
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A request that `DashboardClient` can send.
pub trait DashboardRequest {
    fn method(&self) -> Method;

    /// Path of the API endpoint, relative to the dashboard host.
    fn target(&self) -> &str;

    /// Form fields to send as `multipart/form-data`, if any.
    fn body(&self) -> Option<&FormBody>;
}

/// A request ready to be sent: method, target path and form body.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutgoingRequest {
    pub method: Method,
    pub target: String,
    pub body: FormBody,
}

impl DashboardRequest for OutgoingRequest {
    fn method(&self) -> Method {
        self.method
    }

    fn target(&self) -> &str {
        self.target.as_str()
    }

    fn body(&self) -> Option<&FormBody> {
        if self.body.is_empty() {
            None
        } else {
            Some(&self.body)
        }
    }
}
