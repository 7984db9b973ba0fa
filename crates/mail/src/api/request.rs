//! Backend requests described as plain data

use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// HTTP method of a backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method, path and JSON body of one backend call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<T: Serialize>(path: impl Into<String>, body: &T) -> Self {
        Self::with_body(Method::Post, path.into(), body)
    }

    pub fn put<T: Serialize>(path: impl Into<String>, body: &T) -> Self {
        Self::with_body(Method::Put, path.into(), body)
    }

    fn with_body<T: Serialize>(method: Method, path: String, body: &T) -> Self {
        let body = match serde_json::to_value(body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Failed to serialize body of {} {}: {}", method, path, e);
                None
            }
        };
        Self { method, path, body }
    }

    /// Whether this request matches a method and path
    pub fn is(&self, method: Method, path: &str) -> bool {
        self.method == method && self.path == path
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
