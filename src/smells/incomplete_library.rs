//! Incomplete library class: a client with `get` and nothing else.
//!
//! The before variant's vendored `MinimalClient` only speaks GET, so every
//! call site hand-rolls its own POST and DELETE on the raw transport,
//! re-merging headers and re-serializing bodies each time. The after
//! variant applies Introduce Local Extension: an [`after::ApiClient`]
//! wrapper that completes the verb set once, with a default
//! `Content-Type: application/json` header.
//!
//! The transport is a seam rather than a socket; tests plug in a
//! recording transport and compare the requests both variants produce.

use std::cell::RefCell;

use rustc_hash::FxHashMap;
use serde_json::{json, Value};

use crate::error::Result;

/// Where requests actually go. Production would put an HTTP stack behind
/// this; tests record.
pub trait Transport {
    fn execute(
        &self,
        method: &str,
        url: &str,
        headers: &FxHashMap<String, String>,
        body: Option<&Value>,
    ) -> Result<Value>;
}

/// A request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Test double: records every request, answers with a canned body.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: RefCell<Vec<SentRequest>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    fn execute(
        &self,
        method: &str,
        url: &str,
        headers: &FxHashMap<String, String>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let mut header_list: Vec<(String, String)> = headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        header_list.sort();
        self.sent.borrow_mut().push(SentRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: header_list,
            body: body.cloned(),
        });
        Ok(json!({ "ok": true, "method": method }))
    }
}

/// The library as shipped, and the call sites patching around it.
pub mod before {
    use rustc_hash::FxHashMap;
    use serde_json::Value;

    use super::Transport;
    use crate::error::Result;

    /// GET only. The vendor never finished it.
    pub struct MinimalClient<'t, T: Transport> {
        base_url: String,
        transport: &'t T,
    }

    impl<'t, T: Transport> MinimalClient<'t, T> {
        pub fn new(base_url: &str, transport: &'t T) -> Self {
            Self {
                base_url: base_url.to_string(),
                transport,
            }
        }

        pub fn get(&self, endpoint: &str) -> Result<Value> {
            let url = format!("{}{endpoint}", self.base_url);
            let mut headers = FxHashMap::default();
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            self.transport.execute("GET", &url, &headers, None)
        }
    }

    /// A call site forced to do the library's job for every other verb.
    pub struct PostsApi<'t, T: Transport> {
        client: MinimalClient<'t, T>,
        base_url: String,
        transport: &'t T,
    }

    impl<'t, T: Transport> PostsApi<'t, T> {
        pub fn new(base_url: &str, transport: &'t T) -> Self {
            Self {
                client: MinimalClient::new(base_url, transport),
                base_url: base_url.to_string(),
                transport,
            }
        }

        pub fn fetch_post(&self, id: u64) -> Result<Value> {
            self.client.get(&format!("/posts/{id}"))
        }

        // Hand-rolled POST: header merging duplicated from the library.
        pub fn create_post(&self, data: &Value) -> Result<Value> {
            let url = format!("{}/posts", self.base_url);
            let mut headers = FxHashMap::default();
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            self.transport.execute("POST", &url, &headers, Some(data))
        }

        // Hand-rolled DELETE, same duplication again.
        pub fn delete_post(&self, id: u64) -> Result<Value> {
            let url = format!("{}/posts/{id}", self.base_url);
            let mut headers = FxHashMap::default();
            headers.insert("Content-Type".to_string(), "application/json".to_string());
            self.transport.execute("DELETE", &url, &headers, None)
        }
    }
}

/// Introduce Local Extension: the wrapper completes the verb set.
pub mod after {
    use rustc_hash::FxHashMap;
    use serde_json::Value;

    use super::Transport;
    use crate::error::Result;

    /// The missing verbs, written once.
    pub struct ApiClient<'t, T: Transport> {
        base_url: String,
        default_headers: FxHashMap<String, String>,
        transport: &'t T,
    }

    impl<'t, T: Transport> ApiClient<'t, T> {
        pub fn new(base_url: &str, transport: &'t T) -> Self {
            let mut default_headers = FxHashMap::default();
            default_headers.insert("Content-Type".to_string(), "application/json".to_string());
            Self {
                base_url: base_url.to_string(),
                default_headers,
                transport,
            }
        }

        /// Override or add a default header for every request.
        pub fn with_header(mut self, name: &str, value: &str) -> Self {
            self.default_headers
                .insert(name.to_string(), value.to_string());
            self
        }

        pub fn get(&self, endpoint: &str) -> Result<Value> {
            self.request("GET", endpoint, None)
        }

        pub fn post(&self, endpoint: &str, data: &Value) -> Result<Value> {
            self.request("POST", endpoint, Some(data))
        }

        pub fn put(&self, endpoint: &str, data: &Value) -> Result<Value> {
            self.request("PUT", endpoint, Some(data))
        }

        pub fn patch(&self, endpoint: &str, data: &Value) -> Result<Value> {
            self.request("PATCH", endpoint, Some(data))
        }

        pub fn delete(&self, endpoint: &str) -> Result<Value> {
            self.request("DELETE", endpoint, None)
        }

        fn request(&self, method: &str, endpoint: &str, body: Option<&Value>) -> Result<Value> {
            let url = format!("{}{endpoint}", self.base_url);
            self.transport.execute(method, &url, &self.default_headers, body)
        }
    }

    /// The same call site, now one line per operation.
    pub struct PostsApi<'t, T: Transport> {
        client: ApiClient<'t, T>,
    }

    impl<'t, T: Transport> PostsApi<'t, T> {
        pub fn new(base_url: &str, transport: &'t T) -> Self {
            Self {
                client: ApiClient::new(base_url, transport),
            }
        }

        pub fn fetch_post(&self, id: u64) -> Result<Value> {
            self.client.get(&format!("/posts/{id}"))
        }

        pub fn create_post(&self, data: &Value) -> Result<Value> {
            self.client.post("/posts", data)
        }

        pub fn delete_post(&self, id: u64) -> Result<Value> {
            self.client.delete(&format!("/posts/{id}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com";

    fn post_body() -> Value {
        json!({ "title": "Test Post", "body": "This is a test", "userId": 1 })
    }

    #[test]
    fn test_requests_are_identical_across_variants() {
        let patched_transport = RecordingTransport::default();
        let patched = before::PostsApi::new(BASE, &patched_transport);
        patched.fetch_post(1).unwrap();
        patched.create_post(&post_body()).unwrap();
        patched.delete_post(1).unwrap();

        let wrapped_transport = RecordingTransport::default();
        let wrapped = after::PostsApi::new(BASE, &wrapped_transport);
        wrapped.fetch_post(1).unwrap();
        wrapped.create_post(&post_body()).unwrap();
        wrapped.delete_post(1).unwrap();

        assert_eq!(patched_transport.sent(), wrapped_transport.sent());
    }

    #[test]
    fn test_default_content_type_on_every_request() {
        let transport = RecordingTransport::default();
        let client = after::ApiClient::new(BASE, &transport);
        client.get("/posts/1").unwrap();
        client.put("/posts/1", &post_body()).unwrap();
        client.patch("/posts/1", &json!({ "title": "x" })).unwrap();

        for request in transport.sent() {
            assert!(request
                .headers
                .contains(&("Content-Type".to_string(), "application/json".to_string())));
        }
    }

    #[test]
    fn test_header_override() {
        let transport = RecordingTransport::default();
        let client =
            after::ApiClient::new(BASE, &transport).with_header("Authorization", "Bearer t");
        client.get("/me").unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0]
            .headers
            .contains(&("Authorization".to_string(), "Bearer t".to_string())));
    }

    #[test]
    fn test_new_verbs_reach_the_transport() {
        let transport = RecordingTransport::default();
        let client = after::ApiClient::new(BASE, &transport);
        client.put("/posts/1", &post_body()).unwrap();
        client.delete("/posts/1").unwrap();

        let sent = transport.sent();
        let methods: Vec<&str> = sent.iter().map(|r| r.method.as_str()).collect();
        assert_eq!(methods, ["PUT", "DELETE"]);
    }
}
