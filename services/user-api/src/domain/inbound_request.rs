/// Inbound request descriptor built once per invocation.
use std::collections::HashMap;

/// HTTP method of an inbound request
///
/// Only GET and POST are routed; everything else is kept verbatim in `Other`
/// so that it can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Other(String),
}

impl RequestMethod {
    /// Parse a method string as delivered by API Gateway (upper-case, exact match)
    pub fn parse(method: &str) -> Self {
        match method {
            "GET" => RequestMethod::Get,
            "POST" => RequestMethod::Post,
            other => RequestMethod::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Other(method) => method,
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single HTTP-style request handed to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundRequest {
    /// Request method
    pub method: RequestMethod,
    /// Raw body text (JSON for POST)
    pub body: Option<String>,
    /// Query-string parameters (used for GET)
    pub query_params: Option<HashMap<String, String>>,
}

impl InboundRequest {
    pub fn new(
        method: RequestMethod,
        body: Option<String>,
        query_params: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            method,
            body,
            query_params,
        }
    }

    /// Look up a query-string parameter
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        assert_eq!(RequestMethod::parse("GET"), RequestMethod::Get);
    }

    #[test]
    fn test_parse_post() {
        assert_eq!(RequestMethod::parse("POST"), RequestMethod::Post);
    }

    #[test]
    fn test_parse_other_methods_are_kept_verbatim() {
        assert_eq!(
            RequestMethod::parse("DELETE"),
            RequestMethod::Other("DELETE".to_string())
        );
        // 小文字はGETとして扱わない
        assert_eq!(
            RequestMethod::parse("get"),
            RequestMethod::Other("get".to_string())
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(RequestMethod::Get.to_string(), "GET");
        assert_eq!(RequestMethod::Post.to_string(), "POST");
        assert_eq!(RequestMethod::Other("PUT".to_string()).to_string(), "PUT");
    }

    #[test]
    fn test_query_param_lookup() {
        let mut params = HashMap::new();
        params.insert("id".to_string(), "42".to_string());
        let request = InboundRequest::new(RequestMethod::Get, None, Some(params));

        assert_eq!(request.query_param("id"), Some("42"));
        assert_eq!(request.query_param("name"), None);
    }

    #[test]
    fn test_query_param_without_params() {
        let request = InboundRequest::new(RequestMethod::Get, None, None);
        assert_eq!(request.query_param("id"), None);
    }
}
