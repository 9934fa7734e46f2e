/// API Gateway HTTP API (v2) イベントのパーサー
///
/// Lambdaに渡された生のJSONイベントから、ディスパッチャーが扱う
/// `InboundRequest`を組み立てる。パースは失敗しない。
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::{InboundRequest, RequestMethod};

/// 生イベントを`InboundRequest`に変換する
///
/// - `requestContext.http.method`: 欠落時は空文字列の`Other`として扱う
/// - `body`: 文字列以外（null含む）は未指定扱い
/// - `queryStringParameters`: オブジェクト以外は未指定扱い、文字列以外の値は無視
pub fn parse_event(event: &Value) -> InboundRequest {
    let method = event
        .get("requestContext")
        .and_then(|ctx| ctx.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(|m| m.as_str())
        .map(RequestMethod::parse)
        .unwrap_or_else(|| RequestMethod::Other(String::new()));

    let body = event
        .get("body")
        .and_then(|b| b.as_str())
        .map(str::to_string);

    let query_params = event
        .get("queryStringParameters")
        .and_then(|q| q.as_object())
        .map(|params| {
            params
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect::<HashMap<_, _>>()
        });

    InboundRequest::new(method, body, query_params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_post_event() {
        let event = json!({
            "requestContext": {"http": {"method": "POST", "path": "/users"}},
            "body": "{\"user_id\": \"123\", \"name\": \"John Doe\"}"
        });

        let request = parse_event(&event);

        assert_eq!(request.method, RequestMethod::Post);
        assert_eq!(
            request.body.as_deref(),
            Some("{\"user_id\": \"123\", \"name\": \"John Doe\"}")
        );
        assert_eq!(request.query_params, None);
    }

    #[test]
    fn test_parse_get_event() {
        let event = json!({
            "requestContext": {"http": {"method": "GET"}},
            "queryStringParameters": {"id": "123"}
        });

        let request = parse_event(&event);

        assert_eq!(request.method, RequestMethod::Get);
        assert_eq!(request.body, None);
        assert_eq!(request.query_param("id"), Some("123"));
    }

    #[test]
    fn test_parse_other_method() {
        let event = json!({"requestContext": {"http": {"method": "DELETE"}}});

        assert_eq!(
            parse_event(&event).method,
            RequestMethod::Other("DELETE".to_string())
        );
    }

    /// requestContextが無いイベントはどのメソッドにもマッチしない
    #[test]
    fn test_parse_missing_method() {
        let request = parse_event(&json!({}));

        assert_eq!(request.method, RequestMethod::Other(String::new()));
        assert_eq!(request.body, None);
        assert_eq!(request.query_params, None);
    }

    #[test]
    fn test_parse_null_fields_are_absent() {
        let event = json!({
            "requestContext": {"http": {"method": "GET"}},
            "body": null,
            "queryStringParameters": null
        });

        let request = parse_event(&event);

        assert_eq!(request.body, None);
        assert_eq!(request.query_params, None);
    }

    #[test]
    fn test_parse_ignores_non_string_query_values() {
        let event = json!({
            "requestContext": {"http": {"method": "GET"}},
            "queryStringParameters": {"id": "7", "page": 2}
        });

        let params = parse_event(&event).query_params.unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
    }
}
