// Lambdaプロキシレスポンス
//
// API Gatewayへ返す `{statusCode, body}` を表す。
// bodyは常にJSONエンコード済みの値（文字列メッセージまたはレコード）。

use serde::Serialize;

/// API Gatewayへ返却するレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// JSONエンコード済みボディ
    pub body: String,
}

impl OutboundResponse {
    /// メッセージ文字列をJSON文字列としてエンコードしたレスポンスを作成
    pub fn message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: encode_json(&message),
        }
    }

    /// 任意のシリアライズ可能な値をボディに持つレスポンスを作成
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        Self {
            status_code,
            body: encode_json(value),
        }
    }
}

/// 値をJSONにエンコードする
///
/// シリアライズに失敗した場合はエラー内容をJSON文字列として返す。
fn encode_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        serde_json::Value::String(err.to_string()).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_body_is_json_string() {
        let response = OutboundResponse::message(400, "Invalid HTTP method");

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, "\"Invalid HTTP method\"");
    }

    /// 引用符を含むメッセージもJSONとしてエスケープされる
    #[test]
    fn test_message_body_escapes_quotes() {
        let response = OutboundResponse::message(500, "missing \"name\"");

        let decoded: String = serde_json::from_str(&response.body).unwrap();
        assert_eq!(decoded, "missing \"name\"");
    }

    #[test]
    fn test_json_body() {
        let response = OutboundResponse::json(200, &json!({"UserID": "1", "Name": "A"}));

        let decoded: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(decoded, json!({"UserID": "1", "Name": "A"}));
    }

    /// Lambdaプロキシ形式（camelCase）でシリアライズされる
    #[test]
    fn test_serializes_as_proxy_response() {
        let response = OutboundResponse::message(404, "User 9 not found");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({"statusCode": 404, "body": "\"User 9 not found\""})
        );
    }
}
