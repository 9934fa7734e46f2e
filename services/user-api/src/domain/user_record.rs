// ユーザーレコード
//
// DynamoDBテーブルに保存される1ユーザー分のデータと、
// POSTリクエストボディの形を定義する。

use serde::{Deserialize, Serialize};

/// テーブルに保存されるユーザーレコード
///
/// JSONシリアライズ時はテーブルの属性名（`UserID`, `Name`）をそのまま使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// ユーザーID（パーティションキー）
    #[serde(rename = "UserID")]
    pub user_id: String,

    /// ユーザー名
    #[serde(rename = "Name")]
    pub name: String,
}

impl UserRecord {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
        }
    }
}

/// POSTリクエストボディ
///
/// `{"user_id": "...", "name": "..."}` の形を期待する。
/// 未知のフィールドは無視する。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub user_id: String,
    pub name: String,
}

impl From<UserPayload> for UserRecord {
    fn from(payload: UserPayload) -> Self {
        UserRecord::new(payload.user_id, payload.name)
    }
}
