/// DynamoDBでユーザーレコードを管理するためのリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::UserRecord;

/// パーティションキー属性名
const USER_ID_ATTR: &str = "UserID";
/// ユーザー名属性名
const NAME_ATTR: &str = "Name";

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),

    /// DynamoDBからの読み取りに失敗
    #[error("Read error: {0}")]
    ReadError(String),

    /// 保存済みアイテムの形式が不正
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// ユーザーレコード永続化用トレイト
///
/// 実際のDynamoDBとテスト用モックを差し替えられるように抽象化する。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// レコードを保存する
    ///
    /// 同じUserIDのレコードが既にあれば丸ごと置き換える。
    async fn save(&self, record: &UserRecord) -> Result<(), RepositoryError>;

    /// UserIDでレコードを取得する
    ///
    /// # 戻り値
    /// * 見つかった場合は`Ok(Some(UserRecord))`
    /// * 見つからなかった場合は`Ok(None)`
    /// * 失敗時は`Err(RepositoryError)`
    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>, RepositoryError>;
}

/// UserRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoUserRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// ユーザーテーブル名
    table_name: String,
}

impl DynamoUserRepository {
    /// 新しいDynamoUserRepositoryを作成
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// DynamoDBアイテムをUserRecordに変換
    fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<UserRecord, RepositoryError> {
        let user_id = Self::string_attr(item, USER_ID_ATTR)?;
        let name = Self::string_attr(item, NAME_ATTR)?;
        Ok(UserRecord { user_id, name })
    }

    fn string_attr(
        item: &HashMap<String, AttributeValue>,
        attr: &str,
    ) -> Result<String, RepositoryError> {
        item.get(attr)
            .and_then(|v| v.as_s().ok())
            .cloned()
            .ok_or_else(|| RepositoryError::SerializationError(format!("Missing {} field", attr)))
    }
}

#[async_trait]
impl UserRepository for DynamoUserRepository {
    async fn save(&self, record: &UserRecord) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(USER_ID_ATTR, AttributeValue::S(record.user_id.clone()))
            .item(NAME_ATTR, AttributeValue::S(record.name.clone()))
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(USER_ID_ATTR, AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(|e| RepositoryError::ReadError(e.into_service_error().to_string()))?;

        result
            .item
            .as_ref()
            .map(Self::item_to_record)
            .transpose()
    }
}
