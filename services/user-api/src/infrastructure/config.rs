/// ユーザーテーブル接続設定
///
/// プロセス起動時に一度だけ構築し、各呼び出しへ参照で渡す。
use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// テーブル名を指定する環境変数
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

/// 設定読み込みのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserTableConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// DynamoDBクライアントとユーザーテーブル名を持つ設定
#[derive(Debug, Clone)]
pub struct UserTableConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// ユーザーテーブル名
    table_name: String,
}

impl UserTableConfig {
    /// 環境からAWS設定を読み込み、`TABLE_NAME`からテーブル名を取得して設定を作成
    ///
    /// 環境変数:
    /// - AWS認証情報: aws-configにより自動読み込み
    /// - TABLE_NAME: ユーザー用DynamoDBテーブル名
    pub async fn from_env() -> Result<Self, UserTableConfigError> {
        // テーブル名が無ければAWS設定を読み込む前に失敗させる
        let table_name = table_name_from_env()?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        Ok(Self { client, table_name })
    }

    /// 明示的な値で設定を作成（テスト用）
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// ユーザーテーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// `TABLE_NAME`を読み取る（空文字列は未設定扱い）
fn table_name_from_env() -> Result<String, UserTableConfigError> {
    std::env::var(TABLE_NAME_ENV)
        .ok()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| UserTableConfigError::MissingEnvVar(TABLE_NAME_ENV.to_string()))
}
