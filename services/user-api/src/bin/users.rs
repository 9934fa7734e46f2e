/// ユーザーAPI Lambdaエントリポイント
///
/// API Gateway HTTP API (v2) 経由のリクエストを受け取り、
/// POSTでユーザーを保存、GETでユーザーを取得する。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use user_api::application::{parse_event, UserRequestDispatcher};
use user_api::infrastructure::{
    init_logging, DynamoUserRepository, UserRepository, UserTableConfig,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // テーブル設定はコールドスタート時に一度だけ読み込む
    let config = UserTableConfig::from_env().await.map_err(|err| {
        error!(error = %err, "ユーザーテーブル設定の読み込みに失敗");
        err
    })?;

    info!(table_name = config.table_name(), "ユーザーAPI Lambda関数を初期化");

    let user_repo =
        DynamoUserRepository::new(config.client().clone(), config.table_name().to_string());
    let dispatcher = UserRequestDispatcher::new(user_repo);

    lambda_runtime::run(service_fn(|event| handler(&dispatcher, event))).await
}

/// Lambda関数のメインハンドラー
///
/// 失敗はすべて`{statusCode, body}`形式のレスポンスとして返すため、
/// シリアライズ以外でエラーを返さない。
async fn handler<R: UserRepository>(
    dispatcher: &UserRequestDispatcher<R>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!(event = %event.payload, "イベント受信");

    let request = parse_event(&event.payload);
    let response = dispatcher.handle(&request).await;

    info!(status_code = response.status_code, "レスポンス送信");

    Ok(serde_json::to_value(response)?)
}
