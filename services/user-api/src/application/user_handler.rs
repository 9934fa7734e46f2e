/// ユーザーAPIハンドラー
///
/// 受信したリクエストをメソッドで振り分け、保存（POST）または取得（GET）を
/// 1回のリポジトリ呼び出しで実行してレスポンスに変換する。
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{InboundRequest, OutboundResponse, RequestMethod, UserPayload, UserRecord};
use crate::infrastructure::{RepositoryError, UserRepository};

/// ユーザーAPIのエラー型
///
/// 入力不正もストアエラーと同じ500にまとめる。
/// 区別は`status_code()`に集約し、ログ上はバリアントで判別できる。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserApiError {
    /// 不正なJSON、必須フィールド欠落、クエリパラメータ欠落
    #[error("{0}")]
    Validation(String),

    /// 指定IDのユーザーが存在しない
    #[error("User {0} not found")]
    NotFound(String),

    /// GET/POST以外のメソッド
    #[error("Invalid HTTP method")]
    UnsupportedMethod,

    /// ストア操作の失敗（スロットリング、権限、接続など）
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl UserApiError {
    /// エラー種別に対応するHTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            UserApiError::NotFound(_) => 404,
            UserApiError::UnsupportedMethod => 400,
            UserApiError::Validation(_) | UserApiError::Store(_) => 500,
        }
    }

    /// エラーメッセージをJSON文字列ボディに持つレスポンスへ変換
    pub fn to_response(&self) -> OutboundResponse {
        OutboundResponse::message(self.status_code(), &self.to_string())
    }
}

/// リクエストディスパッチャー
///
/// 呼び出しごとの状態は持たない。リポジトリは起動時に一度だけ構築して渡す。
pub struct UserRequestDispatcher<R>
where
    R: UserRepository,
{
    /// ユーザーリポジトリ
    user_repo: R,
}

impl<R> UserRequestDispatcher<R>
where
    R: UserRepository,
{
    /// 新しいディスパッチャーを作成
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }

    /// リクエストを処理してレスポンスを返す
    ///
    /// 失敗はすべてレスポンスに変換され、呼び出し元へエラーは返らない。
    pub async fn handle(&self, request: &InboundRequest) -> OutboundResponse {
        info!(http_method = %request.method, "HTTPメソッド判定");

        let result = match &request.method {
            RequestMethod::Post => self.write_user(request.body.as_deref()).await,
            RequestMethod::Get => self.read_user(request).await,
            RequestMethod::Other(_) => Err(UserApiError::UnsupportedMethod),
        };

        match result {
            Ok(response) => response,
            Err(err) => {
                // 404と400は想定内の結果なのでエラーログにしない
                if err.status_code() == 500 {
                    error!(
                        http_method = %request.method,
                        error = %err,
                        error_kind = ?err,
                        "ハンドラーでエラー発生"
                    );
                } else {
                    info!(http_method = %request.method, error = %err, "リクエストを拒否");
                }
                err.to_response()
            }
        }
    }

    /// POST: ボディからユーザーを読み取り保存する
    async fn write_user(&self, body: Option<&str>) -> Result<OutboundResponse, UserApiError> {
        let body = body.ok_or_else(|| UserApiError::Validation("Missing request body".to_string()))?;

        let payload: UserPayload = serde_json::from_str(body)
            .map_err(|e| UserApiError::Validation(format!("Invalid request body: {}", e)))?;
        let record = UserRecord::from(payload);

        self.user_repo.save(&record).await?;

        info!(user_id = %record.user_id, "ユーザー保存完了");

        Ok(OutboundResponse::message(
            200,
            &format!("User {} saved successfully", record.name),
        ))
    }

    /// GET: クエリパラメータ`id`でユーザーを取得する
    async fn read_user(&self, request: &InboundRequest) -> Result<OutboundResponse, UserApiError> {
        let user_id = request
            .query_param("id")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| UserApiError::Validation("Missing query parameter: id".to_string()))?;

        match self.user_repo.get(user_id).await? {
            Some(record) => Ok(OutboundResponse::json(200, &record)),
            None => Err(UserApiError::NotFound(user_id.to_string())),
        }
    }
}
