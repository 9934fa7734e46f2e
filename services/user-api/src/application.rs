// アプリケーション層モジュール
pub mod event_parser;
pub mod user_handler;

// 再エクスポート
pub use event_parser::parse_event;
pub use user_handler::{UserApiError, UserRequestDispatcher};
