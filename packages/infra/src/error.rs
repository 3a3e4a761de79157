//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `sqlx::Error` をラップし、上位層に `?` で伝播させる
//! - **初期化エラーの可視化**: プール初期化の失敗は握りつぶさず、
//!   呼び出し元すべてに `Result` で返す

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// データベース接続・クエリ実行で発生するエラーの種別。
/// API 層でこのエラーに応じて適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraError {
   /// データベースエラー
   ///
   /// 接続失敗、認証エラー、SQL クエリの実行失敗など。
   /// プール初期化時の liveness チェック失敗もここに含まれる。
   #[error("データベースエラー: {0}")]
   Database(#[from] sqlx::Error),
}
