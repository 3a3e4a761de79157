//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! 現時点のハンドラは失敗しないため実際に返る経路はないが、
//! 書籍 CRUD 実装時にハンドラの戻り値型として使用する。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない（404 Not Found）
   #[error("リソースが見つかりません")]
   NotFound,

   /// データベースエラー（500 Internal Server Error）
   #[error("データベースエラー")]
   Database(#[from] book_api_infra::InfraError),

   /// 内部サーバーエラー（500 Internal Server Error）
   #[error("内部サーバーエラー")]
   Internal(#[from] anyhow::Error),
}

/// RFC 7807 準拠のエラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
   /// エラーの種類を識別する URI
   #[serde(rename = "type")]
   pub error_type: String,
   /// エラーの概要
   pub title:      String,
   /// HTTP ステータスコード
   pub status:     u16,
   /// エラーの詳細情報（オプション）
   #[serde(skip_serializing_if = "Option::is_none")]
   pub detail:     Option<String>,
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, error_response) = match self {
         ApiError::NotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse {
               error_type: "about:blank".to_string(),
               title:      "リソースが見つかりません".to_string(),
               status:     404,
               detail:     None,
            },
         ),
         ApiError::Database(err) => {
            // セキュリティ: 内部エラー詳細はログのみ
            tracing::error!("データベースエラー: {:?}", err);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse {
                  error_type: "about:blank".to_string(),
                  title:      "内部サーバーエラー".to_string(),
                  status:     500,
                  detail:     None,
               },
            )
         }
         ApiError::Internal(err) => {
            tracing::error!("内部エラー: {:?}", err);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse {
                  error_type: "about:blank".to_string(),
                  title:      "内部サーバーエラー".to_string(),
                  status:     500,
                  detail:     None,
               },
            )
         }
      };

      (status, Json(error_response)).into_response()
   }
}
