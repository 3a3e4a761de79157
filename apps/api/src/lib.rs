//! # Book API サーバー
//!
//! 書籍管理 API サービスの初期スキャフォールド。
//!
//! ## 現状の構成
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Client    │────▶│  Book API   │     │ PostgreSQL  │
//! │             │     │ (port 4000) │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                           │                    ↑
//!                           └── AppState.db ─────┘
//!                               （ハンドラからは未使用）
//! ```
//!
//! 現時点ではルート `/` が固定文字列を返すのみで、書籍・著者・貸出などの
//! ドメインモデルはまだ存在しない。データベースハンドルは起動時に構築され
//! [`state::AppState`] 経由で各ハンドラへ渡せる状態にあるが、
//! 参照するハンドラは未実装である。
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`state`] - ハンドラ間で共有するアプリケーション状態
//!
//! ## 依存関係
//!
//! - `book_api_infra`: データベース接続
//! - `book_api_shared`: トレーシング初期化

pub mod config;
pub mod error;
pub mod handler;
pub mod state;

use axum::{Router, routing::any};
use handler::book_index;
use state::AppState;

/// アプリケーションのルーターを構築する
///
/// 登録するルートは `/` のみ。メソッドによるフィルタリングは行わず、
/// どの HTTP メソッドでも同じレスポンスを返す。
///
/// レイヤー（リクエストログ、タイムアウト）は設定値に依存するため、
/// ここではなく `main` で適用する。
pub fn app(state: AppState) -> Router {
   Router::new().route("/", any(book_index)).with_state(state)
}
