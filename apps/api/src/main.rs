//! # Book API サーバー エントリーポイント
//!
//! 起動シーケンス:
//!
//! 1. `.env` ファイルの読み込み（存在しなくても続行）
//! 2. トレーシング初期化
//! 3. 設定の読み込み（未設定値はデフォルトに置き換え）
//! 4. データベースハンドルの構築（接続はまだ張らない）
//! 5. ルーター構築とサーバー起動
//!
//! ## 環境変数
//!
//! 設定キーの一覧とデフォルト値は [`book_api::config`] を参照。
//! ログは `RUST_LOG` と `LOG_FORMAT` で制御する。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p book-api
//!
//! # 本番環境
//! SERVER_PORT=4000 DB_NAME=book_api LOG_FORMAT=json cargo run -p book-api --release
//! ```

use std::sync::Arc;

use book_api::{config::AppConfig, state::AppState};
use book_api_infra::Database;
use book_api_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）。
   // LOG_FORMAT / RUST_LOG が .env に書かれている場合に備え、
   // トレーシング初期化より先に読み込む。
   let dotenv = dotenvy::dotenv();

   init_tracing(TracingConfig::from_env("book-api"));

   match dotenv {
      Ok(path) => tracing::debug!(path = %path.display(), ".env を読み込みました"),
      Err(_) => tracing::debug!(".env ファイルが見つかりません"),
   }

   // 設定読み込み（失敗しない。未設定値はデフォルトが適用される）
   let config = AppConfig::from_env();

   // データベースハンドルを構築し、状態として各ハンドラへ渡す。
   // 実際の接続は最初に使用されるまで遅延される
   let db = Arc::new(Database::new(config.database.url()));

   // ルーター構築
   let app = book_api::app(AppState::new(Arc::clone(&db)))
      .layer(TimeoutLayer::new(config.server.write_timeout))
      .layer(TraceLayer::new_for_http());

   // サーバー起動
   let addr = config.bind_addr();
   let listener = TcpListener::bind(&addr).await?;
   tracing::info!("サーバーが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   // 接続プールの破棄は shutdown timeout 内で打ち切る
   if tokio::time::timeout(config.server.shutdown_timeout, db.close())
      .await
      .is_err()
   {
      tracing::warn!("シャットダウンタイムアウト内に接続プールを閉じられませんでした");
   }

   tracing::info!("サーバーを停止しました");
   Ok(())
}

/// SIGINT / SIGTERM を待ち受ける
///
/// どちらかを受信すると resolve し、`axum::serve` が新規リクエストの
/// 受け付けを止めて処理中のリクエストの完了を待つ。
async fn shutdown_signal() {
   let ctrl_c = async {
      tokio::signal::ctrl_c()
         .await
         .expect("SIGINT ハンドラの登録に失敗しました");
   };

   #[cfg(unix)]
   let terminate = async {
      tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
         .expect("SIGTERM ハンドラの登録に失敗しました")
         .recv()
         .await;
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
   }
}
