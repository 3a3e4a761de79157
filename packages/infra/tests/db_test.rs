//! # データベースハンドルの統合テスト
//!
//! [`Database`] の遅延初期化・エラー伝播・クローズ動作を検証する。
//!
//! 実機の PostgreSQL を必要とするテストは `DATABASE_URL` が設定されている
//! 場合のみ実行する（未設定ならスキップ）。接続失敗系のテストは
//! 到達不能なアドレスを使用するため、データベースなしで実行できる。
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://postgres:@localhost:5432/book_api \
//!     cargo test -p book-api-infra --test db_test
//! ```

use std::sync::Arc;

use book_api_infra::Database;
use pretty_assertions::assert_eq;
use sqlx::Row;

/// テスト用の DATABASE_URL（未設定なら `None`）
fn database_url() -> Option<String> {
   dotenvy::dotenv().ok();
   std::env::var("DATABASE_URL").ok()
}

/// 到達不能な接続先（port 1 は即座に接続拒否される想定）
const UNREACHABLE_URL: &str = "postgres://postgres:@127.0.0.1:1/book_api?sslmode=disable";

#[tokio::test]
async fn test_初期化失敗はすべての並行呼び出し元にエラーとして返る() {
   // Arrange: 到達不能なデータベースを指すハンドルを共有する
   let db = Arc::new(Database::new(UNREACHABLE_URL));

   // Act: 8 タスクが同時に初回アクセスする
   let handles: Vec<_> = (0..8)
      .map(|_| {
         let db = Arc::clone(&db);
         tokio::spawn(async move { db.pool().await.is_err() })
      })
      .collect();

   // Assert: 全タスクがエラーを観測する（旧実装のように nil を受け取らない）
   for handle in handles {
      assert!(handle.await.unwrap(), "初期化失敗がエラーとして返ること");
   }
}

#[tokio::test]
async fn test_初期化失敗後もcloseは安全() {
   let db = Database::new(UNREACHABLE_URL);

   assert!(db.pool().await.is_err());

   // 失敗後の close は no-op（パニックしない）
   db.close().await;
   db.close().await;
}

#[tokio::test]
async fn test_並行初期化でプールは一度だけ構築される() {
   let Some(url) = database_url() else {
      eprintln!("DATABASE_URL 未設定のためスキップ");
      return;
   };
   let db = Arc::new(Database::new(url));

   // Act: 8 タスクが同時にプールを要求する
   let handles: Vec<_> = (0..8)
      .map(|_| {
         let db = Arc::clone(&db);
         tokio::spawn(async move { db.pool().await.map(|pool| pool as *const _ as usize) })
      })
      .collect();

   // Assert: 全タスクが成功し、同一インスタンスを受け取る
   let mut addrs = Vec::new();
   for handle in handles {
      addrs.push(handle.await.unwrap().expect("初期化が成功すること"));
   }
   assert!(
      addrs.windows(2).all(|w| w[0] == w[1]),
      "すべての呼び出し元が同じプールを観測すること"
   );

   db.close().await;
}

#[tokio::test]
async fn test_パススルー操作がプール経由で実行される() {
   let Some(url) = database_url() else {
      eprintln!("DATABASE_URL 未設定のためスキップ");
      return;
   };
   let db = Database::new(url);

   // acquire: 接続を 1 本取得できる
   let _conn = db.acquire().await.expect("接続を取得できること");

   // fetch_one: 1 行返るクエリ
   let row = db.fetch_one("SELECT 1 + 1").await.unwrap();
   assert_eq!(row.get::<i32, _>(0), 2);

   // fetch_all: 複数行返るクエリ
   let rows = db
      .fetch_all("SELECT * FROM (VALUES (1), (2), (3)) AS t(n)")
      .await
      .unwrap();
   assert_eq!(rows.len(), 3);

   // execute: 行を返さないステートメントの影響行数
   let affected = db.execute("SET statement_timeout = 0").await.unwrap();
   assert_eq!(affected, 0);

   db.close().await;
}

#[tokio::test]
async fn test_closeを複数回呼んでも安全() {
   let Some(url) = database_url() else {
      eprintln!("DATABASE_URL 未設定のためスキップ");
      return;
   };
   let db = Database::new(url);

   let pool = db.pool().await.unwrap();
   assert!(!pool.is_closed());

   db.close().await;
   let closed = db.pool().await.unwrap().is_closed();
   assert!(closed, "クローズ済みであること");

   // 2 回目以降の close も安全
   db.close().await;
   db.close().await;
}
