//! # アプリケーション状態
//!
//! ハンドラ間で共有するリソースを保持する。
//!
//! 旧実装ではデータベースプールがグローバルな singleton だったが、
//! 起動時に構築したハンドルを状態として持ち回る方式に改めた。
//! これにより初期化順序の暗黙の依存と、初期化失敗の握りつぶしがなくなる。

use std::sync::Arc;

use book_api_infra::Database;

/// axum の `with_state` で各ハンドラへ渡す共有状態
///
/// 現時点で参照するハンドラは存在しないが、書籍 CRUD 実装時に
/// `State<AppState>` エクストラクタで取り出して使用する。
#[derive(Clone)]
pub struct AppState {
   /// データベースハンドル（遅延初期化）
   pub db: Arc<Database>,
}

impl AppState {
   /// 共有状態を作成する
   pub fn new(db: Arc<Database>) -> Self {
      Self { db }
   }
}
