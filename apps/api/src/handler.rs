//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは将来のドメイン層に委譲
//!
//! ## 今後追加予定のハンドラ
//!
//! - `book`: 書籍 CRUD（一覧、取得、登録、更新、削除）
//! - `author`: 著者管理
//! - `loan`: 貸出管理

pub mod book;

pub use book::book_index;
