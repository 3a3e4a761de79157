//! # Book API インフラ層
//!
//! データベースなど外部リソースへの接続管理を担当するクレート。
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続プールの作成と共有ハンドル
//! - [`error`] - インフラ層エラー定義

pub mod db;
pub mod error;

pub use db::{Database, create_pool, pool_options};
pub use error::InfraError;
