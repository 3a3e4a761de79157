//! # Book API 共有ユーティリティ
//!
//! サービス横断で使用するユーティリティを集約するクレート。
//! 現時点では Observability 基盤（トレーシング初期化）のみを提供する。
//!
//! ## モジュール構成
//!
//! - [`observability`] - トレーシング初期化とログ出力形式の設定

pub mod observability;

pub use observability::{LogFormat, TracingConfig, init_tracing};
