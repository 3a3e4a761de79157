//! # 書籍ハンドラ
//!
//! 現時点では API の疎通確認用に固定文字列を返すだけのプレースホルダ。
//! 書籍 CRUD の実装時に [`crate::state::AppState`] 経由で
//! データベースハンドルを受け取る形に置き換える。

/// ルート `/` ハンドラ
///
/// どの HTTP メソッドに対しても `200 OK` と固定のプレーンテキストを返す。
/// リクエストの内容は一切参照せず、I/O も行わない。
pub async fn book_index() -> &'static str {
   "Hello Book API!!"
}
