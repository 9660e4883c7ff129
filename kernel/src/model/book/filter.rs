use std::collections::HashSet;

use strum::IntoEnumIterator;

use super::{Book, BookStatus};

/// 取得済みの蔵書一覧に対する絞り込み条件。
///
/// ステータスのチェックリストと全文検索クエリの積で表示対象を決める。
/// 検索対象の文字列はタイトル・著者・ISBN・説明文をこの順に半角スペース
/// 1 つで連結して小文字化したもの。クエリはトリムや正規化をせず、
/// 空白文字も文字どおり照合する。
#[derive(Debug, Clone)]
pub struct BookFilter {
    statuses: HashSet<BookStatus>,
    query: String,
}

impl Default for BookFilter {
    // 初期状態はすべてのステータスが有効でクエリは空
    fn default() -> Self {
        Self {
            statuses: BookStatus::iter().collect(),
            query: String::new(),
        }
    }
}

impl BookFilter {
    // 照合は小文字同士で行うためクエリは設定時に小文字化しておく
    pub fn new(statuses: impl IntoIterator<Item = BookStatus>, query: impl Into<String>) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
            query: query.into().to_lowercase(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into().to_lowercase();
    }

    pub fn enable_status(&mut self, status: BookStatus) {
        self.statuses.insert(status);
    }

    pub fn disable_status(&mut self, status: BookStatus) {
        self.statuses.remove(&status);
    }

    // ステータス条件と検索条件の両方を満たす場合のみ表示対象とする
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_status(book) && self.matches_query(book)
    }

    // 入力の並び順を保ったまま表示対象を抽出する。純粋な同期処理で、
    // 同じ入力に対しては常に同じ結果を返す
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|book| self.matches(book)).collect()
    }

    // 有効なステータス集合が空のときは「すべて表示」ではなく何も表示しない
    fn matches_status(&self, book: &Book) -> bool {
        self.statuses.contains(&book.status)
    }

    // 空のクエリはすべての蔵書にマッチする
    fn matches_query(&self, book: &Book) -> bool {
        if self.query.is_empty() {
            return true;
        }
        searchable_text(book).contains(&self.query)
    }
}

fn searchable_text(book: &Book) -> String {
    format!(
        "{} {} {} {}",
        book.title, book.author, book.isbn, book.description
    )
    .to_lowercase()
}
