//! 永続スロット Outbound ポート
//!
//! ホストのローカル永続ストアの「名前付きスロット 1 つ」に UTF-8 テキストを読み書きする。
//! メモストアはストア全体をこのスロット 1 つに丸ごと書き戻す。

use common::error::Error;

pub trait DurableStorage: Send + Sync {
    /// スロットの内容。未作成なら Ok(None)。
    fn read(&self, slot: &str) -> Result<Option<String>, Error>;

    /// スロットを contents で置き換える。途中状態は read から観測できないこと。
    fn write(&self, slot: &str, contents: &str) -> Result<(), Error>;
}
