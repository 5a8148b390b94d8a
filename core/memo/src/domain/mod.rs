//! ドメイン型（Newtype、enum、ルール）

pub mod category;
pub mod command;
pub mod date_key;
pub mod memo_record;
pub mod month_window;
pub mod outcome;

pub use category::Category;
pub use command::Command;
pub use date_key::DateKey;
pub use memo_record::MemoRecord;
pub use month_window::{DayEntries, MonthWindow};
pub use outcome::{LoadFault, Persistence};
