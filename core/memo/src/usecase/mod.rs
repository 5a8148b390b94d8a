pub mod calendar;
pub mod memo_store;
pub mod month_aggregator;

pub use calendar::CalendarUseCase;
pub use memo_store::{LoadOutcome, MemoStore, DEFAULT_SLOT};
pub use month_aggregator::MonthAggregator;
