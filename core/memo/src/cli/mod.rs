//! CLI 引数解析（clap）
//!
//! 引数を Command に落とすところまでを担当し、実行は main の Runner が行う。

mod args;

pub use args::{parse_args, parse_args_from, print_completion, Config, ParseOutcome};
