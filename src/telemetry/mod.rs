pub mod config;
pub mod ctx;
pub mod emit;
pub mod ops;

use ctx::LogCtx;

pub fn feed() -> LogCtx<ops::feed::Feed> { LogCtx::new(config::logs_are_json()) }
pub fn create() -> LogCtx<ops::create::Create> { LogCtx::new(config::logs_are_json()) }
pub fn delete() -> LogCtx<ops::delete::Delete> { LogCtx::new(config::logs_are_json()) }
pub fn list() -> LogCtx<ops::list::List> { LogCtx::new(config::logs_are_json()) }
