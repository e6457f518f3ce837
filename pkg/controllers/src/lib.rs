pub mod quota;

pub use quota::{QuotaWatchController, RunSummary};
