// Job listing view logic: pure filtering, explicit view state, and the
// search-input debouncer

pub mod debounce;
pub mod filter;
pub mod view;

pub use debounce::Debouncer;
pub use filter::{filter_jobs, ScheduleFilter};
pub use view::{ListingEvent, ListingView};
