//! tired-core: domain logic for the Tired task planner.
//!
//! Everything here is synchronous and side-effect-free over in-memory
//! collections; persistence and UI live in other layers.

pub mod autoplan;
pub mod calendar;
pub mod load;
pub mod membership;
pub mod session;
pub mod task;
pub mod time;

pub use autoplan::{AutoPlanOptions, WeekPlanner, DEFAULT_WEEKLY_CAPACITY_MINUTES};
pub use calendar::{week_start_of, Calendar, CivilCalendar};
pub use load::{daily_minutes, is_overloaded, weekly_load};
pub use membership::{dedup_memberships, Membership, Role};
pub use session::SessionCache;
pub use task::Task;
pub use time::{local_end_of_day_to_utc, parse_local_deadline_to_utc};
