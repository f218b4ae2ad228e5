//! Jobscope client: typed HTTP boundary of the search service plus the
//! coordinator handle that executes core effects off-thread.
mod api;
mod coordinator;
mod types;

pub use api::{ApiSettings, ReqwestApi, SearchApi};
pub use coordinator::{CoordinatorEvent, CoordinatorHandle};
pub use types::{
    ApiError, ApiErrorKind, DashboardSnapshot, DashboardStats, DiscoveryAck, JobRecord,
    JobTrendPoint, JobsResponse, LocationCount, SalaryRecord, SkillCount, TimeRange,
};
