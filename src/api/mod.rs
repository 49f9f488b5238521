//! HTTP API module for the campus engine.
//!
//! This module exposes the leave accrual and attendance aggregation engines
//! as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AbsenteeRequest, AttendanceRecordRequest, AttendanceRequest, LeaveApplicationRequest,
    LeaveStatsRequest, MAX_LEAVE_DAYS,
};
pub use response::{
    AbsenteeResponse, ApiError, AttendanceResponse, LeaveStatsResponse, MonthlyAttendanceView,
};
pub use state::AppState;
