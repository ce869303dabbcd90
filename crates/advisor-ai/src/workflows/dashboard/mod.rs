//! Per-user dashboard: derived progress statistics and the executive
//! summary narrative.

mod insights;
mod router;
mod summary;
pub mod views;

pub use router::dashboard_router;
pub use summary::DashboardService;
