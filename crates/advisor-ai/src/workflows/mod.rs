pub mod assessment;
pub mod catalog;
pub mod dashboard;
pub mod narrative;
pub mod recommendation;
pub mod store;
