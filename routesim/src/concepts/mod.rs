pub mod metric;
pub mod route;
pub mod topology;
