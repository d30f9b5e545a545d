//! Derived mood views: chart series, trend, calendar aggregates, summary

pub mod calendar;
pub mod models;
pub mod patterns;
pub mod series;
pub mod summary;
pub mod trend;
pub mod views;

pub use calendar::{color_for_average, daily_averages, month_grid, Calendar};
pub use models::*;
pub use views::DashboardViews;
