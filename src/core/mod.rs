pub mod engine;
pub mod inspect;
pub mod insight;
pub mod pipeline;
pub mod source;

pub use crate::domain::model::{DashboardBundle, YearlyPopulation};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
