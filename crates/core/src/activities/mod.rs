//! Activities module - domain models, services, and traits.

mod activities_constants;
mod activities_errors;
mod activities_model;
mod activities_service;
mod activities_traits;

#[cfg(test)]
mod activities_service_tests;


pub use activities_constants::*;
pub use activities_errors::{ActivityError, ArchiveFailure};
pub use activities_model::{
    coerce_amount, compare_activities, deserialize_amount_input, sort_activities, Activity,
    ActivitySummary, CategorySummary, ClearAllResult, NewActivity,
};
pub use activities_service::ActivityService;
pub use activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
