//! Static reference tables.
//!
//! The catalogs are read-only inputs for both the store (classification of
//! activities into plans) and the wizard (the choices it offers). Nothing in
//! here is ever mutated at runtime.

pub mod category;
pub mod observation;
pub mod status;

pub use category::Category;
pub use observation::{
    observation_point, observation_points, observation_points_by_category, ObservationPoint,
};
pub use status::{ActivityStatus, PlanItemStatus};
