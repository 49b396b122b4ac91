//! Record types projected by the API.
//!
//! These mirror the stored civic data: people, organizations, posts,
//! elections, areas and the small records attached to them. Each entity
//! may carry an auxiliary `extra` side-record; an absent one is `None`.

mod area;
mod election;
mod image;
mod membership;
mod organization;
mod person;
mod popolo;
mod post;

pub use area::*;
pub use election::*;
pub use image::*;
pub use membership::*;
pub use organization::*;
pub use person::*;
pub use popolo::*;
pub use post::*;
