//! Factories for creating test entities with sensible defaults.

pub mod bid;
pub mod conference;
pub mod helpers;
pub mod matches;
pub mod player;
pub mod season;
pub mod team;
pub mod user;
