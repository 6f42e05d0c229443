pub mod dashboard;
pub mod locations;
pub mod map;
pub mod overlays;
pub mod search;
pub mod trends;
