pub mod charts;
pub mod loading;
pub mod map;
pub mod popup;
pub mod tables;
