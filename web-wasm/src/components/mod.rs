//! UIコンポーネント

pub mod header;
pub mod loading;
pub mod vehicle_create;
pub mod vehicle_search;
pub mod vehicle_list;
pub mod image_analysis;
