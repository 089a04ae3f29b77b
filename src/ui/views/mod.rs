pub mod home;
pub mod pending;
pub mod quest_detail;
pub mod quest_map;
pub mod quiz;
pub mod summary;
