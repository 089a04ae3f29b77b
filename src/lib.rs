pub mod app;
pub mod code_utils;
pub mod data;
pub mod model;
pub mod progress;
pub mod report;
pub mod storage;
pub mod ui;
pub mod update;
pub mod verify;
pub mod view_models;

pub use app::QuestApp;
