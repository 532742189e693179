pub mod config;
pub mod course;
pub mod event;
pub mod suggest;
