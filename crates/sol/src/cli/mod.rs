pub mod app;
pub mod install;
pub mod ls;
pub mod remove;
pub mod setup;
pub mod use_ver;
