// Library for tests to access modules

pub mod app;
pub mod config;
pub mod dispatcher;
pub mod docker_repo;
pub mod error;
pub mod models;
pub mod poller;
pub mod runner;
pub mod sampler;
pub mod sorter;
pub mod tailer;
pub mod terminal;
pub mod ui;
pub mod version;
pub mod worker;
