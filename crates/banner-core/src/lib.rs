pub mod compose;
pub mod composite;
pub mod config;
pub mod consts;
pub mod error;
pub mod filename;
pub mod geometry;
pub mod io;
pub mod transform;
