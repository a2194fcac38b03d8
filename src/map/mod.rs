pub mod boundary;
pub mod consts;
pub mod handlers;
pub mod jitter;
pub mod models;
pub mod projection;
pub mod responses;
