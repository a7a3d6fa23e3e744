//! Infrastructure layer - concrete implementations of the domain's
//! boundary traits plus runtime concerns (logging, storage selection)

pub mod analytics;
pub mod logging;
pub mod mail;
pub mod storage;
pub mod user;
