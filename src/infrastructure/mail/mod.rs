//! Mail infrastructure - transports and the composing service

mod console;
mod service;

pub use console::ConsoleMailer;
pub use service::MailService;
