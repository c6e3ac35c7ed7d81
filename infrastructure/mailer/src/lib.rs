pub mod noop;
pub mod smtp;
pub mod template;

pub use noop::NoOpMailSender;
pub use smtp::{SmtpMailSender, SmtpSettings};
pub use template::TeraMailRenderer;
