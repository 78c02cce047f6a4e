//! UI Components

pub mod alert;
pub mod footer;
pub mod header;

pub use alert::{Alert, Notice, NoticeKind};
pub use footer::Footer;
pub use header::Header;
