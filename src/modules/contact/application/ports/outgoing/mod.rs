pub mod contact_sender;

pub use contact_sender::{ContactSendError, ContactSender};
