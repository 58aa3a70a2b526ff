// Narration plumbing shared by every pattern component

pub mod notification;

pub use notification::{Narrator, Notification, NotificationCategory, NotificationLevel};
