//! Notification infrastructure module

mod notify_send;

pub use notify_send::NotifySendNotifier;
