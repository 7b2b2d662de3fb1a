/// Notification surface for block notices
use log::info;

/// Shows a short message to the user. Fire-and-forget.
pub trait NotificationSurface {
    fn show(&self, message: &str);
}

/// Writes notices to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationSurface for LogNotifier {
    fn show(&self, message: &str) {
        info!("Notice: {}", message);
    }
}

impl<N: NotificationSurface + ?Sized> NotificationSurface for &N {
    fn show(&self, message: &str) {
        (**self).show(message)
    }
}
