/// Out-of-band delivery of user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Delivers notifications to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("Notification: {message}");
    }
}

/// Keeps every notification it receives. Clones share the same message list.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}
