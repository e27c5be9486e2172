//! Recording fakes for the notification and sound seams

use crate::error::{AppError, Result};
use crate::services::notifications::{Notification, NotificationManager, NotificationSurface};
use crate::services::sound::SoundPlayer;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingSurface {
    pub shown: Mutex<Vec<Notification>>,
    pub fail: bool,
}

impl RecordingSurface {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }

    pub fn titles(&self) -> Vec<String> {
        self.shown.lock().unwrap().iter().map(|n| n.title.clone()).collect()
    }
}

impl NotificationSurface for RecordingSurface {
    fn show(&self, notification: &Notification) -> Result<()> {
        self.shown.lock().unwrap().push(notification.clone());
        if self.fail {
            return Err(AppError::Notification("display unavailable".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSounds {
    pub played: Mutex<Vec<String>>,
}

impl RecordingSounds {
    pub fn played(&self) -> Vec<String> {
        self.played.lock().unwrap().clone()
    }
}

impl SoundPlayer for RecordingSounds {
    fn play_sound(&self, name: &str) {
        self.played.lock().unwrap().push(name.to_string());
    }
}

pub fn recording_manager(
    surface: RecordingSurface,
) -> (NotificationManager, Arc<RecordingSurface>, Arc<RecordingSounds>) {
    let surface = Arc::new(surface);
    let sounds = Arc::new(RecordingSounds::default());
    (
        NotificationManager::new(surface.clone(), sounds.clone()),
        surface,
        sounds,
    )
}
