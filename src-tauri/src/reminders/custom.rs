use super::{fallback_instruction, fallback_message, pick_or, ReminderKind, ReminderMessage};
use crate::config::NO_SOUND;
use crate::services::settings::CustomReminderData;

/// A user-defined reminder kind, rebuilt from its persisted record
#[derive(Debug, Clone)]
pub struct CustomReminder {
    id: String,
    name: String,
    icon: String,
    default_interval: u32,
    messages: Vec<String>,
    instructions: Vec<String>,
}

impl CustomReminder {
    pub fn new(data: &CustomReminderData) -> Self {
        Self {
            id: data.id.clone(),
            name: data.name.clone(),
            icon: data.icon.clone(),
            default_interval: data.default_interval,
            messages: data.messages.clone(),
            instructions: data.instructions.clone(),
        }
    }
}

impl ReminderKind for CustomReminder {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn icon(&self) -> &str {
        &self.icon
    }

    fn default_interval(&self) -> u32 {
        self.default_interval
    }

    fn default_sound(&self) -> &str {
        NO_SOUND
    }

    fn random_message(&self) -> String {
        pick_or(&self.messages, || fallback_message(&self.name))
    }

    fn instruction(&self) -> String {
        pick_or(&self.instructions, || fallback_instruction(&self.name))
    }

    fn notification_data(&self) -> ReminderMessage {
        ReminderMessage {
            title: format!("{} {} Reminder", self.icon, self.name),
            message: self.random_message(),
            instruction: self.instruction(),
        }
    }
}
