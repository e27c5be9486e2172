use super::data;
use super::{fallback_instruction, fallback_message, pick_or, ReminderKind, ReminderMessage};
use crate::config::NO_SOUND;
use std::sync::Arc;

/// A reminder kind shipped with the application
#[derive(Debug, Clone, Copy)]
pub struct BuiltinReminder {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub default_interval: u32,
    pub default_sound: &'static str,
    pub messages: &'static [&'static str],
    pub instructions: &'static [&'static str],
}

pub const BREATHING: BuiltinReminder = BuiltinReminder {
    id: "breathing",
    name: "Breathing",
    icon: "🧘",
    title: "🧘 Mindful Breathing Break",
    default_interval: 30,
    default_sound: NO_SOUND,
    messages: data::BREATHING_MESSAGES,
    instructions: data::BREATHING_INSTRUCTIONS,
};

pub const WATER: BuiltinReminder = BuiltinReminder {
    id: "water",
    name: "Water",
    icon: "💧",
    title: "💧 Hydration Break",
    default_interval: 60,
    default_sound: "Relaxing Ocean Waves.mp3",
    messages: data::WATER_MESSAGES,
    instructions: data::WATER_INSTRUCTIONS,
};

pub const STRETCHING: BuiltinReminder = BuiltinReminder {
    id: "stretching",
    name: "Stretching",
    icon: "🤸‍♀️",
    title: "🤸‍♀️ Stretch Break",
    default_interval: 45,
    default_sound: "Spring Forest Nature Sound.mp3",
    messages: data::STRETCHING_MESSAGES,
    instructions: data::STRETCHING_INSTRUCTIONS,
};

/// Built-in kinds in registration order
pub fn builtin_reminders() -> Vec<Arc<dyn ReminderKind>> {
    vec![Arc::new(BREATHING), Arc::new(WATER), Arc::new(STRETCHING)]
}

impl ReminderKind for BuiltinReminder {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn icon(&self) -> &str {
        self.icon
    }

    fn default_interval(&self) -> u32 {
        self.default_interval
    }

    fn default_sound(&self) -> &str {
        self.default_sound
    }

    fn random_message(&self) -> String {
        pick_or(self.messages, || fallback_message(self.name))
    }

    fn instruction(&self) -> String {
        pick_or(self.instructions, || fallback_instruction(self.name))
    }

    fn notification_data(&self) -> ReminderMessage {
        ReminderMessage {
            title: self.title.to_string(),
            message: self.random_message(),
            instruction: self.instruction(),
        }
    }
}
