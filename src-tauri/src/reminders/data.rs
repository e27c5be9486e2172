//! Message and instruction pools for the built-in reminders

pub const BREATHING_MESSAGES: &[&str] = &[
    "You're doing amazing! Time for a 30-second breathing break 🌟",
    "Great work today! Let's take a mindful moment to breathe 💨",
    "You've been crushing it! Quick breathing break? 🎯",
    "Your focus is incredible! Time to recharge with deep breaths 🧘",
    "Amazing progress! Let's pause for some mindful breathing 🌱",
    "You're on fire today! 30 seconds to breathe and reset 🔥",
    "Fantastic work! Your mind deserves a breathing break 💪",
    "You're killing it! Time for a quick mindfulness moment ✨",
    "Stellar performance! Let's refresh with some deep breaths 🌊",
    "You're unstoppable! Quick pause for mindful breathing? 🚀",
];

pub const BREATHING_INSTRUCTIONS: &[&str] = &[
    "Inhale for 4, hold for 4, exhale for 4 🫁",
    "Take 3 deep breaths, feeling your chest expand 🌬️",
    "Breathe in peace, breathe out tension 😌",
    "4-7-8 breathing: In for 4, hold for 7, out for 8 🧘",
    "Box breathing: In-4, Hold-4, Out-4, Hold-4 📦",
];

pub const WATER_MESSAGES: &[&str] = &[
    "Time to hydrate! Your body needs water 💧",
    "Stay hydrated! Grab a glass of water 🥤",
    "Hydration break! Your brain will thank you 🧠",
    "Don't forget to drink water! Keep that energy up ⚡",
    "Water time! Stay healthy and hydrated 🌊",
    "Your body is calling for water! Listen to it 💙",
    "Hydrate to feel great! Time for some H2O ✨",
    "Water break! Keep your body happy and healthy 😊",
    "Stay refreshed! Time for a hydration boost 🌟",
    "Don't let dehydration slow you down! Drink up 💪",
];

pub const WATER_INSTRUCTIONS: &[&str] = &[
    "Drink a full glass of water (8 oz) 🥃",
    "Take 5 sips of water slowly and mindfully 💧",
    "Hydrate with room temperature water 🌡️",
    "Add a slice of lemon for extra refreshment 🍋",
    "Drink water and take 3 deep breaths 🧘‍♀️",
];

pub const STRETCHING_MESSAGES: &[&str] = &[
    "Time to stretch! Your body needs movement 🤸‍♀️",
    "Stretch break! Release that tension 💪",
    "Your muscles are calling for a stretch! 🦵",
    "Move it or lose it! Quick stretch session 🏃‍♂️",
    "Desk warrior alert! Time to stretch it out 🖥️",
    "Give your spine some love with a good stretch 🧘‍♂️",
    "Flexibility break! Your future self will thank you ✨",
    "Sitting too long? Let's get those muscles moving! 🪑",
    "Stretch it out! Feel the tension melt away 😌",
    "Time to energize with some gentle stretching 🌟",
];

pub const STRETCHING_INSTRUCTIONS: &[&str] = &[
    "Shoulder rolls: 10 backwards, 10 forwards 🔄",
    "Neck stretch: Left, right, hold for 10 seconds each 📱",
    "Arm circles: 10 small, 10 large circles 🔄",
    "Seated spinal twist: Left and right, hold 15 seconds 🌪️",
    "Wrist stretches: Flex and extend, 10 times each ✋",
    "Standing side stretch: Reach up and over, both sides 🌙",
    "Hip flexor stretch: Step back into lunge position 🦵",
    "Cat-cow stretch: Arch and round your back 🐱",
];
