//! Local keyword responder.
//!
//! Lowercases the message and walks the keyword groups in order; the first
//! group with a keyword contained in the message decides the reply.
//! Matching is plain substring search, so "hi" also matches inside "this".

use super::provider::{ProviderError, ResponseProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstAidTopic {
    Cpr,
    Choking,
    Burns,
    Bleeding,
    Fracture,
    Stroke,
    Greeting,
    Emergency,
    /// No keyword matched.
    Menu,
}

/// Keyword groups in priority order.
const KEYWORD_GROUPS: &[(FirstAidTopic, &[&str])] = &[
    (FirstAidTopic::Cpr, &["cpr", "cardiac", "heart"]),
    (FirstAidTopic::Choking, &["choking", "heimlich"]),
    (FirstAidTopic::Burns, &["burn", "fire"]),
    (FirstAidTopic::Bleeding, &["bleed", "cut", "wound"]),
    (FirstAidTopic::Fracture, &["fracture", "broken", "bone"]),
    (FirstAidTopic::Stroke, &["stroke", "brain"]),
    (FirstAidTopic::Greeting, &["hello", "hi", "hey"]),
    (FirstAidTopic::Emergency, &["emergency", "help"]),
];

/// Pick the topic for a user message.
pub fn classify(text: &str) -> FirstAidTopic {
    let lowered = text.to_lowercase();
    let topic = KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(FirstAidTopic::Menu);
    tracing::debug!(?topic, "Classified chat message");
    topic
}

impl FirstAidTopic {
    pub fn response(&self) -> &'static str {
        match self {
            Self::Cpr => CPR_TEXT,
            Self::Choking => CHOKING_TEXT,
            Self::Burns => BURNS_TEXT,
            Self::Bleeding => BLEEDING_TEXT,
            Self::Fracture => FRACTURE_TEXT,
            Self::Stroke => STROKE_TEXT,
            Self::Greeting => GREETING_TEXT,
            Self::Emergency => EMERGENCY_TEXT,
            Self::Menu => MENU_TEXT,
        }
    }
}

const CPR_TEXT: &str = "🫀 **CPR (Cardiopulmonary Resuscitation)**

1. Check the scene is safe and tap the person, shouting \"Are you okay?\"
2. Call emergency services (108 / 911) or ask someone else to call.
3. Place the heel of your hand on the centre of the chest, other hand on top.
4. Push hard and fast: at least 2 inches (5 cm) deep, 100-120 compressions per minute.
5. If trained, give 2 rescue breaths after every 30 compressions.
6. Continue until help arrives or the person starts breathing.

⚠️ Use an AED as soon as one is available.";

const CHOKING_TEXT: &str = "🫁 **Choking Relief**

1. If the person can cough, encourage them to keep coughing.
2. If they cannot cough, speak or breathe, call emergency services.
3. Give 5 firm back blows between the shoulder blades.
4. Give 5 abdominal thrusts (Heimlich manoeuvre): fist above the navel, pull inward and upward.
5. Alternate back blows and abdominal thrusts until the object comes out.

⚠️ If the person becomes unresponsive, start CPR.";

const BURNS_TEXT: &str = "🔥 **Burn Treatment**

1. Move away from the heat source.
2. Cool the burn under cool (not cold) running water for 10-20 minutes.
3. Remove rings or tight items before swelling starts.
4. Cover loosely with a sterile, non-stick dressing or cling film.
5. Do not apply ice, butter or ointments, and do not burst blisters.

⚠️ Call emergency services for large, deep, facial or electrical burns.";

const BLEEDING_TEXT: &str = "🩸 **Bleeding Control**

1. Apply firm, direct pressure with a clean cloth or dressing.
2. If blood soaks through, add more layers on top; do not remove the first one.
3. Raise the injured area above heart level if possible.
4. Keep pressure on until bleeding stops.

⚠️ Call emergency services for severe bleeding that does not slow down.";

const FRACTURE_TEXT: &str = "🦴 **Fracture First Aid**

1. Keep the injured part still; do not try to straighten it.
2. Support the limb with padding or a splint in the position found.
3. Apply a cold pack wrapped in cloth to reduce swelling.
4. Check circulation below the injury (colour, warmth, feeling).

⚠️ Call emergency services for open fractures or suspected neck or back injuries.";

const STROKE_TEXT: &str = "🧠 **Stroke Recognition (FAST)**

- **F**ace drooping: ask them to smile.
- **A**rm weakness: ask them to raise both arms.
- **S**peech difficulty: ask them to repeat a simple sentence.
- **T**ime to call emergency services immediately.

Note the time symptoms started. Do not give food, drink or medication.";

const GREETING_TEXT: &str = "👋 Hello! I'm here to help with first aid. Ask me about CPR, \
choking, burns, bleeding, fractures or stroke signs.";

const EMERGENCY_TEXT: &str = "🚨 **If this is an emergency, call your local emergency number now \
(108 in India, 911 in the US, 112 in Europe).**

While you wait:
1. Make sure the scene is safe.
2. Check if the person is responsive and breathing.
3. Tell me what happened (e.g. not breathing, choking, bleeding, burn) and I'll guide you.";

const MENU_TEXT: &str = "I can guide you through these first aid topics:

- 🫀 CPR & cardiac arrest
- 🫁 Choking
- 🔥 Burns
- 🩸 Bleeding & wounds
- 🦴 Fractures
- 🧠 Stroke signs

Please describe the situation using one of these topics. For any life-threatening \
situation, call emergency services immediately.";

/// Answers from the keyword table. Never fails and makes no network calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedProvider;

impl ResponseProvider for RuleBasedProvider {
    fn name(&self) -> &'static str {
        "local-rules"
    }

    fn respond(&self, user_text: &str) -> Result<String, ProviderError> {
        Ok(classify(user_text).response().to_string())
    }
}
