use std::sync::LazyLock;

use crate::models::QuizQuestion;

static QUESTIONS: LazyLock<Vec<QuizQuestion>> = LazyLock::new(|| {
    vec![
        question(
            "1",
            "What is the correct compression depth for adult CPR?",
            &[
                "1-2 inches (2.5-5 cm)",
                "At least 2 inches (5 cm) but no more than 2.4 inches (6 cm)",
                "3-4 inches (7.5-10 cm)",
                "As deep as possible",
            ],
            1,
            "The American Heart Association recommends compression depth of at least 2 inches (5 cm) but no more than 2.4 inches (6 cm) for adult CPR.",
            "CPR",
        ),
        question(
            "2",
            "What should you do FIRST when someone is choking but can still cough?",
            &[
                "Perform abdominal thrusts immediately",
                "Hit them on the back",
                "Encourage them to keep coughing",
                "Call 911 immediately",
            ],
            2,
            "If the person can still cough, encourage them to continue coughing as it's the most effective way to dislodge the object.",
            "Choking",
        ),
        question(
            "3",
            "For a minor burn, how long should you cool it with running water?",
            &["2-3 minutes", "5-10 minutes", "10-20 minutes", "30 minutes"],
            2,
            "Cool minor burns with cool (not cold) running water for 10-20 minutes to reduce pain and prevent further tissue damage.",
            "Burns",
        ),
        question(
            "4",
            "What does the 'F' in FAST (stroke recognition) stand for?",
            &["Fever", "Face drooping", "Fingers tingling", "Feeling dizzy"],
            1,
            "FAST stands for Face drooping, Arm weakness, Speech difficulties, and Time to call emergency services.",
            "Stroke",
        ),
        question(
            "5",
            "When controlling severe bleeding, what should you do if blood soaks through the bandage?",
            &[
                "Remove the bandage and apply a new one",
                "Apply more bandages on top of the first one",
                "Apply a tourniquet immediately",
                "Reduce the pressure",
            ],
            1,
            "Never remove a blood-soaked bandage as it may disrupt clot formation. Instead, apply additional bandages on top and continue pressure.",
            "Bleeding",
        ),
        question(
            "6",
            "What is the recommended compression-to-ventilation ratio for adult CPR?",
            &["15:2", "30:2", "5:1", "Continuous compressions only"],
            1,
            "The current recommendation for adult CPR is 30 chest compressions followed by 2 rescue breaths.",
            "CPR",
        ),
        question(
            "7",
            "If someone has a suspected spinal injury, what should you NOT do?",
            &[
                "Call emergency services",
                "Keep the person still",
                "Move their head to check airways",
                "Monitor their breathing",
            ],
            2,
            "Never move someone with a suspected spinal injury unless they are in immediate danger. Moving their head could cause permanent paralysis.",
            "Spinal Injuries",
        ),
        question(
            "8",
            "What should you apply to a nosebleed to help stop it?",
            &[
                "Tilt head back and apply ice to forehead",
                "Pinch nostrils closed and lean forward",
                "Insert gauze deep into the nostril",
                "Apply pressure to the bridge of the nose",
            ],
            1,
            "Pinch the soft part of the nostrils closed and lean forward to prevent blood from running down the throat.",
            "Bleeding",
        ),
    ]
});

/// The fixed first-aid question set, in presentation order.
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUESTIONS
}

fn question(
    id: &str,
    prompt: &str,
    options: &[&str],
    correct_index: usize,
    explanation: &str,
    category: &str,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
        category: category.to_string(),
    }
}
