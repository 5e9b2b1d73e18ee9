use std::sync::LazyLock;

use crate::models::enums::Difficulty;
use crate::models::Tutorial;

static TUTORIALS: LazyLock<Vec<Tutorial>> = LazyLock::new(|| {
    vec![
        onedrive(
            "1",
            "CPR Training: How to Save a Life",
            "Complete guide to hands-only CPR and rescue breathing techniques",
            "8:42",
            Difficulty::Beginner,
            "https://1drv.ms/v/c/57e603e612ceabeb/IQRsulDWYJDgS6Yi3j5YTzNhAbyYNFnGLtYv0bzY2OWk4HU",
            ("American Heart Association", "2.1M", "CPR"),
        ),
        onedrive(
            "2",
            "Fracture and Sprain Management",
            "Recognition and initial treatment of bone fractures and sprains",
            "9:18",
            Difficulty::Intermediate,
            "https://1drv.ms/v/c/57e603e612ceabeb/IQQIsZBfaVTlS5SPb2GxuzI_ARAL5FWkBkpvXEFTP8bT4U4",
            ("Cleveland Clinic", "754K", "Fractures"),
        ),
        onedrive(
            "3",
            "Burn Treatment and First Aid",
            "How to properly treat different types of burns and prevent infection",
            "6:15",
            Difficulty::Intermediate,
            "https://1drv.ms/v/c/57e603e612ceabeb/IQSCvcXvss3RQafu3DfbaSA1AbOXqOBovCsPXeso7QJpf64",
            ("Johns Hopkins Medicine", "890K", "Burns"),
        ),
        onedrive(
            "4",
            "Wound Care and Bleeding Control",
            "Effective techniques for stopping bleeding and proper wound care",
            "7:31",
            Difficulty::Beginner,
            "https://1drv.ms/v/c/57e603e612ceabeb/IQSNLJo4NWeXTrcQa9S29Z_cAY7i2thOHEZp-aqq3HxEgg4",
            ("American Red Cross", "1.2M", "Bleeding"),
        ),
        onedrive(
            "5",
            "First Aid for Diabetic Emergencies",
            "How to recognize and respond to low blood sugar (hypoglycemia) and high blood sugar (hyperglycemia).",
            "6:45",
            Difficulty::Intermediate,
            "https://1drv.ms/v/c/57e603e612ceabeb/IQTXutVmeo90RYJttJO1HaOdAXoAevGWqqS64JswlzRln-E",
            ("Diabetes UK", "650K", "Diabetes"),
        ),
        onedrive(
            "6",
            "First Aid for Asthma Attacks",
            "Learn how to assist someone during an asthma attack, including proper inhaler use and emergency steps.",
            "7:12",
            Difficulty::Beginner,
            "https://1drv.ms/v/c/57e603e612ceabeb/IQSpvkpoPuAJTpYPyZwHmUgnAWxex5L4kug_20PfQIlG2Ng",
            ("Asthma UK", "720K", "Asthma"),
        ),
    ]
});

/// Tutorial gallery in display order.
pub fn tutorials() -> &'static [Tutorial] {
    &TUTORIALS
}

fn onedrive(
    id: &str,
    title: &str,
    description: &str,
    duration: &str,
    difficulty: Difficulty,
    embed_url: &str,
    (channel, views, category): (&str, &str, &str),
) -> Tutorial {
    Tutorial {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        difficulty,
        youtube_id: None,
        embed_url: Some(embed_url.to_string()),
        channel: channel.to_string(),
        views: views.to_string(),
        category: category.to_string(),
    }
}
