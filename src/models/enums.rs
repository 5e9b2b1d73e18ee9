use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Sender {
    User => "user",
    Assistant => "assistant",
});

str_enum!(Difficulty {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

str_enum!(ScoreTier {
    Excellent => "excellent",
    Good => "good",
    KeepLearning => "keep_learning",
});

impl ScoreTier {
    /// Tier for a percentage score: 80+ excellent, 60+ good.
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::KeepLearning
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good!",
            Self::KeepLearning => "Keep Learning!",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Excellent => "🏆 First Aid Expert",
            Self::Good => "✅ Well Prepared",
            Self::KeepLearning => "📚 Room for Improvement",
        }
    }
}
