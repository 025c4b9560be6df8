//! Coaching content per stat.

use std::collections::HashMap;

use crate::models::{AdviceTemplate, Stat};

/// Stat → coaching template, with a generic fallback.
#[derive(Debug, Clone)]
pub struct AdviceCatalog {
    entries: HashMap<Stat, AdviceTemplate>,
    fallback: AdviceTemplate,
}

impl AdviceCatalog {
    /// The shipped catalog with an entry for every tracked stat.
    pub fn builtin() -> Self {
        Self::from_entries(Stat::ALL.iter().map(|s| (*s, builtin_template(*s))))
    }

    /// A catalog holding only the given entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (Stat, AdviceTemplate)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback: fallback_template(),
        }
    }

    /// Catalog entry for a stat, if one exists.
    pub fn get(&self, stat: Stat) -> Option<&AdviceTemplate> {
        self.entries.get(&stat)
    }

    /// Template for any stat name, falling back to generic advice.
    pub fn template_for(&self, stat: &str) -> &AdviceTemplate {
        stat.parse::<Stat>()
            .ok()
            .and_then(|s| self.entries.get(&s))
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &AdviceTemplate {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fallback_template() -> AdviceTemplate {
    AdviceTemplate::new(
        "General Improvement",
        "Focus on improving this area through consistent practice.",
        &["Custom training packs", "Casual practice", "Replay review"],
    )
}

fn builtin_template(stat: Stat) -> AdviceTemplate {
    match stat {
        Stat::ShootingPercentage => AdviceTemplate::new(
            "Shot Accuracy & Quality",
            "Your shooting percentage is below average for your rank. Focus on taking higher \
             quality shots rather than just shooting whenever possible. Practice shooting packs \
             in training and work on powershots and accurate placement. Wait for better \
             opportunities rather than taking low-percentage shots.",
            &[
                "Shooting Consistency by Poquito",
                "Wall Shots Training",
                "Powershot Training Pack",
                "Ground Shots by Wayprotein",
            ],
        ),
        Stat::Saves => AdviceTemplate::new(
            "Defensive Positioning & Saves",
            "You're making fewer saves than typical for your rank. This often indicates \
             positioning issues - either you're too far forward or arriving late to defense. \
             Practice shadow defense (staying between the ball and goal) and reading opponent \
             shots earlier. Work on challenging at the right time vs. sitting in net.",
            &[
                "Shadow Defense Tutorial by Virge",
                "Save Training Packs",
                "Backboard Defense Practice",
                "Defensive Positioning Workshop",
            ],
        ),
        Stat::Assists => AdviceTemplate::new(
            "Passing & Team Play",
            "Your assist numbers suggest you might be ball-chasing or not setting up teammates \
             effectively. Work on recognizing when to pass instead of shoot. Practice infield \
             passes and centers. Learn to read your teammate's position and trust them to \
             finish plays you set up.",
            &[
                "Passing Plays Workshop",
                "Infield Pass Training",
                "Center Ball Practice",
                "Team Play Tutorial by Thanovic",
            ],
        ),
        Stat::BoostUsage => AdviceTemplate::new(
            "Boost Management & Efficiency",
            "Your boost usage patterns need improvement. Good boost management means collecting \
             small pads efficiently and not always going for corner boost. Stay aware of your \
             boost level and plan your rotations around boost availability. Learn to conserve \
             boost and make plays with less.",
            &[
                "Small Pad Collection Routes",
                "Boost Starvation Drills",
                "Efficient Rotation Practice",
                "No-Boost Challenge Games",
            ],
        ),
        Stat::TimeSupersonic => AdviceTemplate::new(
            "Speed & Momentum Control",
            "You're not maintaining supersonic speed enough. Higher ranks spend more time at max \
             speed, which improves both offense and defense. Work on powerslide cuts to maintain \
             speed through turns, wave dashing for speed boosts, and keeping momentum through \
             rotations. Speed is crucial for beating opponents to the ball.",
            &[
                "Speed Flip Tutorial by SpookLuke",
                "Wave Dash Practice",
                "Momentum Maintenance Workshop",
                "Fast Aerials Training",
            ],
        ),
        Stat::AvgSpeed => AdviceTemplate::new(
            "Overall Game Speed",
            "Your average speed is lower than your rank peers. This affects everything - \
             rotating back, challenging balls, and maintaining pressure. Focus on faster \
             rotations, better boost management, and maintaining momentum. Don't stop moving \
             unnecessarily. Speed creates opportunities and prevents opponents from setting up.",
            &[
                "Fast Aerials Workshop",
                "Speed Challenge Custom Games",
                "Quick Rotation Drills",
                "Recovery Training",
            ],
        ),
        Stat::Score => AdviceTemplate::new(
            "Overall Game Impact",
            "Your overall score suggests you're not impacting games as much as you could. This \
             is often a positioning and game sense issue rather than mechanics. Focus on being \
             in the right place at the right time. Watch your replays to see where you could \
             have made better decisions. Score comes from consistent good positioning and smart \
             plays.",
            &[
                "Replay Analysis Session",
                "Positioning Tutorials by Virge",
                "Rotation Practice Modes",
                "Game Sense Workshop by Thanovic",
            ],
        ),
        Stat::Goals => AdviceTemplate::new(
            "Finishing & Offensive Pressure",
            "You're scoring fewer goals than average for your rank. This could mean you're not \
             getting into good offensive positions, or missing opportunities when they arise. \
             Work on recognizing scoring chances, improving your shot power and accuracy, and \
             following up on your shots. Don't be afraid to be aggressive when the opportunity \
             is there.",
            &[
                "Finishing Training Packs",
                "Redirect Practice",
                "Follow-up Shot Training",
                "Offensive Positioning Workshop",
            ],
        ),
        Stat::Shots => AdviceTemplate::new(
            "Shot Volume & Pressure",
            "You're taking fewer shots than typical for your rank. This could mean you're too \
             passive offensively or not recognizing opportunities. More shots means more \
             pressure on opponents and more chances to score. Work on recognizing when you have \
             space to shoot and taking more chances.",
            &[
                "Shot Variety Training",
                "Quick Shot Practice",
                "Pressure Training",
                "Offensive Awareness Workshop",
            ],
        ),
        Stat::TimeLowBoost => AdviceTemplate::new(
            "Low Boost Management",
            "You're spending too much time with low boost. This limits your options and makes \
             you vulnerable. Focus on collecting small boost pads more efficiently, planning \
             your rotations around boost availability, and not wasting boost unnecessarily. \
             Learn to play effectively even with low boost.",
            &[
                "Small Pad Collection Practice",
                "Low Boost Challenge",
                "Boost Path Awareness Training",
                "Conservative Boost Usage Workshop",
            ],
        ),
    }
}
