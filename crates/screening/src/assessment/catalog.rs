use serde::{Deserialize, Serialize};

pub const DOMAIN_COUNT: usize = 4;
pub const QUESTIONS_PER_DOMAIN: usize = 6;
pub const QUESTION_COUNT: usize = DOMAIN_COUNT * QUESTIONS_PER_DOMAIN;

/// Highest score a domain can accumulate (6 questions x max ordinal 4).
/// Reverse scoring keeps each question inside [1, 4], so the bound holds
/// for every domain.
pub const MAX_DOMAIN_SCORE: u8 = (QUESTIONS_PER_DOMAIN as u8) * 4;

/// Developmental domains the questionnaire screens for. Serialized with the
/// human-facing labels so API payloads match the questionnaire frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    Behavioral,
    #[serde(rename = "Cognitive/Attention")]
    CognitiveAttention,
    #[serde(rename = "Motor Skills")]
    MotorSkills,
    #[serde(rename = "Language/Academic")]
    LanguageAcademic,
}

impl Domain {
    /// Canonical iteration order. Flagged-domain lists and report rows follow
    /// this order everywhere so downstream message text stays deterministic.
    pub const fn ordered() -> [Domain; DOMAIN_COUNT] {
        [
            Domain::Behavioral,
            Domain::CognitiveAttention,
            Domain::MotorSkills,
            Domain::LanguageAcademic,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Domain::Behavioral => "Behavioral",
            Domain::CognitiveAttention => "Cognitive/Attention",
            Domain::MotorSkills => "Motor Skills",
            Domain::LanguageAcademic => "Language/Academic",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Domain::Behavioral => 0,
            Domain::CognitiveAttention => 1,
            Domain::MotorSkills => 2,
            Domain::LanguageAcademic => 3,
        }
    }

    pub fn from_label(label: &str) -> Option<Domain> {
        Domain::ordered()
            .into_iter()
            .find(|domain| domain.label() == label)
    }
}

/// Scoring direction for a question. `Reverse` marks questions where the
/// absence of the behavior is the risk signal, so a low ordinal answer must
/// contribute a high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

/// One entry of the static question registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    pub key: &'static str,
    pub prompt: &'static str,
    pub domain: Domain,
    pub direction: Direction,
}

const QUESTIONS: [QuestionSpec; QUESTION_COUNT] = [
    // Behavioral (autism-spectrum indicators)
    QuestionSpec {
        key: "eye_contact",
        prompt: "During a conversation, does your child naturally make and hold eye contact without you reminding them?",
        domain: Domain::Behavioral,
        direction: Direction::Reverse,
    },
    QuestionSpec {
        key: "literal_understanding",
        prompt: "Does your child take things very literally and have trouble understanding jokes, sarcasm, or phrases like 'break a leg'?",
        domain: Domain::Behavioral,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "repetitive_behaviors",
        prompt: "When excited or upset, does your child repeat body movements like flapping their hands, rocking, or spinning?",
        domain: Domain::Behavioral,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "intense_interests",
        prompt: "Does your child become extremely focused on one specific topic (e.g., dinosaurs, trains, a specific video game) and talk about it constantly?",
        domain: Domain::Behavioral,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "change_upset",
        prompt: "Does your child get very upset by small changes, like a different brand of cereal or taking a new route to school?",
        domain: Domain::Behavioral,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "social_difficulty",
        prompt: "Does your child struggle to make friends their own age and prefer to play alone or interact much more with adults?",
        domain: Domain::Behavioral,
        direction: Direction::Forward,
    },
    // Cognitive/Attention (ADHD indicators)
    QuestionSpec {
        key: "seated_difficulty",
        prompt: "Does your child have great difficulty remaining seated during meals, homework, or in classroom settings?",
        domain: Domain::CognitiveAttention,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "forgetful",
        prompt: "Is your child unusually forgetful in daily activities, often losing track of toys, homework, jackets, or water bottles?",
        domain: Domain::CognitiveAttention,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "sidetracked",
        prompt: "Is your child easily sidetracked by background noises or things they see out the window, making it hard to finish tasks?",
        domain: Domain::CognitiveAttention,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "blurting",
        prompt: "Does your child frequently blurt out answers before questions are finished or have trouble waiting for their turn in games?",
        domain: Domain::CognitiveAttention,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "task_avoidance",
        prompt: "Does your child avoid or strongly dislike tasks that require sustained mental effort, like homework or lengthy puzzles?",
        domain: Domain::CognitiveAttention,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "constant_motion",
        prompt: "Would you describe your child as constantly 'on the go,' as if driven by a motor, often running or climbing in inappropriate situations?",
        domain: Domain::CognitiveAttention,
        direction: Direction::Forward,
    },
    // Motor Skills (cerebral palsy / dyspraxia indicators)
    QuestionSpec {
        key: "clumsy",
        prompt: "Compared to other children the same age, does your child seem unusually clumsy, frequently tripping or bumping into things?",
        domain: Domain::MotorSkills,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "fine_motor_tasks",
        prompt: "Does your child struggle with fine motor tasks like buttoning a shirt, using a fork and spoon correctly, or writing neatly?",
        domain: Domain::MotorSkills,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "muscle_tone",
        prompt: "When you pick your child up, do their muscles feel unusually stiff and rigid, or unusually floppy and loose?",
        domain: Domain::MotorSkills,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "hand_preference",
        prompt: "Before the age of 4, does your child strongly prefer using one hand for all tasks like drawing and eating?",
        domain: Domain::MotorSkills,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "coordination_issues",
        prompt: "Does your child have trouble with coordinated movements like jumping with both feet, skipping, or catching a ball with two hands?",
        domain: Domain::MotorSkills,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "crawling_abnormal",
        prompt: "Did your child have an unusual way of crawling (e.g., using one leg, scooting on their bottom) or skip crawling altogether?",
        domain: Domain::MotorSkills,
        direction: Direction::Forward,
    },
    // Language/Academic (dyslexia / language disorder indicators)
    QuestionSpec {
        key: "letter_mixing",
        prompt: "Does your child consistently mix up letters that look similar (like 'b' and 'd') or numbers (like '6' and '9')?",
        domain: Domain::LanguageAcademic,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "phonics_struggle",
        prompt: "When reading, does your child struggle to 'sound out' a new word, even after being shown the phonics rules multiple times?",
        domain: Domain::LanguageAcademic,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "reading_avoidance",
        prompt: "Does your child read slowly, guess words based on the first letter, or avoid reading for fun because it is so difficult?",
        domain: Domain::LanguageAcademic,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "multi_step_instructions",
        prompt: "Does your child have trouble remembering and following multi-step instructions, like 'Please go upstairs, get your shoes, and put them by the door'?",
        domain: Domain::LanguageAcademic,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "word_finding",
        prompt: "Does your child frequently mispronounce long words (e.g., saying 'aminal' for 'animal') or have trouble finding the right word when speaking?",
        domain: Domain::LanguageAcademic,
        direction: Direction::Forward,
    },
    QuestionSpec {
        key: "verbal_writing_gap",
        prompt: "Is there a major difference between your child's verbal skills and their writing? (e.g., They can tell a great story but can't write it down).",
        domain: Domain::LanguageAcademic,
        direction: Direction::Forward,
    },
];

/// Immutable registry of the 24 screening questions. Built once at process
/// start and shared by reference; construction is the only mutation.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: &'static [QuestionSpec; QUESTION_COUNT],
}

impl QuestionCatalog {
    /// The standard questionnaire shipped with the product.
    pub fn standard() -> Self {
        Self {
            questions: &QUESTIONS,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&QuestionSpec> {
        self.questions.iter().find(|question| question.key == key)
    }

    /// All questions in presentation order (grouped by domain).
    pub fn questions(&self) -> impl Iterator<Item = &QuestionSpec> {
        self.questions.iter()
    }

    /// The six questions belonging to one domain, in table order.
    pub fn questions_of(&self, domain: Domain) -> impl Iterator<Item = &QuestionSpec> {
        self.questions
            .iter()
            .filter(move |question| question.domain == domain)
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
