//! Problem generation.
//!
//! Problems are small additions and subtractions whose second operand is the
//! quantity drawn for the learner to count. That operand never exceeds
//! [`MAX_VISUAL`], whatever the difficulty tier.

use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Largest quantity the renderer can show legibly.
pub const MAX_VISUAL: u32 = 7;

/// Score at which problems switch to the hard tier.
pub const HARD_TIER_SCORE: u32 = 50;

/// Arithmetic operator of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Apply the operator, returning `None` if the result would be negative.
    pub fn apply(self, lhs: u32, rhs: u32) -> Option<u32> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What the counted quantity is drawn as. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Raised fingers on one or two hands.
    Hands,
    Cake,
    Toy,
    Fruit,
    Star,
}

impl ObjectType {
    pub const ALL: [ObjectType; 5] = [
        ObjectType::Hands,
        ObjectType::Cake,
        ObjectType::Toy,
        ObjectType::Fruit,
        ObjectType::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Hands => "hand-count",
            ObjectType::Cake => "cake",
            ObjectType::Toy => "toy",
            ObjectType::Fruit => "fruit",
            ObjectType::Star => "star",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background colour of the problem card. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Blue,
    Pink,
    Lime,
    Yellow,
    Purple,
    Orange,
    Teal,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Blue,
        Theme::Pink,
        Theme::Lime,
        Theme::Yellow,
        Theme::Purple,
        Theme::Orange,
        Theme::Teal,
    ];
}

/// Difficulty bracket selected by the current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Sums up to 10, minuends from 5 to 10.
    Easy,
    /// Sums up to 20, minuends from 10 to 20.
    Hard,
}

impl Tier {
    pub fn for_score(score: u32) -> Self {
        if score < HARD_TIER_SCORE {
            Tier::Easy
        } else {
            Tier::Hard
        }
    }

    /// Largest allowed sum for addition problems.
    pub fn sum_cap(&self) -> u32 {
        match self {
            Tier::Easy => 10,
            Tier::Hard => 20,
        }
    }

    /// Range the minuend of a subtraction is drawn from.
    pub fn minuend_range(&self) -> RangeInclusive<u32> {
        match self {
            Tier::Easy => 5..=10,
            Tier::Hard => 10..=20,
        }
    }
}

/// Opaque identity of a generated problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemId(Uuid);

impl ProblemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProblemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A single arithmetic problem. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    id: ProblemId,
    num1: u32,
    operator: Operator,
    num2: u32,
    answer: u32,
    object_type: ObjectType,
    theme: Theme,
}

impl Problem {
    /// Build a problem from explicit operands.
    ///
    /// Returns `None` for subtractions that would go below zero. Cosmetics
    /// default to stars on blue.
    pub fn new(num1: u32, operator: Operator, num2: u32) -> Option<Self> {
        let answer = operator.apply(num1, num2)?;
        Some(Self {
            id: ProblemId::new(),
            num1,
            operator,
            num2,
            answer,
            object_type: ObjectType::Star,
            theme: Theme::Blue,
        })
    }

    pub fn with_object_type(mut self, object_type: ObjectType) -> Self {
        self.object_type = object_type;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn id(&self) -> ProblemId {
        self.id
    }

    pub fn num1(&self) -> u32 {
        self.num1
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The visualised quantity.
    pub fn num2(&self) -> u32 {
        self.num2
    }

    pub fn answer(&self) -> u32 {
        self.answer
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Exact-match check; no partial credit.
    pub fn is_correct(&self, answer: u32) -> bool {
        self.answer == answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ?", self.num1, self.operator, self.num2)
    }
}

/// Generate a problem for the given score.
pub fn generate(score: u32) -> Problem {
    generate_with_rng(score, &mut rand::thread_rng())
}

/// Generate with a specific RNG (useful for testing).
pub fn generate_with_rng<R: Rng + ?Sized>(score: u32, rng: &mut R) -> Problem {
    let tier = Tier::for_score(score);
    let operator = if rng.gen_bool(0.5) {
        Operator::Add
    } else {
        Operator::Subtract
    };

    let mut num2 = rng.gen_range(1..=MAX_VISUAL);
    let num1 = match operator {
        Operator::Add => rng.gen_range(1..=tier.sum_cap() - num2),
        Operator::Subtract => {
            let minuend = rng.gen_range(tier.minuend_range());
            // Only reachable in the easy tier: hard minuends start above MAX_VISUAL.
            if num2 > minuend {
                num2 = rng.gen_range(1..=minuend);
            }
            minuend
        }
    };

    let answer = match operator {
        Operator::Add => num1 + num2,
        Operator::Subtract => num1 - num2,
    };

    let object_type = ObjectType::ALL[rng.gen_range(0..ObjectType::ALL.len())];
    let theme = Theme::ALL[rng.gen_range(0..Theme::ALL.len())];

    Problem {
        id: ProblemId::new(),
        num1,
        operator,
        num2,
        answer,
        object_type,
        theme,
    }
}
