//! Text drawings of counted quantities.
//!
//! Shared by the TUI problem card and headless output.

use buddies_core::{Digit, Hand, IconGrid, ObjectType, Visual};

/// Icons on the menu banner.
pub const MENU_ICONS: [ObjectType; 4] = [
    ObjectType::Cake,
    ObjectType::Hands,
    ObjectType::Toy,
    ObjectType::Star,
];

const HAND_GAP: &str = "   ";

pub fn object_glyph(object: ObjectType) -> &'static str {
    match object {
        ObjectType::Hands => "✋",
        ObjectType::Cake => "🎂",
        ObjectType::Toy => "🎮",
        ObjectType::Fruit => "🍎",
        ObjectType::Star => "⭐",
    }
}

/// What the learner counts, in plural.
pub fn object_caption(object: ObjectType) -> &'static str {
    match object {
        ObjectType::Hands => "fingers",
        ObjectType::Cake => "cakes",
        ObjectType::Toy => "toys",
        ObjectType::Fruit => "apples",
        ObjectType::Star => "stars",
    }
}

/// Draw a visual as lines of text.
pub fn visual_lines(visual: &Visual, wide: bool) -> Vec<String> {
    match visual {
        Visual::Hands(hands) => hands_lines(hands),
        Visual::Icons(grid) => icon_lines(grid, wide),
    }
}

/// Two-line drawing of a hand: raised fingers above a palm, thumb at the side.
///
/// Folded fingers show as `.` so the learner counts only the raised ones.
fn hand_art(hand: &Hand) -> [String; 2] {
    let finger = |digit| if hand.is_extended(digit) { '|' } else { '.' };
    let thumb = if hand.is_extended(Digit::Thumb) { '\\' } else { ' ' };
    [
        format!(
            "  {} {} {} {} ",
            finger(Digit::Index),
            finger(Digit::Middle),
            finger(Digit::Ring),
            finger(Digit::Pinky)
        ),
        format!("{thumb}(_______)"),
    ]
}

fn hands_lines(hands: &[Hand]) -> Vec<String> {
    if hands.is_empty() {
        return Vec::new();
    }
    let drawings: Vec<[String; 2]> = hands.iter().map(hand_art).collect();
    (0..2)
        .map(|row| {
            drawings
                .iter()
                .map(|art| art[row].as_str())
                .collect::<Vec<_>>()
                .join(HAND_GAP)
        })
        .collect()
}

fn icon_lines(grid: &IconGrid, wide: bool) -> Vec<String> {
    let columns = grid.columns(wide) as usize;
    let glyph = object_glyph(grid.object);
    let mut remaining = grid.count as usize;
    let mut lines = Vec::new();
    while remaining > 0 {
        let in_row = remaining.min(columns);
        lines.push(vec![glyph; in_row].join(" "));
        remaining -= in_row;
    }
    lines
}

/// The decorative icon row on the menu.
pub fn menu_icon_row() -> String {
    MENU_ICONS
        .iter()
        .map(|object| object_glyph(*object))
        .collect::<Vec<_>>()
        .join("  ")
}
