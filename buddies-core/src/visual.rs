//! Countable layouts for the visualised operand.
//!
//! [`render`] is a pure mapping from an object type and a count to a layout
//! the front end can draw: raised fingers on hands, or a grid of icons.

use crate::problem::ObjectType;

/// Digits on one hand.
pub const FINGERS_PER_HAND: u32 = 5;

/// Above this many icons the grid widens.
const NARROW_GRID_MAX: u32 = 5;

/// A digit of a hand, in counting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digit {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Digit {
    /// Counting order: thumb first, then the four fingers.
    pub const ORDER: [Digit; 5] = [
        Digit::Thumb,
        Digit::Index,
        Digit::Middle,
        Digit::Ring,
        Digit::Pinky,
    ];
}

/// One hand with its first `extended` digits raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    extended: u32,
}

impl Hand {
    fn new(extended: u32) -> Self {
        Self {
            extended: extended.min(FINGERS_PER_HAND),
        }
    }

    pub fn extended_count(&self) -> u32 {
        self.extended
    }

    pub fn is_extended(&self, digit: Digit) -> bool {
        Digit::ORDER
            .iter()
            .take(self.extended as usize)
            .any(|d| *d == digit)
    }

    /// Raised digits in counting order.
    pub fn extended_digits(&self) -> impl Iterator<Item = Digit> {
        Digit::ORDER.into_iter().take(self.extended as usize)
    }
}

/// A grid of identical icon cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGrid {
    pub object: ObjectType,
    pub count: u32,
}

impl IconGrid {
    /// Column count; wide layouts may use five columns for larger counts.
    pub fn columns(&self, wide: bool) -> u32 {
        match (self.count > NARROW_GRID_MAX, wide) {
            (false, _) => 3,
            (true, false) => 4,
            (true, true) => 5,
        }
    }

    pub fn rows(&self, wide: bool) -> u32 {
        self.count.div_ceil(self.columns(wide))
    }
}

/// Drawable layout for a counted quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    Hands(Vec<Hand>),
    Icons(IconGrid),
}

impl Visual {
    /// Number of countable units shown.
    pub fn count(&self) -> u32 {
        match self {
            Visual::Hands(hands) => hands.iter().map(Hand::extended_count).sum(),
            Visual::Icons(grid) => grid.count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Map an object type and count to a layout.
///
/// Counts are not validated. Zero yields an empty layout (no hands, or a grid
/// with no cells). Hands fill up five at a time, so a count above ten simply
/// gets more hands; icon grids draw as many cells as asked.
pub fn render(object: ObjectType, count: u32) -> Visual {
    match object {
        ObjectType::Hands => {
            let mut hands = Vec::new();
            let mut remaining = count;
            while remaining > 0 {
                let raised = remaining.min(FINGERS_PER_HAND);
                hands.push(Hand::new(raised));
                remaining -= raised;
            }
            Visual::Hands(hands)
        }
        object => Visual::Icons(IconGrid { object, count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(visual: &Visual) -> &[Hand] {
        match visual {
            Visual::Hands(hands) => hands,
            other => panic!("expected hands, got {other:?}"),
        }
    }

    #[test]
    fn test_three_fingers_on_one_hand() {
        let visual = render(ObjectType::Hands, 3);
        let hands = hands(&visual);
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].extended_count(), 3);
        assert_eq!(
            hands[0].extended_digits().collect::<Vec<_>>(),
            vec![Digit::Thumb, Digit::Index, Digit::Middle]
        );
        assert!(!hands[0].is_extended(Digit::Ring));
    }

    #[test]
    fn test_seven_is_five_and_two() {
        let visual = render(ObjectType::Hands, 7);
        let hands = hands(&visual);
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].extended_count(), 5);
        assert_eq!(hands[1].extended_count(), 2);
        assert!(hands[1].is_extended(Digit::Thumb));
        assert!(hands[1].is_extended(Digit::Index));
        assert!(!hands[1].is_extended(Digit::Middle));
        assert_eq!(visual.count(), 7);
    }

    #[test]
    fn test_five_is_one_full_hand() {
        let visual = render(ObjectType::Hands, 5);
        let hands = hands(&visual);
        assert_eq!(hands.len(), 1);
        assert!(Digit::ORDER.iter().all(|d| hands[0].is_extended(*d)));
    }

    #[test]
    fn test_star_grid() {
        let visual = render(ObjectType::Star, 5);
        match visual {
            Visual::Icons(grid) => {
                assert_eq!(grid.object, ObjectType::Star);
                assert_eq!(grid.count, 5);
                assert_eq!(grid.columns(false), 3);
                assert_eq!(grid.rows(false), 2);
            }
            other => panic!("expected icons, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_widens_above_five() {
        let Visual::Icons(grid) = render(ObjectType::Cake, 6) else {
            panic!("expected icons");
        };
        assert_eq!(grid.columns(false), 4);
        assert_eq!(grid.columns(true), 5);
        assert_eq!(grid.rows(false), 2);
        assert_eq!(grid.rows(true), 2);
    }

    #[test]
    fn test_zero_is_empty() {
        assert!(render(ObjectType::Hands, 0).is_empty());
        assert_eq!(render(ObjectType::Hands, 0), Visual::Hands(vec![]));
        let icons = render(ObjectType::Fruit, 0);
        assert!(icons.is_empty());
        let Visual::Icons(grid) = icons else {
            panic!("expected icons");
        };
        assert_eq!(grid.rows(false), 0);
    }

    #[test]
    fn test_large_counts_degrade_gracefully() {
        let visual = render(ObjectType::Hands, 12);
        let counts: Vec<_> = hands(&visual).iter().map(Hand::extended_count).collect();
        assert_eq!(counts, vec![5, 5, 2]);

        assert_eq!(render(ObjectType::Toy, 40).count(), 40);
    }
}
