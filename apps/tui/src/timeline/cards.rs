//! Placement of the stacked month cards shown while browsing months.

/// Offsets (relative to the active month) that stay on screen.
pub const VISIBLE_OFFSETS: std::ops::RangeInclusive<i32> = -1..=3;
pub const CARD_RISE: f64 = -30.0;
pub const CARD_SHRINK: f64 = 0.08;
pub const MIN_CARD_SCALE: f64 = 0.76;
const PASSED_BLUR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub entry: usize,
    pub offset: i32,
    pub y: f64,
    pub scale: f64,
    pub blur: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl CardPlacement {
    /// The card that was just passed; drawn blurred and transparent.
    pub const fn is_passed(&self) -> bool {
        self.offset < 0
    }
}

pub fn placement(entry: usize, active: usize) -> Option<CardPlacement> {
    let offset = i32::try_from(entry).ok()? - i32::try_from(active).ok()?;
    if !VISIBLE_OFFSETS.contains(&offset) {
        return None;
    }
    let forward = f64::from(offset.max(0));
    Some(CardPlacement {
        entry,
        offset,
        y: f64::from(offset) * CARD_RISE,
        scale: forward.mul_add(-CARD_SHRINK, 1.0).max(MIN_CARD_SCALE),
        blur: if offset < 0 { PASSED_BLUR } else { 0.0 },
        opacity: if offset < 0 { 0.0 } else { 1.0 },
        z_index: 100 - offset,
    })
}

/// Visible cards ordered back to front; lower offsets end up on top.
pub fn stack(entry_count: usize, active: usize) -> Vec<CardPlacement> {
    let mut cards: Vec<CardPlacement> = (0..entry_count)
        .filter_map(|entry| placement(entry, active))
        .collect();
    cards.sort_by_key(|card| card.z_index);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_around_active_month() {
        let cards = stack(12, 5);
        let mut entries: Vec<usize> = cards.iter().map(|card| card.entry).collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![4, 5, 6, 7, 8]);
        assert!(placement(3, 5).is_none());
        assert!(placement(9, 5).is_none());
    }

    #[test]
    fn window_is_truncated_at_the_ends() {
        let first: Vec<usize> = stack(12, 0).iter().map(|card| card.entry).collect();
        assert_eq!(first.len(), 4);
        assert!(!first.contains(&11));

        let last: Vec<usize> = stack(12, 11).iter().map(|card| card.entry).collect();
        assert_eq!(last.len(), 2);
    }

    #[test]
    fn forward_cards_rise_and_shrink() {
        let active = placement(5, 5).unwrap();
        assert!(active.y.abs() < f64::EPSILON);
        assert!((active.scale - 1.0).abs() < f64::EPSILON);
        assert!((active.opacity - 1.0).abs() < f64::EPSILON);

        let third = placement(8, 5).unwrap();
        assert!((third.y + 90.0).abs() < 1e-9);
        assert!((third.scale - 0.76).abs() < 1e-9);
        assert!(third.blur.abs() < f64::EPSILON);
    }

    #[test]
    fn passed_card_is_blurred_and_hidden() {
        let passed = placement(4, 5).unwrap();
        assert!(passed.is_passed());
        assert!((passed.y - 30.0).abs() < 1e-9);
        assert!((passed.scale - 1.0).abs() < f64::EPSILON);
        assert!((passed.blur - 2.0).abs() < f64::EPSILON);
        assert!(passed.opacity.abs() < f64::EPSILON);
    }

    #[test]
    fn lower_offsets_draw_on_top() {
        let cards = stack(12, 5);
        assert_eq!(cards.last().map(|card| card.entry), Some(4));
        assert_eq!(
            cards
                .iter()
                .rev()
                .find(|card| card.opacity > 0.0)
                .map(|card| card.entry),
            Some(5)
        );
        assert_eq!(cards.first().map(|card| card.entry), Some(8));
        let ordered = cards.windows(2).all(|pair| pair[0].z_index < pair[1].z_index);
        assert!(ordered);
    }
}
