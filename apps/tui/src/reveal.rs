/// Gate in front of forward navigation: the first attempt reveals the
/// hidden side of a card, the second lets the viewer through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealGate {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealGate {
    /// Returns whether navigation may proceed.
    pub fn try_advance(&mut self) -> bool {
        match self {
            Self::Unrevealed => {
                *self = Self::Revealed;
                false
            }
            Self::Revealed => true,
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Unrevealed => Self::Revealed,
            Self::Revealed => Self::Unrevealed,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Unrevealed;
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::RevealGate;

    #[test]
    fn first_attempt_reveals_second_passes() {
        let mut gate = RevealGate::default();
        assert!(!gate.try_advance());
        assert!(gate.is_revealed());
        assert!(gate.try_advance());
        assert!(gate.try_advance());
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut gate = RevealGate::Unrevealed;
        gate.toggle();
        assert_eq!(gate, RevealGate::Revealed);
        gate.toggle();
        assert_eq!(gate, RevealGate::Unrevealed);
    }

    #[test]
    fn manual_reveal_lets_the_first_attempt_through() {
        let mut gate = RevealGate::Unrevealed;
        gate.toggle();
        assert!(gate.try_advance());
    }

    #[test]
    fn reset_hides_again() {
        let mut gate = RevealGate::Revealed;
        gate.reset();
        assert!(!gate.is_revealed());
    }
}
