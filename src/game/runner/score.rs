// Score counter

/// Receives one notification per obstacle successfully passed
pub trait ScoreSink {
    fn record_pass(&mut self);
}

/// Passes made this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl ScoreSink for Score {
    fn record_pass(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Score::new().value(), 0);
        assert_eq!(Score::default(), Score::new());
    }

    #[test]
    fn test_record_pass_increments_by_one() {
        let mut score = Score::new();
        score.record_pass();
        assert_eq!(score.value(), 1);
        score.record_pass();
        assert_eq!(score.value(), 2);
    }

    #[test]
    fn test_saturates() {
        let mut score = Score(u32::MAX);
        score.record_pass();
        assert_eq!(score.value(), u32::MAX);
    }
}
