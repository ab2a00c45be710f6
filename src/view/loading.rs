use serde::Serialize;

pub const LOADING_STEPS: [&str; 7] = [
    "Scanning documents...",
    "Extracting key entities...",
    "Identifying relationships...",
    "Building knowledge graph...",
    "Analyzing timeline events...",
    "Generating summaries...",
    "Finalizing case visualization...",
];

/// Time for the step list and the progress bar to run through once.
pub const ANIMATION_MS: u64 = 3_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Done,
    Active,
    Pending,
}

/// Loading-screen animation state, driven by elapsed time from a timer on
/// the JS side. Steps advance every `ANIMATION_MS / 7`, progress by one
/// percent every `ANIMATION_MS / 100`; both stop at their last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadingProgress {
    elapsed_ms: u64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    pub fn current_step(&self) -> usize {
        let step = self.elapsed_ms.saturating_mul(LOADING_STEPS.len() as u64) / ANIMATION_MS;
        (step as usize).min(LOADING_STEPS.len() - 1)
    }

    /// Percent, 0..=100.
    pub fn progress(&self) -> u8 {
        (self.elapsed_ms.saturating_mul(100) / ANIMATION_MS).min(100) as u8
    }

    pub fn step_state(&self, index: usize) -> StepState {
        let current = self.current_step();
        if index < current {
            StepState::Done
        } else if index == current {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = (&'static str, StepState)> + '_ {
        LOADING_STEPS
            .iter()
            .enumerate()
            .map(|(i, label)| (*label, self.step_state(i)))
    }

    pub fn is_complete(&self) -> bool {
        self.progress() == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_step() {
        let p = LoadingProgress::new();
        assert_eq!(p.current_step(), 0);
        assert_eq!(p.progress(), 0);
        assert_eq!(p.step_state(0), StepState::Active);
        assert_eq!(p.step_state(1), StepState::Pending);
    }

    #[test]
    fn test_advances_with_time() {
        let mut p = LoadingProgress::new();
        p.advance(30);
        assert_eq!(p.progress(), 1);

        // 3000 / 7 ~= 428.6 ms per step
        p.advance(400);
        assert_eq!(p.current_step(), 1);
        assert_eq!(p.step_state(0), StepState::Done);
        assert_eq!(p.progress(), 14);
    }

    #[test]
    fn test_clamps_at_end() {
        let mut p = LoadingProgress::new();
        p.advance(10_000);
        assert_eq!(p.current_step(), LOADING_STEPS.len() - 1);
        assert_eq!(p.progress(), 100);
        assert!(p.is_complete());

        p.advance(u64::MAX);
        assert_eq!(p.progress(), 100);
    }

    #[test]
    fn test_steps_listing() {
        let mut p = LoadingProgress::new();
        p.advance(1_000);
        let states: Vec<StepState> = p.steps().map(|(_, s)| s).collect();
        assert_eq!(&states[..3], &[StepState::Done, StepState::Done, StepState::Active]);
        assert_eq!(p.steps().count(), 7);
    }
}
