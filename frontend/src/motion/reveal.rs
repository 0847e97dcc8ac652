use crate::motion::error::MotionError;
use crate::motion::scroll::ObservationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    NotObserved,
    Invisible,
    Visible,
    /// Fired once with `trigger_once`; terminal.
    Latched,
}

/// What a single intersection report changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    Unchanged,
    Entered,
    Exited,
}

/// Visibility gate driven by intersection ratios.
///
/// Downstream animations start on [`RevealTransition::Entered`] only, so a
/// latched trigger never restarts them.
#[derive(Debug, Clone)]
pub struct ViewportRevealTrigger {
    threshold: f64,
    trigger_once: bool,
    state: RevealState,
    fired: bool,
}

impl ViewportRevealTrigger {
    pub fn new(threshold: f64, trigger_once: bool) -> Result<Self, MotionError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(MotionError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            trigger_once,
            state: RevealState::NotObserved,
            fired: false,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, RevealState::Visible | RevealState::Latched)
    }

    /// False once latched; the caller should release its observer.
    pub fn needs_observation(&self) -> bool {
        self.state != RevealState::Latched
    }

    pub fn observation(&self) -> ObservationState {
        ObservationState {
            progress: 0.0,
            is_visible: self.is_visible(),
            has_fired_once: self.fired,
        }
    }

    pub fn attach(&mut self) {
        if self.state == RevealState::NotObserved {
            self.state = RevealState::Invisible;
        }
    }

    /// Feeds one intersection ratio and returns the resulting visibility.
    pub fn observe(&mut self, ratio: f64) -> bool {
        self.update(ratio);
        self.is_visible()
    }

    pub fn update(&mut self, ratio: f64) -> RevealTransition {
        let inside = ratio.is_finite() && ratio >= self.threshold;
        match (self.state, inside) {
            (RevealState::Latched, _) | (RevealState::NotObserved, _) => RevealTransition::Unchanged,
            (RevealState::Invisible, true) => {
                self.fired = true;
                self.state = if self.trigger_once {
                    RevealState::Latched
                } else {
                    RevealState::Visible
                };
                RevealTransition::Entered
            }
            (RevealState::Visible, false) => {
                self.state = RevealState::Invisible;
                RevealTransition::Exited
            }
            (RevealState::Invisible, false) | (RevealState::Visible, true) => {
                RevealTransition::Unchanged
            }
        }
    }

    /// Element unmounted. A latched trigger keeps its result.
    pub fn detach(&mut self) {
        if self.state != RevealState::Latched {
            self.state = RevealState::NotObserved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(trigger: &mut ViewportRevealTrigger, ratios: &[f64]) -> Vec<bool> {
        trigger.attach();
        ratios.iter().map(|&ratio| trigger.observe(ratio)).collect()
    }

    #[test]
    fn latches_after_first_crossing() {
        let mut trigger = ViewportRevealTrigger::new(0.2, true).unwrap();
        assert_eq!(
            run(&mut trigger, &[0.0, 0.1, 0.25, 0.05]),
            vec![false, false, true, true]
        );
        assert_eq!(trigger.state(), RevealState::Latched);
        assert!(!trigger.needs_observation());
    }

    #[test]
    fn toggles_live_without_trigger_once() {
        let mut trigger = ViewportRevealTrigger::new(0.2, false).unwrap();
        assert_eq!(
            run(&mut trigger, &[0.0, 0.1, 0.25, 0.05]),
            vec![false, false, true, false]
        );
        assert_eq!(trigger.state(), RevealState::Invisible);
        assert!(trigger.needs_observation());
    }

    #[test]
    fn latched_gate_never_reports_a_second_entry() {
        let mut trigger = ViewportRevealTrigger::new(0.2, true).unwrap();
        trigger.attach();
        assert_eq!(trigger.update(0.5), RevealTransition::Entered);
        assert_eq!(trigger.update(0.0), RevealTransition::Unchanged);
        assert_eq!(trigger.update(0.9), RevealTransition::Unchanged);
        assert!(trigger.observation().has_fired_once);
    }

    #[test]
    fn non_latching_gate_reports_each_edge() {
        let mut trigger = ViewportRevealTrigger::new(0.5, false).unwrap();
        trigger.attach();
        let transitions: Vec<_> = [0.6, 0.7, 0.1, 0.5]
            .iter()
            .map(|&ratio| trigger.update(ratio))
            .collect();
        assert_eq!(
            transitions,
            vec![
                RevealTransition::Entered,
                RevealTransition::Unchanged,
                RevealTransition::Exited,
                RevealTransition::Entered
            ]
        );
    }

    #[test]
    fn ignores_reports_before_attach_and_after_detach() {
        let mut trigger = ViewportRevealTrigger::new(0.2, false).unwrap();
        assert_eq!(trigger.state(), RevealState::NotObserved);
        assert!(!trigger.observe(1.0));

        trigger.attach();
        assert!(trigger.observe(1.0));
        trigger.detach();
        assert_eq!(trigger.state(), RevealState::NotObserved);
        assert!(!trigger.observe(1.0));
    }

    #[test]
    fn threshold_must_be_in_unit_interval() {
        assert!(ViewportRevealTrigger::new(1.0, true).is_ok());
        assert_eq!(
            ViewportRevealTrigger::new(0.0, true).unwrap_err(),
            MotionError::InvalidThreshold(0.0)
        );
        assert!(ViewportRevealTrigger::new(1.5, false).is_err());
        assert!(ViewportRevealTrigger::new(f64::NAN, false).is_err());
    }
}
