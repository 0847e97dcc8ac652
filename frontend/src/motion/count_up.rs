/// A number that counts from 0 to `end` once its reveal gate opens.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    pub end: f64,
    pub duration_ms: u32,
    pub suffix: &'static str,
}

impl CountUp {
    pub fn new(end: f64, duration_ms: u32) -> Self {
        Self {
            end,
            duration_ms,
            suffix: "",
        }
    }

    pub fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Ease-out-expo, reaching `end` exactly at `duration_ms`.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f64 {
            return self.end;
        }
        if elapsed_ms <= 0.0 {
            return 0.0;
        }
        let t = elapsed_ms / self.duration_ms as f64;
        self.end * (1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }

    pub fn display_at(&self, elapsed_ms: f64) -> String {
        format!("{}{}", self.value_at(elapsed_ms).round() as i64, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        let students = CountUp::new(10_000.0, 2500);
        assert_eq!(students.display_at(0.0), "0");
        assert_eq!(students.display_at(2500.0), "10000");
        assert_eq!(students.display_at(9000.0), "10000");
        assert!(students.is_finished(2500.0));
        assert!(!students.is_finished(2499.0));
    }

    #[test]
    fn eases_out() {
        let count = CountUp::new(100.0, 1000);
        let early = count.value_at(100.0);
        let late = count.value_at(900.0) - count.value_at(800.0);
        assert!(early > 10.0);
        assert!(late < early);

        let mut previous = 0.0;
        for elapsed in (0..=1000).step_by(50) {
            let value = count.value_at(elapsed as f64);
            assert!(value >= previous);
            assert!(value <= 100.0);
            previous = value;
        }
    }

    #[test]
    fn appends_suffix() {
        let rate = CountUp::new(95.0, 2500).with_suffix("%");
        assert_eq!(rate.display_at(2500.0), "95%");
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        assert_eq!(CountUp::new(50.0, 0).display_at(0.0), "50");
    }
}
