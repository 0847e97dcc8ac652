#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause with the full word on screen before deleting.
    pub delay_ms: u32,
    pub looping: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: 80,
            delete_ms: 50,
            delay_ms: 1500,
            looping: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

/// Types each word, holds it, deletes it, moves on.
///
/// Driven by a timer: call [`Typewriter::tick`] after [`Typewriter::delay`]
/// milliseconds, then re-arm with the new delay.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<&'static str>,
    config: TypewriterConfig,
    word: usize,
    shown: usize,
    phase: Phase,
    delay: u32,
}

impl Typewriter {
    pub fn new(words: &[&'static str], config: TypewriterConfig) -> Self {
        let phase = if words.is_empty() { Phase::Done } else { Phase::Typing };
        Self {
            words: words.to_vec(),
            config,
            word: 0,
            shown: 0,
            phase,
            delay: config.type_ms,
        }
    }

    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|word| word.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    fn word_len(&self) -> usize {
        self.words.get(self.word).map_or(0, |word| word.chars().count())
    }

    fn is_last_word(&self) -> bool {
        self.word + 1 == self.words.len()
    }

    /// Advances one character and returns the delay before the next tick.
    pub fn tick(&mut self) -> u32 {
        match self.phase {
            Phase::Typing => {
                let len = self.word_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    if self.is_last_word() && !self.config.looping {
                        self.phase = Phase::Done;
                    } else {
                        self.phase = Phase::Deleting;
                    }
                    self.delay = self.config.delay_ms;
                } else {
                    self.delay = self.config.type_ms;
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.delay = self.config.type_ms;
                } else {
                    self.delay = self.config.delete_ms;
                }
            }
            Phase::Done => {}
        }
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(looping: bool) -> TypewriterConfig {
        TypewriterConfig {
            type_ms: 10,
            delete_ms: 5,
            delay_ms: 100,
            looping,
        }
    }

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut writer = Typewriter::new(&["Hi", "Yo"], fast(true));
        assert_eq!(writer.text(), "");
        assert_eq!(writer.tick(), 10);
        assert_eq!(writer.text(), "H");
        assert_eq!(writer.tick(), 100);
        assert_eq!(writer.text(), "Hi");
        assert_eq!(writer.tick(), 5);
        assert_eq!(writer.text(), "H");
        assert_eq!(writer.tick(), 10);
        assert_eq!(writer.text(), "");
        writer.tick();
        assert_eq!(writer.text(), "Y");
    }

    #[test]
    fn loops_back_to_first_word() {
        let mut writer = Typewriter::new(&["a", "b"], fast(true));
        let mut seen = Vec::new();
        for _ in 0..8 {
            writer.tick();
            seen.push(writer.text());
        }
        assert_eq!(seen, vec!["a", "", "b", "", "a", "", "b", ""]);
        assert!(!writer.is_done());
    }

    #[test]
    fn stops_on_last_word_without_looping() {
        let mut writer = Typewriter::new(&["a", "bc"], fast(false));
        for _ in 0..10 {
            writer.tick();
        }
        assert!(writer.is_done());
        assert_eq!(writer.text(), "bc");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut writer = Typewriter::new(&["héé"], fast(false));
        writer.tick();
        writer.tick();
        assert_eq!(writer.text(), "hé");
    }

    #[test]
    fn empty_word_list_is_inert() {
        let mut writer = Typewriter::new(&[], fast(true));
        assert!(writer.is_done());
        writer.tick();
        assert_eq!(writer.text(), "");
    }
}
