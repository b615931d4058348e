/// Where the typewriter is within the current phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Phrase selected, nothing typed yet.
    Idle,
    Typing,
    /// Phrase complete; ticks left before moving on.
    Holding { remaining: u32 },
}

/// Types phrases one character per tick, holds each, then moves to the next.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    typed: usize,
    hold_ticks: u32,
    phase: TypewriterPhase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, hold_ticks: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            typed: 0,
            hold_ticks: hold_ticks.max(1),
            phase: TypewriterPhase::Idle,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Caret is shown until the phrase is complete.
    pub fn is_typing(&self) -> bool {
        !matches!(self.phase, TypewriterPhase::Holding { .. })
    }

    /// Visible prefix of the current phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.typed)
            .map(|(index, _)| index)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// Advance one tick. Returns true when the visible text changed.
    pub fn step(&mut self) -> bool {
        if self.phrases.is_empty() {
            return false;
        }

        match self.phase {
            TypewriterPhase::Idle | TypewriterPhase::Typing => {
                self.phase = TypewriterPhase::Typing;
                self.type_next()
            }
            TypewriterPhase::Holding { remaining } if remaining > 1 => {
                self.phase = TypewriterPhase::Holding {
                    remaining: remaining - 1,
                };
                false
            }
            TypewriterPhase::Holding { .. } => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.typed = 0;
                self.phase = TypewriterPhase::Idle;
                true
            }
        }
    }

    fn type_next(&mut self) -> bool {
        let length = self.phrases[self.phrase_index].chars().count();
        if self.typed < length {
            self.typed += 1;
            true
        } else {
            self.phase = TypewriterPhase::Holding {
                remaining: self.hold_ticks,
            };
            false
        }
    }
}
