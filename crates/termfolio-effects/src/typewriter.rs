//! Typewriter reveal: text appears one character at a time.
//!
//! Timing follows a delay-then-interval schedule. After `delay_ms`, an
//! interval of `speed_ms` is armed; each firing appends one character, and
//! the firing after the last character disarms the interval and reports
//! completion.

/// Default milliseconds per character.
pub const DEFAULT_SPEED_MS: u32 = 50;

/// Configuration for a typewriter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterParams {
    pub text: String,
    pub speed_ms: u32,
    pub delay_ms: u32,
}

impl TypewriterParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speed_ms: DEFAULT_SPEED_MS,
            delay_ms: 0,
        }
    }

    pub fn with_speed(mut self, speed_ms: u32) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// Notification emitted by [`Typewriter::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// Every character has been revealed.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting out the initial delay.
    Delay { remaining_ms: u32 },
    /// Interval armed; next firing in `until_next_ms`.
    Typing { until_next_ms: u32 },
    Done,
    Cancelled,
}

/// Animated text reveal.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Text the effect was created with. Updates only restart when the new
    /// text differs from this.
    original_text: String,
    chars: Vec<char>,
    speed_ms: u32,
    index: usize,
    output: String,
    phase: Phase,
}

impl Typewriter {
    /// Start a run. The output starts empty.
    pub fn new(params: TypewriterParams) -> Self {
        let mut tw = Self {
            original_text: params.text.clone(),
            chars: Vec::new(),
            speed_ms: 1,
            index: 0,
            output: String::new(),
            phase: Phase::Cancelled,
        };
        tw.arm(&params);
        tw
    }

    /// Clear the output and arm a fresh schedule, replacing whatever was
    /// armed before. Two schedules never overlap.
    fn arm(&mut self, params: &TypewriterParams) {
        self.chars = params.text.chars().collect();
        self.speed_ms = params.speed_ms.max(1);
        self.index = 0;
        self.output.clear();
        self.phase = Phase::Delay {
            remaining_ms: params.delay_ms,
        };
    }

    /// Advance the clock by `dt_ms`.
    pub fn tick(&mut self, dt_ms: u32) -> Option<TypewriterEvent> {
        let mut budget = dt_ms;
        loop {
            match self.phase {
                Phase::Delay { remaining_ms } => {
                    if budget < remaining_ms {
                        self.phase = Phase::Delay {
                            remaining_ms: remaining_ms - budget,
                        };
                        return None;
                    }
                    budget -= remaining_ms;
                    self.phase = Phase::Typing {
                        until_next_ms: self.speed_ms,
                    };
                },
                Phase::Typing { until_next_ms } => {
                    if budget < until_next_ms {
                        self.phase = Phase::Typing {
                            until_next_ms: until_next_ms - budget,
                        };
                        return None;
                    }
                    budget -= until_next_ms;
                    match self.chars.get(self.index) {
                        Some(&c) => {
                            self.output.push(c);
                            self.index += 1;
                            self.phase = Phase::Typing {
                                until_next_ms: self.speed_ms,
                            };
                        },
                        None => {
                            self.phase = Phase::Done;
                            return Some(TypewriterEvent::Complete);
                        },
                    }
                },
                Phase::Done | Phase::Cancelled => return None,
            }
        }
    }

    /// Apply new parameters. Restarts from an empty output only when the text
    /// differs from the original; speed or delay changes alone are ignored.
    pub fn update(&mut self, params: TypewriterParams) {
        if params.text == self.original_text {
            return;
        }
        log::debug!("Typewriter restarting with {} chars", params.text.chars().count());
        self.arm(&params);
    }

    /// Cancel any armed schedule. The revealed text stays as it is.
    pub fn destroy(&mut self) {
        self.phase = Phase::Cancelled;
    }

    /// Text revealed so far.
    pub fn text(&self) -> &str {
        &self.output
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Whether a schedule is armed (delay or interval pending).
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Delay { .. } | Phase::Typing { .. })
    }
}
