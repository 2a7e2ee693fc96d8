use std::fmt;

use crate::interpreter::token::Token;

/// The point in evaluation at which a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Right after tokenizing.
    Tokenized,
    /// After one parenthesis group was replaced by its value.
    GroupResolved,
    /// After the multiplicative pass.
    Multiplied,
    /// After the additive pass.
    Added,
}

impl StageKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tokenized => "after lexing",
            Self::GroupResolved => "after parenthesis",
            Self::Multiplied => "after mul/div/mod",
            Self::Added => "after add/sub",
        }
    }
}

/// A snapshot of the token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub kind:   StageKind,
    pub tokens: Vec<Token>,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind.label())?;
        for token in &self.tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

/// Records how an expression was reduced, one stage per pass.
///
/// Pass a `Trace` to [`Calculator::calculate_traced`] to collect it. Stages
/// are recorded up to the point where evaluation stopped, so a failed
/// evaluation shows how far it got.
///
/// [`Calculator::calculate_traced`]: crate::interpreter::evaluator::core::Calculator::calculate_traced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    stages: Vec<Stage>,
}

impl Trace {
    #[must_use]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn clear(&mut self) {
        self.stages.clear();
    }

    pub(crate) fn record(&mut self, kind: StageKind, tokens: &[Token]) {
        self.stages.push(Stage { kind,
                                 tokens: tokens.to_vec() });
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in &self.stages {
            writeln!(f, "{stage}")?;
        }
        Ok(())
    }
}

/// Records a stage if tracing is enabled.
pub(crate) fn record(trace: Option<&mut Trace>, kind: StageKind, tokens: &[Token]) {
    if let Some(trace) = trace {
        trace.record(kind, tokens);
    }
}
