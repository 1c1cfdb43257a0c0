//! Tree-walking interpreter over the token stream

use tracing::warn;

use crate::error::{EvalError, EvalResult};
use crate::lexer::Lexer;
use crate::token::Token;

/// Everything a finished run hands back to the caller.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Decoded byte-output accumulator, one character per emitted code unit.
    pub output: String,
    /// Final contents of the evaluation stack, bottom to top.
    pub stack: Vec<bool>,
    /// Binary-dump lines, in emission order.
    pub dumps: Vec<String>,
    /// Recoverable errors reported during the run.
    pub errors: Vec<EvalError>,
}

/// Interpreter state for one run.
///
/// Blocks (branch arms, loop bodies) are contiguous ranges of the one
/// top-level token vector, addressed by global index. Nested evaluations
/// share the stack, output and dump mark through `&mut self`.
pub struct Interpreter {
    tokens: Vec<Token>,
    stack: Vec<bool>,
    output: Vec<u8>,
    dump_mark: Option<usize>, // global index of the last dumped token
    dumps: Vec<String>,
    errors: Vec<EvalError>,
}

impl Interpreter {
    /// Lex `source` and prepare a run. Lexing never fails.
    pub fn load(source: &str) -> Self {
        Interpreter {
            tokens: Lexer::new(source).tokenize(),
            stack: Vec::new(),
            output: Vec::new(),
            dump_mark: None,
            dumps: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Evaluate the whole token stream once.
    ///
    /// Recoverable errors are reported and collected without stopping the
    /// run; only [`EvalError::Fatal`] aborts it.
    pub fn run(mut self) -> Result<RunOutcome, EvalError> {
        self.exec_block(0, self.tokens.len())?;

        Ok(RunOutcome {
            output: self.output.iter().map(|&unit| char::from(unit)).collect(),
            stack: self.stack,
            dumps: self.dumps,
            errors: self.errors,
        })
    }

    /// Evaluate the block at global positions `start..end`.
    ///
    /// A recoverable error is caught here, at the level of the block it
    /// occurred in: the rest of this block is skipped and the caller
    /// continues normally.
    fn exec_block(&mut self, start: usize, end: usize) -> EvalResult {
        let mut i = start;
        while i < end {
            match self.exec_token(i, end) {
                Ok(next) => i = next,
                Err(err) if err.is_recoverable() => {
                    warn!(pos = i, error = %err, "execution error");
                    self.errors.push(err);
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Dispatch one token; returns the next global position to execute.
    fn exec_token(&mut self, i: usize, end: usize) -> EvalResult<usize> {
        let token = self.tokens[i];
        match token {
            token if token.is_literal() => self.stack.push(to_bool(token)?),
            Token::Not => {
                self.require_depth('!', 1, i)?;
                let value = self.take_top()?;
                self.stack.push(!value);
            }
            Token::And => self.binary_op('&', i, |a, b| a && b)?,
            Token::Or => self.binary_op('|', i, |a, b| a || b)?,
            Token::Xor => self.binary_op('^', i, |a, b| a != b)?,
            Token::Delim => {}
            Token::Branch => return self.branch(i, end),
            Token::Loop => return self.loop_op(i, end),
            Token::OutByte => return self.output_byte(i, end),
            Token::Bin => self.binary_dump(i),
            Token::Unknown(ch) => return Err(EvalError::UnrecognizedToken { ch, pos: i }),
            token => return Err(EvalError::InvalidLiteral { token }),
        }

        Ok(i + 1)
    }

    /// `?`: pop the condition, split out the two arms, evaluate one.
    ///
    /// Both arms are scanned for delimiter bookkeeping either way; only the
    /// chosen one runs. Resumes after the second delimiter.
    fn branch(&mut self, i: usize, end: usize) -> EvalResult<usize> {
        self.require_depth('?', 1, i)?;
        let cond = self.take_top()?;

        let (true_arm, after_true) = self.delimited(i + 1, end);
        let (false_arm, after_false) = self.delimited(after_true, end);

        let (arm_start, arm_end) = if cond { true_arm } else { false_arm };
        self.exec_block(arm_start, arm_end)?;

        Ok(after_false)
    }

    /// `*`: extract the body, then run it while the stack's top is true,
    /// popping one value after every iteration.
    ///
    /// The precondition only checks the stack is non-empty; nothing is
    /// popped up front. The per-iteration pop is the loop's own condition
    /// consumption, independent of whatever the body pushed.
    fn loop_op(&mut self, i: usize, end: usize) -> EvalResult<usize> {
        self.require_depth('*', 1, i)?;
        let ((body_start, body_end), after) = self.delimited(i + 1, end);

        while self.stack.last() == Some(&true) {
            self.exec_block(body_start, body_end)?;
            if self.stack.pop().is_none() {
                // The body drained the value the check was based on.
                return Err(EvalError::Fatal(
                    "loop condition vanished mid-iteration".into(),
                ));
            }
        }

        Ok(after)
    }

    /// `.`: gather the next 8 Boolean literals of this block (skipping
    /// every other token) and append them MSB-first as one output unit.
    /// Resumes right after the 8th bit token.
    fn output_byte(&mut self, i: usize, end: usize) -> EvalResult<usize> {
        let mut byte = 0u8;
        let mut bits = 0;
        let mut last_bit = i;

        let mut j = i + 1;
        while j < end && bits < 8 {
            if self.tokens[j].is_literal() {
                byte = byte << 1 | to_bool(self.tokens[j])? as u8;
                bits += 1;
                last_bit = j;
            }
            j += 1;
        }

        if bits < 8 {
            return Err(EvalError::InsufficientBits { pos: i });
        }

        self.output.push(byte);
        Ok(last_bit + 1)
    }

    /// `{Bin}`: render every token after the previous dump mark up to this
    /// position as `1`/`0`/space (other tokens contribute nothing) and emit
    /// the line immediately.
    fn binary_dump(&mut self, i: usize) {
        let from = self.dump_mark.map_or(0, |mark| mark + 1).min(i);

        let mut line = String::new();
        for token in &self.tokens[from..i] {
            match token {
                Token::True => line.push('1'),
                Token::False => line.push('0'),
                Token::Delim => line.push(' '),
                _ => {}
            }
        }

        println!("{line}");
        self.dumps.push(line);
        self.dump_mark = Some(i);
    }

    /// Find the range up to the next `_` (or `end`). The delimiter is
    /// consumed but not part of the range; returns the range and the
    /// position to resume at.
    fn delimited(&self, from: usize, end: usize) -> ((usize, usize), usize) {
        let mut i = from;
        while i < end && self.tokens[i] != Token::Delim {
            i += 1;
        }
        ((from, i), (i + 1).min(end))
    }

    fn binary_op(&mut self, op: char, pos: usize, apply: fn(bool, bool) -> bool) -> EvalResult {
        self.require_depth(op, 2, pos)?;
        let b = self.take_top()?;
        let a = self.take_top()?;
        self.stack.push(apply(a, b));
        Ok(())
    }

    /// Check an operator's minimum-depth precondition before it touches
    /// the stack.
    fn require_depth(&self, op: char, needs: usize, pos: usize) -> EvalResult {
        if self.stack.len() < needs {
            return Err(EvalError::StackUnderflow {
                op,
                needs,
                found: self.stack.len(),
                pos,
            });
        }
        Ok(())
    }

    /// Pop from a stack already known to be deep enough.
    fn take_top(&mut self) -> EvalResult<bool> {
        self.stack
            .pop()
            .ok_or_else(|| EvalError::Fatal("stack drained under a depth check".into()))
    }
}

/// Convert a `+`/`-` literal token to its Boolean value.
fn to_bool(token: Token) -> EvalResult<bool> {
    match token {
        Token::True => Ok(true),
        Token::False => Ok(false),
        token => Err(EvalError::InvalidLiteral { token }),
    }
}
