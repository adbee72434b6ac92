use std::collections::VecDeque;
use std::io::BufRead;

use anchor_lang::prelude::*;

use crate::error::error_code_number;
use crate::state::Ticket;

/// Which set a requested number belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberSet {
    Winning,
    /// Ticket at this 0-based registration index.
    Ticket(usize),
}

/// Identifies the number being asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub set: NumberSet,
    /// 0-based position inside the set.
    pub position: usize,
}

/// Where the session pulls raw tokens from.
///
/// The session asks for one token per attempt and keeps asking for the same
/// position until a token is accepted. Returning `None` ends the current
/// operation with `InputExhausted`.
pub trait InputSource {
    fn next_token(&mut self, prompt: Prompt) -> Option<String>;

    fn accepted(&mut self, _prompt: Prompt, _number: u8) {}

    fn rejected(&mut self, _prompt: Prompt, _error: &Error) {}

    /// Asked after each ticket of a batch except the last one.
    fn continue_batch(&mut self, _last: &Ticket) -> bool {
        true
    }
}

/// In-memory source fed from a fixed list of tokens. Records every
/// rejection so callers can inspect what was refused.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    answers: VecDeque<bool>,
    rejections: Vec<(Prompt, Option<u32>)>,
}

impl ScriptedInput {
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self {
            tokens: tokens.into_iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Answers handed out, in order, when a batch asks whether to go on.
    /// Once used up every further answer is "yes".
    pub fn with_batch_answers<I: IntoIterator<Item = bool>>(mut self, answers: I) -> Self {
        self.answers = answers.into_iter().collect();
        self
    }

    pub fn push<T: ToString>(&mut self, token: T) {
        self.tokens.push_back(token.to_string());
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Rejected prompts with the Anchor error code of each rejection.
    pub fn rejections(&self) -> &[(Prompt, Option<u32>)] {
        &self.rejections
    }
}

impl InputSource for ScriptedInput {
    fn next_token(&mut self, _prompt: Prompt) -> Option<String> {
        self.tokens.pop_front()
    }

    fn rejected(&mut self, prompt: Prompt, error: &Error) {
        self.rejections.push((prompt, error_code_number(error)));
    }

    fn continue_batch(&mut self, _last: &Ticket) -> bool {
        self.answers.pop_front().unwrap_or(true)
    }
}

/// Reads whitespace separated tokens from a buffered reader, so several
/// numbers may be typed on one line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_word(&mut self) -> Option<String> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(word);
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                Err(e) => {
                    msg!("Input read failed: {}", e);
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn next_token(&mut self, _prompt: Prompt) -> Option<String> {
        self.next_word()
    }

    /// Any answer starting with `s` or `S` continues the batch.
    fn continue_batch(&mut self, _last: &Ticket) -> bool {
        self.next_word()
            .map(|answer| answer.starts_with(['s', 'S']))
            .unwrap_or(false)
    }
}
