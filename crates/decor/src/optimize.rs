//! Attribute optimization.
//!
//! Terminals have no attribute stack. Ending a color, or bold on most
//! terminals, emits the full reset sequence, which also turns off every
//! other attribute that is still open. The optimizer walks a series while
//! tracking which attributes are active and:
//!
//! - re-opens the still-active attributes after any stop that resets,
//! - drops a stop that is immediately followed by a start of the same kind,
//! - drops a newly opened attribute that is immediately stopped, putting
//!   back any stop its start displaced,
//! - drops a start identical to the token just emitted,
//! - replaces save/restore pairs by restarting the saved attributes.
//!
//! Re-opened attributes go back through the same rules, so a reset followed
//! by a new color collapses into the new color alone.

use std::collections::VecDeque;

use decor_notation::{Action, Kind, Series, Token};
use tracing::{debug, trace};

use crate::codes::CodeTable;

/// A token in the output. Starts remember whether they re-opened an
/// attribute that was already active, and which stop they displaced.
#[derive(Debug)]
struct Emitted {
    token: Token,
    reopened: bool,
    replaced: Option<Token>,
}

pub(crate) struct Optimizer<'a> {
    codes: &'a CodeTable,
    pending: VecDeque<Token>,
    output: Vec<Emitted>,
    active: Series,
    saved: Vec<Series>,
}

impl<'a> Optimizer<'a> {
    pub(crate) fn new(codes: &'a CodeTable, input: Series) -> Self {
        Self {
            codes,
            pending: input.into_iter().collect(),
            output: Vec::new(),
            active: Series::new(),
            saved: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> Series {
        debug!(tokens = self.pending.len(), "optimizing series");

        while let Some(token) = self.pending.pop_front() {
            trace!(token = %token, active = ?self.active.ids(), "optimize");
            match (token.kind(), token.action()) {
                (Kind::Save, Action::Start) => self.saved.push(self.active.clone()),
                (Kind::Save, Action::Stop) => self.restore(),
                (_, Action::Start) => self.start(token),
                (_, Action::Stop) => self.stop(token),
                (_, Action::None) => self.emit(token),
            }
        }

        let series: Series = self.output.into_iter().map(|e| e.token).collect();
        debug!(tokens = series.len(), "optimized series");
        series
    }

    fn start(&mut self, token: Token) {
        let replaced = match self.output.last() {
            Some(prev) if prev.token.is_opposite_of(&token) => {
                self.output.pop().map(|prev| prev.token)
            }
            _ => None,
        };

        let reopened = self.active.move_to_back_or_push(token.clone());

        if let Some(prev) = self.output.last_mut().filter(|prev| prev.token == token) {
            // The earlier start now survives the stop that was dropped.
            if replaced.is_some() {
                prev.reopened = true;
            }
            return;
        }
        self.output.push(Emitted {
            token,
            reopened,
            replaced,
        });
    }

    fn stop(&mut self, token: Token) {
        let opened = match self.output.last() {
            Some(prev) if prev.token.is_opposite_of(&token) => self.output.pop(),
            _ => None,
        };
        self.active.remove_last(token.kind());

        if let Some(Emitted {
            reopened: false,
            replaced,
            ..
        }) = opened
        {
            trace!(token = %token, "attribute opened and closed without content");
            if let Some(stop) = replaced {
                self.emit(stop);
            }
            return;
        }

        let resets = self.codes.is_reset(&token);
        self.emit(token);
        if resets && !self.active.is_empty() {
            self.requeue_active();
        }
    }

    fn restore(&mut self) {
        let Some(snapshot) = self.saved.pop() else {
            return;
        };
        self.active = snapshot;
        if !self.active.is_empty() {
            self.requeue_active();
        }
    }

    /// Puts the active attributes, in order, at the front of the queue.
    fn requeue_active(&mut self) {
        for token in self.active.iter().rev() {
            self.pending.push_front(token.clone());
        }
    }

    fn emit(&mut self, token: Token) {
        self.output.push(Emitted {
            token,
            reopened: false,
            replaced: None,
        });
    }
}
