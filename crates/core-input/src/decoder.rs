//! Byte-driven input decoder.
//!
//! State table (every row is a `transition` arm):
//!
//! | state               | byte            | next                  | step                  |
//! |---------------------|-----------------|-----------------------|-----------------------|
//! | Idle                | ESC             | AwaitEscapeBody       | Pending               |
//! | Idle                | other           | Idle                  | plain byte mapping    |
//! | AwaitEscapeBody     | ESC             | Idle                  | Emit(Quit)            |
//! | AwaitEscapeBody     | `[`             | AwaitBracketArg       | Pending               |
//! | AwaitEscapeBody     | other           | Idle                  | Discard               |
//! | AwaitBracketArg     | `A` `B` `C` `D` | Idle                  | Emit(arrow motion)    |
//! | AwaitBracketArg     | `1`             | AwaitModifiedKey(0)   | Pending               |
//! | AwaitBracketArg     | other           | Idle                  | Discard               |
//! | AwaitModifiedKey(n) | any             | n+1, Idle after three | Emit(CtrlUp)/Discard  |
//!
//! After `ESC [ 1` exactly three more bytes are consumed; the sequence is
//! `CtrlUp` only if they are `; 5 A`. Unmatched sequences are dropped byte by
//! byte and never re-enter the text stream, so a printable byte that follows a
//! lone ESC is lost.

use crate::ByteSource;
use core_events::keys::{self, BS, CR, CTRL_SLASH, DEL, ESC, LF, TAB};
use core_events::{Action, EditKind, MotionKind};

const CTRL_UP_TAIL: [u8; 3] = [b';', b'5', b'A'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    #[default]
    Idle,
    AwaitEscapeBody,
    AwaitBracketArg,
    /// Inside `ESC [ 1`: `consumed` bytes of the three-byte tail seen so far,
    /// `matched` while they still agree with `; 5 A`.
    AwaitModifiedKey { consumed: u8, matched: bool },
}

/// Outcome of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Emit(Action),
    /// Byte consumed as part of an unfinished sequence.
    Pending,
    /// Byte consumed and dropped.
    Discard,
}

/// Pure transition function backing `InputDecoder`.
pub fn transition(state: DecoderState, byte: u8) -> (DecoderState, Step) {
    use DecoderState::*;
    match state {
        Idle if byte == ESC => (AwaitEscapeBody, Step::Pending),
        Idle => (Idle, map_plain(byte)),
        AwaitEscapeBody => match byte {
            ESC => (Idle, Step::Emit(Action::Quit)),
            b'[' => (AwaitBracketArg, Step::Pending),
            _ => (Idle, Step::Discard),
        },
        AwaitBracketArg => match byte {
            b'A' => (Idle, Step::Emit(Action::Motion(MotionKind::Up))),
            b'B' => (Idle, Step::Emit(Action::Motion(MotionKind::Down))),
            b'C' => (Idle, Step::Emit(Action::Motion(MotionKind::Right))),
            b'D' => (Idle, Step::Emit(Action::Motion(MotionKind::Left))),
            b'1' => (
                AwaitModifiedKey {
                    consumed: 0,
                    matched: true,
                },
                Step::Pending,
            ),
            _ => (Idle, Step::Discard),
        },
        AwaitModifiedKey { consumed, matched } => {
            let matched = matched && CTRL_UP_TAIL[consumed as usize] == byte;
            let consumed = consumed + 1;
            if (consumed as usize) < CTRL_UP_TAIL.len() {
                (AwaitModifiedKey { consumed, matched }, Step::Pending)
            } else if matched {
                (Idle, Step::Emit(Action::CtrlUp))
            } else {
                (Idle, Step::Discard)
            }
        }
    }
}

/// Mapping for bytes outside any escape sequence.
fn map_plain(byte: u8) -> Step {
    let action = match byte {
        0x20..=0x7e => Action::Edit(EditKind::InsertChar(byte)),
        DEL | BS => Action::Edit(EditKind::Backspace),
        TAB => Action::Edit(EditKind::Tab),
        LF | CR => Action::Edit(EditKind::Split),
        CTRL_SLASH => Action::Edit(EditKind::CommentLine),
        b if b == keys::ctrl(b's') => Action::Save,
        b if b == keys::ctrl(b'o') => Action::Options,
        b if b == keys::ctrl(b'v') => Action::Edit(EditKind::Paste),
        b if b == keys::ctrl(b'c') => Action::CopyLine,
        _ => return Step::Discard,
    };
    Step::Emit(action)
}

/// Stateful wrapper around `transition`.
#[derive(Debug, Default)]
pub struct InputDecoder {
    state: DecoderState,
}

impl InputDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Drop any partially decoded sequence.
    pub fn reset(&mut self) {
        self.state = DecoderState::Idle;
    }

    /// Feed one byte; returns the action it completes, if any.
    pub fn feed(&mut self, byte: u8) -> Option<Action> {
        let from = self.state;
        let (next, step) = transition(from, byte);
        self.state = next;
        match step {
            Step::Emit(action) => {
                tracing::trace!(target: "input.decode", byte, ?action, "emit");
                Some(action)
            }
            Step::Pending => None,
            Step::Discard => {
                tracing::trace!(target: "input.decode", byte, state=?from, "discard");
                None
            }
        }
    }

    /// Block on `source` until one action is decoded. `Ok(None)` means the
    /// source reached end of input.
    pub fn next_action<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> std::io::Result<Option<Action>> {
        while let Some(byte) = source.next_byte()? {
            if let Some(action) = self.feed(byte) {
                return Ok(Some(action));
            }
        }
        Ok(None)
    }
}
