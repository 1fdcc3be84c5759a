//! Keyboard-less input: fixed key scripts and streamed key presses.

use std::{
    collections::VecDeque,
    io::{ErrorKind, Read},
};

use anyhow::{Context, Result as AnyResult};
use landfall_core::Intent;
use tracing::warn;

use crate::{InputSource, RenderingError};

/// Maps a script key to the intent it stands for.
///
/// `w`/`a`/`s`/`d` move, `f` toggles fullscreen and `q` quits; uppercase keys
/// behave like their lowercase counterparts.
#[must_use]
pub fn intent_for_key(key: char) -> Option<Intent> {
    match key.to_ascii_lowercase() {
        'w' => Some(Intent::MoveUp),
        'a' => Some(Intent::MoveLeft),
        's' => Some(Intent::MoveDown),
        'd' => Some(Intent::MoveRight),
        'f' => Some(Intent::ToggleFullscreen),
        'q' => Some(Intent::Quit),
        _ => None,
    }
}

/// Input source backed by a pre-parsed list of intents.
///
/// Once the script runs out every poll yields [`Intent::Quit`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    intents: VecDeque<Intent>,
}

impl ScriptedInput {
    /// Parses a key script, ignoring whitespace.
    pub fn parse(script: &str) -> Result<Self, RenderingError> {
        let mut intents = VecDeque::new();
        for (position, key) in script.chars().enumerate() {
            if key.is_whitespace() {
                continue;
            }
            let intent =
                intent_for_key(key).ok_or(RenderingError::UnknownScriptKey { key, position })?;
            intents.push_back(intent);
        }
        Ok(Self { intents })
    }
}

impl InputSource for ScriptedInput {
    fn poll_intent(&mut self) -> AnyResult<Intent> {
        Ok(self.intents.pop_front().unwrap_or(Intent::Quit))
    }
}

/// Input source that reads keys from a byte stream as they arrive.
///
/// Each poll blocks until one mapped key has been read. Whitespace is
/// skipped, unmapped bytes are logged and skipped, and end of input quits.
#[derive(Debug)]
pub struct KeyStream<R> {
    reader: R,
    position: usize,
}

impl<R: Read> KeyStream<R> {
    /// Wraps `reader`, typically a locked stdin.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
        }
    }

    fn next_byte(&mut self) -> AnyResult<Option<u8>> {
        let mut byte = [0_u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error).context("failed to read key"),
            }
        }
    }
}

impl<R: Read> InputSource for KeyStream<R> {
    fn poll_intent(&mut self) -> AnyResult<Intent> {
        while let Some(byte) = self.next_byte()? {
            let position = self.position;
            self.position += 1;
            let key = char::from(byte);
            if key.is_ascii_whitespace() {
                continue;
            }
            match intent_for_key(key) {
                Some(intent) => return Ok(intent),
                None => warn!(?key, position, "ignoring unmapped key"),
            }
        }
        Ok(Intent::Quit)
    }
}
