//! Raw input: byte sources and the escape-sequence decoder.
//!
//! The editor loop holds exactly one outstanding blocking read at a time
//! (`ByteSource::next_byte`) and feeds each byte through `InputDecoder`.

mod decoder;
pub use decoder::{DecoderState, InputDecoder, Step, transition};

use std::io::{self, Read};

/// Blocking producer of raw input bytes.
pub trait ByteSource {
    /// Next byte, or `Ok(None)` at end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Reads the process's standard input one byte at a time. Meant to be used
/// while the terminal is in raw mode so bytes arrive unbuffered by the tty.
pub struct StdinSource {
    stdin: io::Stdin,
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl ByteSource for StdinSource {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.stdin.lock().read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// In-memory source, used by tests and scripted input.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing::dispatcher::Dispatch;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::layer::Layer;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::registry::Registry;

    #[derive(Clone, Default)]
    struct Capture {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    #[derive(Clone, Debug)]
    struct CapturedEvent {
        target: String,
        fields: Vec<(String, String)>,
    }

    #[derive(Default)]
    struct FieldCollector {
        fields: Vec<(String, String)>,
    }

    impl Visit for FieldCollector {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    impl<S> Layer<S> for Capture
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut collector = FieldCollector::default();
            event.record(&mut collector);
            let meta = event.metadata();
            self.events.lock().unwrap().push(CapturedEvent {
                target: meta.target().to_string(),
                fields: collector.fields,
            });
        }
    }

    #[test]
    fn slice_source_drains_then_reports_end() {
        let mut src = SliceSource::new(b"ab");
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.next_byte().unwrap(), Some(b'a'));
        assert_eq!(src.next_byte().unwrap(), Some(b'b'));
        assert_eq!(src.next_byte().unwrap(), None);
        assert_eq!(src.next_byte().unwrap(), None);
    }

    #[test]
    fn discarded_escape_bytes_are_traced_not_emitted() {
        let capture = Capture::default();
        let events = capture.events.clone();
        let subscriber = Registry::default().with(capture);
        let dispatch = Dispatch::new(subscriber);

        let mut emitted = Vec::new();
        tracing::dispatcher::with_default(&dispatch, || {
            let mut decoder = InputDecoder::new();
            for b in [0x1b, b'x'] {
                emitted.extend(decoder.feed(b));
            }
        });

        assert!(emitted.is_empty(), "swallowed byte leaked: {emitted:?}");
        let events = events.lock().unwrap();
        let discard = events
            .iter()
            .find(|e| e.target == "input.decode")
            .expect("missing input.decode event");
        assert!(
            discard
                .fields
                .iter()
                .any(|(name, value)| name == "message" && value.contains("discard")),
            "expected a discard event, got {:?}",
            discard.fields
        );
        assert!(
            discard
                .fields
                .iter()
                .any(|(name, value)| name == "state" && value.contains("AwaitEscapeBody"))
        );
    }
}
