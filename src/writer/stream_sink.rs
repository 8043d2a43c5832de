//! Content stream sinks with scoped release.
//!
//! A [`StreamSink`] hands out writers for content streams and turns a
//! finished writer into stream bytes. [`ScopedStream`] ties one writer to a
//! lexical scope: it is either closed explicitly with
//! [`ScopedStream::close`] or released when dropped, so every stream opened
//! while generating an appearance is accounted for on every exit path.

use super::content_stream::ContentStreamBuilder;
use crate::error::{Error, Result};
use bytes::Bytes;
use std::io::Write;
use std::ops::{Deref, DerefMut};

/// Source of content stream writers.
pub trait StreamSink {
    /// Writer receiving encoded content stream bytes.
    type Writer: Write;

    /// Open a new content stream.
    fn open(&self) -> Result<Self::Writer>;

    /// Finish a stream, returning its bytes.
    fn close(&self, writer: Self::Writer) -> Result<Bytes>;

    /// Discard a stream that will not be closed.
    fn release(&self, writer: Self::Writer) {
        drop(writer);
    }
}

/// In-memory sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemorySink;

impl StreamSink for MemorySink {
    type Writer = Vec<u8>;

    fn open(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn close(&self, writer: Vec<u8>) -> Result<Bytes> {
        Ok(Bytes::from(writer))
    }
}

/// A content stream open on a sink.
///
/// Operations are collected through the dereferenced
/// [`ContentStreamBuilder`] and encoded into the sink's writer on close.
/// A stream closes at most once; later calls fail with
/// [`Error::StreamClosed`].
pub struct ScopedStream<'s, S: StreamSink> {
    sink: &'s S,
    writer: Option<S::Writer>,
    builder: ContentStreamBuilder,
}

impl<'s, S: StreamSink> ScopedStream<'s, S> {
    /// Open a stream on `sink`.
    pub fn open(sink: &'s S) -> Result<Self> {
        let writer = sink.open()?;
        Ok(Self {
            sink,
            writer: Some(writer),
            builder: ContentStreamBuilder::new(),
        })
    }

    /// Encode the collected operations and close the stream.
    ///
    /// If encoding fails the writer is released before the error is returned.
    /// Either way the stream is finished and dropping it does nothing more.
    pub fn close(&mut self) -> Result<Bytes> {
        let Some(mut writer) = self.writer.take() else {
            return Err(Error::StreamClosed);
        };

        let encoded = self
            .builder
            .write_to(&mut writer)
            .and_then(|_| writer.flush().map_err(Into::into));
        if let Err(e) = encoded {
            self.sink.release(writer);
            return Err(e);
        }

        self.sink.close(writer)
    }
}

impl<S: StreamSink> Deref for ScopedStream<'_, S> {
    type Target = ContentStreamBuilder;

    fn deref(&self) -> &ContentStreamBuilder {
        &self.builder
    }
}

impl<S: StreamSink> DerefMut for ScopedStream<'_, S> {
    fn deref_mut(&mut self) -> &mut ContentStreamBuilder {
        &mut self.builder
    }
}

impl<S: StreamSink> Drop for ScopedStream<'_, S> {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.take() {
            log::debug!("releasing unclosed content stream");
            self.sink.release(writer);
        }
    }
}
