use std::fmt;

/// A single buffer of encoded audio as delivered by the microphone input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    /// Raw encoded bytes (opaque to the capture layer)
    pub bytes: Vec<u8>,
}

impl AudioChunk {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The finalized, immutable audio payload produced by one completed
/// recording session.
///
/// Built by concatenating a session's chunks in arrival order. Fields are
/// private; nothing mutates an artifact after construction.
#[derive(Clone)]
pub struct AudioArtifact {
    bytes: Vec<u8>,
    content_type: String,
}

impl AudioArtifact {
    /// Concatenate `chunks` in order into one artifact.
    pub fn from_chunks(chunks: Vec<AudioChunk>, content_type: impl Into<String>) -> Self {
        let mut bytes = Vec::with_capacity(chunks.iter().map(AudioChunk::len).sum());
        for chunk in chunks {
            bytes.extend_from_slice(&chunk.bytes);
        }
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Wrap an already-assembled payload (e.g. one read from an upload).
    pub fn from_bytes(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for AudioArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioArtifact")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}
