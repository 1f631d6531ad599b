use serde::{Serialize, Serializer};

use crate::FixedTextBuffer;

/// Serializes the valid content as a plain string.
impl Serialize for FixedTextBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedTextBuffer;

    #[test]
    fn serializes_as_string() {
        let mut b = FixedTextBuffer::with_capacity(16);
        b.append("score ").append(42);
        assert_eq!(serde_json::to_string(&b).unwrap(), "\"score 42\"");
    }
}
