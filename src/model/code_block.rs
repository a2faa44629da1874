//! Example code block state (copy feedback)

/// How long the "Copied!" feedback stays visible
pub const COPY_FEEDBACK_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeBlockState {
    pub copied: bool,
    /// Sequence number of the latest copy
    pub copy_seq: u64,
}

impl CodeBlockState {
    /// Record a copy and return its sequence number
    pub fn mark_copied(&mut self) -> u64 {
        self.copy_seq += 1;
        self.copied = true;
        self.copy_seq
    }

    /// Clear the feedback if `seq` belongs to the latest copy.
    ///
    /// Returns true if the flag was cleared.
    pub fn expire(&mut self, seq: u64) -> bool {
        if seq != self.copy_seq || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn button_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }
}
