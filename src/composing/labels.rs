//! Allocation of statement labels for loops and format lines

use crate::language::{GenerationError, Label, MAXIMUM_LABEL};

/// Hands out statement labels to the composers that need them. One
/// allocator is threaded through every construct in a rendered unit so that
/// sibling and nested constructs never share a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    next: u32,
    step: u32,
}

impl Labels {
    /// 100, 200, 300, ...
    pub fn new() -> Labels {
        Labels {
            next: 100,
            step: 100,
        }
    }

    pub fn starting(first: u32, step: u32) -> Result<Labels, GenerationError> {
        Label::new(first)?;
        if step == 0 {
            return Err(GenerationError::invalid(
                "Invalid label step",
                "labels must increase; use Labels::single() for a fixed label",
            ));
        }
        Ok(Labels { next: first, step })
    }

    /// Always yields the same label. Only correct when the caller knows
    /// there is at most one labeled construct in the unit being rendered.
    pub fn single(label: Label) -> Labels {
        Labels {
            next: label.number(),
            step: 0,
        }
    }

    pub fn allocate(&mut self) -> Result<Label, GenerationError> {
        if self.next > MAXIMUM_LABEL {
            return Err(GenerationError::invalid(
                "Labels exhausted",
                format!("no label above {} is available", MAXIMUM_LABEL),
            ));
        }
        let label = Label::new(self.next)?;
        self.next = self
            .next
            .saturating_add(self.step);
        Ok(label)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels::new()
    }
}
