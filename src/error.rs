use thiserror::Error;

/// Raised by validating construction when two adjacent elements are out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsorted input: array[{index}] > array[{}]", .index + 1)]
pub struct UnsortedArrayError {
    /// Smallest `i` such that `array[i]` orders after `array[i + 1]`.
    pub index: usize,
}

impl UnsortedArrayError {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

pub type Result<T> = std::result::Result<T, UnsortedArrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_both_positions() {
        let error = UnsortedArrayError::new(1);
        assert_eq!(error.to_string(), "unsorted input: array[1] > array[2]");
    }
}
