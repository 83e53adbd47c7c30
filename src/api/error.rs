use std::fmt::Formatter;
use std::result;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Key at the given index is smaller than the key right before it.
    Unsorted(usize, String),
    /// Key at the given index is NaN or infinite.
    NotFinite(usize, String),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Index of the offending element.
    pub fn index(&self) -> usize {
        match self {
            Error::Unsorted(idx, _) | Error::NotFinite(idx, _) => *idx,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unsorted(idx, msg) => write!(f, "Unsorted error (index: {}): '{}'.", idx, msg),
            Error::NotFinite(idx, msg) => write!(f, "Key error (index: {}): '{}'.", idx, msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::Unsorted(3, "2 after 5".to_string());
        assert_eq!(e.to_string(), "Unsorted error (index: 3): '2 after 5'.");
        assert_eq!(e.index(), 3);

        let e = Error::NotFinite(0, "NaN".to_string());
        assert_eq!(e.to_string(), "Key error (index: 0): 'NaN'.");
        assert_eq!(e.index(), 0);
    }
}
