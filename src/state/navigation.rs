//! Navigation-related state types.

/// Specifying which input receives key presses.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Tasks,
    Search,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus() {
        assert_eq!(Focus::Tasks, Focus::Tasks);
        assert_ne!(Focus::Tasks, Focus::Search);
    }
}
