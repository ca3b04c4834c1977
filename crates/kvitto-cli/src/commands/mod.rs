pub mod convert;
pub mod preview;

use kvitto_core::PageSelection;

/// Turn the CLI's page flags into a selection. Explicit pages win over a
/// range; with neither, the whole document is processed.
pub fn selection(pages: &[usize], from: Option<usize>, to: Option<usize>) -> PageSelection {
    if !pages.is_empty() {
        PageSelection::List(pages.to_vec())
    } else if let (Some(start), Some(end)) = (from, to) {
        PageSelection::Range { start, end }
    } else {
        PageSelection::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_precedence() {
        assert_eq!(
            selection(&[2, 4], Some(1), Some(9)),
            PageSelection::List(vec![2, 4])
        );
        assert_eq!(
            selection(&[], Some(1), Some(9)),
            PageSelection::Range { start: 1, end: 9 }
        );
        assert_eq!(selection(&[], None, None), PageSelection::All);
    }
}
