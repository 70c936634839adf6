//! The slide deck: an ordered collection of image/caption pairs.

/// One slide: an opaque image source and its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Opaque image identifier (usually a URL). Never parsed or validated.
    pub source: String,
    /// Caption shown under the image.
    pub caption: String,
}

impl Slide {
    /// Creates a slide.
    #[must_use]
    pub fn new(source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: caption.into(),
        }
    }
}

/// Ordered, immutable slide collection, built once from the host page's
/// "moment" entries at initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Creates a deck from slides in display order.
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Returns the slide at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Wraps an arbitrary index into the valid range, or `None` on an
    /// empty deck.
    #[must_use]
    pub fn wrap(&self, index: usize) -> Option<usize> {
        if self.slides.is_empty() {
            None
        } else {
            Some(index % self.slides.len())
        }
    }

    /// Finds the slide with the given source string.
    #[must_use]
    pub fn position_of_source(&self, source: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.source == source)
    }
}

impl FromIterator<Slide> for SlideDeck {
    fn from_iter<T: IntoIterator<Item = Slide>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> SlideDeck {
        SlideDeck::new(vec![
            Slide::new("a.jpg", "first"),
            Slide::new("b.jpg", "second"),
            Slide::new("c.jpg", "third"),
        ])
    }

    #[test]
    fn test_wrap() {
        let d = deck();
        assert_eq!(d.wrap(0), Some(0));
        assert_eq!(d.wrap(3), Some(0));
        assert_eq!(d.wrap(7), Some(1));
        assert_eq!(SlideDeck::default().wrap(0), None);
    }

    #[test]
    fn test_position_of_source() {
        let d = deck();
        assert_eq!(d.position_of_source("b.jpg"), Some(1));
        assert_eq!(d.position_of_source("missing.jpg"), None);
    }
}
