use crate::error::ParseError;

/// An edge descriptor as it appears in the input, `<A>-<B>`, still holding the
/// raw node labels.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UndirectedEdge<'a> {
    a: &'a str,
    b: &'a str,
}

impl<'a> UndirectedEdge<'a> {
    pub fn new(a: &'a str, b: &'a str) -> Option<UndirectedEdge<'a>> {
        if a.is_empty() || b.is_empty() {
            return None;
        }

        Some(UndirectedEdge { a, b })
    }

    /// Splits `descriptor` on its hyphen. Exactly one hyphen with a label on
    /// either side is accepted.
    pub fn from_descriptor(descriptor: &'a str) -> Result<UndirectedEdge<'a>, ParseError> {
        let mut labels = descriptor.split('-');
        match (labels.next(), labels.next(), labels.next()) {
            (Some(a), Some(b), None) => UndirectedEdge::new(a, b),
            _ => None,
        }
        .ok_or_else(|| ParseError::MalformedEdge(descriptor.to_string()))
    }

    pub fn a(&self) -> &'a str {
        self.a
    }

    pub fn b(&self) -> &'a str {
        self.b
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}
