//! Forward-only cursor over the whitespace-separated fields of a report.

/// Token cursor over one report.
///
/// Built once per decode and handed to each field decoder by `&mut`; no
/// operation moves it backward.
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    fields: Vec<&'a str>,
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    /// Split a report into fields. A trailing `=` end-of-report marker is
    /// dropped, as are empty fields from repeated whitespace.
    pub fn new(report: &'a str) -> Self {
        let report = report.trim().trim_end_matches('=');
        FieldCursor {
            fields: report.split_whitespace().collect(),
            pos: 0,
        }
    }

    /// Move to and return the next field, or `None` past the end.
    pub fn advance(&mut self) -> Option<&'a str> {
        let field = self.fields.get(self.pos).copied()?;
        self.pos += 1;
        log::trace!("field {}: {field}", self.pos);
        Some(field)
    }

    /// Return the next field without moving.
    pub fn peek(&self) -> Option<&'a str> {
        self.fields.get(self.pos).copied()
    }

    /// Consume the next field only if `accept` returns true for it.
    pub fn advance_if(&mut self, accept: impl FnOnce(&str) -> bool) -> Option<&'a str> {
        let field = self.peek()?;
        if accept(field) {
            self.advance()
        } else {
            None
        }
    }

    /// Fields not yet consumed.
    pub fn remaining(&self) -> &[&'a str] {
        &self.fields[self.pos..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.fields.len()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_peek() {
        let mut c = FieldCursor::new("EFJY 171750Z AUTO");
        assert_eq!(c.peek(), Some("EFJY"));
        assert_eq!(c.advance(), Some("EFJY"));
        assert_eq!(c.peek(), Some("171750Z"));
        assert_eq!(c.advance(), Some("171750Z"));
        assert_eq!(c.advance(), Some("AUTO"));
        assert_eq!(c.peek(), None);
        assert_eq!(c.advance(), None);
        assert!(c.is_exhausted());
        // Exhaustion is sticky
        assert_eq!(c.advance(), None);
    }

    #[test]
    fn test_whitespace_and_sentinel() {
        let c = FieldCursor::new("  EFUT  060620Z\t01008KT Q1021=\n");
        assert_eq!(c.remaining(), &["EFUT", "060620Z", "01008KT", "Q1021"]);

        let c = FieldCursor::new("EFUT Q1021 =");
        assert_eq!(c.remaining(), &["EFUT", "Q1021"]);
    }

    #[test]
    fn test_empty() {
        let mut c = FieldCursor::new("   ");
        assert!(c.is_empty());
        assert_eq!(c.peek(), None);
        assert_eq!(c.advance(), None);

        let c = FieldCursor::new("=");
        assert!(c.is_empty());
    }

    #[test]
    fn test_advance_if() {
        let mut c = FieldCursor::new("AUTO 29007KT");
        assert_eq!(c.advance_if(|f| f == "CAVOK"), None);
        assert_eq!(c.peek(), Some("AUTO"));
        assert_eq!(c.advance_if(|f| f == "AUTO"), Some("AUTO"));
        assert_eq!(c.remaining(), &["29007KT"]);
        assert_eq!(c.len(), 2);
    }
}
