use std::fmt;

/// Tax identifier of a natural person, the unique key for clients
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxId(String);

impl TaxId {
    pub fn new(tax_id: impl Into<String>) -> Self {
        let tax_id: String = tax_id.into();
        return Self(tax_id.trim().to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
