use crate::utils::error::Result;

/// Converts between integers and Roman numeral strings.
pub trait NumeralConverter: Send + Sync {
    fn encode(&self, number: i64) -> Result<String>;

    /// `None` stands for an absent string and fails with `NullInput`.
    fn decode(&self, text: Option<&str>) -> Result<u32>;

    fn parse(&self, text: &str) -> Result<u32> {
        self.decode(Some(text))
    }
}
