use serde::Deserialize;

/// A letting agent. Purely descriptive, never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub verified: bool,
    pub rating: f32,
    pub reviews: u32,
    /// Percentage of inquiries answered, 0-100.
    pub response_rate: u8,

    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub properties: u32,
    pub member_since: u16,
}
