use serde::Serialize;

/// Value object returned by `GET /hello/dto`.
///
/// Serializes as `{"name": .., "amount": ..}` with the keys in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseValue {
    name: String,
    amount: i32,
}

impl ResponseValue {
    pub fn new(name: impl Into<String>, amount: i32) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }
}
