use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::Data;

#[derive(Clone, Debug)]
pub struct Customer {
    pub id: Id,
    pub name: String,
    pub address: String,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u32);

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Data {
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer_by_id(&self, id: Id) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }
}
