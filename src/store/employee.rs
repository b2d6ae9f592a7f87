use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::Data;

#[derive(Clone, Debug)]
pub struct Employee {
    pub id: Id,
    pub name: String,
    pub specialty: String,
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
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee_by_id(&self, id: Id) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}
