pub mod customer;
pub mod employee;
mod report;
mod seed;
pub mod ticket;

use derive_more::Display;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use self::{customer::Customer, employee::Employee, ticket::Ticket};

#[derive(Clone, Copy, Debug, Display, Eq, derive_more::Error, PartialEq)]
pub enum Error {
    #[display("service ticket {_0} not found")]
    TicketNotFound(#[error(not(source))] ticket::Id),
}

/// Process-wide in-memory store.
///
/// All three collections sit behind one lock, so a writer never interleaves
/// with any other request.
pub struct Store(RwLock<Data>);

impl Store {
    pub fn new(data: Data) -> Self {
        Self(RwLock::new(data))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Data> {
        self.0.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Data> {
        self.0.write().await
    }
}

/// Snapshot of the three collections, kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Data {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    tickets: Vec<Ticket>,
}

impl Data {
    pub fn new(
        customers: Vec<Customer>,
        employees: Vec<Employee>,
        tickets: Vec<Ticket>,
    ) -> Self {
        Self {
            customers,
            employees,
            tickets,
        }
    }
}
