use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use derive_more::From;
use time::OffsetDateTime;
use tower_http::trace::TraceLayer;

use crate::{api, config, store, Store};

pub type SharedAppState = Arc<AppState>;

pub struct AppState {
    pub store: Store,

    pub reports: config::Reports,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/servicetickets", get(list_tickets).post(create_ticket))
        .route(
            "/servicetickets/:id",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .route("/servicetickets/:id/complete", post(complete_ticket))
        .route(
            "/servicetickets/emergencies",
            get(list_incomplete_emergencies),
        )
        .route("/servicetickets/unassigned", get(list_unassigned_tickets))
        .route("/servicetickets/completed", get(list_completed_tickets))
        .route("/servicetickets/incomplete", get(list_incomplete_tickets))
        .route("/employees", get(list_employees))
        .route("/employees/:id", get(get_employee))
        .route("/employees/:id/customers", get(list_employee_customers))
        .route("/employees/available", get(list_available_employees))
        .route("/employees/of-the-month", get(employee_of_the_month))
        .route("/customers", get(list_customers))
        .route("/customers/:id", get(get_customer))
        .route("/customers/inactive", get(list_inactive_customers))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn tickets<'a>(
    tickets: impl IntoIterator<Item = &'a store::Ticket>,
) -> Json<Vec<api::Ticket>> {
    Json(tickets.into_iter().map(api::Ticket::from).collect())
}

fn employees<'a>(
    employees: impl IntoIterator<Item = &'a store::Employee>,
) -> Json<Vec<api::Employee>> {
    Json(employees.into_iter().map(api::Employee::from).collect())
}

fn customers<'a>(
    customers: impl IntoIterator<Item = &'a store::Customer>,
) -> Json<Vec<api::Customer>> {
    Json(customers.into_iter().map(api::Customer::from).collect())
}

async fn list_tickets(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Ticket>> {
    let data = state.store.read().await;
    tickets(data.tickets())
}

async fn get_ticket(
    State(state): State<SharedAppState>,
    Path(id): Path<api::ticket::Id>,
) -> Result<Json<api::ticket::Resolved>, GetTicketError> {
    use GetTicketError as E;

    let data = state.store.read().await;
    let ticket = data.ticket_by_id(id).ok_or(E::TicketNotFound(id))?;

    Ok(Json(api::ticket::Resolved::resolve(ticket, &data)))
}

#[derive(Debug)]
pub enum GetTicketError {
    TicketNotFound(api::ticket::Id),
}

impl IntoResponse for GetTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::TicketNotFound(id) => {
                tracing::debug!(%id, "service ticket not found");
                StatusCode::NOT_FOUND
            }
        }
        .into_response()
    }
}

async fn create_ticket(
    State(state): State<SharedAppState>,
    Json(input): Json<api::ticket::Input>,
) -> (StatusCode, Json<api::Ticket>) {
    let mut data = state.store.write().await;
    let ticket =
        data.add_ticket(input.into_ticket(api::ticket::Id::default()));
    tracing::info!(id = %ticket.id, "service ticket created");

    (StatusCode::CREATED, Json(ticket.into()))
}

async fn update_ticket(
    State(state): State<SharedAppState>,
    Path(id): Path<api::ticket::Id>,
    Json(input): Json<api::ticket::Input>,
) -> Result<StatusCode, UpdateTicketError> {
    use UpdateTicketError as E;

    if input.id != Some(id) {
        tracing::debug!(%id, body_id = ?input.id, "ticket id mismatch");
        return Err(E::IdMismatch);
    }

    state
        .store
        .write()
        .await
        .replace_ticket(id, input.into_ticket(id))?;
    tracing::info!(%id, "service ticket updated");

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, From)]
pub enum UpdateTicketError {
    IdMismatch,
    #[from]
    StoreError(store::Error),
}

impl IntoResponse for UpdateTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::IdMismatch => StatusCode::BAD_REQUEST,
            Self::StoreError(e @ store::Error::TicketNotFound(_)) => {
                tracing::debug!(error = %e, "service ticket update failed");
                StatusCode::NOT_FOUND
            }
        }
        .into_response()
    }
}

async fn delete_ticket(
    State(state): State<SharedAppState>,
    Path(id): Path<api::ticket::Id>,
) -> Result<StatusCode, TicketMutationError> {
    state.store.write().await.remove_ticket(id)?;
    tracing::info!(%id, "service ticket deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn complete_ticket(
    State(state): State<SharedAppState>,
    Path(id): Path<api::ticket::Id>,
) -> Result<StatusCode, TicketMutationError> {
    state
        .store
        .write()
        .await
        .complete_ticket(id, OffsetDateTime::now_utc())?;
    tracing::info!(%id, "service ticket completed");

    Ok(StatusCode::NO_CONTENT)
}

/// Failure of a mutation addressing a single ticket by id.
#[derive(Debug, From)]
pub enum TicketMutationError {
    #[from]
    StoreError(store::Error),
}

impl IntoResponse for TicketMutationError {
    fn into_response(self) -> Response {
        match self {
            Self::StoreError(e @ store::Error::TicketNotFound(_)) => {
                tracing::debug!(error = %e, "service ticket mutation failed");
                StatusCode::NOT_FOUND
            }
        }
        .into_response()
    }
}

async fn list_incomplete_emergencies(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Ticket>> {
    let data = state.store.read().await;
    tickets(data.incomplete_emergencies())
}

async fn list_unassigned_tickets(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Ticket>> {
    let data = state.store.read().await;
    tickets(data.unassigned_tickets())
}

async fn list_completed_tickets(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Ticket>> {
    let data = state.store.read().await;
    tickets(data.completed_oldest_first())
}

async fn list_incomplete_tickets(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Ticket>> {
    let data = state.store.read().await;
    tickets(data.incomplete_by_priority())
}

async fn list_employees(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Employee>> {
    let data = state.store.read().await;
    employees(data.employees())
}

async fn get_employee(
    State(state): State<SharedAppState>,
    Path(id): Path<api::employee::Id>,
) -> Result<Json<api::employee::WithTickets>, GetEmployeeError> {
    use GetEmployeeError as E;

    let data = state.store.read().await;
    let employee =
        data.employee_by_id(id).ok_or(E::EmployeeNotFound(id))?;

    Ok(Json(api::employee::WithTickets::resolve(employee, &data)))
}

#[derive(Debug)]
pub enum GetEmployeeError {
    EmployeeNotFound(api::employee::Id),
}

impl IntoResponse for GetEmployeeError {
    fn into_response(self) -> Response {
        match self {
            Self::EmployeeNotFound(id) => {
                tracing::debug!(%id, "employee not found");
                (StatusCode::NOT_FOUND, "No employee found.")
            }
        }
        .into_response()
    }
}

async fn list_available_employees(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Employee>> {
    let data = state.store.read().await;
    employees(data.available_employees())
}

async fn employee_of_the_month(
    State(state): State<SharedAppState>,
) -> Json<Option<api::Employee>> {
    let data = state.store.read().await;
    let best = data.employee_of_the_month(
        OffsetDateTime::now_utc(),
        state.reports.employee_of_month,
    );

    Json(best.map(api::Employee::from))
}

async fn list_employee_customers(
    State(state): State<SharedAppState>,
    Path(id): Path<api::employee::Id>,
) -> Json<Vec<api::Customer>> {
    let data = state.store.read().await;
    customers(data.customers_assigned_to(id))
}

async fn list_customers(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Customer>> {
    let data = state.store.read().await;
    customers(data.customers())
}

async fn get_customer(
    State(state): State<SharedAppState>,
    Path(id): Path<api::customer::Id>,
) -> Result<Json<api::customer::WithTickets>, GetCustomerError> {
    use GetCustomerError as E;

    let data = state.store.read().await;
    let customer =
        data.customer_by_id(id).ok_or(E::CustomerNotFound(id))?;

    Ok(Json(api::customer::WithTickets::resolve(customer, &data)))
}

#[derive(Debug)]
pub enum GetCustomerError {
    CustomerNotFound(api::customer::Id),
}

impl IntoResponse for GetCustomerError {
    fn into_response(self) -> Response {
        match self {
            Self::CustomerNotFound(id) => {
                tracing::debug!(%id, "customer not found");
                (StatusCode::NOT_FOUND, "No customer found.")
            }
        }
        .into_response()
    }
}

async fn list_inactive_customers(
    State(state): State<SharedAppState>,
) -> Json<Vec<api::Customer>> {
    let data = state.store.read().await;

    customers(data.customers_not_closed_within(
        OffsetDateTime::now_utc(),
        state.reports.customer_inactivity,
    ))
}
