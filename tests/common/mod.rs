use constcat::concat;
use honey_rae::{api, config, http, Store};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use tokio::net::TcpListener;

const SERVICE_TICKETS: &str = "/servicetickets";
const EMPLOYEES: &str = "/employees";
const CUSTOMERS: &str = "/customers";

pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Serves a freshly seeded store on an ephemeral port.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind a listener");
        let addr = listener.local_addr().expect("no local address");
        let app = http::router(http::AppState {
            store: Store::seeded(OffsetDateTime::now_utc()),
            reports: config::Reports::default(),
        });
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Self {
            inner: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        req: RequestBuilder,
    ) -> Result<reqwest::Response, StatusCode> {
        req.send()
            .await
            .expect("failed to send a request")
            .error_for_status()
            .map_err(|e| e.status().expect("status error"))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, StatusCode> {
        Ok(self
            .send(self.inner.get(self.url(path)))
            .await?
            .json::<T>()
            .await
            .expect("failed to get a response"))
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        self.get(path).await.unwrap()
    }

    pub async fn list_tickets(&self) -> Vec<api::Ticket> {
        self.get(SERVICE_TICKETS).await.unwrap()
    }

    pub async fn get_ticket(
        &self,
        id: api::ticket::Id,
    ) -> Result<api::ticket::Resolved, StatusCode> {
        self.get(&format!("{SERVICE_TICKETS}/{id}")).await
    }

    pub async fn create_ticket(
        &self,
        input: &api::ticket::Input,
    ) -> Result<api::Ticket, StatusCode> {
        let res = self
            .send(self.inner.post(self.url(SERVICE_TICKETS)).json(input))
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        Ok(res.json().await.expect("failed to get a response"))
    }

    pub async fn update_ticket(
        &self,
        id: api::ticket::Id,
        input: &api::ticket::Input,
    ) -> Result<(), StatusCode> {
        let url = self.url(&format!("{SERVICE_TICKETS}/{id}"));
        self.send(self.inner.put(url).json(input)).await.map(drop)
    }

    pub async fn delete_ticket(
        &self,
        id: api::ticket::Id,
    ) -> Result<(), StatusCode> {
        let url = self.url(&format!("{SERVICE_TICKETS}/{id}"));
        self.send(self.inner.delete(url)).await.map(drop)
    }

    pub async fn complete_ticket(
        &self,
        id: api::ticket::Id,
    ) -> Result<(), StatusCode> {
        let url = self.url(&format!("{SERVICE_TICKETS}/{id}/complete"));
        self.send(self.inner.post(url)).await.map(drop)
    }

    pub async fn incomplete_emergencies(&self) -> Vec<api::Ticket> {
        const PATH: &str = concat!(SERVICE_TICKETS, "/emergencies");
        self.get(PATH).await.unwrap()
    }

    pub async fn unassigned_tickets(&self) -> Vec<api::Ticket> {
        const PATH: &str = concat!(SERVICE_TICKETS, "/unassigned");
        self.get(PATH).await.unwrap()
    }

    pub async fn completed_tickets(&self) -> Vec<api::Ticket> {
        const PATH: &str = concat!(SERVICE_TICKETS, "/completed");
        self.get(PATH).await.unwrap()
    }

    pub async fn incomplete_tickets(&self) -> Vec<api::Ticket> {
        const PATH: &str = concat!(SERVICE_TICKETS, "/incomplete");
        self.get(PATH).await.unwrap()
    }

    pub async fn list_employees(&self) -> Vec<api::Employee> {
        self.get(EMPLOYEES).await.unwrap()
    }

    pub async fn get_employee(
        &self,
        id: api::employee::Id,
    ) -> Result<api::employee::WithTickets, StatusCode> {
        self.get(&format!("{EMPLOYEES}/{id}")).await
    }

    pub async fn available_employees(&self) -> Vec<api::Employee> {
        const PATH: &str = concat!(EMPLOYEES, "/available");
        self.get(PATH).await.unwrap()
    }

    pub async fn employee_of_the_month(&self) -> Option<api::Employee> {
        const PATH: &str = concat!(EMPLOYEES, "/of-the-month");
        self.get(PATH).await.unwrap()
    }

    pub async fn employee_customers(
        &self,
        id: api::employee::Id,
    ) -> Vec<api::Customer> {
        self.get(&format!("{EMPLOYEES}/{id}/customers"))
            .await
            .unwrap()
    }

    pub async fn list_customers(&self) -> Vec<api::Customer> {
        self.get(CUSTOMERS).await.unwrap()
    }

    pub async fn get_customer(
        &self,
        id: api::customer::Id,
    ) -> Result<api::customer::WithTickets, StatusCode> {
        self.get(&format!("{CUSTOMERS}/{id}")).await
    }

    pub async fn inactive_customers(&self) -> Vec<api::Customer> {
        const PATH: &str = concat!(CUSTOMERS, "/inactive");
        self.get(PATH).await.unwrap()
    }
}

pub fn ticket_input(
    customer_id: u32,
    employee_id: Option<u32>,
    description: &str,
    emergency: bool,
) -> api::ticket::Input {
    api::ticket::Input {
        id: None,
        customer_id: api::customer::Id::from(customer_id),
        employee_id: employee_id.map(api::employee::Id::from),
        description: description.into(),
        emergency,
        date_completed: None,
    }
}

pub fn ticket_ids(tickets: &[api::Ticket]) -> Vec<api::ticket::Id> {
    tickets.iter().map(|t| t.id).collect()
}

pub fn ids<const N: usize>(ids: [u32; N]) -> [api::ticket::Id; N] {
    ids.map(api::ticket::Id::from)
}
