//! REST client for the rental server.
//!
//! Wraps every `/api/v1` endpoint plus `/health` using [`reqwest`].

use dvdrental_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::types::{
    Cancellation, Customer, CustomerReport, Film, FilmAvailability, Health, MostRentedReport,
    NewRental, Payment, Rental, RentalSummary, Staff, StaffEarningsReport, UnreturnedReport,
};

/// HTTP client bound to one server.
#[derive(Debug, Clone)]
pub struct RentalApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from [`RentalApi`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a usable response (connect, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status} {code}): {message}")]
    Api {
        status: u16,
        /// Machine-readable code such as `CONFLICT` or `NOT_FOUND`.
        code: String,
        message: String,
    },
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// Error body produced by the server's error handler.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

impl RentalApi {
    /// * `base_url` - server root without a trailing slash, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- catalog ----

    /// `GET /customers?limit=`
    pub async fn list_customers(&self, limit: Option<i64>) -> Result<Vec<Customer>, ClientError> {
        self.get_with_limit("/customers", limit).await
    }

    /// `GET /customers/{id}`
    pub async fn get_customer(&self, id: DbId) -> Result<Customer, ClientError> {
        self.get(&format!("/customers/{id}")).await
    }

    /// `GET /films?limit=`
    pub async fn list_films(&self, limit: Option<i64>) -> Result<Vec<Film>, ClientError> {
        self.get_with_limit("/films", limit).await
    }

    /// `GET /films/{id}`
    pub async fn get_film(&self, id: DbId) -> Result<Film, ClientError> {
        self.get(&format!("/films/{id}")).await
    }

    /// `GET /films/{id}/availability`
    pub async fn film_availability(&self, id: DbId) -> Result<FilmAvailability, ClientError> {
        self.get(&format!("/films/{id}/availability")).await
    }

    /// `GET /staff`
    pub async fn list_staff(&self) -> Result<Vec<Staff>, ClientError> {
        self.get("/staff").await
    }

    // ---- rentals ----

    /// `GET /rentals?limit=`
    pub async fn list_rentals(&self, limit: Option<i64>) -> Result<Vec<RentalSummary>, ClientError> {
        self.get_with_limit("/rentals", limit).await
    }

    /// `POST /rentals`
    ///
    /// Fails with status 409 when no copy of the film is free.
    pub async fn create_rental(&self, request: &NewRental) -> Result<Rental, ClientError> {
        tracing::debug!(
            customer_id = request.customer_id,
            film_id = request.film_id,
            "Creating rental"
        );
        let response = self
            .client
            .post(self.url("/rentals"))
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /rentals/{id}`
    pub async fn get_rental(&self, id: DbId) -> Result<Rental, ClientError> {
        self.get(&format!("/rentals/{id}")).await
    }

    /// `GET /rentals/{id}/payment`
    pub async fn rental_payment(&self, id: DbId) -> Result<Payment, ClientError> {
        self.get(&format!("/rentals/{id}/payment")).await
    }

    /// `PUT /rentals/{id}/return`
    pub async fn return_rental(&self, id: DbId) -> Result<Rental, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/rentals/{id}/return")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /rentals/{id}`
    pub async fn cancel_rental(&self, id: DbId) -> Result<Cancellation, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/rentals/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- reports ----

    /// `GET /reports/customer/{id}`
    pub async fn customer_report(&self, id: DbId) -> Result<CustomerReport, ClientError> {
        self.get(&format!("/reports/customer/{id}")).await
    }

    /// `GET /reports/unreturned`
    pub async fn unreturned_report(&self) -> Result<UnreturnedReport, ClientError> {
        self.get("/reports/unreturned").await
    }

    /// `GET /reports/most-rented?limit=`
    pub async fn most_rented_report(
        &self,
        limit: Option<i64>,
    ) -> Result<MostRentedReport, ClientError> {
        self.get_with_limit("/reports/most-rented", limit).await
    }

    /// `GET /reports/staff-earnings`
    pub async fn staff_earnings_report(&self) -> Result<StaffEarningsReport, ClientError> {
        self.get("/reports/staff-earnings").await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(response).await
    }

    async fn get_with_limit<T: DeserializeOwned>(
        &self,
        path: &str,
        limit: Option<i64>,
    ) -> Result<T, ClientError> {
        let mut request = self.client.get(self.url(path));
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }
        Self::parse_response(request.send().await?).await
    }

    /// Turn a non-2xx response into [`ClientError::Api`], using the server's
    /// `{"error", "code"}` body when it has one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let (code, message) = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => (parsed.code, parsed.error),
            Err(_) => ("UNKNOWN".to_string(), body),
        };
        tracing::debug!(status = status.as_u16(), %code, "API call failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
