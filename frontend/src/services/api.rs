use chrono::{Datelike, NaiveDate};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::{
    AppointmentsQuery, ErrorResponse, ForgotPasswordRequest, MonthAvailabilityQuery,
    ResetPasswordRequest, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};
use shared::{Appointment, DayAvailability, YearMonth};
use uuid::Uuid;

use crate::config::config;
use crate::error::{ApiError, ApiResult};

/// REST client for the GoBarber API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    base_url: String,
    token: Option<String>,
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new(&config().api_base_url)
    }
}

impl ApiService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client that sends `Authorization: Bearer <token>`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    // ------------------------------------------------------------------------
    // Session and account
    // ------------------------------------------------------------------------

    pub async fn sign_in(&self, request: &SignInRequest) -> ApiResult<SignInResponse> {
        let request = self
            .authorize(Request::post(&self.endpoint("/sessions")))
            .json(request)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
        read_json(send(request).await?).await
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> ApiResult<SignUpResponse> {
        let request = self
            .authorize(Request::post(&self.endpoint("/users")))
            .json(request)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
        read_json(send(request).await?).await
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> ApiResult<()> {
        let request = self
            .authorize(Request::post(&self.endpoint("/password/forgot")))
            .json(request)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
        check_status(send(request).await?).await.map(|_| ())
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<()> {
        let request = self
            .authorize(Request::post(&self.endpoint("/password/reset")))
            .json(request)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
        check_status(send(request).await?).await.map(|_| ())
    }

    // ------------------------------------------------------------------------
    // Schedule
    // ------------------------------------------------------------------------

    /// Appointments of the signed-in provider on `date`.
    pub async fn appointments_for_date(&self, date: NaiveDate) -> ApiResult<Vec<Appointment>> {
        let query = AppointmentsQuery {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        };
        let url = format!(
            "{}?year={}&month={}&day={}",
            self.endpoint("/appointments/me"),
            query.year,
            query.month,
            query.day
        );

        let appointments: Vec<Appointment> =
            read_json(self.authorize(Request::get(&url)).send().await.map_err(network)?).await?;
        tracing::debug!("Fetched {} appointments for {}", appointments.len(), date);
        Ok(appointments)
    }

    /// Per-day availability of a provider for a month.
    pub async fn month_availability(
        &self,
        provider_id: Uuid,
        month: YearMonth,
    ) -> ApiResult<Vec<DayAvailability>> {
        let query = MonthAvailabilityQuery {
            year: month.year,
            month: month.month,
        };
        let url = format!(
            "{}?year={}&month={}",
            self.endpoint(&format!("/providers/{}/month-availability", provider_id)),
            query.year,
            query.month
        );

        read_json(self.authorize(Request::get(&url)).send().await.map_err(network)?).await
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

async fn send(request: Request) -> ApiResult<Response> {
    request.send().await.map_err(network)
}

async fn check_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.json::<ErrorResponse>().await.ok();
    let err = ApiError::from_status(status, body);
    tracing::warn!("{} {}: {}", status, response.url(), err);
    Err(err)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    check_status(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))
}
