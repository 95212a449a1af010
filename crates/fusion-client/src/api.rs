//! Typed facade over the backend REST API.

use fusion_types::{
    tracks_from_users, ApiResponse, DashboardStats, KolForm, KolList, TrackConfig, TrackConfigForm,
    UserForm, UserList, UserUpdate,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;
use crate::request::RequestDescriptor;
use crate::transport::TransportSelector;

/// One method per backend operation. Every call goes through the selector.
#[derive(Debug, Clone)]
pub struct FusionApi {
    selector: TransportSelector,
}

impl FusionApi {
    pub fn new(selector: TransportSelector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &TransportSelector {
        &self.selector
    }

    async fn call<R: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<R, ClientError> {
        let value = self.selector.send(&request).await?;
        decode_as(&request, value)
    }

    /// Mutating endpoints answer `{status, message?}`; any other body is kept as `data`.
    async fn ack(&self, request: RequestDescriptor) -> Result<ApiResponse, ClientError> {
        match self.selector.send(&request).await? {
            value @ Value::Object(_) => decode_as(&request, value),
            other => Ok(ApiResponse { status: "ok".to_string(), message: None, data: Some(other) }),
        }
    }

    // ----- Users -----

    pub async fn get_users(&self, username: Option<&str>) -> Result<UserList, ClientError> {
        self.call(RequestDescriptor::get("/user/get").query_opt("username", username)).await
    }

    pub async fn add_user(&self, form: &UserForm) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/add").json(form)?).await
    }

    pub async fn update_user(&self, username: &str, update: &UserUpdate) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/update").query("username", username).json(update)?)
            .await
    }

    pub async fn remove_user(&self, username: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::delete("/user/remove").query("username", username)).await
    }

    pub async fn run_user(&self, username: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/run").query("username", username)).await
    }

    pub async fn stop_user(&self, username: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/stop").query("username", username)).await
    }

    pub async fn run_monitor(&self, username: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/monitor/run").query("username", username)).await
    }

    pub async fn stop_monitor(&self, username: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/monitor/stop").query("username", username)).await
    }

    pub async fn close_all_positions(&self, username: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/close_all").query("username", username)).await
    }

    pub async fn start_exporter(
        &self,
        username: &str,
        exporter_name: Option<&str>,
    ) -> Result<ApiResponse, ClientError> {
        self.ack(
            RequestDescriptor::post("/user/exporter/start")
                .query("username", username)
                .query_opt("exporter_name", exporter_name),
        )
        .await
    }

    pub async fn stop_exporter(&self, username: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/user/exporter/stop").query("username", username)).await
    }

    // ----- KOLs -----

    /// Some backend versions answer with a bare array instead of `{kols: [...]}`.
    pub async fn get_kols(&self, name: Option<&str>) -> Result<KolList, ClientError> {
        let request = RequestDescriptor::get("/kol/get").query_opt("name", name);
        let value = match self.selector.send(&request).await? {
            Value::Array(items) => serde_json::json!({ "kols": items }),
            other => other,
        };
        decode_as(&request, value)
    }

    pub async fn add_kol(&self, form: &KolForm) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/kol/add").json(form)?).await
    }

    pub async fn remove_kol(&self, name: &str) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::delete("/kol/remove").query("name", name)).await
    }

    // ----- Tracks -----

    pub async fn add_track_config(&self, form: &TrackConfigForm) -> Result<ApiResponse, ClientError> {
        self.ack(RequestDescriptor::post("/kol/track/add").json(form)?).await
    }

    pub async fn remove_track_config(&self, username: &str, kol_name: &str) -> Result<ApiResponse, ClientError> {
        self.ack(track_request(RequestDescriptor::delete("/kol/track/remove"), username, kol_name))
            .await
    }

    pub async fn start_track(&self, username: &str, kol_name: &str) -> Result<ApiResponse, ClientError> {
        self.ack(track_request(RequestDescriptor::post("/kol/track/start"), username, kol_name)).await
    }

    pub async fn stop_track(&self, username: &str, kol_name: &str) -> Result<ApiResponse, ClientError> {
        self.ack(track_request(RequestDescriptor::post("/kol/track/stop"), username, kol_name)).await
    }

    pub async fn restart_track(&self, username: &str, kol_name: &str) -> Result<ApiResponse, ClientError> {
        self.ack(track_request(RequestDescriptor::post("/kol/track/restart"), username, kol_name))
            .await
    }

    /// Track configurations live inside user records.
    pub async fn list_tracks(&self) -> Result<Vec<TrackConfig>, ClientError> {
        let users = self.get_users(None).await?;
        Ok(tracks_from_users(&users.users))
    }

    /// Fetch users and KOLs concurrently and summarize them.
    pub async fn dashboard(&self) -> Result<DashboardStats, ClientError> {
        let (users, kols) = tokio::try_join!(self.get_users(None), self.get_kols(None))?;
        Ok(DashboardStats::from_snapshot(&users.users, &kols.kols))
    }

    // ----- Address -----

    pub async fn set_base_url(&self, url: &str) -> Result<(), ClientError> {
        self.selector.set_base_url(url).await
    }

    pub async fn base_url(&self) -> Result<String, ClientError> {
        self.selector.base_url().await
    }
}

fn track_request(request: RequestDescriptor, username: &str, kol_name: &str) -> RequestDescriptor {
    request.query("username", username).query("kol_name", kol_name)
}

fn decode_as<R: DeserializeOwned>(request: &RequestDescriptor, value: Value) -> Result<R, ClientError> {
    serde_json::from_value(value).map_err(|e| {
        ClientError::InvalidResponse(format!("{} {}: {}", request.method(), request.path(), e))
    })
}
