//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use user_console::api::{ApiError, ApiResponse, UsersApi};
use user_console::config::TimingConfig;
use user_console::effects::{Notice, Runtime, RuntimeHandles};
use user_console::model::{User, UserFields, UserId};
use user_console::store::UsersState;

/// Upper bound for any single wait in a test.
pub const WAIT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// A call as seen by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(UserFields),
    Update(UserId, UserFields),
    Delete(UserId),
}

#[derive(Default)]
struct MockState {
    users: Vec<User>,
    next_id: u64,
    calls: Vec<Call>,
    list_latency: Duration,
    delete_latency: Duration,
    create_delays: VecDeque<Duration>,
    update_delays: VecDeque<Duration>,
    failures: HashMap<Op, ApiError>,
    status: Option<u16>,
}

/// In-memory [`UsersApi`] with scripted latency and failures.
#[derive(Default)]
pub struct MockUsersApi {
    state: Mutex<MockState>,
    deletes_in_flight: AtomicUsize,
    max_deletes_in_flight: AtomicUsize,
}

impl MockUsersApi {
    pub fn with_users(users: Vec<User>) -> Self {
        let mock = Self::default();
        {
            let mut state = mock.state.lock();
            state.next_id = users.len() as u64 + 100;
            state.users = users;
        }
        mock
    }

    pub fn list_latency(self, latency: Duration) -> Self {
        self.state.lock().list_latency = latency;
        self
    }

    pub fn delete_latency(self, latency: Duration) -> Self {
        self.state.lock().delete_latency = latency;
        self
    }

    /// Latency for successive create calls, consumed in order.
    pub fn create_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        self.state.lock().create_delays.extend(delays);
        self
    }

    pub fn update_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        self.state.lock().update_delays.extend(delays);
        self
    }

    pub fn fail(self, op: Op, error: ApiError) -> Self {
        self.state.lock().failures.insert(op, error);
        self
    }

    /// Answer every call with this (2xx) status instead of 200.
    pub fn status(self, status: u16) -> Self {
        self.state.lock().status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Names of the records the mock server currently holds.
    pub fn stored_names(&self) -> Vec<String> {
        self.state
            .lock()
            .users
            .iter()
            .map(|user| user.name().to_string())
            .collect()
    }

    pub fn deleted(&self) -> Vec<UserId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Delete(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn max_deletes_in_flight(&self) -> usize {
        self.max_deletes_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: Call, op: Op) -> (Option<ApiError>, u16) {
        let mut state = self.state.lock();
        state.calls.push(call);
        (state.failures.get(&op).cloned(), state.status.unwrap_or(200))
    }
}

#[async_trait]
impl UsersApi for MockUsersApi {
    async fn list(&self) -> Result<ApiResponse<Vec<User>>, ApiError> {
        let (failure, status) = self.record(Call::List, Op::List);
        let latency = self.state.lock().list_latency;
        tokio::time::sleep(latency).await;
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(ApiResponse::new(status, self.state.lock().users.clone()))
    }

    async fn create(&self, fields: &UserFields) -> Result<ApiResponse<Option<User>>, ApiError> {
        let (failure, status) = self.record(Call::Create(fields.clone()), Op::Create);
        let delay = self.state.lock().create_delays.pop_front().unwrap_or_default();
        tokio::time::sleep(delay).await;
        if let Some(err) = failure {
            return Err(err);
        }
        let mut state = self.state.lock();
        state.next_id += 1;
        let user = User::new(state.next_id, fields.clone());
        state.users.push(user.clone());
        Ok(ApiResponse::new(status, Some(user)))
    }

    async fn update(&self, id: &UserId, fields: &UserFields) -> Result<ApiResponse<()>, ApiError> {
        let (failure, status) = self.record(Call::Update(id.clone(), fields.clone()), Op::Update);
        let delay = self.state.lock().update_delays.pop_front().unwrap_or_default();
        tokio::time::sleep(delay).await;
        if let Some(err) = failure {
            return Err(err);
        }
        let mut state = self.state.lock();
        if let Some(user) = state.users.iter_mut().find(|user| &user.id == id) {
            user.fields = fields.clone();
        }
        Ok(ApiResponse::new(status, ()))
    }

    async fn delete(&self, id: &UserId) -> Result<ApiResponse<()>, ApiError> {
        let (failure, status) = self.record(Call::Delete(id.clone()), Op::Delete);
        let now = self.deletes_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_deletes_in_flight.fetch_max(now, Ordering::SeqCst);

        let latency = self.state.lock().delete_latency;
        tokio::time::sleep(latency).await;
        self.deletes_in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(err) = failure {
            return Err(err);
        }
        self.state.lock().users.retain(|user| &user.id != id);
        Ok(ApiResponse::new(status, ()))
    }
}

pub fn fields(name: &str) -> UserFields {
    UserFields {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "0123456789".to_string(),
        address: format!("{} Street", name),
    }
}

pub fn user(id: u64, name: &str) -> User {
    User::new(id, fields(name))
}

pub fn spawn_runtime(api: Arc<MockUsersApi>) -> RuntimeHandles {
    Runtime::spawn(api, TimingConfig::immediate())
}

/// Waits until the published state satisfies `pred`.
pub async fn wait_for_state(
    state: &mut watch::Receiver<UsersState>,
    pred: impl FnMut(&UsersState) -> bool,
) -> UsersState {
    tokio::time::timeout(WAIT, state.wait_for(pred))
        .await
        .expect("state condition not reached in time")
        .expect("runtime stopped")
        .clone()
}

pub async fn next_notice(notices: &mut mpsc::UnboundedReceiver<Notice>) -> Notice {
    tokio::time::timeout(WAIT, notices.recv())
        .await
        .expect("no notice in time")
        .expect("notice channel closed")
}

pub fn names(state: &UsersState) -> Vec<&str> {
    state.users.iter().map(|user| user.name()).collect()
}
