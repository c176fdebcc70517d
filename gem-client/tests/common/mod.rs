// gem-client/tests/common/mod.rs
// Scripted transport shared by the integration tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use gem_client::http::{ApiRequest, HttpTransport, RawResponse};
use gem_client::session::MemoryStorage;
use gem_client::{AppContext, ClientConfig, ClientError, ClientResult};
use parking_lot::Mutex;
use serde_json::{Value, json};

enum Scripted {
    Response(RawResponse),
    Timeout,
}

/// Answers each path from a queue of canned responses and records every
/// request it sees. Unscripted paths get a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<HashMap<String, VecDeque<Scripted>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, path: &str, entry: Scripted) {
        self.script
            .lock()
            .entry(path.to_string())
            .or_default()
            .push_back(entry);
    }

    pub fn respond(&self, path: &str, body: Value) {
        self.push(path, Scripted::Response(RawResponse::ok(body)));
    }

    pub fn respond_status(&self, path: &str, status: u16, body: Value) {
        self.push(path, Scripted::Response(RawResponse::status(status, body)));
    }

    pub fn expire_token(&self, path: &str) {
        self.push(
            path,
            Scripted::Response(RawResponse {
                status: 401,
                token_expired: true,
                body: Value::Null,
            }),
        );
    }

    pub fn time_out(&self, path: &str) {
        self.push(path, Scripted::Timeout);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> ClientResult<RawResponse> {
        self.requests.lock().push(request.clone());
        let next = self
            .script
            .lock()
            .get_mut(&request.path)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Scripted::Response(raw)) => Ok(raw),
            Some(Scripted::Timeout) => Err(ClientError::Timeout),
            None => Ok(RawResponse::status(
                404,
                json!({ "message": format!("no script for {}", request.path) }),
            )),
        }
    }
}

/// Context over the scripted transport, both storages in memory
pub struct Harness {
    pub context: AppContext,
    pub transport: Arc<ScriptedTransport>,
    pub durable: Arc<MemoryStorage>,
    pub scoped: Arc<MemoryStorage>,
}

impl Harness {
    pub fn new() -> Self {
        let transport = ScriptedTransport::new();
        let durable = Arc::new(MemoryStorage::new());
        let scoped = Arc::new(MemoryStorage::new());
        let context = AppContext::new(
            ClientConfig::default(),
            transport.clone(),
            durable.clone(),
            scoped.clone(),
        );
        Self {
            context,
            transport,
            durable,
            scoped,
        }
    }

    pub fn storage_is_empty(&self) -> bool {
        self.durable.is_empty() && self.scoped.is_empty()
    }
}

pub fn login_body(router_allow: &[&str]) -> Value {
    json!({
        "isSuccess": true,
        "message": "Login successful",
        "token": "jwt-token-1",
        "userId": 7,
        "username": "somchai",
        "email": "somchai@example.com",
        "roles": [{
            "roleId": 2,
            "roleName": "Stock",
            "routerAllow": router_allow,
        }]
    })
}

pub fn stock_body(
    stock_number: &str,
    product_cost: f64,
    gold_weight: f64,
    labor: Option<f64>,
) -> Value {
    let mut materials = vec![json!({
        "type": "gold",
        "itemCode": "GOLD18K",
        "itemNameTh": "ทองคำ 18K",
        "weight": gold_weight,
        "weightUnit": "g",
        "wastePercent": 5,
        "price": 3000,
        "cost": product_cost,
        "qty": 1
    })];
    if let Some(cost) = labor {
        materials.push(json!({
            "type": "labor",
            "itemNameTh": "ค่าแรงช่าง",
            "description": "ค่าแรงประกอบ",
            "cost": cost
        }));
    }
    json!({
        "success": true,
        "message": "",
        "data": {
            "stockNumber": stock_number,
            "productNameTh": "แหวนทอง",
            "productNameEn": "Gold Ring",
            "productCost": product_cost,
            "costSummary": { "finalCost": product_cost, "discountPercent": 0 },
            "materials": materials
        }
    })
}
