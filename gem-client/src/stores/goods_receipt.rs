//! Manual goods receipt

use serde_json::Value;
use shared::models::ManualReceipt;

use super::{Saved, StoreState, body_message, message_or, require_success, success_flag};
use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

#[derive(Debug)]
pub struct GoodsReceiptStore {
    api: ApiClient,
    state: StoreState,
}

impl GoodsReceiptStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StoreState::default(),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// `POST api/goodsreceipt/manualreceipt`
    ///
    /// The returned record is whatever the server put under `data`; its
    /// shape depends on the receipt and is passed through untouched.
    pub async fn manual_receipt(&self, receipt: &ManualReceipt) -> ClientResult<Saved<Value>> {
        self.state
            .track(async {
                validate_receipt(receipt)?;
                let mut body = self
                    .api
                    .post("api/goodsreceipt/manualreceipt", receipt)
                    .await?;
                let message = body_message(&body);
                require_success(success_flag(&body), message, || {
                    "Failed to create goods receipt".to_string()
                })?;
                let message =
                    message_or(message, || "Goods receipt created successfully".to_string());
                let record = body.get_mut("data").map(Value::take).filter(|d| !d.is_null());

                tracing::info!(mold = %receipt.mold, qty = receipt.qty, "Goods receipt created");
                Ok(Saved { message, record })
            })
            .await
    }
}

fn validate_receipt(receipt: &ManualReceipt) -> ClientResult<()> {
    let missing = [
        ("mold", receipt.mold.as_str()),
        ("origin number", receipt.origin_number.as_str()),
        ("product name", receipt.product_name_th.as_str()),
        ("product type", receipt.product_type_code.as_str()),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty());

    if let Some((field, _)) = missing {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    if receipt.qty <= 0.0 {
        return Err(ClientError::Validation("qty must be greater than 0".to_string()));
    }
    Ok(())
}
