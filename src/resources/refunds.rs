//! Refund operations

use super::run;
use crate::client::RequestExecutor;
use crate::operations::{REFUNDS_ALL, REFUNDS_APPLY, REFUNDS_FIND};
use crate::types::{CallOptions, Refund};
use crate::Result;
use serde_json::Map;

/// Handle for `/transactions/{id}/refunds` operations
#[derive(Debug, Clone, Copy)]
pub struct Refunds<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Find a transaction's refund by its ID
    pub async fn find(
        &self,
        transaction_id: &str,
        refund_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<Refund> {
        run(
            self.executor,
            &REFUNDS_FIND,
            &[transaction_id, refund_id],
            Map::new(),
            options,
        )
        .await
    }

    /// Apply a refund to a transaction
    pub async fn apply(
        &self,
        transaction_id: &str,
        refund: &Refund,
        options: Option<&CallOptions>,
    ) -> Result<()> {
        let fields = REFUNDS_APPLY.select_fields(refund)?;
        run(
            self.executor,
            &REFUNDS_APPLY,
            &[transaction_id],
            fields,
            options,
        )
        .await
    }

    /// List the refunds of a transaction
    pub async fn all(
        &self,
        transaction_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<Vec<Refund>> {
        run(
            self.executor,
            &REFUNDS_ALL,
            &[transaction_id],
            Map::new(),
            options,
        )
        .await
    }
}
