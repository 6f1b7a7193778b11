//! Transaction operations

use super::run;
use crate::client::RequestExecutor;
use crate::operations::{TRANSACTIONS_ALL, TRANSACTIONS_FIND};
use crate::types::{CallOptions, Transaction};
use crate::Result;
use serde_json::Map;

/// Handle for `/transactions` operations
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// List transactions
    pub async fn all(&self, options: Option<&CallOptions>) -> Result<Vec<Transaction>> {
        run(self.executor, &TRANSACTIONS_ALL, &[], Map::new(), options).await
    }

    /// Find a transaction by its ID
    pub async fn find(
        &self,
        transaction_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<Transaction> {
        run(
            self.executor,
            &TRANSACTIONS_FIND,
            &[transaction_id],
            Map::new(),
            options,
        )
        .await
    }
}
