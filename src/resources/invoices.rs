//! Invoice operations

use super::{run, single_field};
use crate::client::RequestExecutor;
use crate::operations::{
    INVOICES_ALL, INVOICES_ASSIGN_CUSTOMER, INVOICES_AUTHORIZE, INVOICES_CAPTURE,
    INVOICES_CREATE, INVOICES_CUSTOMER, INVOICES_CUSTOMER_ACTION, INVOICES_FIND,
    INVOICES_TRANSACTION, INVOICES_VOID,
};
use crate::types::{CallOptions, Customer, CustomerAction, Invoice, Transaction};
use crate::Result;
use serde_json::Map;

/// Handle for `/invoices` operations
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Authorize the invoice using the given source (customer or token)
    pub async fn authorize(
        &self,
        invoice_id: &str,
        source: &str,
        options: Option<&CallOptions>,
    ) -> Result<()> {
        let fields = single_field("source", source);
        run(self.executor, &INVOICES_AUTHORIZE, &[invoice_id], fields, options).await
    }

    /// Capture the invoice using the given source (customer or token)
    pub async fn capture(
        &self,
        invoice_id: &str,
        source: &str,
        options: Option<&CallOptions>,
    ) -> Result<()> {
        let fields = single_field("source", source);
        run(self.executor, &INVOICES_CAPTURE, &[invoice_id], fields, options).await
    }

    /// Get the customer linked to the invoice
    pub async fn customer(
        &self,
        invoice_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<Customer> {
        run(self.executor, &INVOICES_CUSTOMER, &[invoice_id], Map::new(), options).await
    }

    /// Assign a customer to the invoice
    pub async fn assign_customer(
        &self,
        invoice_id: &str,
        customer_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<Customer> {
        let fields = single_field("customer_id", customer_id);
        run(
            self.executor,
            &INVOICES_ASSIGN_CUSTOMER,
            &[invoice_id],
            fields,
            options,
        )
        .await
    }

    /// Get the action the customer must take to continue the payment flow
    /// on the given gateway
    pub async fn customer_action(
        &self,
        invoice_id: &str,
        gateway_configuration_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<CustomerAction> {
        run(
            self.executor,
            &INVOICES_CUSTOMER_ACTION,
            &[invoice_id, gateway_configuration_id],
            Map::new(),
            options,
        )
        .await
    }

    /// Get the transaction of the invoice
    pub async fn transaction(
        &self,
        invoice_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<Transaction> {
        run(
            self.executor,
            &INVOICES_TRANSACTION,
            &[invoice_id],
            Map::new(),
            options,
        )
        .await
    }

    /// Void the invoice
    pub async fn void(&self, invoice_id: &str, options: Option<&CallOptions>) -> Result<()> {
        run(self.executor, &INVOICES_VOID, &[invoice_id], Map::new(), options).await
    }

    /// List invoices
    pub async fn all(&self, options: Option<&CallOptions>) -> Result<Vec<Invoice>> {
        run(self.executor, &INVOICES_ALL, &[], Map::new(), options).await
    }

    /// Create a new invoice
    pub async fn create(
        &self,
        invoice: &Invoice,
        options: Option<&CallOptions>,
    ) -> Result<Invoice> {
        let fields = INVOICES_CREATE.select_fields(invoice)?;
        run(self.executor, &INVOICES_CREATE, &[], fields, options).await
    }

    /// Find an invoice by its ID
    pub async fn find(&self, invoice_id: &str, options: Option<&CallOptions>) -> Result<Invoice> {
        run(self.executor, &INVOICES_FIND, &[invoice_id], Map::new(), options).await
    }
}
