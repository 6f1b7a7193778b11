//! Tailored invoice operations

use super::run;
use crate::client::RequestExecutor;
use crate::operations::{
    TAILORED_INVOICES_ALL, TAILORED_INVOICES_CREATE, TAILORED_INVOICES_DELETE,
    TAILORED_INVOICES_FIND, TAILORED_INVOICES_INVOICE, TAILORED_INVOICES_SAVE,
};
use crate::types::{CallOptions, Invoice, TailoredInvoice};
use crate::Result;
use serde_json::Map;

/// Handle for `/tailored-invoices` operations
#[derive(Debug, Clone, Copy)]
pub struct TailoredInvoices<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> TailoredInvoices<'a> {
    pub(crate) fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Create a new invoice from the tailored invoice
    pub async fn invoice(
        &self,
        tailored_invoice_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<Invoice> {
        run(
            self.executor,
            &TAILORED_INVOICES_INVOICE,
            &[tailored_invoice_id],
            Map::new(),
            options,
        )
        .await
    }

    /// List tailored invoices
    pub async fn all(&self, options: Option<&CallOptions>) -> Result<Vec<TailoredInvoice>> {
        run(self.executor, &TAILORED_INVOICES_ALL, &[], Map::new(), options).await
    }

    /// Create a new tailored invoice
    pub async fn create(
        &self,
        tailored_invoice: &TailoredInvoice,
        options: Option<&CallOptions>,
    ) -> Result<TailoredInvoice> {
        let fields = TAILORED_INVOICES_CREATE.select_fields(tailored_invoice)?;
        run(self.executor, &TAILORED_INVOICES_CREATE, &[], fields, options).await
    }

    /// Find a tailored invoice by its ID
    pub async fn find(
        &self,
        tailored_invoice_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<TailoredInvoice> {
        run(
            self.executor,
            &TAILORED_INVOICES_FIND,
            &[tailored_invoice_id],
            Map::new(),
            options,
        )
        .await
    }

    /// Save the updated tailored invoice attributes
    pub async fn save(
        &self,
        tailored_invoice: &TailoredInvoice,
        options: Option<&CallOptions>,
    ) -> Result<TailoredInvoice> {
        let fields = TAILORED_INVOICES_SAVE.select_fields(tailored_invoice)?;
        run(
            self.executor,
            &TAILORED_INVOICES_SAVE,
            &[tailored_invoice.id.as_str()],
            fields,
            options,
        )
        .await
    }

    /// Delete the tailored invoice
    pub async fn delete(
        &self,
        tailored_invoice_id: &str,
        options: Option<&CallOptions>,
    ) -> Result<()> {
        run(
            self.executor,
            &TAILORED_INVOICES_DELETE,
            &[tailored_invoice_id],
            Map::new(),
            options,
        )
        .await
    }
}
