//! Invoice list helpers.

#[cfg(test)]
#[path = "invoices_test.rs"]
mod invoices_test;

use crate::net::types::{Invoice, InvoiceStatus};

/// Patch the status of one invoice in place.
///
/// Called after the server has acknowledged an approve/reject, so the list
/// reflects the transition without a wholesale refetch. Unknown ids are a
/// no-op.
pub fn apply_status(invoices: &mut [Invoice], id: &str, status: InvoiceStatus) {
    if let Some(invoice) = invoices.iter_mut().find(|inv| inv.id == id) {
        invoice.status = status;
    }
}

/// Number of invoices still awaiting review.
pub fn pending_count(invoices: &[Invoice]) -> usize {
    invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Pending)
        .count()
}
