//! View models projected from API responses.
//!
//! These are transient page state: fully replaced on each fetch, never
//! persisted. Projection from raw JSON lives in [`crate::net::payload`].

/// A branch location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub logo: Option<String>,
    pub staff_count: u64,
}

/// A staff directory row, flattened for the table view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub branch: String,
}

/// Invoice review status as reported by (and patched back into) the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl InvoiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// An invoice awaiting review for a branch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub customer_name: String,
    pub date: String,
    pub image: Option<String>,
    pub total: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub status: InvoiceStatus,
}
