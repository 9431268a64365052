//! Pure page-state helpers shared by the list pages.
//!
//! DESIGN
//! ======
//! List pages hold their data in plain in-memory vectors, fully replaced on
//! each fetch. Pagination, search, and the invoice status patch are split
//! into small focused modules so each is unit tested on the host target.

pub mod invoices;
pub mod pagination;
pub mod search;
