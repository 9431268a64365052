use super::*;

fn invoice(id: &str, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_owned(),
        status,
        ..Invoice::default()
    }
}

#[test]
fn apply_status_patches_matching_invoice() {
    let mut list = vec![
        invoice("i-1", InvoiceStatus::Pending),
        invoice("i-2", InvoiceStatus::Pending),
    ];
    apply_status(&mut list, "i-2", InvoiceStatus::Approved);
    assert_eq!(list[0].status, InvoiceStatus::Pending);
    assert_eq!(list[1].status, InvoiceStatus::Approved);
}

#[test]
fn apply_status_ignores_unknown_id() {
    let mut list = vec![invoice("i-1", InvoiceStatus::Pending)];
    apply_status(&mut list, "i-9", InvoiceStatus::Rejected);
    assert_eq!(list[0].status, InvoiceStatus::Pending);
}

#[test]
fn pending_count_counts_only_pending() {
    let list = vec![
        invoice("i-1", InvoiceStatus::Pending),
        invoice("i-2", InvoiceStatus::Approved),
        invoice("i-3", InvoiceStatus::Rejected),
        invoice("i-4", InvoiceStatus::Pending),
    ];
    assert_eq!(pending_count(&list), 2);
    assert_eq!(pending_count(&[]), 0);
}
