#![allow(dead_code)]

use chrono::Utc;
use ta_core::{
    AuditLog, Booking, Invoice, Itinerary, ItineraryItem, Lead, Payment, Role, Task, Ticket,
    User, Vendor,
};
use uuid::Uuid;

/// Creates a test User with a throwaway bcrypt-shaped hash
pub fn create_test_user(tenant_id: Uuid, email: &str, role: Role) -> User {
    User::new(
        tenant_id,
        "Test User".to_string(),
        email.to_string(),
        "$2b$12$saltsaltsaltsaltsaltsuhashhashhashhashhashhashhashhash".to_string(),
        role,
    )
}

/// Creates a test Lead with sensible defaults
pub fn create_test_lead(tenant_id: Uuid) -> Lead {
    let now = Utc::now();
    Lead {
        id: Uuid::new_v4(),
        tenant_id,
        customer_name: "Alice Traveller".to_string(),
        contact_info: "alice@example.com".to_string(),
        phone: Some("+1-555-0100".to_string()),
        destination: Some("Lisbon".to_string()),
        budget: 2500.0,
        travel_date: None,
        details: Some("Two weeks, two adults".to_string()),
        status: "New".to_string(),
        assigned_to: None,
        created_at: now,
        updated_at: now,
    }
}

/// Creates a test Itinerary with two items
pub fn create_test_itinerary(tenant_id: Uuid) -> Itinerary {
    let now = Utc::now();
    let itinerary_id = Uuid::new_v4();
    let items = vec![
        create_test_item(itinerary_id, 1, "flight"),
        create_test_item(itinerary_id, 2, "hotel"),
    ];
    Itinerary {
        id: itinerary_id,
        tenant_id,
        customer_id: None,
        name: "Lisbon Getaway".to_string(),
        start_date: now,
        end_date: now + chrono::Duration::days(7),
        status: "Planned".to_string(),
        total_price: 1800.0,
        items,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_test_item(itinerary_id: Uuid, day: i32, item_type: &str) -> ItineraryItem {
    let now = Utc::now();
    ItineraryItem {
        id: Uuid::new_v4(),
        itinerary_id,
        day,
        item_type: item_type.to_string(),
        description: Some(format!("Day {} {}", day, item_type)),
        cost: 300.0,
        price: 450.0,
        status: "Pending".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn create_test_booking(tenant_id: Uuid) -> Booking {
    let now = Utc::now();
    Booking {
        id: Uuid::new_v4(),
        tenant_id,
        itinerary_id: None,
        booking_ref: Some("PNR123".to_string()),
        status: "Pending".to_string(),
        booking_date: now,
        travel_date: Some(now + chrono::Duration::days(30)),
        cost: 900.0,
        price: 1200.0,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_test_invoice(tenant_id: Uuid) -> Invoice {
    let now = Utc::now();
    Invoice {
        id: Uuid::new_v4(),
        tenant_id,
        invoice_type: "sale".to_string(),
        issue_date: now,
        due_date: now + chrono::Duration::days(14),
        status: "Draft".to_string(),
        amount: 1200.0,
        currency: "USD".to_string(),
        customer_id: None,
        vendor_id: None,
        created_at: now,
        updated_at: now,
    }
}

/// Creates the audit entry that accompanies an invoice insert
pub fn create_test_invoice_audit(tenant_id: Uuid, invoice_id: Uuid) -> AuditLog {
    AuditLog {
        id: Uuid::new_v4(),
        tenant_id,
        user_id: Uuid::new_v4(),
        action: "CREATE_INVOICE".to_string(),
        entity: "Invoice".to_string(),
        entity_id: Some(invoice_id),
        details: Some("Created invoice".to_string()),
        created_at: Utc::now(),
    }
}

pub fn create_test_vendor(tenant_id: Uuid) -> Vendor {
    let now = Utc::now();
    Vendor {
        id: Uuid::new_v4(),
        tenant_id,
        name: "Atlas Hotels".to_string(),
        vendor_type: Some("Hotel".to_string()),
        contact_person: Some("Marta Gomes".to_string()),
        contact_info: Some("reservations@atlashotels.example".to_string()),
        payment_terms: Some("Net 30".to_string()),
        created_at: now,
        updated_at: now,
    }
}

pub fn create_test_payment(tenant_id: Uuid, invoice_id: Uuid) -> Payment {
    let now = Utc::now();
    Payment {
        id: Uuid::new_v4(),
        tenant_id,
        invoice_id,
        payment_date: now,
        amount: 600.0,
        method: Some("Bank Transfer".to_string()),
        status: "Pending".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn create_test_task(tenant_id: Uuid) -> Task {
    let now = Utc::now();
    Task {
        id: Uuid::new_v4(),
        tenant_id,
        title: "Call supplier".to_string(),
        description: Some("Confirm hotel allotment".to_string()),
        assigned_to: None,
        priority: "Normal".to_string(),
        status: "Pending".to_string(),
        due_date: Some(now + chrono::Duration::days(2)),
        created_at: now,
        updated_at: now,
    }
}

pub fn create_test_ticket(tenant_id: Uuid) -> Ticket {
    let now = Utc::now();
    Ticket {
        id: Uuid::new_v4(),
        tenant_id,
        subject: "Seat change request".to_string(),
        description: Some("Customer wants aisle seats".to_string()),
        customer_id: None,
        assigned_to: None,
        status: "Open".to_string(),
        priority: "Normal".to_string(),
        created_at: now,
        updated_at: now,
    }
}
