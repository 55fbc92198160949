//! Cross-tenant access checks. A row created under one tenant must be
//! invisible and immutable from any other tenant, for every repository.

mod common;

use common::{
    create_test_booking, create_test_invoice, create_test_invoice_audit, create_test_itinerary,
    create_test_lead, create_test_payment, create_test_pool, create_test_task, create_test_tenant,
    create_test_ticket, create_test_user, create_test_vendor,
};

use ta_core::Role;
use ta_db::{
    AuditLogRepository, BookingRepository, InvoiceRepository, ItineraryRepository, LeadRepository,
    PaymentRepository, TaskRepository, TicketRepository, UserRepository, VendorRepository,
};

use googletest::prelude::*;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn two_tenants(pool: &SqlitePool) -> (Uuid, Uuid) {
    let tenant_a = Uuid::new_v4();
    let tenant_b = Uuid::new_v4();
    create_test_tenant(pool, tenant_a).await;
    create_test_tenant(pool, tenant_b).await;
    (tenant_a, tenant_b)
}

#[tokio::test]
async fn given_lead_in_tenant_a_when_read_from_tenant_b_then_not_found() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = LeadRepository::new(pool.clone());
    let lead = create_test_lead(tenant_a);
    repo.create(&lead).await.unwrap();

    assert_that!(repo.find_by_id(tenant_b, lead.id).await.unwrap(), none());
    assert_that!(repo.find_all(tenant_b).await.unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_lead_in_tenant_a_when_deleted_from_tenant_b_then_it_survives() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = LeadRepository::new(pool.clone());
    let lead = create_test_lead(tenant_a);
    repo.create(&lead).await.unwrap();

    let affected = repo.delete(tenant_b, lead.id).await.unwrap();
    assert_that!(affected, eq(0));

    assert_that!(
        repo.find_by_id(tenant_a, lead.id).await.unwrap(),
        some(anything())
    );
}

#[tokio::test]
async fn given_itinerary_in_tenant_a_when_read_from_tenant_b_then_not_found() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = ItineraryRepository::new(pool.clone());
    let itinerary = create_test_itinerary(tenant_a);
    repo.create(&itinerary).await.unwrap();

    assert_that!(
        repo.find_by_id(tenant_b, itinerary.id).await.unwrap(),
        none()
    );
    assert_that!(repo.find_all(tenant_b).await.unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_booking_in_tenant_a_when_updated_from_tenant_b_then_zero_rows() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = BookingRepository::new(pool.clone());
    let mut booking = create_test_booking(tenant_a);
    repo.create(&booking).await.unwrap();

    booking.tenant_id = tenant_b;
    booking.status = "Cancelled".to_string();

    let affected = repo.update(&booking).await.unwrap();
    assert_that!(affected, eq(0));

    let found = repo
        .find_by_id(tenant_a, booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.status, eq("Pending"));
}

#[tokio::test]
async fn given_invoice_in_tenant_a_when_read_from_tenant_b_then_not_found() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = InvoiceRepository::new(pool.clone());
    let invoice = create_test_invoice(tenant_a);
    let audit = create_test_invoice_audit(tenant_a, invoice.id);
    repo.create(&invoice, &audit).await.unwrap();

    assert_that!(repo.find_by_id(tenant_b, invoice.id).await.unwrap(), none());
    assert_that!(repo.find_all(tenant_b).await.unwrap().len(), eq(0));

    let foreign_entries = AuditLogRepository::new(pool.clone())
        .find_all(tenant_b)
        .await
        .unwrap();
    assert_that!(foreign_entries.len(), eq(0));
}

#[tokio::test]
async fn given_vendor_in_tenant_a_when_read_from_tenant_b_then_not_found() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = VendorRepository::new(pool.clone());
    let vendor = create_test_vendor(tenant_a);
    repo.create(&vendor).await.unwrap();

    assert_that!(repo.find_by_id(tenant_b, vendor.id).await.unwrap(), none());
    assert_that!(repo.find_all(tenant_b).await.unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_vendor_in_tenant_a_when_updated_from_tenant_b_then_zero_rows() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = VendorRepository::new(pool.clone());
    let mut vendor = create_test_vendor(tenant_a);
    repo.create(&vendor).await.unwrap();

    vendor.tenant_id = tenant_b;
    vendor.name = "Hijacked".to_string();

    let affected = repo.update(&vendor).await.unwrap();
    assert_that!(affected, eq(0));

    let found = repo
        .find_by_id(tenant_a, vendor.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.name, eq("Atlas Hotels"));
}

#[tokio::test]
async fn given_payment_in_tenant_a_when_read_from_tenant_b_then_not_found() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let invoice = create_test_invoice(tenant_a);
    let audit = create_test_invoice_audit(tenant_a, invoice.id);
    InvoiceRepository::new(pool.clone())
        .create(&invoice, &audit)
        .await
        .unwrap();

    let repo = PaymentRepository::new(pool.clone());
    let payment = create_test_payment(tenant_a, invoice.id);
    repo.create(&payment).await.unwrap();

    assert_that!(repo.find_by_id(tenant_b, payment.id).await.unwrap(), none());
    assert_that!(repo.find_all(tenant_b).await.unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_task_in_tenant_a_when_deleted_from_tenant_b_then_it_survives() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = TaskRepository::new(pool.clone());
    let task = create_test_task(tenant_a);
    repo.create(&task).await.unwrap();

    let affected = repo.delete(tenant_b, task.id).await.unwrap();
    assert_that!(affected, eq(0));

    assert_that!(
        repo.find_by_id(tenant_a, task.id).await.unwrap(),
        some(anything())
    );
}

#[tokio::test]
async fn given_ticket_in_tenant_a_when_read_from_tenant_b_then_not_found() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = TicketRepository::new(pool.clone());
    let ticket = create_test_ticket(tenant_a);
    repo.create(&ticket).await.unwrap();

    assert_that!(repo.find_by_id(tenant_b, ticket.id).await.unwrap(), none());
    assert_that!(repo.find_all(tenant_b).await.unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_user_in_tenant_a_when_read_from_tenant_b_then_not_found() {
    let pool = create_test_pool().await;
    let (tenant_a, tenant_b) = two_tenants(&pool).await;

    let repo = UserRepository::new(pool.clone());
    let user = create_test_user(tenant_a, "isolated@example.com", Role::Agent);
    repo.create(&user).await.unwrap();

    assert_that!(repo.find_by_id(tenant_b, user.id).await.unwrap(), none());
    assert_that!(repo.find_all(tenant_b).await.unwrap().len(), eq(0));
}
