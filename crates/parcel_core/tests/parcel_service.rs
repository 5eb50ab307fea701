use parcel_core::db::open_db_in_memory;
use parcel_core::{ParcelService, ParcelStatus, RepoError, SqliteParcelRepository};

#[test]
fn registered_parcel_can_be_redirected_and_cancelled() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::new(&conn));

    let id = service.register_parcel(1000, "old address").unwrap();
    let parcel = service.get_parcel(id).unwrap();
    assert_eq!(parcel.status, ParcelStatus::Registered);
    assert_eq!(parcel.client, 1000);

    service.change_address(id, "new address").unwrap();
    assert_eq!(service.get_parcel(id).unwrap().address, "new address");

    service.cancel_parcel(id).unwrap();
    assert!(matches!(
        service.get_parcel(id).unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn shipped_parcel_is_locked() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::new(&conn));

    let id = service.register_parcel(1000, "test").unwrap();
    service.ship_parcel(id).unwrap();
    service.change_address(id, "changed").unwrap();
    service.cancel_parcel(id).unwrap();

    let parcel = service.get_parcel(id).unwrap();
    assert_eq!(parcel.status, ParcelStatus::Sent);
    assert_eq!(parcel.address, "test");

    service.deliver_parcel(id).unwrap();
    assert_eq!(service.get_parcel(id).unwrap().status, ParcelStatus::Delivered);
}

#[test]
fn client_parcels_lists_registered_parcels() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::new(&conn));

    let ids = [
        service.register_parcel(42, "a").unwrap(),
        service.register_parcel(42, "b").unwrap(),
        service.register_parcel(42, "c").unwrap(),
    ];

    let numbers: Vec<_> = service
        .client_parcels(42)
        .unwrap()
        .into_iter()
        .filter_map(|parcel| parcel.number)
        .collect();
    assert_eq!(numbers, ids);
}
