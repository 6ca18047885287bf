mod common;

use collegiate::collegiate_client::{ResourceGateway, RestResource};
use collegiate::collegiate_core::{PageRequest, SortDirection};
use collegiate::collegiate_models::faculty::FACULTY_SORT_FIELD;
use collegiate::collegiate_models::ids::FacultyId;
use collegiate::collegiate_models::{Faculties, FacultyRequest};
use collegiate::screens::CrudScreen;

fn page_request(page: i64, size: i64) -> PageRequest {
    PageRequest::new(page, size).sorted_by(FACULTY_SORT_FIELD, SortDirection::Asc)
}

fn draft(name: &str) -> FacultyRequest {
    FacultyRequest {
        faculty_name: name.into(),
        email: "new.faculty@college.edu".into(),
        specialization: "Databases".into(),
        phone_number: "9876500000".into(),
        designation: "Assistant Professor".into(),
    }
}

#[tokio::test]
async fn test_paginated_listing_slices_and_counts() {
    let stub = common::spawn_stub().await;
    let (api, _session) = stub.api_as_admin();
    let gateway = RestResource::<Faculties>::new(api);

    let page = gateway.list_paginated(&page_request(0, 5)).await.unwrap();

    assert_eq!(page.content.len(), 5);
    assert_eq!(page.total_elements, 7);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.number, 0);
    assert!(page.has_next());
    assert_eq!(page.content[0].faculty_id, FacultyId::new(1));
}

#[tokio::test]
async fn test_last_page_holds_the_remainder() {
    let stub = common::spawn_stub().await;
    let (api, _session) = stub.api_as_admin();
    let gateway = RestResource::<Faculties>::new(api);

    let page = gateway.list_paginated(&page_request(1, 5)).await.unwrap();

    assert_eq!(page.content.len(), 2);
    assert_eq!(page.number, 1);
    assert!(!page.has_next());
    assert!(page.has_previous());
}

#[tokio::test]
async fn test_screen_pages_through_the_collection() {
    let stub = common::spawn_stub().await;
    let (api, _session) = stub.api_as_admin();
    let mut screen =
        CrudScreen::<Faculties, _>::paginated(RestResource::new(api), page_request(0, 2));

    assert!(screen.load().await);
    assert_eq!(screen.items().len(), 2);
    assert_eq!(screen.page(), Some(0));
    assert_eq!(screen.total_pages(), Some(4));

    assert!(screen.goto_page(3).await);
    assert_eq!(screen.items().len(), 1);
    assert_eq!(screen.items()[0].faculty_id, FacultyId::new(7));
}

#[tokio::test]
async fn test_mutation_refreshes_back_to_the_first_page() {
    let stub = common::spawn_stub().await;
    let (api, _session) = stub.api_as_admin();
    let mut screen =
        CrudScreen::<Faculties, _>::paginated(RestResource::new(api), page_request(0, 2));

    screen.load().await;
    screen.goto_page(2).await;
    assert_eq!(screen.page(), Some(2));

    screen.open_add_form();
    *screen.draft_mut().unwrap() = draft("Dr. New Hire");
    assert!(screen.submit().await);

    assert_eq!(screen.page(), Some(0));
    assert_eq!(screen.total_pages(), Some(4));
    assert_eq!(screen.items()[0].faculty_id, FacultyId::new(1));
}

#[tokio::test]
async fn test_full_replace_update() {
    let stub = common::spawn_stub().await;
    let (api, _session) = stub.api_as_admin();
    let gateway = RestResource::<Faculties>::new(api);

    let payload = draft("Dr. Replaced");
    let updated = gateway.update(FacultyId::new(3), &payload).await.unwrap();

    assert_eq!(updated.faculty_id, FacultyId::new(3));
    assert_eq!(updated.faculty_name, "Dr. Replaced");
    assert_eq!(updated.designation, "Assistant Professor");

    let fetched = gateway.get(FacultyId::new(3)).await.unwrap();
    assert_eq!(updated, fetched);
}
