use crate::core::models::Projection;
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::create_test_service;

async fn seed_users(service: &UserService<InMemoryStorage>, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 1..=count {
        let user = service
            .create_user(format!("user{i}"), format!("user{i}@example.com"))
            .await
            .unwrap();
        ids.push(user.id);
    }
    ids
}

#[tokio::test]
async fn test_pagination_window_in_storage_order() {
    let service = create_test_service();
    let ids = seed_users(&service, 12).await;

    let page = service
        .list_users(Some(2), Some(5), &Projection::all())
        .await
        .unwrap();
    let got: Vec<i64> = page.iter().map(|u| u.id).collect();
    assert_eq!(got, ids[5..10].to_vec());
}

#[tokio::test]
async fn test_defaults_are_page_one_limit_ten() {
    let service = create_test_service();
    let ids = seed_users(&service, 12).await;

    let page = service
        .list_users(None, None, &Projection::all())
        .await
        .unwrap();
    let got: Vec<i64> = page.iter().map(|u| u.id).collect();
    assert_eq!(got, ids[..10].to_vec());
}

#[tokio::test]
async fn test_list_excludes_soft_deleted_users() {
    let service = create_test_service();
    let ids = seed_users(&service, 3).await;
    service.delete_user(ids[1]).await.unwrap();

    let page = service
        .list_users(None, None, &Projection::all())
        .await
        .unwrap();
    let got: Vec<i64> = page.iter().map(|u| u.id).collect();
    assert_eq!(got, vec![ids[0], ids[2]]);
}

#[tokio::test]
async fn test_out_of_range_parameters_are_clamped() {
    let service = create_test_service();
    let ids = seed_users(&service, 3).await;

    // page=0 and limit=0 are treated as page=1, limit=1.
    let page = service
        .list_users(Some(0), Some(0), &Projection::all())
        .await
        .unwrap();
    let got: Vec<i64> = page.iter().map(|u| u.id).collect();
    assert_eq!(got, vec![ids[0]]);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let service = create_test_service();
    seed_users(&service, 3).await;

    let page = service
        .list_users(Some(5), Some(10), &Projection::all())
        .await
        .unwrap();
    assert!(page.is_empty());
}
