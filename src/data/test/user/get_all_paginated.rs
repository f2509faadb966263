use super::*;

/// Tests pagination and name ordering.
///
/// Verifies that pages are sliced after sorting by name and the total count
/// covers every row.
///
/// Expected: Ok with ordered pages and a full total
#[tokio::test]
async fn pages_users_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("charlie").build().await?;
    factory::user::UserFactory::new(db).name("alex").build().await?;
    factory::user::UserFactory::new(db).name("blake").build().await?;

    let repo = UserRepository::new(db);

    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 3);
    let names: Vec<&str> = first_page.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["alex", "blake"]);

    let (second_page, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "charlie");

    Ok(())
}
