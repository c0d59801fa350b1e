//! The typed client used by the UI, driven through the proxy.

use anyhow::Result;
use payloads::{
    CategoryId, ClientError, FileId, LocationData, UserId,
    requests::{CategoryRequest, FileUpload, IntroduceRequest, LoginCredentials},
};
use reqwest::StatusCode;

use crate::helpers::spawn_app;

#[tokio::test]
async fn session_follows_the_login_cookie() -> Result<()> {
    let app = spawn_app().await;

    assert!(!app.client.login_check().await?);

    let result = app
        .client
        .login(&LoginCredentials {
            login_id: "alice".into(),
            password: "wrong-password".into(),
        })
        .await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    app.client
        .login(&LoginCredentials {
            login_id: "alice".into(),
            password: "correct-horse-1".into(),
        })
        .await?;
    assert!(app.client.login_check().await?);

    let profile = app.client.current_user().await?;
    assert_eq!(profile.id, UserId(5));
    assert_eq!(profile.login_id, "alice");
    Ok(())
}

#[tokio::test]
async fn categories_are_listed_per_user_and_created() -> Result<()> {
    let app = spawn_app().await;

    let categories = app.client.list_categories(UserId(5)).await?;
    let ids: Vec<_> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![CategoryId(1), CategoryId(2)]);

    assert!(app.client.list_categories(UserId(6)).await?.is_empty());

    let created = app
        .client
        .create_category(
            UserId(5),
            &CategoryRequest {
                category_title: "새 카테고리".into(),
            },
        )
        .await?;
    assert_eq!(created.id, CategoryId(3));
    assert_eq!(created.category_title, "새 카테고리");
    Ok(())
}

#[tokio::test]
async fn categories_are_read_renamed_and_deleted_by_id() -> Result<()> {
    let app = spawn_app().await;

    let category = app.client.get_category("p-1").await?;
    assert_eq!(category.category_title, "프로젝트");
    assert_status_code(
        app.client.get_category("p-404").await,
        StatusCode::NOT_FOUND,
    );

    let renamed = app
        .client
        .update_category(
            "p-1",
            &CategoryRequest {
                category_title: "포트폴리오".into(),
            },
        )
        .await?;
    assert_eq!(renamed.public_id.as_deref(), Some("p-1"));
    assert_eq!(renamed.category_title, "포트폴리오");

    let message = app.client.delete_category(CategoryId(1)).await?;
    assert_eq!(message, "카테고리가 삭제되었습니다");
    assert_status_code(
        app.client.delete_category(CategoryId(9)).await,
        StatusCode::NOT_FOUND,
    );
    Ok(())
}

#[tokio::test]
async fn categories_are_found_in_the_owners_list() -> Result<()> {
    let app = spawn_app().await;

    let found = app.client.find_category(UserId(5), CategoryId(2)).await?;
    assert_eq!(found.map(|c| c.category_title), Some("자료".into()));

    let missing = app.client.find_category(UserId(5), CategoryId(99)).await?;
    assert_eq!(missing, None);

    let failed = app.client.find_category(UserId(500), CategoryId(1)).await;
    assert_status_code(failed, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}

#[tokio::test]
async fn intro_posts_are_read_created_and_updated() -> Result<()> {
    let app = spawn_app().await;

    let stored = app.client.get_introduce(CategoryId(1)).await?.stored();
    assert_eq!(stored.map(|intro| intro.title), Some("프로젝트".into()));
    assert_eq!(app.client.get_introduce(CategoryId(2)).await?.stored(), None);

    let intro = IntroduceRequest {
        title: "자료".into(),
        content: "## 프로젝트 개요".into(),
    };
    assert_eq!(
        app.client.create_introduce(CategoryId(2), &intro).await?,
        "생성 완료"
    );
    assert_eq!(
        app.client.update_introduce(CategoryId(1), &intro).await?,
        "수정 완료"
    );
    assert_status_code(
        app.client.update_introduce(CategoryId(2), &intro).await,
        StatusCode::NOT_FOUND,
    );
    Ok(())
}

#[tokio::test]
async fn files_are_listed_uploaded_and_deleted() -> Result<()> {
    let app = spawn_app().await;

    let files = app.client.list_files(CategoryId(1)).await?;
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].size, Some(2048));
    assert_eq!(files[1].upload_date, None);

    let url = app
        .client
        .upload_file(
            CategoryId(1),
            FileUpload {
                title: "보고서".into(),
                file_name: "report.pdf".into(),
                mime_type: Some("application/pdf".into()),
                data: b"%PDF-1.4".to_vec(),
            },
        )
        .await?;
    assert_eq!(url, "https://files.example/report.pdf");

    app.client.delete_file(&FileId::from("10")).await?;
    let result = app.client.delete_file(&FileId::from("missing")).await;
    match result {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::NOT_FOUND);
            assert_eq!(text, "파일을 찾을 수 없습니다");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn location_is_read_and_replaced() -> Result<()> {
    let app = spawn_app().await;

    let current = app.client.get_user_location(UserId(5)).await?;
    assert_eq!(current.location.address, "서울특별시 중구");
    assert_eq!(current.phone_number, "010-1234-5678");

    let update = current.with_location(LocationData {
        lat: 35.1796,
        lng: 129.0756,
        address: "부산광역시".into(),
    });
    let saved = app.client.update_user_location(UserId(5), &update).await?;
    assert_eq!(saved.location.address, "부산광역시");
    assert_eq!(saved.email, "alice@example.com");

    let missing = app.client.get_user_location(UserId(7)).await;
    assert_status_code(missing, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unset_contact_columns_read_as_empty() -> Result<()> {
    let app = spawn_app().await;

    let current = app.client.get_user_location(UserId(6)).await?;
    assert_eq!(current.location.address, "서울");
    assert_eq!(current.email, "");
    assert_eq!(current.phone_number, "");
    Ok(())
}

/// Assert that the result of an API action results in a specific status code.
fn assert_status_code<T>(result: Result<T, ClientError>, expected: StatusCode) {
    match result {
        Err(ClientError::APIError(code, _)) => assert_eq!(code, expected),
        _ => panic!("Expected APIError"),
    };
}
