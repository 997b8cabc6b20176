//! Wire-shape coverage for the typed resource clients.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use serde_json::json;
use stylematch_domain::{
    ClothingStatus, ClothingType, CreateClothingRequest, CreateManualHistoryRequest,
    CreateMatchTaskRequest, CreateMemberRequest, MatchRecordStatus, TaskStatus, UpdateMemberRequest,
    UploadBizType,
};
use support::{envelope, TestClient};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn member_json(id: i64, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "bodyData": null, "photoUrl": null, "styleTags": null })
}

#[tokio::test]
async fn member_crud_round_trip() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("access", "refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/members"))
        .and(query_param("page", "1"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "items": [member_json(6, "Ari")], "total": 6, "page": 1, "size": 5
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/members"))
        .and(body_json(json!({ "name": "Mina", "styleTags": "minimal_chic" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(member_json(7, "Mina"))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/members/7"))
        .and(body_json(json!({ "photoUrl": "https://cdn.example.com/m/7.png" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(member_json(7, "Mina"))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/members/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 0, "message": "OK", "data": null })),
        )
        .mount(&ctx.server)
        .await;

    let page = ctx.client.members().list(1, 5).await?;
    assert_eq!(page.items[0].name, "Ari");
    assert_eq!(page.total, 6);

    let created = ctx
        .client
        .members()
        .create(&CreateMemberRequest {
            name: "Mina".into(),
            style_tags: Some("minimal_chic".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(created.id, 7);

    ctx.client
        .members()
        .update(
            7,
            &UpdateMemberRequest {
                photo_url: Some("https://cdn.example.com/m/7.png".into()),
                ..Default::default()
            },
        )
        .await?;

    ctx.client.members().delete(7).await?;
    Ok(())
}

#[tokio::test]
async fn clothing_listing_and_status_updates() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("access", "refresh").await;

    let item = json!({
        "id": 4, "name": "Cargo pants", "imageUrl": null, "styleTags": "street_dance",
        "clothingType": "BOTTOM", "status": "ON_SHELF", "sizeData": null
    });

    Mock::given(method("GET"))
        .and(path("/api/clothing"))
        .and(query_param("status", "ON_SHELF"))
        .and(query_param("page", "0"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "items": [item], "total": 1
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/clothing/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "items": [], "total": 0, "page": 0, "size": 10
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/clothing"))
        .and(body_json(json!({ "name": "Knit top", "clothingType": "TOP" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 9, "name": "Knit top", "imageUrl": null, "styleTags": null,
            "clothingType": "TOP", "status": "ON_SHELF", "sizeData": null
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/clothing/4/status"))
        .and(body_json(json!({ "status": "OFF_SHELF" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 4, "name": "Cargo pants", "imageUrl": null, "styleTags": "street_dance",
            "clothingType": "BOTTOM", "status": "OFF_SHELF", "sizeData": null
        }))))
        .mount(&ctx.server)
        .await;

    let pool = ctx.client.clothing().list(Some(ClothingStatus::OnShelf), 0, 20).await?;
    assert_eq!(pool.items.len(), 1);

    let all = ctx.client.clothing().list_all(0, 10).await?;
    assert_eq!(all.total, 0);

    let created = ctx
        .client
        .clothing()
        .create(&CreateClothingRequest {
            name: "Knit top".into(),
            image_url: None,
            style_tags: None,
            clothing_type: ClothingType::Top,
            status: None,
            size_data: None,
        })
        .await?;
    assert_eq!(created.clothing_type, ClothingType::Top);

    let off_shelf = ctx.client.clothing().update_status(4, ClothingStatus::OffShelf).await?;
    assert_eq!(off_shelf.status, ClothingStatus::OffShelf);
    Ok(())
}

#[tokio::test]
async fn match_task_lifecycle_and_history() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("access", "refresh").await;

    Mock::given(method("POST"))
        .and(path("/api/match/tasks"))
        .and(body_json(json!({ "memberId": 1, "clothingIds": [1, 2, 4], "scene": "daily-live" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "taskId": "t-100", "status": "QUEUED"
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/match/tasks/t-100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "taskId": "t-100", "status": "SUCCEEDED", "strategyName": "AI_ONLY",
            "outfits": [{
                "outfitNo": 1, "topClothingId": 1, "bottomClothingId": 2, "score": 90,
                "reason": "balanced proportions", "preview": null, "warning": null
            }],
            "result": [], "preview": null, "errorMessage": null
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/match/tasks/t-100/outfits/1/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "taskId": "t-100", "status": "SUCCEEDED", "strategyName": "AI_ONLY",
            "outfits": [{
                "outfitNo": 1, "topClothingId": 1, "bottomClothingId": 2, "score": 90,
                "reason": "balanced proportions",
                "preview": {
                    "title": "Daily Live Look",
                    "outfitDescription": "Soft knit over cargo",
                    "imagePrompt": "studio photo, soft light"
                },
                "warning": null
            }],
            "result": [], "preview": null, "errorMessage": null
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/match/tasks"))
        .and(query_param("memberId", "1"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "items": [{
                "taskId": "t-100", "memberId": 1, "scene": "daily-live",
                "status": "SUCCEEDED", "strategyName": "AI_ONLY",
                "createdAt": "2025-06-01T10:30:00"
            }],
            "total": 1, "page": 0, "size": 10
        }))))
        .mount(&ctx.server)
        .await;

    let created = ctx
        .client
        .match_tasks()
        .create_task(&CreateMatchTaskRequest {
            member_id: 1,
            clothing_ids: vec![1, 2, 4],
            scene: Some("daily-live".into()),
        })
        .await?;
    assert_eq!(created.status, TaskStatus::Queued);

    let detail = ctx.client.match_tasks().get_task("t-100").await?;
    assert_eq!(detail.outfits.len(), 1);
    assert!(detail.outfits[0].preview.is_none());

    let with_preview = ctx.client.match_tasks().generate_outfit_preview("t-100", 1).await?;
    let preview = with_preview.outfits[0].preview.as_ref().expect("preview should be set");
    assert_eq!(preview.title, "Daily Live Look");

    let tasks = ctx.client.match_tasks().list_tasks(Some(1), 0, 10).await?;
    assert_eq!(tasks.items[0].task_id, "t-100");
    Ok(())
}

#[tokio::test]
async fn history_endpoints_use_member_scoped_paths() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("access", "refresh").await;

    let record = json!({
        "id": 55, "memberId": 1, "memberName": "Ari", "clothingId": 4,
        "clothingName": "Cargo pants", "status": "DRAFT",
        "performanceScore": null, "broadcastDate": null
    });

    Mock::given(method("GET"))
        .and(path("/api/members/1/history"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "records": [record], "total": 1
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/members/1/history/manual"))
        .and(body_json(json!({ "clothingId": 4, "performanceScore": 85 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 56, "memberId": 1, "memberName": "Ari", "clothingId": 4,
            "clothingName": "Cargo pants", "status": "BROADCASTED",
            "performanceScore": 85, "broadcastDate": "2025-05-20T20:00:00"
        }))))
        .mount(&ctx.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/members/1/history/55/status"))
        .and(body_json(json!({ "status": "ACCEPTED" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 55, "memberId": 1, "memberName": "Ari", "clothingId": 4,
            "clothingName": "Cargo pants", "status": "ACCEPTED",
            "performanceScore": null, "broadcastDate": null
        }))))
        .mount(&ctx.server)
        .await;

    let history = ctx.client.match_tasks().history(1, 10).await?;
    assert_eq!(history.total, 1);
    assert_eq!(history.records[0].status, MatchRecordStatus::Draft);

    let manual = ctx
        .client
        .match_tasks()
        .create_manual_history(
            1,
            &CreateManualHistoryRequest {
                clothing_id: 4,
                broadcast_date: None,
                performance_score: Some(85),
            },
        )
        .await?;
    assert_eq!(manual.status, MatchRecordStatus::Broadcasted);

    let accepted = ctx
        .client
        .match_tasks()
        .update_history_status(1, 55, MatchRecordStatus::Accepted)
        .await?;
    assert_eq!(accepted.status, MatchRecordStatus::Accepted);
    Ok(())
}

#[tokio::test]
async fn upload_sends_multipart_tagged_with_biz_type() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("access", "refresh").await;

    Mock::given(method("POST"))
        .and(path("/api/files/upload"))
        .and(query_param("bizType", "member"))
        .and(header("Authorization", "Bearer access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "url": "https://cdn.example.com/m/photo.png",
            "objectKey": "member/photo.png",
            "bizType": "member",
            "originalName": "photo.png",
            "size": 3,
            "contentType": "image/png"
        }))))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let payload = stylematch_client::FilePayload::new("photo.png", vec![1, 2, 3])
        .with_content_type("image/png");
    let uploaded = ctx.client.files().upload(payload, UploadBizType::Member).await?;

    assert_eq!(uploaded.biz_type, UploadBizType::Member);
    assert_eq!(uploaded.object_key, "member/photo.png");

    // The request body actually went out as multipart form data.
    let requests = ctx.server.received_requests().await.expect("requests");
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
    Ok(())
}
