use sea_orm::{EntityTrait, QueryOrder};
use anyhow::Result;

use super::setup_test_db;
use crate::{assignment, booking, feedback, research_paper, timestamp, video, Resource};

#[tokio::test]
async fn test_assignment_insert_and_read() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;
    let now = timestamp::now_local();

    let input = assignment::NewAssignment {
        title: "Essay".into(),
        description: "5 pages".into(),
        due_date: "2024-01-01T00:00:00".into(),
        status: "pending".into(),
    };
    let res = assignment::Entity::insert(assignment::Entity::to_active_model(input, now)?)
        .exec(&db)
        .await?;
    let id = assignment::Entity::inserted_id(res);

    let found = assignment::Entity::find_by_id(id).one(&db).await?.expect("inserted");
    assert_eq!(found.title, "Essay");
    assert_eq!(found.due_date, timestamp::parse_local("dueDate", "2024-01-01T00:00:00")?);
    assert_eq!(found.created_at, now);

    let json = serde_json::to_value(&found)?;
    assert_eq!(json["dueDate"], "2024-01-01T00:00:00");
    assert!(json.get("createdAt").is_some());
    Ok(())
}

#[tokio::test]
async fn test_ids_increase_monotonically() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let mut ids = vec![];
    for i in 0..3 {
        let input = feedback::NewFeedback {
            name: format!("user {i}"),
            email: format!("user{i}@example.com"),
            message: "great service".into(),
        };
        let res = feedback::Entity::insert(feedback::Entity::to_active_model(input, timestamp::now_local())?)
            .exec(&db)
            .await?;
        ids.push(feedback::Entity::inserted_id(res));
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
    Ok(())
}

#[tokio::test]
async fn test_research_paper_and_video_round_trip() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let paper = research_paper::NewResearchPaper {
        title: "On Queues".into(),
        abstract_text: "Queues are everywhere.".into(),
        authors: "Q. Author".into(),
        status: "draft".into(),
    };
    research_paper::Entity::insert(research_paper::Entity::to_active_model(paper, timestamp::now_local())?)
        .exec(&db)
        .await?;
    let stored = research_paper::Entity::find().one(&db).await?.expect("paper");
    assert_eq!(stored.abstract_text, "Queues are everywhere.");
    assert_eq!(serde_json::to_value(&stored)?["abstract"], "Queues are everywhere.");

    let clip = video::NewVideo {
        title: "Demo".into(),
        description: None,
        file_path: "/media/demo.mp4".into(),
        status: "processing".into(),
    };
    video::Entity::insert(video::Entity::to_active_model(clip, timestamp::now_local())?)
        .exec(&db)
        .await?;
    let stored = video::Entity::find().order_by_desc(video::Column::Id).one(&db).await?.expect("video");
    assert_eq!(serde_json::to_value(&stored)?["filePath"], "/media/demo.mp4");
    Ok(())
}

#[tokio::test]
async fn test_booking_serializes_type_field() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let input = booking::NewBooking {
        user_email: "buyer@example.com".into(),
        name: "Buyer".into(),
        item_name: "Logo design".into(),
        deadline: "2024-02-02T12:30".into(),
        kind: "service".into(),
    };
    booking::Entity::insert(booking::Entity::to_active_model(input, timestamp::now_local())?)
        .exec(&db)
        .await?;

    let stored = booking::Entity::find().one(&db).await?.expect("booking");
    let json = serde_json::to_value(&stored)?;
    assert_eq!(json["type"], "service");
    assert_eq!(json["userEmail"], "buyer@example.com");
    assert_eq!(json["deadline"], "2024-02-02T12:30:00");
    Ok(())
}
