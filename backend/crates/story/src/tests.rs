//! Service and router tests for the story crate, backed by an in-memory repository

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use kernel::id::{StoryId, UserId};

    use crate::domain::entities::{Author, Story, StoryDraft};
    use crate::domain::repository::StoryRepository;
    use crate::error::StoryResult;

    #[derive(Default)]
    struct State {
        stories: Vec<Story>,
        next_id: i64,
        create_calls: usize,
        update_calls: usize,
    }

    /// Keeps stories in a vector and counts write calls.
    #[derive(Clone, Default)]
    pub struct InMemoryStoryRepository {
        state: Arc<Mutex<State>>,
    }

    impl InMemoryStoryRepository {
        pub fn create_calls(&self) -> usize {
            self.state.lock().unwrap().create_calls
        }

        pub fn update_calls(&self) -> usize {
            self.state.lock().unwrap().update_calls
        }

        pub fn len(&self) -> usize {
            self.state.lock().unwrap().stories.len()
        }
    }

    fn author(id: UserId) -> Author {
        Author {
            id,
            first_name: "Ursula".into(),
            last_name: "Le Guin".into(),
            username: format!("writer{}", id.value()),
            email: format!("writer{}@example.com", id.value()),
        }
    }

    fn apply(story: &mut Story, draft: &StoryDraft) {
        story.title = draft.title.clone();
        story.content = draft.content.clone();
        story.slug = draft.slug.clone();
        story.excerpt = draft.excerpt.clone();
        story.status = draft.status;
        story.published_at = draft.published_at;
        story.story_type = draft.story_type;
        story.word_count = draft.word_count;
        story.updated_at = Utc::now();
    }

    impl StoryRepository for InMemoryStoryRepository {
        async fn create(&self, author_id: UserId, draft: &StoryDraft) -> StoryResult<StoryId> {
            let mut state = self.state.lock().unwrap();
            state.create_calls += 1;
            state.next_id += 1;

            let now = Utc::now();
            let id = StoryId::from_db(state.next_id);
            state.stories.push(Story {
                id,
                title: draft.title.clone(),
                content: draft.content.clone(),
                author: author(author_id),
                slug: draft.slug.clone(),
                excerpt: draft.excerpt.clone(),
                status: draft.status,
                published_at: draft.published_at,
                story_type: draft.story_type,
                word_count: draft.word_count,
                created_at: now,
                updated_at: now,
            });
            Ok(id)
        }

        async fn find_by_id(&self, id: StoryId) -> StoryResult<Option<Story>> {
            let state = self.state.lock().unwrap();
            Ok(state.stories.iter().find(|s| s.id == id).cloned())
        }

        async fn find_all(&self) -> StoryResult<Vec<Story>> {
            let state = self.state.lock().unwrap();
            Ok(state.stories.iter().rev().cloned().collect())
        }

        async fn update(
            &self,
            id: StoryId,
            author_id: UserId,
            draft: &StoryDraft,
        ) -> StoryResult<bool> {
            let mut state = self.state.lock().unwrap();
            state.update_calls += 1;
            match state
                .stories
                .iter_mut()
                .find(|s| s.id == id && s.author.id == author_id)
            {
                Some(story) => {
                    apply(story, draft);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: StoryId) -> StoryResult<bool> {
            let mut state = self.state.lock().unwrap();
            let before = state.stories.len();
            state.stories.retain(|s| s.id != id);
            Ok(state.stories.len() < before)
        }
    }

    /// Content with exactly `n` words.
    pub fn words(n: usize) -> String {
        vec!["lorem"; n].join(" ")
    }
}

#[cfg(test)]
mod service_tests {
    use std::sync::Arc;

    use kernel::id::{StoryId, UserId};

    use super::support::{InMemoryStoryRepository, words};
    use crate::application::{StoryInput, StoryService};
    use crate::domain::value_objects::StoryType;
    use crate::error::StoryError;

    fn input(n: usize, story_type: i64) -> StoryInput {
        StoryInput {
            title: "Tide".into(),
            content: words(n),
            slug: "tide".into(),
            story_type,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_persists_computed_word_count() {
        let repo = InMemoryStoryRepository::default();
        let service = StoryService::new(Arc::new(repo.clone()));
        let author = UserId::new(1).unwrap();

        let id = service.create(author, input(2000, 2)).await.unwrap();
        let story = service.find_by_id(id).await.unwrap();

        assert_eq!(story.word_count, 2000);
        assert_eq!(story.story_type, StoryType::ShortStory);
        assert_eq!(repo.create_calls(), 1);
    }

    #[tokio::test]
    async fn test_classification_failure_skips_repository() {
        let repo = InMemoryStoryRepository::default();
        let service = StoryService::new(Arc::new(repo.clone()));
        let author = UserId::new(1).unwrap();

        let err = service.create(author, input(50, 1)).await.unwrap_err();

        assert!(matches!(err, StoryError::Classification(_)));
        assert_eq!(repo.create_calls(), 0);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_update_reclassifies_and_requires_owner() {
        let repo = InMemoryStoryRepository::default();
        let service = StoryService::new(Arc::new(repo.clone()));
        let author = UserId::new(1).unwrap();
        let stranger = UserId::new(2).unwrap();

        let id = service.create(author, input(500, 1)).await.unwrap();

        let err = service.update(id, author, input(500, 3)).await.unwrap_err();
        assert!(matches!(err, StoryError::Classification(_)));
        assert_eq!(repo.update_calls(), 0);

        let err = service.update(id, stranger, input(800, 1)).await.unwrap_err();
        assert!(matches!(err, StoryError::NotFound));

        service.update(id, author, input(800, 1)).await.unwrap();
        assert_eq!(service.find_by_id(id).await.unwrap().word_count, 800);
    }

    #[tokio::test]
    async fn test_missing_story_is_not_found() {
        let service = StoryService::new(Arc::new(InMemoryStoryRepository::default()));
        let missing = StoryId::new(99).unwrap();

        assert!(matches!(
            service.find_by_id(missing).await,
            Err(StoryError::NotFound)
        ));
        assert!(matches!(
            service.delete(missing).await,
            Err(StoryError::NotFound)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::{InMemoryStoryRepository, words};
    use crate::presentation::router::story_router_generic;

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn payload(n: usize, story_type: i64) -> Value {
        json!({
            "title": "Night Ferry",
            "content": words(n),
            "slug": "night-ferry",
            "excerpt": "Crossing at midnight.",
            "type": story_type,
        })
    }

    #[tokio::test]
    async fn test_create_returns_201_with_id() {
        let repo = InMemoryStoryRepository::default();
        let app = story_router_generic(repo.clone());

        let (status, body) = send(app, "POST", "/create/7", Some(payload(300, 1))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "success": true, "message": "Operation successful.", "data": { "id": 1 } })
        );
        assert_eq!(repo.create_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_out_of_band_returns_400() {
        let repo = InMemoryStoryRepository::default();
        let app = story_router_generic(repo.clone());

        let (status, body) = send(app, "POST", "/create/7", Some(payload(300, 4))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "story error: word count for novella should be between 20,000 and 40,000 \
             (story type: novella, word count: 300)"
        );
        assert!(body["data"].is_null());
        assert_eq!(repo.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_with_out_of_range_type_is_invalid_story_type() {
        let repo = InMemoryStoryRepository::default();
        let app = story_router_generic(repo.clone());

        for declared in [70_000_i64, -40_000] {
            let (status, body) =
                send(app.clone(), "POST", "/create/7", Some(payload(300, declared))).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["success"], false);
            assert_eq!(
                body["message"],
                "story error: invalid story type (story type: , word count: 300)"
            );
        }
        assert_eq!(repo.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_validates_author_id() {
        let app = story_router_generic(InMemoryStoryRepository::default());

        let (status, body) = send(app.clone(), "POST", "/create/0", Some(payload(300, 1))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "The author_id field must be greater than 0");

        let (status, body) = send(app, "POST", "/create/abc", Some(payload(300, 1))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_create_with_missing_field_names_it() {
        let app = story_router_generic(InMemoryStoryRepository::default());
        let body = json!({ "title": "Untitled", "slug": "untitled", "type": 1 });

        let (status, body) = send(app, "POST", "/create/1", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "The content field is required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_400_envelope() {
        let app = story_router_generic(InMemoryStoryRepository::default());
        let request = Request::builder()
            .method("POST")
            .uri("/create/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_get_story_and_list() {
        let app = story_router_generic(InMemoryStoryRepository::default());
        send(app.clone(), "POST", "/create/3", Some(payload(2500, 2))).await;

        let (status, body) = send(app.clone(), "GET", "/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let story = &body["data"]["story"];
        assert_eq!(story["type"], "short_story");
        assert_eq!(story["status"], "draft");
        assert_eq!(story["word_count"], 2500);
        assert_eq!(story["author"]["id"], 3);

        let (status, body) = send(app, "GET", "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["stories"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_story_is_404() {
        let app = story_router_generic(InMemoryStoryRepository::default());

        let (status, body) = send(app, "GET", "/42", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "message": "data not found", "data": null })
        );
    }

    #[tokio::test]
    async fn test_update_story() {
        let repo = InMemoryStoryRepository::default();
        let app = story_router_generic(repo.clone());
        send(app.clone(), "POST", "/create/3", Some(payload(300, 1))).await;

        let (status, _) = send(app.clone(), "PATCH", "/1/user/4", Some(payload(900, 1))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(app.clone(), "PATCH", "/1/user/3", Some(payload(900, 1))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());

        let (_, body) = send(app, "GET", "/1", None).await;
        assert_eq!(body["data"]["story"]["word_count"], 900);
    }

    #[tokio::test]
    async fn test_delete_story() {
        let app = story_router_generic(InMemoryStoryRepository::default());
        send(app.clone(), "POST", "/create/3", Some(payload(300, 1))).await;

        let (status, _) = send(app.clone(), "DELETE", "/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(app.clone(), "DELETE", "/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(app, "DELETE", "/-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "The id field must be greater than 0");
    }
}
