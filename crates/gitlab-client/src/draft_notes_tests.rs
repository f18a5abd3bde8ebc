//! Unit tests for the draft notes resource using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitLabClient;
    use crate::models::*;
    use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const NOTES_PATH: &str = "/api/v4/projects/1/merge_requests/4329/draft_notes";

    fn client_for(server: &MockServer) -> GitLabClient {
        GitLabClient::new(&format!("{}/api/v4", server.uri()), "test-token")
    }

    /// Helper to create a mock draft note response without a position
    fn mock_draft_note(id: u64, note: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "author_id": 10271899,
            "merge_request_id": 291473309,
            "resolve_discussion": false,
            "discussion_id": null,
            "note": note,
            "commit_id": null,
            "line_code": null,
            "position": null
        })
    }

    fn mock_positioned_draft_note() -> serde_json::Value {
        serde_json::json!({
            "id": 37349979,
            "author_id": 10271899,
            "merge_request_id": 291473309,
            "resolve_discussion": false,
            "discussion_id": null,
            "note": "Some draft note 2",
            "commit_id": null,
            "line_code": "3dacf79e0d779e2baa1c700cf56510e42f55cf85_10_9",
            "position": {
                "base_sha": "64581c4ee41beb44d943d7801f82d9038e25e453",
                "start_sha": "87bffbff93bf334889780f54ae1922355661f867",
                "head_sha": "2c972dbf9094c380f5f00dcd8112d2c69b24c859",
                "old_path": "src/some-dir/some-file.js",
                "new_path": "src/some-dir/some-file.js",
                "position_type": "text",
                "old_line": null,
                "new_line": 9,
                "line_range": {
                    "start": {
                        "line_code": "3dacf79e0d779e2baa1c700cf56510e42f55cf85_10_9",
                        "type": "new",
                        "old_line": null,
                        "new_line": 9
                    },
                    "end": {
                        "line_code": "3dacf79e0d779e2baa1c700cf56510e42f55cf85_10_9",
                        "type": "new",
                        "old_line": null,
                        "new_line": 9
                    }
                }
            }
        })
    }

    #[tokio::test]
    async fn test_get_draft_note() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/3", NOTES_PATH)))
            .and(header("PRIVATE-TOKEN", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 37349978,
                "author_id": 10271899,
                "merge_request_id": 291473309,
                "note": "Some draft note"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (note, response) = client.draft_notes().get_draft_note("1", 4329, 3).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            note,
            DraftNote {
                id: 37349978,
                author_id: 10271899,
                merge_request_id: 291473309,
                note: "Some draft note".to_string(),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_list_draft_notes_keeps_server_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(NOTES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_draft_note(37349978, "Some draft note"),
                mock_positioned_draft_note()
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (notes, _) = client
            .draft_notes()
            .list_draft_notes("1", 4329, None)
            .unwrap();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, 37349978);
        assert_eq!(notes[0].position, None);
        assert_eq!(notes[1].id, 37349979);

        let line = LinePosition {
            line_code: "3dacf79e0d779e2baa1c700cf56510e42f55cf85_10_9".to_string(),
            line_type: "new".to_string(),
            old_line: None,
            new_line: Some(9),
        };
        let expected = NotePosition {
            base_sha: "64581c4ee41beb44d943d7801f82d9038e25e453".to_string(),
            start_sha: "87bffbff93bf334889780f54ae1922355661f867".to_string(),
            head_sha: "2c972dbf9094c380f5f00dcd8112d2c69b24c859".to_string(),
            old_path: "src/some-dir/some-file.js".to_string(),
            new_path: "src/some-dir/some-file.js".to_string(),
            position_type: "text".to_string(),
            new_line: Some(9),
            line_range: Some(LineRange {
                start: Some(line.clone()),
                end: Some(line),
            }),
            ..Default::default()
        };
        assert_eq!(notes[1].position.as_ref(), Some(&expected));
        assert_eq!(
            notes[1].line_code.as_deref(),
            Some("3dacf79e0d779e2baa1c700cf56510e42f55cf85_10_9")
        );
    }

    #[tokio::test]
    async fn test_list_draft_notes_passes_options_as_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(NOTES_PATH))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "1"))
            .and(query_param("sort", "asc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Page", "2")
                    .insert_header("X-Next-Page", "")
                    .insert_header("X-Total", "2")
                    .set_body_json(serde_json::json!([mock_draft_note(2, "second")])),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let options = ListDraftNotesOptions {
            page: Some(2),
            per_page: Some(1),
            sort: Some("asc".to_string()),
            ..Default::default()
        };
        let (notes, response) = client
            .draft_notes()
            .list_draft_notes("1", 4329, Some(&options))
            .unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(response.current_page, Some(2));
        assert_eq!(response.next_page, None);
        assert_eq!(response.total_items, Some(2));
    }

    #[tokio::test]
    async fn test_create_draft_note_sends_only_set_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(NOTES_PATH))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"note": "Some new draft note"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(mock_draft_note(37349980, "Some new draft note")),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (note, response) = client
            .draft_notes()
            .create_draft_note("1", 4329, &CreateDraftNoteOptions::new("Some new draft note"))
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(note.id, 37349980);
        assert_eq!(note.note, "Some new draft note");
    }

    #[tokio::test]
    async fn test_create_draft_note_reply_with_resolve() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(NOTES_PATH))
            .and(body_json(serde_json::json!({
                "note": "Fixed",
                "in_reply_to_discussion_id": "6a9c1750b37d513a43987b574953fceb50b03ce7",
                "resolve_discussion": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 5,
                "note": "Fixed",
                "merge_request_id": 291473309,
                "resolve_discussion": true,
                "discussion_id": "6a9c1750b37d513a43987b574953fceb50b03ce7"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let options = CreateDraftNoteOptions {
            in_reply_to_discussion_id: Some("6a9c1750b37d513a43987b574953fceb50b03ce7".to_string()),
            resolve_discussion: Some(true),
            ..CreateDraftNoteOptions::new("Fixed")
        };
        let (note, _) = client
            .draft_notes()
            .create_draft_note("1", 4329, &options)
            .unwrap();

        assert!(note.resolve_discussion);
        assert_eq!(
            note.discussion_id.as_deref(),
            Some("6a9c1750b37d513a43987b574953fceb50b03ce7")
        );
    }

    #[tokio::test]
    async fn test_update_draft_note_uses_put() {
        let mock_server = MockServer::start().await;

        // Verify PUT method is used (not PATCH)
        Mock::given(method("PUT"))
            .and(path(format!("{}/3", NOTES_PATH)))
            .and(body_json(serde_json::json!({"note": "Some changed draft note"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mock_draft_note(3, "Some changed draft note")),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let update = UpdateDraftNoteOptions {
            note: Some("Some changed draft note".to_string()),
            ..Default::default()
        };
        let (note, _) = client
            .draft_notes()
            .update_draft_note("1", 4329, 3, &update)
            .unwrap();

        assert_eq!(note.id, 3);
        assert_eq!(note.note, "Some changed draft note");
    }

    #[tokio::test]
    async fn test_delete_draft_note() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(format!("{}/3", NOTES_PATH)))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client.draft_notes().delete_draft_note("1", 4329, 3).unwrap();
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_publish_draft_note() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("{}/3/publish", NOTES_PATH)))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client.draft_notes().publish_draft_note("1", 4329, 3).unwrap();
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_publish_all_draft_notes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("{}/bulk_publish", NOTES_PATH)))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .draft_notes()
            .publish_all_draft_notes("1", 4329)
            .unwrap();
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_project_path_is_escaped() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/api/v4/projects/my-group%2Fmy-project/merge_requests/7/draft_notes/bulk_publish",
            ))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client
            .draft_notes()
            .publish_all_draft_notes("my-group/my-project", 7)
            .unwrap();
    }

    #[tokio::test]
    async fn test_every_operation_reports_api_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "404 Not found"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let drafts = client.draft_notes();
        let errors = vec![
            drafts.get_draft_note(1u64, 4329, 3).unwrap_err(),
            drafts.list_draft_notes(1u64, 4329, None).unwrap_err(),
            drafts
                .create_draft_note(1u64, 4329, &CreateDraftNoteOptions::new("x"))
                .unwrap_err(),
            drafts
                .update_draft_note(1u64, 4329, 3, &UpdateDraftNoteOptions::default())
                .unwrap_err(),
            drafts.delete_draft_note(1u64, 4329, 3).unwrap_err(),
            drafts.publish_draft_note(1u64, 4329, 3).unwrap_err(),
            drafts.publish_all_draft_notes(1u64, 4329).unwrap_err(),
        ];

        for err in errors {
            assert!(err.is_not_found(), "unexpected error: {err:?}");
            assert_eq!(err.response().map(|r| r.status), Some(404));
            assert!(err.to_string().contains("404 Not found"));
        }
    }
}
