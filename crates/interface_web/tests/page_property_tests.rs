//! Property checks on rendered pages and posted forms

use axum::http::StatusCode;
use axum_test::TestServer;
use proptest::prelude::*;
use serde_json::Value;

use domain_crm::{MockRemoteClient, RecordedRequest};
use interface_web::create_router;
use interface_web::dto::RecordForm;
use test_utils::{
    list_body_strategy, mock_service, optional_field_strategy, property_text_strategy, CrmFixtures,
    ListPageBuilder,
};

const RECORDS_PATH: &str = "/crm/v3/objects/solicitudes";

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(future)
}

fn render_homepage(body: Value) -> String {
    block_on(async {
        let client = MockRemoteClient::new();
        client.on_get(RECORDS_PATH, Ok(body)).await;
        let server = TestServer::new(create_router(mock_service(&client))).unwrap();
        server.get("/").await.text()
    })
}

fn submit(form: RecordForm) -> Value {
    block_on(async {
        let client = MockRemoteClient::new();
        client.on_post(RECORDS_PATH, Ok(CrmFixtures::created("1"))).await;
        let server = TestServer::new(create_router(mock_service(&client))).unwrap();
        server.post("/update-cobj").form(&form).await.assert_status(StatusCode::SEE_OTHER);

        match client.requests().await.into_iter().next() {
            Some(RecordedRequest::Post { body, .. }) => body,
            other => panic!("Expected a POST, got {:?}", other),
        }
    })
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_record_names_are_escaped(name in property_text_strategy()) {
        let html = render_homepage(ListPageBuilder::new().with_named("1", &name).build());
        let escaped = interface_web::views::escape(&name);

        let expected_cell = format!("<td>{}</td>", escaped);
        prop_assert!(html.contains(&expected_cell));
        prop_assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_homepage_row_per_record(body in list_body_strategy(20)) {
        let expected = body["results"].as_array().map(Vec::len).unwrap_or(0);
        let html = render_homepage(body);

        if expected == 0 {
            prop_assert!(html.contains("No records found."));
        } else {
            // body rows plus the header row
            prop_assert_eq!(html.matches("</tr>").count(), expected + 1);
        }
    }

    #[test]
    fn test_only_filled_optionals_are_posted(
        interest_program in optional_field_strategy(),
        source_channel in optional_field_strategy(),
    ) {
        let form = RecordForm {
            name: "Ana".to_string(),
            interest_program: interest_program.clone(),
            source_channel: source_channel.clone(),
        };
        let body = submit(form);
        let properties = body["properties"].as_object().unwrap();

        prop_assert_eq!(properties["name"].as_str(), Some("Ana"));
        prop_assert_eq!(
            properties.get("interest_program").and_then(Value::as_str),
            filled(&interest_program)
        );
        prop_assert_eq!(
            properties.get("source_channel").and_then(Value::as_str),
            filled(&source_channel)
        );
    }
}
