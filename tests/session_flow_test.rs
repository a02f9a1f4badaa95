use anyhow::Result;
use globaldrive::config::toml_config::ServiceConfig;
use globaldrive::core::presets::PRESETS;
use globaldrive::{
    AppConfig, FilePreferences, GeminiClient, GlobalDriveError, NameResolver, Role, SearchType,
    Session, TermsGate,
};
use httpmock::prelude::*;
use tempfile::TempDir;

fn grounded_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://example.gov/driving", "title": "Transport ministry" } }
                ]
            }
        }]
    })
}

#[tokio::test]
async fn test_terms_acceptance_persists_across_gates() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let prefs_path = temp_dir.path().join("prefs.json");

    let gate = TermsGate::new(FilePreferences::new(&prefs_path));
    assert!(!gate.is_accepted().await?);
    gate.accept().await?;

    let reopened = TermsGate::new(FilePreferences::new(&prefs_path));
    assert!(reopened.is_accepted().await?);

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&prefs_path)?)?;
    assert_eq!(raw["globaldrive_terms_accepted"], "true");
    Ok(())
}

#[tokio::test]
async fn test_map_clicks_to_report_end_to_end() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-e2e:generateContent")
            .body_contains("from **United States**")
            .body_contains("moving to **Germany**");
        then.status(200).json_body(grounded_reply("Exchange Agreement: CONDITIONAL"));
    });

    let config = AppConfig::from_toml_str(&format!(
        r#"
[service]
endpoint = "{}"
model = "gemini-e2e"
api_key = "e2e-key"
"#,
        server.url("/models")
    ))?;
    let client = GeminiClient::new(&config.service, config.api_key()?)?;

    let resolver = NameResolver::builtin();
    let mut session = Session::new(client, true);
    session.set_category(SearchType::Resident);

    session.click_feature(&resolver, "United States of America")?;
    session.click_feature(&resolver, "Germany")?;

    let report = session.submit().await?;
    assert_eq!(report.markdown, "Exchange Agreement: CONDITIONAL");
    assert_eq!(report.sources[0].title, "Transport ministry");

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_dropdown_collision_blocks_submission() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(grounded_reply("unused"));
    });

    let service = ServiceConfig {
        endpoint: server.url("/models"),
        ..ServiceConfig::default()
    };
    let mut session = Session::new(GeminiClient::new(&service, "key")?, true);

    session.select_via_dropdown(Role::Origin, "Italy")?;
    let collision = session.select_via_dropdown(Role::Destination, "Italy");
    assert!(collision.is_err());
    assert_eq!(
        session.message(),
        Some("Destination cannot be the same as origin")
    );

    assert!(matches!(
        session.submit().await,
        Err(GlobalDriveError::IncompleteSelection)
    ));
    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_preset_failure_leaves_session_usable() -> Result<()> {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(POST);
        then.status(503);
    });

    let service = ServiceConfig {
        endpoint: server.url("/models"),
        timeout_seconds: 5,
        ..ServiceConfig::default()
    };
    let mut session = Session::new(GeminiClient::new(&service, "key")?, true);

    let preset = &PRESETS[0];
    assert!(session.run_preset(preset).await.is_err());
    assert_eq!(
        session.message(),
        Some("Failed to fetch driving regulations. Please try again.")
    );
    assert_eq!(session.selection().pair(), Some((preset.origin, preset.destination)));
    failing.assert();
    failing.delete();

    server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(grounded_reply("IDP: REQUIRED"));
    });

    let report = session.submit().await?;
    assert_eq!(report.markdown, "IDP: REQUIRED");
    assert!(session.message().is_none());
    Ok(())
}
