use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::Serialize;

use sketchfab_client::{
    AccessTokenResult, ImportOptions, ImportResult, ModelSummary, SearchRequest, SearchResult,
    SketchfabClient,
};

use crate::cli::{SearchArgs, SessionArgs};

/// Set up the session token: an explicit token wins, then email/password.
pub async fn establish_session(client: &SketchfabClient, session: &SessionArgs) -> Result<()> {
    if let Some(token) = session.token.as_deref().filter(|t| !t.is_empty()) {
        client.set_access_token(token);
        return Ok(());
    }

    if let (Some(email), Some(password)) = (&session.email, &session.password) {
        client
            .authenticate(email, password)
            .await
            .context("authentication failed")?;
    }
    Ok(())
}

pub async fn handle_auth(
    client: &SketchfabClient,
    session: &SessionArgs,
    json: bool,
) -> Result<()> {
    let (Some(email), Some(password)) = (&session.email, &session.password) else {
        anyhow::bail!("Specify --email and --password (or SKETCHFAB_EMAIL / SKETCHFAB_PASSWORD)");
    };

    let record = AccessTokenResult::from(client.authenticate(email, password).await);
    if json {
        return print_json(&record);
    }

    match record.error {
        None => {
            println!("{}", "Authentication succeeded.".green());
            println!("{}", record.access_token);
            Ok(())
        },
        Some(error) => anyhow::bail!("Authentication failed: {error}"),
    }
}

pub async fn handle_search(client: &SketchfabClient, args: SearchArgs, json: bool) -> Result<()> {
    let record = SearchResult::from(client.search(&to_request(args)).await);
    if json {
        return print_json(&record);
    }

    if let Some(error) = record.error {
        anyhow::bail!("Search failed: {error}");
    }
    print_models(&record.results);
    Ok(())
}

pub async fn handle_import(
    client: &SketchfabClient,
    uid: &str,
    no_cache: bool,
    json: bool,
) -> Result<()> {
    let options = ImportOptions { use_cache: !no_cache };
    let record = ImportResult::from_outcome(uid, client.import_model(uid, options).await);
    report_import(record, json)
}

/// Search and import the first hit.
pub async fn handle_fetch(client: &SketchfabClient, args: SearchArgs, json: bool) -> Result<()> {
    let models = client.search(&to_request(args)).await.context("search failed")?;

    let Some(first) = models.first() else {
        println!("{}", "No models found.".yellow());
        return Ok(());
    };

    tracing::info!("Found {} models, importing first...", models.len());
    let outcome = client.import_model(&first.uid, ImportOptions::default()).await;
    let mut record = ImportResult::from_outcome(&first.uid, outcome);
    record.model_info.name = first.name.clone();
    report_import(record, json)
}

fn to_request(args: SearchArgs) -> SearchRequest {
    SearchRequest {
        keywords: args.keywords,
        downloadable: !args.any,
        min_face_count: args.min_faces,
        max_face_count: args.max_faces,
        tags: args.tags,
    }
}

fn report_import(record: ImportResult, json: bool) -> Result<()> {
    if json {
        return print_json(&record);
    }

    if let Some(error) = record.error {
        anyhow::bail!("Import failed: {error}");
    }

    println!("{} {}", "Imported".green(), record.model_info.uid.bold());
    if let Some(asset) = record.asset {
        println!("  File:      {}", asset.path.display());
        println!(
            "  Contents:  {} scenes, {} nodes, {} meshes, {} materials",
            asset.scenes, asset.nodes, asset.meshes, asset.materials
        );
    }
    Ok(())
}

fn print_models(models: &[ModelSummary]) {
    if models.is_empty() {
        println!("{}", "No models found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["UID", "Name"]);
    for model in models {
        table.add_row(vec![Cell::new(&model.uid), Cell::new(&model.name)]);
    }

    println!("{table}");
    println!("\n{} models", models.len());
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_maps_flags() {
        let args = SearchArgs {
            keywords: "car".to_string(),
            tags: vec!["low-poly".to_string()],
            min_faces: 10,
            max_faces: 0,
            any: true,
        };

        let request = to_request(args);
        assert_eq!(request.keywords, "car");
        assert!(!request.downloadable);
        assert_eq!(request.min_face_count, 10);
        assert_eq!(request.tags, vec!["low-poly"]);
    }
}
