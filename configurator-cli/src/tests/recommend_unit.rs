//! Focused unit tests covering recommend configuration, loading and output.

use super::helpers::{Workspace, office_request, office_towers, write_utf8};
use super::*;
use crate::recommend::{
    RecommendConfig, config_from_layers_for_test, load_catalog, load_request, run_recommend_with,
};
use camino::Utf8PathBuf;
use configurator_core::{Product, RecommendRequest, RecommendationCard};
use configurator_pipeline::{WideningPolicy, WideningPolicyError};
use configurator_scorer::{DEFAULT_MIN_REVIEWS, ScorerConfig};
use rstest::rstest;

fn args_for(workspace: &Workspace) -> RecommendArgs {
    RecommendArgs {
        request_path: Some(workspace.request.clone()),
        catalog: Some(workspace.catalog.clone()),
        ..RecommendArgs::default()
    }
}

fn config_for(workspace: &Workspace) -> RecommendConfig {
    RecommendConfig {
        request_path: workspace.request.clone(),
        catalog: workspace.catalog.clone(),
        widening: WideningPolicy::default(),
        scorer: ScorerConfig::default(),
        require_in_stock: false,
    }
}

#[rstest]
#[case(None, Some(Utf8PathBuf::from("catalog.json")), ARG_REQUEST, ENV_REQUEST)]
#[case(Some(Utf8PathBuf::from("request.json")), None, ARG_CATALOG, ENV_CATALOG)]
fn converting_without_required_paths_errors(
    #[case] request_path: Option<Utf8PathBuf>,
    #[case] catalog: Option<Utf8PathBuf>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RecommendArgs {
        request_path,
        catalog,
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("missing path should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn unset_options_fall_back_to_defaults() {
    let workspace = Workspace::new();
    let config = RecommendConfig::try_from(args_for(&workspace)).expect("config should build");
    assert_eq!(config, config_for(&workspace));
    assert_eq!(config.scorer.min_reviews(), DEFAULT_MIN_REVIEWS);
}

#[rstest]
fn options_override_defaults() {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        widening_step: Some(0.1),
        max_widenings: Some(5),
        min_reviews: Some(25),
        require_in_stock: Some(true),
        ..args_for(&workspace)
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.widening,
        WideningPolicy::new(0.1, 5).expect("valid policy")
    );
    assert_eq!(config.scorer.min_reviews(), 25);
    assert!(config.require_in_stock);
}

#[rstest]
#[case::negative(Some(-0.5), None)]
#[case::too_many(None, Some(50))]
fn invalid_widening_is_rejected(
    #[case] widening_step: Option<f64>,
    #[case] max_widenings: Option<u32>,
) {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        widening_step,
        max_widenings,
        ..args_for(&workspace)
    };
    let err = RecommendConfig::try_from(args).expect_err("widening should be rejected");
    match err {
        CliError::InvalidWidening(
            WideningPolicyError::NegativeStep { .. } | WideningPolicyError::TooManySteps { .. },
        ) => {}
        other => panic!("expected InvalidWidening, found {other:?}"),
    }
}

#[rstest]
fn command_line_flags_parse_into_args() {
    let cli = Cli::try_parse_from([
        "configurator",
        "recommend",
        "request.json",
        "--catalog",
        "catalog.json",
        "--max-widenings",
        "2",
        "--require-in-stock",
    ])
    .expect("arguments should parse");
    let Command::Recommend(args) = cli.command;
    assert_eq!(args.request_path, Some(Utf8PathBuf::from("request.json")));
    assert_eq!(args.catalog, Some(Utf8PathBuf::from("catalog.json")));
    assert_eq!(args.max_widenings, Some(2));
    assert_eq!(args.require_in_stock, Some(true));
    assert_eq!(args.widening_step, None);
}

#[rstest]
#[case::request(true, ARG_REQUEST)]
#[case::catalog(false, ARG_CATALOG)]
fn validate_sources_reports_missing_files(#[case] request_missing: bool, #[case] expected: &str) {
    let workspace = Workspace::new();
    if request_missing {
        workspace.write_catalog(&office_towers());
    } else {
        workspace.write_request(&office_request());
    }
    let err = config_for(&workspace)
        .validate_sources()
        .expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    workspace.write_request(&office_request());
    std::fs::create_dir(workspace.catalog.as_std_path()).expect("catalogue directory");

    let err = config_for(&workspace)
        .validate_sources()
        .expect_err("directory should fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, workspace.catalog);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_rejects_invalid_json() {
    let workspace = Workspace::new();
    write_utf8(&workspace.catalog, b"[{ not valid json");

    let err = load_catalog(&workspace.catalog).expect_err("invalid json should error");
    match err {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, workspace.catalog);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_rejects_invalid_products() {
    let workspace = Workspace::new();
    workspace.write_catalog(&[Product::new("", "Nameless", "office", 400_000)]);

    let err = load_catalog(&workspace.catalog).expect_err("blank id should error");
    match err {
        CliError::InvalidCatalog { path, .. } => assert_eq!(path, workspace.catalog),
        other => panic!("expected InvalidCatalog, found {other:?}"),
    }
}

#[rstest]
fn load_request_decodes_camel_case_json() {
    let workspace = Workspace::new();
    write_utf8(
        &workspace.request,
        br#"{"usage":"gamer","budgetMin":500000,"budgetMax":900000,"preferences":{"gpuMemory":0.9},"limit":3}"#,
    );

    let request = load_request(&workspace.request).expect("request should decode");
    let mut expected = RecommendRequest::new("gamer", 500_000.0, 900_000.0);
    expected.preferences.insert("gpuMemory".to_owned(), 0.9);
    expected.limit = Some(3);
    assert_eq!(request, expected);
}

#[rstest]
fn load_request_reports_open_errors() {
    let workspace = Workspace::new();

    let err = load_request(&workspace.request).expect_err("missing request should error");
    match err {
        CliError::OpenInput { field, path, .. } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, workspace.request);
        }
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn recommend_writes_ranked_cards() {
    let workspace = Workspace::new();
    workspace.write_catalog(&office_towers());
    workspace.write_request(&office_request());

    let mut stdout = Vec::new();
    run_recommend_with(args_for(&workspace), &mut stdout).expect("recommend should succeed");

    let cards: Vec<RecommendationCard> =
        serde_json::from_slice(&stdout).expect("output should be JSON cards");
    let ids: Vec<&str> = cards.iter().map(|card| card.product_id.as_str()).collect();
    assert_eq!(ids, ["tower-basic", "tower-premium"]);
    assert!(cards.iter().all(|card| card.score == 48));
}

#[rstest]
fn recommend_prints_empty_list_when_nothing_matches() {
    let workspace = Workspace::new();
    workspace.write_catalog(&office_towers());
    workspace.write_request(&RecommendRequest::new("office", 100_000.0, 200_000.0));

    let mut stdout = Vec::new();
    run_recommend_with(args_for(&workspace), &mut stdout).expect("empty result is not an error");
    assert_eq!(String::from_utf8(stdout).expect("utf-8 output"), "[]\n");
}

#[rstest]
fn recommend_reports_rejected_requests() {
    let workspace = Workspace::new();
    workspace.write_catalog(&office_towers());
    workspace.write_request(&RecommendRequest::new("office", 700_000.0, 300_000.0));

    let mut stdout = Vec::new();
    let err = run_recommend_with(args_for(&workspace), &mut stdout)
        .expect_err("inverted budget should be rejected");
    match err {
        CliError::Recommend { path, .. } => assert_eq!(path, workspace.request),
        other => panic!("expected Recommend, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "max_widenings": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_request = workspace.root.join("from-env-request.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": workspace.catalog.as_str(),
            "widening_step": 0.1,
            "min_reviews": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "min_reviews": 7,
    }));
    composer.push_cli(json!({ "min_reviews": 12 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.catalog, workspace.catalog);
    assert_eq!(config.scorer.min_reviews(), 12);
    assert_eq!(
        config.widening,
        WideningPolicy::new(0.1, WideningPolicy::default().max_steps()).expect("valid policy")
    );
}
