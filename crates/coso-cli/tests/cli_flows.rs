//! # CLI Flow Tests
//!
//! Exercises argument parsing and the scope-file → context → rendering path
//! that the `coso` binary runs, without spawning a process.

use std::io::Write;

use clap::Parser;
use coso_cli::config::{load_scope_file, resolve_context};
use coso_cli::describe::{render_describe, DescribeArgs};
use coso_cli::export::{render_export, ExportArgs};
use coso_cli::output::OutputFormat;
use coso_core::ComponentKind;

#[derive(Parser, Debug)]
struct DescribeHarness {
    #[command(flatten)]
    args: DescribeArgs,
}

#[derive(Parser, Debug)]
struct ExportHarness {
    #[command(flatten)]
    args: ExportArgs,
}

#[test]
fn describe_args_parse_slug_and_scope_flags() {
    let parsed = DescribeHarness::try_parse_from([
        "coso",
        "risk-assessment",
        "--objective",
        "Reporting",
        "--no-levels",
    ])
    .unwrap();
    assert_eq!(parsed.args.component, Some(ComponentKind::RiskAssessment));

    let ctx = resolve_context(&Default::default(), &parsed.args.scope);
    assert_eq!(
        render_describe(parsed.args.component, ctx),
        "Risk Assessment applies to objectives [Reporting] across organizational levels [].\n"
    );
}

#[test]
fn describe_args_accept_display_label() {
    let parsed = DescribeHarness::try_parse_from(["coso", "Information & Communication"]).unwrap();
    assert_eq!(
        parsed.args.component,
        Some(ComponentKind::InformationAndCommunication)
    );
}

#[test]
fn describe_args_reject_unknown_component() {
    assert!(DescribeHarness::try_parse_from(["coso", "governance"]).is_err());
}

#[test]
fn level_flag_conflicts_with_no_levels() {
    let result = DescribeHarness::try_parse_from(["coso", "--level", "Division", "--no-levels"]);
    assert!(result.is_err());
}

#[test]
fn repeated_flags_keep_order() {
    let parsed = DescribeHarness::try_parse_from([
        "coso",
        "--level",
        "Function",
        "--level",
        "Entity Level",
    ])
    .unwrap();
    let ctx = resolve_context(&Default::default(), &parsed.args.scope);
    assert_eq!(ctx.levels, vec!["Function", "Entity Level"]);
    assert_eq!(ctx.objectives.len(), 3);
}

#[test]
fn scope_file_drives_export() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "objectives: [Compliance, Custom Objective]").unwrap();
    writeln!(file, "levels: [Division]").unwrap();

    let parsed = ExportHarness::try_parse_from(["coso", "--format", "json"]).unwrap();
    assert_eq!(parsed.args.format, OutputFormat::Json);

    let scope = load_scope_file(file.path()).unwrap();
    let ctx = resolve_context(&scope, &parsed.args.scope);
    let out = render_export(ctx, parsed.args.format).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    for component in json["components"].as_array().unwrap() {
        let description = component["description"].as_str().unwrap();
        assert!(
            description.ends_with(
                "applies to objectives [Compliance, Custom Objective] across organizational levels [Division]."
            ),
            "{description}"
        );
    }
}
