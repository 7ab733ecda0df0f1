//! Role resolution CLI
//!
//! Resolves the roles of a single request read from a JSON file and prints
//! them as a JSON array.
//!
//! # Usage
//!
//! ```bash
//! # Default configuration
//! resolve-roles --request request.json
//!
//! # Roles from the assertion only
//! resolve-roles --request request.json --use-subject-roles false
//!
//! # Subject roles by prefix, with debug logging
//! RUST_LOG=debug resolve-roles --request request.json --role-classifier ROLE_
//! ```
//!
//! The request file holds `{ "identity": ..., "subject": ..., "assertion": ... }`;
//! `subject` may be omitted or null.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (trace, debug, info, warn, error)
//! - `ROLEGATE_USE_SUBJECT_ROLES`: Take roles from the subject (true/false)
//! - `ROLEGATE_ROLE_CLASSIFIER`: Subject role classifier value
//! - `ROLEGATE_ROLE_CLASSIFIER_TYPE`: `prefix` or `typename`
//! - `ROLEGATE_ROLE_ATTRIBUTE_NAME`: Assertion attribute holding roles
//! - `ROLEGATE_ROLE_ATTRIBUTE_NAME_FORMAT`: Required name format of that attribute

use anyhow::{Context, Result};
use clap::Parser;
use rolegate_core::{Assertion, Principal, Subject};
use rolegate_roles::{RoleParser, RoleParserBuilder, RoleParserConfig, RoleSet};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Resolve the roles of an authenticated request
#[derive(Parser, Debug)]
#[command(name = "resolve-roles", version, long_about = None)]
struct Args {
    /// JSON file holding the identity, optional subject, and assertion
    #[arg(short, long)]
    request: PathBuf,

    /// JSON role parser configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Take roles from the subject when one is supplied
    #[arg(long, env = "ROLEGATE_USE_SUBJECT_ROLES")]
    use_subject_roles: Option<bool>,

    /// Subject role classifier value
    #[arg(long, env = "ROLEGATE_ROLE_CLASSIFIER")]
    role_classifier: Option<String>,

    /// Subject role classifier type (prefix, typename)
    #[arg(long, env = "ROLEGATE_ROLE_CLASSIFIER_TYPE")]
    role_classifier_type: Option<String>,

    /// Assertion attribute holding role values
    #[arg(long, env = "ROLEGATE_ROLE_ATTRIBUTE_NAME")]
    role_attribute_name: Option<String>,

    /// Required name format of the role attribute
    #[arg(long, env = "ROLEGATE_ROLE_ATTRIBUTE_NAME_FORMAT")]
    role_attribute_name_format: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Request handed over by the authentication layer
#[derive(Debug, Deserialize)]
struct ResolveRequest {
    identity: Principal,
    #[serde(default)]
    subject: Option<Subject>,
    assertion: Assertion,
}

impl Args {
    fn parser_builder(&self) -> Result<RoleParserBuilder> {
        let config = match &self.config {
            Some(path) => RoleParserConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RoleParserConfig::default(),
        };

        let mut builder = RoleParserBuilder::from_config(config);
        if let Some(use_subject_roles) = self.use_subject_roles {
            builder = builder.use_subject_roles(use_subject_roles);
        }
        if let Some(classifier) = &self.role_classifier {
            builder = builder.role_classifier(classifier.clone());
        }
        if let Some(kind) = &self.role_classifier_type {
            builder = builder.role_classifier_type(kind)?;
        }
        if let Some(name) = &self.role_attribute_name {
            builder = builder.role_attribute_name(name.clone());
        }
        if let Some(format) = &self.role_attribute_name_format {
            builder = builder.role_attribute_name_format(format.clone());
        }
        Ok(builder)
    }
}

fn load_request(path: &Path) -> Result<ResolveRequest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid request document {}", path.display()))
}

fn run(args: &Args) -> Result<RoleSet> {
    let parser = args.parser_builder()?.build()?;
    let request = load_request(&args.request)?;

    let roles = parser.parse_roles(
        &request.identity,
        request.subject.as_ref(),
        &request.assertion,
    )?;
    info!("Resolved {} roles for {}", roles.len(), request.identity);
    Ok(roles)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resolve-roles v{}", rolegate_roles::VERSION);

    let roles = run(&args).map_err(|e| {
        error!("Role resolution failed: {:#}", e);
        e
    })?;

    println!("{}", serde_json::to_string_pretty(&roles)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REQUEST: &str = r#"{
        "identity": { "name": "alice" },
        "subject": { "principals": [
            { "name": "alice" },
            { "name": "ROLE_ADMIN", "type": "group" }
        ] },
        "assertion": { "attribute_statements": [ { "attributes": [
            { "name": "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/role",
              "values": ["auditor"] }
        ] } ] }
    }"#;

    fn request_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REQUEST.as_bytes()).unwrap();
        file
    }

    fn args(request: &tempfile::NamedTempFile, extra: &[&str]) -> Args {
        let path = request.path().to_str().unwrap().to_string();
        let mut argv = vec!["resolve-roles", "--request", path.as_str()];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_default() {
        let file = request_file();
        let roles = run(&args(&file, &[])).unwrap();
        assert_eq!(roles.names(), vec!["ROLE_ADMIN"]);
    }

    #[test]
    fn test_run_claims_only() {
        let file = request_file();
        let roles = run(&args(&file, &["--use-subject-roles", "false"])).unwrap();
        assert_eq!(roles.names(), vec!["auditor"]);
    }

    #[test]
    fn test_run_rejects_unknown_classifier_type() {
        let file = request_file();
        let result = run(&args(&file, &["--role-classifier-type", "regex"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_overridden_by_flags() {
        let file = request_file();
        let mut config = tempfile::NamedTempFile::new().unwrap();
        config.write_all(br#"{ "use_subject_roles": false }"#).unwrap();
        let config_path = config.path().to_str().unwrap().to_string();

        let roles = run(&args(&file, &["--config", config_path.as_str()])).unwrap();
        assert_eq!(roles.names(), vec!["auditor"]);

        let roles = run(&args(
            &file,
            &["--config", config_path.as_str(), "--use-subject-roles", "true"],
        ))
        .unwrap();
        assert_eq!(roles.names(), vec!["ROLE_ADMIN"]);
    }
}
