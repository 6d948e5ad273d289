mod cli;
mod config;

use clap::Parser;
use cli::Args;
use config::ConfigFile;
use shade_diff::adapters::outbound::console::StderrProgressReporter;
use shade_diff::adapters::outbound::filesystem::DependencyListReader;
use shade_diff::adapters::outbound::repository::LocalRepositoryResolver;
use shade_diff::application::dto::{ExclusionRequest, ExclusionResponse, OutputFormat};
use shade_diff::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, DEFAULT_EXCLUDES_PROPERTY,
};
use shade_diff::application::use_cases::ResolveExclusionsUseCase;
use shade_diff::shade_diff::domain::BundleReference;
use shade_diff::shared::error::{ExitCode, ShadeDiffError};
use shade_diff::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            // --help and --version are rendered by clap as well
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Effective settings after merging the config file with the command line
#[derive(Debug)]
struct Settings {
    dependencies: Option<PathBuf>,
    bundles: Vec<BundleReference>,
    repository: Option<PathBuf>,
    format: OutputFormat,
    property: String,
    scopes: Option<Vec<String>>,
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let quiet = args.quiet;
    let settings = merge_settings(args, config)?;
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Only required once there is something to compare against
    let dependencies = match (&settings.dependencies, settings.bundles.is_empty()) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::new(),
        (None, false) => {
            return Err(ShadeDiffError::Validation {
                message: "No dependency list specified. Use --dependencies or set 'dependencies' in the config file".to_string(),
            }
            .into())
        }
    };

    let mut dependency_provider = DependencyListReader::new(dependencies);
    if let Some(scopes) = settings.scopes {
        dependency_provider = dependency_provider.with_scopes(scopes);
    }

    let repository = match settings.repository {
        Some(root) => root,
        None => LocalRepositoryResolver::default_root().ok_or_else(|| ShadeDiffError::Validation {
            message: "Could not determine the home directory. Use --repository to locate the local repository".to_string(),
        })?,
    };
    let archive_resolver = LocalRepositoryResolver::new(repository);

    // Create use case with injected dependencies
    let use_case =
        ResolveExclusionsUseCase::new(dependency_provider, archive_resolver, progress_reporter);

    let response = use_case.execute(ExclusionRequest::new(settings.bundles))?;

    if !quiet && !response.bundles.is_empty() {
        eprint!("{}", render_summary(&response));
    }

    let formatter = FormatterFactory::create(settings.format, &settings.property);
    let formatted_output = formatter.format(&response.excludes)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Per-bundle summary printed to stderr after resolution
fn render_summary(response: &ExclusionResponse) -> String {
    let mut summary = String::from("\n📋 Shaded jars consulted:\n");
    for bundle in &response.bundles {
        summary.push_str(&format!(
            "   {} [{}, {}]: {} component(s), {} excluded, {} kept at a different version\n",
            bundle.reference,
            bundle.archive,
            bundle.format,
            bundle.component_count,
            bundle.added.len(),
            bundle.mismatched
        ));
    }
    summary
}

/// Merges CLI arguments over config file values
///
/// Bundles from the command line are appended after those of the config file.
fn merge_settings(args: Args, config: ConfigFile) -> Result<Settings> {
    let mut bundles = config.bundle_references()?;
    bundles.extend(args.bundle);

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => name
            .parse::<OutputFormat>()
            .map_err(|message| ShadeDiffError::Validation {
                message: format!("Invalid config: {}", message),
            })?,
        (None, None) => OutputFormat::default(),
    };

    let scopes = if args.scope.is_empty() {
        config.include_scopes
    } else {
        Some(args.scope)
    };

    Ok(Settings {
        dependencies: args.dependencies.or(config.dependencies),
        bundles,
        repository: args.repository.or(config.repository),
        format,
        property: args
            .property
            .or(config.property)
            .unwrap_or_else(|| DEFAULT_EXCLUDES_PROPERTY.to_string()),
        scopes,
        output: args.output,
    })
}
