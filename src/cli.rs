use clap::Parser;
use shade_diff::application::dto::OutputFormat;
use shade_diff::shade_diff::domain::BundleReference;
use std::path::PathBuf;

fn parse_bundle(value: &str) -> Result<BundleReference, String> {
    value.parse::<BundleReference>().map_err(|e| e.to_string())
}

/// Compute the shade exclusions for an uber-jar that depends on other shaded jars
#[derive(Parser, Debug)]
#[command(name = "shade-diff")]
#[command(version)]
#[command(
    about = "Compute shade exclusions for artifacts already bundled in other shaded jars",
    long_about = None
)]
pub struct Args {
    /// Resolved dependency list (output of `mvn dependency:list -DoutputFile=<file>`)
    #[arg(short, long, value_name = "FILE")]
    pub dependencies: Option<PathBuf>,

    /// Shaded jar whose contents should not be bundled again: groupId:artifactId:version[:classifier]
    /// Can be specified multiple times: -b org.acme:platform:1.0 -b org.acme:tools:2.1
    #[arg(short, long = "bundle", value_name = "COORDINATE", value_parser = parse_bundle)]
    pub bundle: Vec<BundleReference>,

    /// Local repository root (defaults to ~/.m2/repository)
    #[arg(short, long, value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Output format: plain, properties or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Property name used by the properties and json formats
    #[arg(short, long, value_name = "NAME")]
    pub property: Option<String>,

    /// Dependency scopes to consider (defaults to compile and runtime)
    /// Can be specified multiple times: --scope compile --scope provided
    #[arg(long = "scope", value_name = "SCOPE")]
    pub scope: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (auto-discovers shade-diff.config.yml if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only report warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
