use crate::application::dto::{ConsultedBundle, ExclusionRequest, ExclusionResponse};
use crate::ports::outbound::{ArchiveResolver, DependencyProvider, ProgressReporter};
use crate::shade_diff::domain::{BundleReference, ExclusionSet, ProjectDependencySet};
use crate::shade_diff::services::{ExclusionResolver, ManifestReader};
use crate::shared::error::ShadeDiffError;
use crate::shared::Result;


/// ResolveExclusionsUseCase - Core use case computing shade exclusions
///
/// For every referenced shaded jar, the archive is resolved, its manifest
/// read and folded into one exclusion set. Any fatal condition aborts the
/// whole run; no partial exclusion set is ever returned.
///
/// # Type Parameters
/// * `DP` - DependencyProvider implementation
/// * `AR` - ArchiveResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveExclusionsUseCase<DP, AR, PR> {
    dependency_provider: DP,
    archive_resolver: AR,
    progress_reporter: PR,
}

impl<DP, AR, PR> ResolveExclusionsUseCase<DP, AR, PR>
where
    DP: DependencyProvider,
    AR: ArchiveResolver,
    PR: ProgressReporter,
{
    /// Creates a new ResolveExclusionsUseCase with injected dependencies
    pub fn new(dependency_provider: DP, archive_resolver: AR, progress_reporter: PR) -> Self {
        Self {
            dependency_provider,
            archive_resolver,
            progress_reporter,
        }
    }

    /// Executes the exclusion use case
    ///
    /// Loads the project's dependencies from the provider, then resolves the
    /// requested shaded jars against them.
    pub fn execute(&self, request: ExclusionRequest) -> Result<ExclusionResponse> {
        if request.references.is_empty() {
            self.progress_reporter.report(
                "ℹ️  No shaded jars specified to exclude the contents of, nothing to do",
            );
            return Ok(ExclusionResponse::default());
        }

        let project = self.load_project_dependencies()?;
        self.resolve(&project, &request.references)
    }

    /// Computes the exclusion set for `references`, in declaration order
    ///
    /// # Errors
    /// - `ReferenceUnresolvable` if a shaded jar cannot be resolved
    /// - `ManifestMissing`, `ManifestUnreadable` or `MalformedEntry` from the manifest reader
    pub fn resolve(
        &self,
        project: &ProjectDependencySet,
        references: &[BundleReference],
    ) -> Result<ExclusionResponse> {
        let total = references.len();
        let mut excludes = ExclusionSet::new();
        let mut bundles = Vec::with_capacity(total);

        for (index, reference) in references.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(&reference.to_string()));

            let bundle = self.consult_bundle(project, reference, &mut excludes)?;
            bundles.push(bundle);
        }

        self.progress_reporter.report_progress(total, total, None);
        self.progress_reporter.report_completion(&format!(
            "✅ {} exclusion(s) computed from {} shaded jar(s)",
            excludes.len(),
            total
        ));

        Ok(ExclusionResponse::new(excludes, bundles))
    }

    /// Builds the project dependency set, reporting coordinates listed twice
    fn load_project_dependencies(&self) -> Result<ProjectDependencySet> {
        self.progress_reporter
            .report("📖 Loading resolved project dependencies...");

        let components = self.dependency_provider.resolved_dependencies()?;
        let mut project = ProjectDependencySet::new();

        for component in components {
            let coordinate = component.coordinate().clone();
            let version = component.version().to_string();
            if let Some(previous) = project.insert(component) {
                if previous != version {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: {} is listed with versions {} and {}; using {}",
                        coordinate, previous, version, version
                    ));
                }
            }
        }

        self.progress_reporter
            .report(&format!("✅ Detected {} dependency(ies)", project.len()));

        Ok(project)
    }

    /// Resolves one shaded jar, reads its manifest and folds it into `excludes`
    fn consult_bundle(
        &self,
        project: &ProjectDependencySet,
        reference: &BundleReference,
        excludes: &mut ExclusionSet,
    ) -> Result<ConsultedBundle> {
        let mut archive = self.archive_resolver.resolve(reference).map_err(|e| {
            ShadeDiffError::ReferenceUnresolvable {
                reference: reference.to_string(),
                details: format!("{:#}", e),
            }
        })?;

        let manifest = ManifestReader::read(&mut archive)?;

        self.progress_reporter.report(&format!(
            "📦 {}: {} component(s) listed in {} ({})",
            reference,
            manifest.len(),
            manifest.archive(),
            manifest.format()
        ));

        for diagnostic in manifest.diagnostics() {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", diagnostic));
        }

        let diff = ExclusionResolver::apply(project, &manifest, excludes);

        for pattern in &diff.added {
            self.progress_reporter.report(&format!(
                "🚫 Excluding from shaded jar: {} (already included in {})",
                pattern, reference
            ));
        }

        for mismatch in &diff.mismatched {
            self.progress_reporter.report(&format!(
                "   Keeping {} (project needs {}, {} has {})",
                mismatch.component.coordinate(),
                mismatch.project_version,
                reference,
                mismatch.component.version()
            ));
        }

        Ok(ConsultedBundle {
            reference: reference.clone(),
            archive: manifest.archive().to_string(),
            format: manifest.format(),
            component_count: manifest.len(),
            added: diff.added,
            mismatched: diff.mismatched.len(),
        })
    }
}
