#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use tempfile::TempDir;

    use crate::config::StorageConfig;
    use crate::implementations::fs_store::{contract_header, FsArtifactStore};
    use crate::pipeline::{PipelineOrchestrator, RunSummary};
    use crate::tests::support::{reentrancy_classification, FixedGenerator, ScriptedValidator};

    fn store_in(tmp: &TempDir) -> FsArtifactStore {
        FsArtifactStore::new(StorageConfig::under_root(tmp.path()))
    }

    #[tokio::test]
    async fn clean_contract_flows_through_to_storage() {
        let tmp = TempDir::new().expect("temp dir");
        let orchestrator = PipelineOrchestrator::new(
            FixedGenerator::returning("contract C {}"),
            ScriptedValidator::new(0, "No issues detected"),
            store_in(&tmp),
            3,
        );

        let artifact = orchestrator
            .run_iteration(&reentrancy_classification())
            .await
            .expect("iteration succeeds");

        assert!(artifact.contract_path.exists());
        assert!(artifact.report_path.exists());

        // Clean verdict lands under the clean segment with the header applied
        assert!(artifact
            .contract_path
            .starts_with(tmp.path().join("contracts").join("high").join("clean")));
        let written = std::fs::read_to_string(&artifact.contract_path).expect("read back");
        assert_eq!(written, format!("{}contract C {{}}", contract_header()));

        let stem = artifact
            .contract_path
            .file_stem()
            .and_then(|s| s.to_str())
            .expect("stem");
        assert!(artifact
            .report_path
            .file_name()
            .and_then(|s| s.to_str())
            .expect("report name")
            .starts_with(stem));
    }

    #[tokio::test]
    async fn generation_failure_skips_iterations_without_writing() {
        let tmp = TempDir::new().expect("temp dir");
        let orchestrator = PipelineOrchestrator::new(
            FixedGenerator::failing(),
            ScriptedValidator::new(0, "No issues detected"),
            store_in(&tmp),
            3,
        );

        let summary = orchestrator.run(2, None).await;

        assert_eq!(
            summary,
            RunSummary {
                requested: 2,
                completed: 0,
                skipped: 2,
            }
        );
        assert!(!tmp.path().join("contracts").exists());
        assert!(!tmp.path().join("reports").exists());
    }

    #[tokio::test]
    async fn compile_exhaustion_skips_without_analysis() {
        let tmp = TempDir::new().expect("temp dir");
        let validator = ScriptedValidator::always_failing();
        let orchestrator = PipelineOrchestrator::new(
            FixedGenerator::returning("contract Broken {"),
            validator,
            store_in(&tmp),
            3,
        );

        let summary = orchestrator.run(1, None).await;

        assert_eq!(summary.skipped, 1);
        assert!(!tmp.path().join("contracts").exists());
    }

    #[tokio::test]
    async fn batch_counts_successes() {
        let tmp = TempDir::new().expect("temp dir");
        let orchestrator = PipelineOrchestrator::new(
            FixedGenerator::returning("contract C {}"),
            ScriptedValidator::new(0, "Reentrancy in C.f"),
            store_in(&tmp),
            3,
        );

        let summary = orchestrator.run(3, None).await;

        assert_eq!(summary.requested, 3);
        assert_eq!(summary.completed, 3);
        assert_eq!(summary.skipped, 0);
    }

    #[tokio::test]
    async fn validator_sees_the_unmodified_generated_source() {
        // The retry policy re-submits the same source; the count on the
        // scripted validator is per orchestrator run, so two failures plus
        // one success means three compiles of one generated contract.
        let tmp = TempDir::new().expect("temp dir");
        let validator = std::sync::Arc::new(ScriptedValidator::new(2, "No issues detected"));
        let orchestrator = PipelineOrchestrator::new(
            FixedGenerator::returning("contract C {}"),
            std::sync::Arc::clone(&validator),
            store_in(&tmp),
            3,
        );

        let summary = orchestrator.run(1, None).await;
        assert_eq!(summary.completed, 1);

        assert_eq!(validator.compile_calls.load(Ordering::SeqCst), 3);
        assert_eq!(validator.analyze_calls.load(Ordering::SeqCst), 1);
    }
}
