#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::config::StorageConfig;
    use crate::implementations::fs_store::{contract_header, FsArtifactStore};
    use crate::models::classification::{Complexity, ContractClassification};
    use crate::models::contract::GeneratedContract;
    use crate::models::validation::AnalysisReport;
    use crate::traits::ArtifactStore;

    fn store_in(tmp: &TempDir) -> FsArtifactStore {
        FsArtifactStore::new(StorageConfig::under_root(tmp.path()))
    }

    fn sample_contract() -> GeneratedContract {
        let classification = ContractClassification::new(
            Complexity::Medium,
            vec!["tx-origin".to_string(), "timestamp".to_string()],
        )
        .expect("valid classification");
        GeneratedContract::new("contract C {}".to_string(), classification)
    }

    fn vulnerable_report() -> AnalysisReport {
        AnalysisReport {
            raw_text: "C.f uses tx.origin for authorization".to_string(),
            issues_found: true,
        }
    }

    #[test]
    fn next_index_ignores_non_numeric_names() {
        let tmp = TempDir::new().expect("temp dir");
        for name in ["0.sol", "2.sol", "foo.sol"] {
            fs::write(tmp.path().join(name), "x").expect("seed file");
        }

        let next = FsArtifactStore::next_index(tmp.path()).expect("scan");
        assert_eq!(next, 3);
    }

    #[test]
    fn next_index_starts_at_zero_in_an_empty_directory() {
        let tmp = TempDir::new().expect("temp dir");
        let next = FsArtifactStore::next_index(tmp.path()).expect("scan");
        assert_eq!(next, 0);
    }

    #[test]
    fn saved_contract_round_trips_with_header() {
        let tmp = TempDir::new().expect("temp dir");
        let store = store_in(&tmp);
        let contract = sample_contract();

        let artifact = store
            .save(&contract, &vulnerable_report())
            .expect("save succeeds");

        let written = fs::read_to_string(&artifact.contract_path).expect("read back");
        let mut expected = contract_header();
        expected.push_str(&contract.source_text);
        assert_eq!(written, expected);
    }

    #[test]
    fn report_and_labels_share_the_contract_base_name() {
        let tmp = TempDir::new().expect("temp dir");
        let store = store_in(&tmp);

        let artifact = store
            .save(&sample_contract(), &vulnerable_report())
            .expect("save succeeds");

        let base = artifact
            .contract_path
            .file_stem()
            .and_then(|s| s.to_str())
            .expect("contract stem")
            .to_string();
        let report_name = artifact
            .report_path
            .file_name()
            .and_then(|s| s.to_str())
            .expect("report name");
        let labels_name = artifact
            .labels_path
            .file_name()
            .and_then(|s| s.to_str())
            .expect("labels name");

        assert_eq!(report_name, format!("{}_slither_report.txt", base));
        assert_eq!(labels_name, format!("{}_labels.json", base));
        assert!(artifact.report_path.exists());
        assert!(artifact.labels_path.exists());
    }

    #[test]
    fn sequential_saves_use_increasing_indices() {
        let tmp = TempDir::new().expect("temp dir");
        let store = store_in(&tmp);

        let first = store
            .save(&sample_contract(), &vulnerable_report())
            .expect("first save");
        let second = store
            .save(&sample_contract(), &vulnerable_report())
            .expect("second save");

        assert!(first.contract_path.ends_with("0.sol"));
        assert!(second.contract_path.ends_with("1.sol"));
    }

    #[test]
    fn layout_encodes_complexity_and_status() {
        let tmp = TempDir::new().expect("temp dir");
        let store = store_in(&tmp);

        let vulnerable = store
            .save(&sample_contract(), &vulnerable_report())
            .expect("save vulnerable");
        assert!(vulnerable.contract_path.starts_with(
            tmp.path().join("contracts").join("medium").join("vulnerable")
        ));

        let clean_report = AnalysisReport {
            raw_text: "No issues detected".to_string(),
            issues_found: false,
        };
        let clean = store
            .save(&sample_contract(), &clean_report)
            .expect("save clean");
        assert!(clean
            .contract_path
            .starts_with(tmp.path().join("contracts").join("medium").join("clean")));
    }

    #[test]
    fn labels_carry_the_classification() {
        let tmp = TempDir::new().expect("temp dir");
        let store = store_in(&tmp);

        let artifact = store
            .save(&sample_contract(), &vulnerable_report())
            .expect("save succeeds");

        let labels: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&artifact.labels_path).expect("read labels"))
                .expect("valid json");
        assert_eq!(labels["complexity"], "medium");
        assert_eq!(labels["issues_found"], true);
        assert_eq!(labels["vulnerabilities"][0], "tx-origin");
        assert_eq!(labels["vulnerabilities"][1], "timestamp");
    }
}
