#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{run_batch, BatchError, Catalog, Config};
    use anyhow::Result as AnyhowResult;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const FIXTURE_CATALOG: &str = r#"[
        {"_id": "0000101209159",
         "product_name": [
            {"lang": "main", "text": "Véritable pâte à tartiner noisettes chocolat noir"},
            {"lang": "fr", "text": "Véritable pâte à tartiner noisettes chocolat noir"}
         ],
         "brands": "Bovetti",
         "categories": "Petit-déjeuners,Produits à tartiner,Pâtes à tartiner aux noisettes et au cacao",
         "labels": "Sans gluten,Sans huile de palme",
         "quantity": "350 g",
         "search_string": "véritable pâte tartiner noisettes chocolat noir bovetti 350g sans gluten"},
        {"_id": "nutella001",
         "product_name": [
            {"lang": "main", "text": "Nutella Hazelnut Spread"},
            {"lang": "fr", "text": "Pâte à tartiner aux noisettes"}
         ],
         "brands": "Ferrero",
         "categories": "Spreads,Sweet Spreads,Chocolate Spreads,Hazelnut Chocolate Spreads",
         "labels": "Gluten-free,No palm oil",
         "quantity": "750 g",
         "search_string": "nutella ferrero hazelnut spread 750g chocolate"},
        {"_id": "bread001",
         "product_name": [{"lang": "main", "text": "Chleb żytni razowy"}],
         "brands": "Piekarnia",
         "categories": "Pieczywo,Pieczywo żytnie",
         "quantity": "500 g",
         "search_string": "chleb żytni razowy piekarnia 500g pieczywo"}
    ]"#;

    struct Fixture {
        _dir: TempDir,
        catalog: Catalog,
        config: Config,
        input: PathBuf,
        output: PathBuf,
    }

    fn setup(queries: &str) -> AnyhowResult<Fixture> {
        let dir = tempfile::tempdir()?;

        let catalog_path = dir.path().join("products.json");
        std::fs::write(&catalog_path, FIXTURE_CATALOG)?;
        let catalog = Catalog::load(&catalog_path)?;

        let input = dir.path().join("batch.txt");
        std::fs::write(&input, queries)?;
        let output = dir.path().join("report.csv");

        Ok(Fixture {
            catalog,
            config: Config::default(),
            input,
            output,
            _dir: dir,
        })
    }

    fn report_lines(fixture: &Fixture) -> Vec<Vec<String>> {
        let content = std::fs::read_to_string(&fixture.output).expect("report present");
        content
            .lines()
            .map(crate::batch::report::parse_line)
            .collect()
    }

    #[test]
    fn test_batch_writes_two_rows_per_query() -> AnyhowResult<()> {
        let fixture = setup("nutella chocolate\nchleb żytni\n")?;
        let summary = run_batch(
            &fixture.catalog,
            &fixture.config,
            &fixture.input,
            &fixture.output,
        )?;

        assert_eq!(summary.queries, 2);
        assert_eq!(summary.direct_hits, 2);
        assert_eq!(summary.fuzzy_hits, 2);

        let rows = report_lines(&fixture);
        // header + 2 rows per query
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0],
            vec!["Number", "Input string", "Given Name", "Score", "ID"]
        );
        assert_eq!(rows[1][0], "1.Mongo");
        assert_eq!(rows[2][0], "1.Fuzzy");
        assert_eq!(rows[3][0], "2.Mongo");
        assert_eq!(rows[4][0], "2.Fuzzy");

        // both rows of a pair carry the original input string
        assert_eq!(rows[1][1], "nutella chocolate");
        assert_eq!(rows[2][1], "nutella chocolate");
        assert_eq!(rows[3][1], "chleb żytni");

        // the Polish query resolves to the bread record
        assert_eq!(rows[3][4], "bread001");
        assert_eq!(rows[3][2], "Pieczywo żytnie");
        Ok(())
    }

    #[test]
    fn test_batch_blank_lines_are_skipped() -> AnyhowResult<()> {
        let fixture = setup("\nnutella\n\n   \nchleb żytni\n")?;
        let summary = run_batch(
            &fixture.catalog,
            &fixture.config,
            &fixture.input,
            &fixture.output,
        )?;

        assert_eq!(summary.queries, 2);
        let rows = report_lines(&fixture);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1][0], "1.Mongo");
        assert_eq!(rows[3][0], "2.Mongo");
        Ok(())
    }

    #[test]
    fn test_batch_unmatched_query_keeps_row_pair() -> AnyhowResult<()> {
        let fixture = setup("zzzqqq xyzzy\n")?;
        let summary = run_batch(
            &fixture.catalog,
            &fixture.config,
            &fixture.input,
            &fixture.output,
        )?;

        assert_eq!(summary.queries, 1);
        assert_eq!(summary.direct_hits, 0);
        assert_eq!(summary.fuzzy_hits, 0);

        let rows = report_lines(&fixture);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["1.Mongo", "zzzqqq xyzzy", "", "0.00", ""]);
        assert_eq!(rows[2], vec!["1.Fuzzy", "zzzqqq xyzzy", "", "0.00", ""]);
        Ok(())
    }

    #[test]
    fn test_batch_empty_input_fails_with_header_only_report() -> AnyhowResult<()> {
        let fixture = setup("\n   \n")?;
        let err = run_batch(
            &fixture.catalog,
            &fixture.config,
            &fixture.input,
            &fixture.output,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BatchError>(),
            Some(BatchError::EmptyBatch(_))
        ));

        let rows = report_lines(&fixture);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            vec!["Number", "Input string", "Given Name", "Score", "ID"]
        );
        Ok(())
    }

    #[test]
    fn test_batch_missing_input_is_a_precondition_error() -> AnyhowResult<()> {
        let fixture = setup("unused\n")?;
        let missing = fixture.input.with_file_name("absent.txt");
        let err = run_batch(
            &fixture.catalog,
            &fixture.config,
            &missing,
            &fixture.output,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BatchError>(),
            Some(BatchError::MissingInput(_))
        ));
        assert!(!fixture.output.exists());
        Ok(())
    }

    #[test]
    fn test_fuzzy_row_can_disagree_with_direct_row() -> AnyhowResult<()> {
        // "tartiner noisettes" matches both spread records lexically; the
        // fuzzy pass must still favor the one whose names carry the terms
        let fixture = setup("tartiner noisettes\n")?;
        run_batch(
            &fixture.catalog,
            &fixture.config,
            &fixture.input,
            &fixture.output,
        )?;

        let rows = report_lines(&fixture);
        assert_eq!(rows.len(), 3);
        let fuzzy_score: f32 = rows[2][3].parse().unwrap();
        assert!(fuzzy_score > 100.0, "fuzzy score too low: {}", fuzzy_score);
        assert_eq!(rows[2][4], "0000101209159");
        Ok(())
    }
}
