//! Edge case tests for classification and anonymization

use rand::RngCore;
use std::sync::atomic::{AtomicUsize, Ordering};
use tabmask::adapters::csv::parse_csv;
use tabmask::anonymization::anonymizer::SyntheticGenerator;
use tabmask::anonymization::{AnonymizationConfig, AnonymizationEngine};
use tabmask::core::Pipeline;
use tabmask::domain::{CellValue, ColumnType, TabmaskError, TransformMethod};

fn pipeline(seed: u64) -> Pipeline {
    Pipeline::new(AnonymizationConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
}

/// Deterministic generator numbering every pseudonym it hands out
#[derive(Default)]
struct CountingGenerator {
    issued: AtomicUsize,
}

impl CountingGenerator {
    fn next(&self) -> usize {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl SyntheticGenerator for CountingGenerator {
    fn first_name(&self, _rng: &mut dyn RngCore) -> String {
        format!("Given{}", self.next())
    }

    fn full_name(&self, _rng: &mut dyn RngCore) -> String {
        let n = self.next();
        format!("Given{n} Family{n}")
    }

    fn email(&self, _rng: &mut dyn RngCore) -> String {
        format!("user{}@example.test", self.next())
    }

    fn phone(&self, _rng: &mut dyn RngCore) -> String {
        format!("555-000-{:04}", self.next())
    }
}

#[test]
fn test_empty_input_yields_empty_bundle() {
    let bundle = pipeline(1).process_csv("").unwrap();
    assert!(bundle.headers.is_empty());
    assert_eq!(bundle.stats.rows, 0);
}

#[test]
fn test_header_only_input() {
    let bundle = pipeline(1).process_csv("name,email\n").unwrap();

    assert!(bundle.headers.is_empty());
    assert!(bundle.column_types.is_empty());
    assert!(bundle.columns.is_empty());
    assert_eq!(bundle.anonymized.row_count(), 0);
}

#[test]
fn test_extra_fields_fail_the_whole_run() {
    let err = pipeline(1)
        .process_csv("email,age\na@b.co,3\nc@d.org,4,extra\n")
        .unwrap_err();

    assert!(matches!(err, TabmaskError::Parse(_)));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_short_rows_padded_with_absent() {
    let bundle = pipeline(2)
        .process_csv("email,dept\na@b.co,sales\nc@d.org\n")
        .unwrap();

    assert_eq!(bundle.anonymized.cell(1, 1), Some(&CellValue::Absent));
}

#[test]
fn test_blank_lines_skipped_but_delimiter_rows_kept() {
    let bundle = pipeline(2).process_csv("dept,site\nsales,a\n\n,\nops,b\n").unwrap();
    assert_eq!(bundle.stats.rows, 3);
    assert_eq!(bundle.anonymized.cell(1, 0), Some(&CellValue::Absent));
    assert_eq!(bundle.anonymized.cell(1, 1), Some(&CellValue::Absent));
}

#[test]
fn test_absent_cells_pass_through_every_transform() {
    let csv = "\
full_name,email,phone,visit_date,age,dept
Ada Lovelace,,555-123-4567,2021-03-14,34,sales
,ada@example.com,,,34,
Grace Hopper,grace@example.org,555-987-6543,,,ops
";
    let bundle = pipeline(3).process_csv(csv).unwrap();

    for (row, original) in bundle.original.rows().iter().enumerate() {
        for (column, cell) in original.iter().enumerate() {
            let anonymized = bundle.anonymized.cell(row, column).unwrap();
            assert_eq!(
                cell.is_absent(),
                anonymized.is_absent(),
                "row {row} column {column}"
            );
        }
    }
}

#[test]
fn test_all_absent_column_is_unknown_and_untouched() {
    let bundle = pipeline(4)
        .process_csv("contact_name,dept\n,sales\n,ops\n,sales\n")
        .unwrap();

    assert_eq!(bundle.column_types.get("contact_name"), Some(ColumnType::Unknown));
    assert_eq!(bundle.method_of("contact_name"), Some(TransformMethod::PassThrough));
    assert!(bundle.anonymized.column(0).all(|c| c.is_absent()));

    let report = bundle.report();
    assert!(report.warnings.iter().any(|w| w.contains("'contact_name'")));
}

#[test]
fn test_high_cardinality_numeric_falls_back_to_shuffle() {
    let bundle = pipeline(5)
        .process_csv("amount\n10\n20\n30\n40\n50\n60\n")
        .unwrap();

    assert_eq!(bundle.column_types.get("amount"), Some(ColumnType::Numeric));
    assert_eq!(bundle.method_of("amount"), Some(TransformMethod::Shuffle));

    let mut values: Vec<f64> = bundle
        .anonymized
        .column(0)
        .filter_map(|c| c.as_f64())
        .collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(values, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);

    assert!(bundle
        .report()
        .warnings
        .iter()
        .any(|w| w.contains("high-cardinality")));
}

#[test]
fn test_shuffle_collapses_duplicates() {
    let csv = "dept\nsales\nops\nsales\nhr\nsales\nops\n";

    for seed in 0..20 {
        let bundle = pipeline(seed).process_csv(csv).unwrap();
        let original: Vec<String> = bundle
            .original
            .column(0)
            .filter_map(|c| c.canonical())
            .collect();
        let shuffled: Vec<String> = bundle
            .anonymized
            .column(0)
            .filter_map(|c| c.canonical())
            .collect();

        for (i, a) in original.iter().enumerate() {
            assert!(["sales", "ops", "hr"].contains(&shuffled[i].as_str()));
            for (j, b) in original.iter().enumerate() {
                if a == b {
                    assert_eq!(shuffled[i], shuffled[j], "seed {seed}: rows {i} and {j}");
                }
            }
        }
    }
}

#[test]
fn test_unparseable_date_cell_kept() {
    let bundle = pipeline(6)
        .process_csv("visit_date\n2021-03-14\nunknown\n03/14/2021\n")
        .unwrap();

    assert_eq!(bundle.anonymized.cell(0, 0), Some(&CellValue::from("Mar-2021")));
    assert_eq!(bundle.anonymized.cell(1, 0), Some(&CellValue::from("unknown")));
    assert_eq!(bundle.anonymized.cell(2, 0), Some(&CellValue::from("Mar-2021")));
}

#[test]
fn test_custom_generator_consistency() {
    let engine = AnonymizationEngine::new(AnonymizationConfig {
        seed: Some(7),
        ..Default::default()
    })
    .unwrap()
    .with_generator(CountingGenerator::default());
    let pipeline = Pipeline::with_engine(engine);

    let bundle = pipeline
        .process_csv("full_name\nAda Lovelace\nCher\nAda Lovelace\n")
        .unwrap();

    assert_eq!(bundle.anonymized.cell(0, 0), Some(&CellValue::from("Given1 Family1")));
    assert_eq!(bundle.anonymized.cell(1, 0), Some(&CellValue::from("Given2")));
    assert_eq!(bundle.anonymized.cell(2, 0), Some(&CellValue::from("Given1 Family1")));
    assert_eq!(bundle.stats.pseudonyms.names, 2);
}

#[test]
fn test_mappings_do_not_leak_between_runs() {
    let engine = AnonymizationEngine::new(AnonymizationConfig::default())
        .unwrap()
        .with_generator(CountingGenerator::default());
    let pipeline = Pipeline::with_engine(engine);

    let first = pipeline.process_csv("email\na@b.co\n").unwrap();
    let second = pipeline.process_csv("email\na@b.co\n").unwrap();

    // a fresh run state means a fresh pseudonym for the same input
    assert_ne!(first.anonymized, second.anonymized);
    assert_eq!(second.stats.pseudonyms.emails, 1);
}

#[test]
fn test_tab_delimited_input() {
    let bundle = pipeline(8)
        .with_delimiter(b'\t')
        .process_csv("email\tage\na@b.co\t34\nc@d.org\t34\n")
        .unwrap();

    assert_eq!(bundle.column_types.get("email"), Some(ColumnType::Email));
    assert_eq!(bundle.anonymized.cell(0, 1), Some(&CellValue::from("26-35")));
}

#[test]
fn test_engine_classify_table_directly() {
    let table = parse_csv("email,score\na@b.co,1.5\nc@d.org,2.5\n", b',').unwrap();
    let engine = AnonymizationEngine::new(AnonymizationConfig::default()).unwrap();
    let types = engine.classify_table(&table);

    assert_eq!(types.get("email"), Some(ColumnType::Email));
    assert_eq!(types.get("score"), Some(ColumnType::Numeric));
}

#[test]
fn test_signed_codes_keep_their_sign() {
    let mut config = AnonymizationConfig {
        seed: Some(9),
        ..Default::default()
    };
    config
        .column_types
        .insert("code".to_string(), ColumnType::Categorical);
    let bundle = Pipeline::new(config)
        .unwrap()
        .process_csv("code\n+44\n+33\n+44\n")
        .unwrap();

    let codes: Vec<String> = bundle
        .anonymized
        .column(0)
        .filter_map(CellValue::canonical)
        .collect();
    assert_eq!(codes.len(), 3);
    assert!(codes.iter().all(|c| c == "+44" || c == "+33"));
}
