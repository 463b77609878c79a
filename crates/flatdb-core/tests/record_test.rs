//! Database records parsed from the sample fixtures

use flatdb_core::{
    DatabaseFormat, EmblCommon, EmblRecord, FlatFileReader, FlatRecord, GenbankRecord,
    KeggGenesRecord, NcbiCommon, Topology, UniProtRecord,
};
use std::path::PathBuf;

fn fixture_path(dir: &str, file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(dir)
        .join(file)
}

fn entries(format: DatabaseFormat, dir: &str, file: &str) -> Vec<String> {
    FlatFileReader::new(format)
        .read_file(&fixture_path(dir, file))
        .expect("Failed to read fixture")
}

// ============================================================================
// GENBANK
// ============================================================================

#[test]
fn test_genbank_lambda() {
    let entries = entries(DatabaseFormat::Genbank, "genbank", "sample.gbk");
    assert_eq!(entries.len(), 2);

    let record = GenbankRecord::new(&entries[0]);
    assert_eq!(record.entry_id().unwrap(), "NC_001416");
    assert_eq!(record.definition(), "Escherichia phage Lambda, complete genome.");
    assert_eq!(record.accessions(), vec!["NC_001416"]);
    assert_eq!(record.accession_version(), Some("NC_001416.1".to_string()));
    assert_eq!(record.keywords(), vec!["RefSeq", "complete genome"]);

    let locus = record.locus();
    assert_eq!(locus.length, Some(48502));
    assert_eq!(locus.molecule_type, "DNA");
    assert_eq!(locus.topology, Some(Topology::Linear));
    assert_eq!(locus.division.as_deref(), Some("PHG"));
    assert_eq!(locus.date.as_deref(), Some("05-MAR-2020"));
}

#[test]
fn test_genbank_source_and_lineage() {
    let entries = entries(DatabaseFormat::Genbank, "genbank", "sample.gbk");
    let source = GenbankRecord::new(&entries[0]).source();

    assert_eq!(source.common_name, "Escherichia phage Lambda");
    assert_eq!(source.organism, "Escherichia phage Lambda");
    assert_eq!(
        source.taxonomy,
        vec![
            "Viruses",
            "Duplodnaviria",
            "Heunggongvirae",
            "Uroviricota",
            "Caudoviricetes",
            "Lambdavirus",
        ]
    );
}

#[test]
fn test_genbank_references_comment_features() {
    let entries = entries(DatabaseFormat::Genbank, "genbank", "sample.gbk");
    let record = GenbankRecord::new(&entries[0]);

    let references = record.references();
    assert_eq!(references.len(), 2);
    assert!(references[0].contains("PUBMED   6221115"));
    assert!(references[1].contains("Daniels,D.L."));

    assert_eq!(
        record.comment(),
        "PROVISIONAL REFSEQ: This record has not yet been subject to final\nNCBI review.\nCOMPLETENESS: full length."
    );

    assert_eq!(
        record.fetch("FEATURES", 1),
        "1..48502 /organism=\"Escherichia phage Lambda\" /mol_type=\"genomic DNA\""
    );
}

#[test]
fn test_genbank_sequence() {
    let entries = entries(DatabaseFormat::Genbank, "genbank", "sample.gbk");
    let sequence = GenbankRecord::new(&entries[0]).sequence();

    assert_eq!(sequence.len(), 80);
    assert!(sequence.starts_with("gggcggcgacctcgcgggtt"));
    assert!(sequence.ends_with("tcataactta"));
}

#[test]
fn test_genbank_second_entry() {
    let entries = entries(DatabaseFormat::Genbank, "genbank", "sample.gbk");
    let record = GenbankRecord::new(&entries[1]);

    assert_eq!(record.entry_id().unwrap(), "AB000001");
    assert_eq!(record.accessions(), vec!["AB000001", "AB000002"]);
    assert!(record.keywords().is_empty());
    assert_eq!(record.source().taxonomy.last().map(String::as_str), Some("Homo"));
    assert!(record.references().is_empty());
    assert_eq!(record.sequence(), "atgcatgcat");
}

// ============================================================================
// KEGG GENES
// ============================================================================

#[test]
fn test_kegg_entries() {
    let entries = entries(DatabaseFormat::Kegg, "kegg", "sample.kegg");
    assert_eq!(entries.len(), 2);

    let thr_a = KeggGenesRecord::new(&entries[0]);
    assert_eq!(thr_a.entry_id().unwrap(), "b0002");
    assert_eq!(thr_a.name(), "thrA");
    assert_eq!(thr_a.definition(), "fused aspartate kinase/homoserine dehydrogenase 1");
    assert_eq!(thr_a.pathways().len(), 3);
    assert_eq!(thr_a.pathways()[2], "eco01100  Metabolic pathways");
    assert_eq!(thr_a.fetch("POSITION", 0), "337..2799");

    let thr_b = KeggGenesRecord::new(&entries[1]);
    assert_eq!(thr_b.entry_id().unwrap(), "b0003");
    assert_eq!(thr_b.orthologs(), vec!["K00872  homoserine kinase [EC:2.7.1.39]"]);
    assert!(!thr_b.exists("POSITION"));
}

// ============================================================================
// EMBL
// ============================================================================

#[test]
fn test_embl_entry() {
    let entries = entries(DatabaseFormat::Embl, "embl", "sample.embl");
    assert_eq!(entries.len(), 2);

    let record = EmblRecord::new(&entries[0]);
    assert_eq!(record.entry_id().unwrap(), "X56734");
    assert_eq!(record.id_line()[2], "linear");
    assert_eq!(record.accessions(), vec!["X56734", "S46826"]);
    assert_eq!(
        record.description(),
        "Trifolium repens mRNA for non-cyanogenic beta-glucosidase"
    );
    assert_eq!(record.keywords(), vec!["beta-glucosidase"]);
    assert_eq!(record.species(), "Trifolium repens (white clover)");
    assert_eq!(record.classification().len(), 9);
    assert_eq!(
        record.database_refs(),
        vec!["MD5; 1e51ca3a5450c43524b9185c236cc5cc."]
    );
    assert!(record.organelle().is_empty());
}

#[test]
fn test_embl_references_and_spacers() {
    let entries = entries(DatabaseFormat::Embl, "embl", "sample.embl");
    let record = EmblRecord::new(&entries[0]);

    assert!(!record.exists("XX"));
    assert!(!record.exists("RN"));

    let references = record.references();
    assert_eq!(references.len(), 2);
    assert!(references[0].starts_with("RN   [5]"));
    assert!(references[1].contains("Submitted (19-NOV-1990) to the INSDC."));
}

#[test]
fn test_embl_sequence() {
    let entries = entries(DatabaseFormat::Embl, "embl", "sample.embl");

    let first = EmblRecord::new(&entries[0]).sequence();
    assert_eq!(first.len(), 100);
    assert!(first.starts_with("aaacaaaccaaatatggatt"));

    let second = EmblRecord::new(&entries[1]);
    assert_eq!(second.entry_id().unwrap(), "AB000263");
    assert_eq!(second.sequence(), "acaagatgccattgtccccc");
}

// ============================================================================
// UNIPROT
// ============================================================================

#[test]
fn test_uniprot_swissprot_entry() {
    let entries = entries(DatabaseFormat::Uniprot, "uniprot", "sample.dat");
    assert_eq!(entries.len(), 2);

    let record = UniProtRecord::new(&entries[0]);
    assert_eq!(record.entry_id().unwrap(), "CYC_HUMAN");
    assert_eq!(record.accessions(), vec!["P99999", "B2R5N8", "Q6NUR2", "Q6NX69"]);
    assert_eq!(record.protein_name(), Some("Cytochrome c".to_string()));
    assert_eq!(record.gene_name(), Some("CYCS".to_string()));
    assert_eq!(record.species(), "Homo sapiens (Human)");
    assert_eq!(record.taxonomy_id(), Some(9606));
    assert_eq!(record.classification().len(), 14);
    assert_eq!(record.classification().last().map(String::as_str), Some("Homo"));
    assert_eq!(
        record.keywords(),
        vec!["3D-structure", "Apoptosis", "Electron transport", "Heme"]
    );
    assert_eq!(record.references().len(), 2);
    assert_eq!(record.database_refs().len(), 2);
}

#[test]
fn test_uniprot_sequence_header() {
    let entries = entries(DatabaseFormat::Uniprot, "uniprot", "sample.dat");
    let record = UniProtRecord::new(&entries[0]);

    assert_eq!(record.sequence_length(), Some(105));
    assert_eq!(record.molecular_weight(), Some(11749));
    let sequence = record.sequence();
    assert_eq!(sequence.len(), 105);
    assert!(sequence.starts_with("MGDVEKGKKI"));
    assert!(sequence.ends_with("KATNE"));
}

#[test]
fn test_uniprot_trembl_entry() {
    let entries = entries(DatabaseFormat::Uniprot, "uniprot", "sample.dat");
    let record = UniProtRecord::new(&entries[1]);

    assert_eq!(record.entry_id().unwrap(), "A0A000_9ACTN");
    // Only SubName, no RecName
    assert_eq!(record.protein_name(), None);
    assert_eq!(record.gene_name(), None);
    assert_eq!(record.taxonomy_id(), Some(1931));
    assert_eq!(record.sequence_length(), Some(12));
    assert_eq!(record.sequence(), "MSKGEELFTGVV");
}
