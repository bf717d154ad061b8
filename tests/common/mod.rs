// Shared fixture builders for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// A CDS feature: location string plus qualifiers
pub struct Cds<'a> {
    pub location: &'a str,
    pub qualifiers: &'a [(&'a str, &'a str)],
}

/// Render a GenBank record with correctly aligned columns
pub fn genbank_record(name: &str, length: usize, cds: &[Cds]) -> String {
    let mut out = format!(
        "LOCUS       {:<16} {:>11} bp    DNA     circular PLN 01-JAN-2024\n",
        name, length
    );
    out.push_str(&format!("DEFINITION  {} test record.\n", name));
    out.push_str("FEATURES             Location/Qualifiers\n");
    out.push_str(&format!("     source          1..{}\n", length));
    out.push_str("                     /organism=\"Testus exemplaris\"\n");
    for feature in cds {
        out.push_str(&format!("     CDS             {}\n", feature.location));
        for (key, value) in feature.qualifiers {
            out.push_str(&format!("                     /{}=\"{}\"\n", key, value));
        }
    }
    out.push_str("ORIGIN\n");
    let bases: Vec<u8> = b"atgc".iter().cycle().take(length).copied().collect();
    for (line_idx, line) in bases.chunks(60).enumerate() {
        out.push_str(&format!("{:>9}", line_idx * 60 + 1));
        for block in line.chunks(10) {
            out.push(' ');
            out.push_str(std::str::from_utf8(block).unwrap());
        }
        out.push('\n');
    }
    out.push_str("//\n");
    out
}

/// One tab-delimited BLAST row
pub fn blast_row(
    query: &str,
    subject: &str,
    identity: f64,
    length: u64,
    query_span: (u64, u64),
    subject_span: (u64, u64),
) -> String {
    format!(
        "{}\t{}\t{:.2}\t{}\t0\t0\t{}\t{}\t{}\t{}\t1e-30\t150.0\n",
        query, subject, identity, length, query_span.0, query_span.1, subject_span.0, subject_span.1
    )
}

pub struct Fixture {
    pub query_gbk: PathBuf,
    pub subject_gbk: PathBuf,
    pub blast_report: PathBuf,
}

/// Query with 3 CDS, subject with 2 CDS, report with 5 rows of which 2 are shorter than 50
pub fn write_scenario(dir: &Path) -> Fixture {
    let query = genbank_record(
        "PLASTOME",
        600,
        &[
            Cds { location: "1..120", qualifiers: &[("gene", "psbA")] },
            Cds { location: "complement(200..320)", qualifiers: &[("locus_tag", "PT_002")] },
            Cds { location: "400..580", qualifiers: &[("gene", "rbcL"), ("locus_tag", "PT_003")] },
        ],
    );
    let subject = genbank_record(
        "MITO",
        900,
        &[
            Cds { location: "50..290", qualifiers: &[("gene", "cox1")] },
            Cds { location: "complement(600..840)", qualifiers: &[("gene", "psbA")] },
        ],
    );
    let mut report = String::new();
    report.push_str(&blast_row("PLASTOME", "MITO", 99.0, 120, (1, 120), (601, 720)));
    report.push_str(&blast_row("PLASTOME", "MITO", 91.5, 49, (200, 248), (100, 148)));
    report.push_str(&blast_row("PLASTOME", "MITO", 88.0, 50, (400, 449), (840, 791)));
    report.push_str(&blast_row("PLASTOME", "MITO", 97.0, 30, (500, 529), (60, 89)));
    report.push_str(&blast_row("PLASTOME", "MITO", 75.2, 181, (400, 580), (50, 230)));

    let fixture = Fixture {
        query_gbk: dir.join("plastome.gbk"),
        subject_gbk: dir.join("mito.gbk"),
        blast_report: dir.join("blast.tsv"),
    };
    std::fs::write(&fixture.query_gbk, query).unwrap();
    std::fs::write(&fixture.subject_gbk, subject).unwrap();
    std::fs::write(&fixture.blast_report, report).unwrap();
    fixture
}
