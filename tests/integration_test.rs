//! Integration tests for csvforge

use csvforge::csv_reader::CsvReader;
use csvforge::csv_writer::CsvWriter;
use csvforge::{parse, write, CsvConfig, ParseErrorKind, Table};
use tempfile::NamedTempFile;

fn table(rows: &[&[&str]]) -> Table {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

const SEMICOLON_SAMPLE: &str = "mrBranche;mrBeschrTechn;mrStartJahr
Automotive;Kanban, Jira, Confluence;2017
\"Finanzen; Banken\";RedHat Enterprise Linux 5 bis 7, Oracle Database 12 bis 19;2020
Güterverkehr;Microsoft Excel / PowerPoint / Word / Project, Lotus Notes;2016
Telekommunikation;\"Scrum
intelliJ
GIT
Large/ small screen devices\";2015
";

#[test]
fn test_scenarios() {
    let config = CsvConfig::DEFAULT;
    let cases: Vec<(&str, Table)> = vec![
        (
            "a,b,c\n1,2,3\n",
            table(&[&["a", "b", "c"], &["1", "2", "3"]]),
        ),
        ("a,\"b,c\",d\n", table(&[&["a", "b,c", "d"]])),
        (
            "a,\"line1\nline2\",c\n",
            table(&[&["a", "line1\nline2", "c"]]),
        ),
        ("a,\"\"\"q\"\"\",c\n", table(&[&["a", "\"q\"", "c"]])),
        ("a,b\\,c,d\n", table(&[&["a", "b,c", "d"]])),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input, &config).unwrap(), expected, "input {:?}", input);
    }

    let err = parse("a,\"unterminated", &config).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnterminatedQuotedField);
}

#[test]
fn test_semicolon_sample() {
    let rows = parse(SEMICOLON_SAMPLE, &CsvConfig::SEMICOLON).unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.len() == 3));
    assert_eq!(rows[2][0], "Finanzen; Banken");
    assert_eq!(rows[3][0], "Güterverkehr");
    assert_eq!(
        rows[4][1],
        "Scrum\nintelliJ\nGIT\nLarge/ small screen devices"
    );
}

#[test]
fn test_backslash_escapes_everything() {
    let input = "Telekommunikation;Scrum\\\nintelliJ\\\nGIT\\\" \"\"\\\nLarge\\;;2015";
    let rows = parse(input, &CsvConfig::SEMICOLON).unwrap();
    assert_eq!(
        rows,
        table(&[&[
            "Telekommunikation",
            "Scrum\nintelliJ\nGIT\" \"\nLarge;",
            "2015"
        ]])
    );
}

#[test]
fn test_error_kinds() {
    let config = CsvConfig::SEMICOLON;

    let err = parse("x;\"Scrum\nGIT\";2015\\", &config).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::IncompleteEscape);
    assert_eq!(err.consumed(), "x;\"Scrum\nGIT\";2015\\");

    let err = parse("x;\"Scrum\nGIT\"2015", &config).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::ExpectedFieldSeparator);
    assert_eq!(err.consumed(), "x;\"Scrum\nGIT\"");

    let err = parse("x;\"Scrum\nGIT;2015\n", &config).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnterminatedQuotedField);
    assert!(err.to_string().ends_with("<<< here"));
}

#[test]
fn test_leading_blank_lines_produce_no_rows() {
    let config = CsvConfig::DEFAULT;
    assert_eq!(parse("\n\na\n", &config).unwrap(), table(&[&["a"]]));
    assert_eq!(
        parse("\r\n\r\na\r\n", &CsvConfig::WINDOWS).unwrap(),
        table(&[&["a"]])
    );
}

#[test]
fn test_write_plain_fields() {
    let rows = table(&[&["1", "2", "3"], &["a", "b", "c"]]);
    for config in [
        CsvConfig::DEFAULT,
        CsvConfig::WINDOWS,
        CsvConfig::SEMICOLON,
        CsvConfig::TAB,
    ] {
        let sep = config.field_separator().to_string();
        let term = config.line_terminator();
        let expected: String = rows
            .iter()
            .map(|row| format!("{}{}", row.join(sep.as_str()), term))
            .collect();
        assert_eq!(write(&rows, &config), expected);
    }
}

#[test]
fn test_write_quoting_newline() {
    let rows = table(&[&["1\n", "2", "3"], &["a", "b\n", "c"], &["!", "@", "#\n"]]);
    assert_eq!(
        write(&rows, &CsvConfig::DEFAULT),
        "\"1\n\",2,3\na,\"b\n\",c\n!,@,\"#\n\"\n"
    );
}

#[test]
fn test_value_round_trip() {
    let rows = table(&[
        &["plain", "with,comma", "with;semicolon"],
        &["\"quoted\"", "multi\nline", "tab\there"],
        &["crlf\r\ninside", "", "ünïcødé"],
        &["", "trailing empty", ""],
    ]);

    let quote_all = CsvConfig::builder().quote_all_fields(true).build().unwrap();
    let pipe = CsvConfig::builder()
        .field_separator('|')
        .quote_char('\'')
        .use_crlf(true)
        .build()
        .unwrap();

    for config in [
        CsvConfig::DEFAULT,
        CsvConfig::WINDOWS,
        CsvConfig::SEMICOLON,
        CsvConfig::TAB,
        quote_all,
        pipe,
    ] {
        let text = write(&rows, &config);
        assert_eq!(parse(&text, &config).unwrap(), rows, "config {:?}", config);
    }
}

#[test]
fn test_escaped_input_reencodes_with_quotes() {
    let config = CsvConfig::DEFAULT;
    let rows = parse("a\\,b,c\\\"d\n", &config).unwrap();
    assert_eq!(rows, table(&[&["a,b", "c\"d"]]));

    let text = write(&rows, &config);
    assert_eq!(text, "\"a,b\",\"c\"\"d\"\n");
    assert_eq!(parse(&text, &config).unwrap(), rows);
}

#[test]
fn test_file_round_trip() -> csvforge::Result<()> {
    let temp = NamedTempFile::new()?;
    let rows = table(&[&["ID", "Note"], &["1", "line1\nline2"], &["2", "a,\"b\""]]);

    {
        let mut writer = CsvWriter::new(temp.path())?.config(CsvConfig::WINDOWS);
        writer.write_rows_batch(&rows)?;
        assert_eq!(writer.row_count(), 3);
        writer.save()?;
    }

    let text = std::fs::read_to_string(temp.path())?;
    assert_eq!(text, write(&rows, &CsvConfig::WINDOWS));

    let mut reader = CsvReader::open(temp.path())?
        .config(CsvConfig::WINDOWS)
        .has_header(true);
    let data = reader.read_all()?;
    assert_eq!(reader.headers(), Some(&rows[0][..]));
    assert_eq!(data, rows[1..].to_vec());

    let named = CsvReader::open(temp.path())?
        .config(CsvConfig::WINDOWS)
        .into_headered()?
        .unwrap();
    let notes: Vec<_> = named.records().filter_map(|r| r.get("Note")).collect();
    assert_eq!(notes, vec!["line1\nline2", "a,\"b\""]);
    Ok(())
}

#[test]
fn test_large_input_parses() {
    let row_count = 20_000;
    let mut text = String::new();
    for i in 0..row_count {
        text.push_str(&format!("{},\"name {}\",value\\,{}\n", i, i, i * 2));
    }

    let rows = parse(&text, &CsvConfig::DEFAULT).unwrap();
    assert_eq!(rows.len(), row_count);
    assert_eq!(rows[123], vec!["123", "name 123", "value,246"]);
}
